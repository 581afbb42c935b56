/// Catch-up limit per host frame. A tab that was hidden for a minute resumes
/// at most this many animation frames ahead.
pub const MAX_STEPS_PER_FRAME: u32 = 10;

/// How host frames map to `Game::update` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepping {
    /// Updates run at a fixed rate in wall-clock time; a host frame may run
    /// zero or several of them.
    #[default]
    Fixed,
    /// Exactly one update per host frame, whatever its duration. Use this
    /// when per-update quantities are defined per rendered frame.
    PerHostFrame,
}

/// Converts host frame times into a whole number of updates.
///
/// In [`Stepping::Fixed`] mode time beyond the catch-up limit is discarded
/// rather than carried over.
pub struct FixedTimestep {
    step: f32,
    stepping: Stepping,
    pending: f32,
    frames: u64,
}

impl FixedTimestep {
    /// A non-positive or non-finite `step` falls back to 1/60 s.
    pub fn new(step: f32) -> Self {
        Self::with_stepping(step, Stepping::Fixed)
    }

    pub fn with_stepping(step: f32, stepping: Stepping) -> Self {
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 / 60.0 };
        Self { step, stepping, pending: 0.0, frames: 0 }
    }

    /// Banks `elapsed` seconds and returns how many updates to run now.
    /// Clock hiccups (negative or NaN) bank nothing.
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        let due = match self.stepping {
            Stepping::PerHostFrame => 1,
            Stepping::Fixed => self.fixed_steps(elapsed),
        };
        self.frames += u64::from(due);
        due
    }

    fn fixed_steps(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_nan() { 0.0 } else { elapsed.max(0.0) };
        let banked = self.pending + elapsed;

        if banked >= self.step * MAX_STEPS_PER_FRAME as f32 {
            self.pending = 0.0;
            return MAX_STEPS_PER_FRAME;
        }
        let due = (banked / self.step).floor() as u32;
        self.pending = (banked - due as f32 * self.step).max(0.0);
        due
    }

    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Frames handed out since construction; the header's frame counter.
    pub fn frame(&self) -> u64 {
        self.frames
    }
}
