/// Host input, in viewport pixels where a position is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at viewport coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at viewport coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The viewport changed size, in logical pixels.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (overlay buttons, sliders).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Events pushed by the host between frames, read by the first fixed step
/// of the next frame and then cleared by the runner.
#[derive(Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event from the host.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Pending events in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Forget everything queued. Called once the events have been seen.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_clear() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 32 });
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize { width: 500.0, height: 800.0 });
        q.push(InputEvent::Custom { kind: 2, a: 0.0, b: 0.0, c: 0.0 });
        let events: Vec<_> = q.iter().copied().collect();
        assert_eq!(events[0], InputEvent::Resize { width: 500.0, height: 800.0 });
        assert!(matches!(events[1], InputEvent::Custom { kind: 2, .. }));
    }

    #[test]
    fn custom_event_carries_payload() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 1, a: 2.0, b: 0.012, c: 0.0 });
        assert_eq!(
            q.iter().next(),
            Some(&InputEvent::Custom { kind: 1, a: 2.0, b: 0.012, c: 0.0 })
        );
    }
}
