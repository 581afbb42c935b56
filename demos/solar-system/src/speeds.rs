/// Speed map: one angular speed per catalog body.
///
/// Keys are the catalog itself, so the map can never gain or lose a body.

use crate::catalog::{self, BODY_COUNT, CATALOG};
use crate::error::{ControlError, ControlResult};

/// Slider range and granularity, radians per frame.
pub const MIN_SPEED: f32 = 0.0;
pub const MAX_SPEED: f32 = 0.05;
pub const SPEED_STEP: f32 = 0.001;

/// Bring a UI value into the slider range. Non-finite values are rejected.
pub fn clamp_speed(speed: f32) -> ControlResult<f32> {
    if !speed.is_finite() {
        return Err(ControlError::NonFiniteSpeed(speed));
    }
    Ok(speed.clamp(MIN_SPEED, MAX_SPEED))
}

/// Catalog index carried as a float on the wire.
pub fn index_from_wire(value: f32) -> ControlResult<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && (value as usize) < BODY_COUNT {
        Ok(value as usize)
    } else {
        Err(ControlError::UnknownIndex(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMap {
    speeds: [f32; BODY_COUNT],
}

impl SpeedMap {
    /// Every body at its catalog speed.
    pub fn defaults() -> Self {
        let mut speeds = [0.0; BODY_COUNT];
        for (slot, body) in speeds.iter_mut().zip(CATALOG.iter()) {
            *slot = body.base_speed;
        }
        Self { speeds }
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.speeds.get(index).copied()
    }

    #[cfg(test)]
    pub fn by_name(&self, name: &str) -> Option<f32> {
        catalog::index_of(name).and_then(|i| self.get(i))
    }

    /// A copy of this map with one entry replaced.
    pub fn with_speed(&self, index: usize, speed: f32) -> ControlResult<Self> {
        if index >= BODY_COUNT {
            return Err(ControlError::UnknownIndex(index as f32));
        }
        let speed = clamp_speed(speed)?;
        let mut next = *self;
        next.speeds[index] = speed;
        Ok(next)
    }

    /// Replace one entry in place. Returns the stored (clamped) speed.
    pub fn set(&mut self, index: usize, speed: f32) -> ControlResult<f32> {
        *self = self.with_speed(index, speed)?;
        Ok(self.speeds[index])
    }

    pub fn set_by_name(&mut self, name: &str, speed: f32) -> ControlResult<f32> {
        let index =
            catalog::index_of(name).ok_or_else(|| ControlError::UnknownBody(name.to_string()))?;
        self.set(index, speed)
    }

    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    /// (name, speed) in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        CATALOG.iter().map(|b| b.name).zip(self.speeds.iter().copied())
    }
}

impl Default for SpeedMap {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_catalog() {
        let map = SpeedMap::defaults();
        assert_eq!(map.by_name("Mercury"), Some(0.02));
        assert_eq!(map.by_name("Neptune"), Some(0.003));
        assert_eq!(map.iter().count(), BODY_COUNT);
    }

    #[test]
    fn edit_replaces_exactly_one_entry() {
        let before = SpeedMap::defaults();
        let after = before.with_speed(2, 0.03).unwrap();
        for (i, ((name, old), (_, new))) in before.iter().zip(after.iter()).enumerate() {
            if i == 2 {
                assert_eq!(name, "Earth");
                assert_eq!(new, 0.03);
            } else {
                assert_eq!(old, new, "{name} changed");
            }
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut map = SpeedMap::defaults();
        assert_eq!(map.set(0, 0.5), Ok(MAX_SPEED));
        assert_eq!(map.set(1, -0.1), Ok(MIN_SPEED));
        assert_eq!(map.get(0), Some(MAX_SPEED));
        assert_eq!(map.get(1), Some(0.0));
    }

    #[test]
    fn non_finite_is_rejected_without_change() {
        let mut map = SpeedMap::defaults();
        assert!(matches!(map.set(3, f32::NAN), Err(ControlError::NonFiniteSpeed(_))));
        assert_eq!(map.set(3, f32::INFINITY), Err(ControlError::NonFiniteSpeed(f32::INFINITY)));
        assert_eq!(map, SpeedMap::defaults());
    }

    #[test]
    fn unknown_name_is_rejected_without_change() {
        let mut map = SpeedMap::defaults();
        assert_eq!(
            map.set_by_name("Pluto", 0.01),
            Err(ControlError::UnknownBody("Pluto".to_string()))
        );
        assert_eq!(map, SpeedMap::defaults());
        assert_eq!(map.set_by_name("Mars", 0.011), Ok(0.011));
    }

    #[test]
    fn unknown_index_is_rejected() {
        let map = SpeedMap::defaults();
        assert_eq!(map.with_speed(8, 0.01), Err(ControlError::UnknownIndex(8.0)));
    }

    #[test]
    fn reset_restores_catalog() {
        let mut map = SpeedMap::defaults();
        map.set(4, 0.0).unwrap();
        map.set(7, 0.05).unwrap();
        map.reset();
        assert_eq!(map, SpeedMap::defaults());
    }

    #[test]
    fn wire_index_must_be_whole_and_in_range() {
        assert_eq!(index_from_wire(0.0), Ok(0));
        assert_eq!(index_from_wire(7.0), Ok(7));
        assert!(index_from_wire(8.0).is_err());
        assert!(index_from_wire(-1.0).is_err());
        assert!(index_from_wire(2.5).is_err());
        assert!(index_from_wire(f32::NAN).is_err());
    }
}
