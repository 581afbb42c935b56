/// Orbit paths: closed polylines around the sun in the XZ plane.

use std::f32::consts::TAU;

use glam::Vec3;

/// Segments per orbit path. The polyline has one more point than this.
pub const ORBIT_SEGMENTS: usize = 100;

/// Orbit line color and opacity.
pub const ORBIT_COLOR: u32 = 0x00ffff;
pub const ORBIT_OPACITY: f32 = 0.8;

/// Circle of `radius` around the origin, `ORBIT_SEGMENTS + 1` points,
/// last point identical to the first.
pub fn orbit_path(radius: f32) -> Vec<Vec3> {
    circle_xz(Vec3::ZERO, radius, ORBIT_SEGMENTS)
}

/// Closed circle of `segments + 1` points around `center` in the plane y = center.y.
pub fn circle_xz(center: Vec3, radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    let mut points: Vec<Vec3> = (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            center + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect();
    points.push(points[0]);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_has_101_points() {
        assert_eq!(orbit_path(8.0).len(), 101);
    }

    #[test]
    fn orbit_is_closed() {
        let path = orbit_path(13.0);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn every_point_on_circle() {
        for radius in [4.0, 16.0, 22.0] {
            for p in orbit_path(radius) {
                assert!((p.length() - radius).abs() < 1e-4, "{p:?} off radius {radius}");
                assert_eq!(p.y, 0.0);
            }
        }
    }

    #[test]
    fn first_point_on_positive_x() {
        let path = orbit_path(10.0);
        assert!((path[0] - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn circle_around_offset_center() {
        let center = Vec3::new(16.0, 0.0, 0.0);
        let ring = circle_xz(center, 2.2, 64);
        assert_eq!(ring.len(), 65);
        for p in &ring {
            assert!(((*p - center).length() - 2.2).abs() < 1e-4);
        }
    }
}
