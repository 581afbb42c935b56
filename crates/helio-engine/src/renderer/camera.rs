use glam::{Mat4, Vec2, Vec3};

/// Result of projecting a world-space point into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport position in logical pixels, origin top-left, Y down.
    pub pos: Vec2,
    /// Distance in front of the camera along its view axis.
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

/// Perspective camera orbiting a target point (OrbitControls-style).
///
/// The eye sits on a sphere around `target`, described by azimuth (around
/// world Y) and elevation (above the XZ plane). Dragging rotates, zooming
/// changes the sphere radius.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Rotation around world Y, radians. 0 looks down -Z from +Z.
    pub azimuth: f32,
    /// Angle above the XZ plane, radians.
    pub elevation: f32,
    /// Eye distance from the target.
    pub distance: f32,
    /// Look-at point.
    pub target: Vec3,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in logical pixels.
    pub viewport: Vec2,
    home: (f32, f32, f32),
}

impl OrbitCamera {
    const ROTATE_SENSITIVITY: f32 = 0.005;
    const ZOOM_STEP: f32 = 1.1;
    pub const MIN_DISTANCE: f32 = 6.0;
    pub const MAX_DISTANCE: f32 = 250.0;
    /// Stay just short of the poles so `look_at` keeps a valid up vector.
    pub const MAX_ELEVATION: f32 = 1.55;

    /// Camera whose eye starts at `eye`, looking at the origin.
    pub fn looking_at_origin(eye: Vec3, fov_y_degrees: f32, viewport: Vec2) -> Self {
        let distance = eye.length().max(Self::MIN_DISTANCE);
        let azimuth = eye.x.atan2(eye.z);
        let elevation = (eye.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            azimuth,
            elevation,
            distance,
            target: Vec3::ZERO,
            fov_y: fov_y_degrees.to_radians(),
            near: 0.1,
            far: 2000.0,
            viewport,
            home: (azimuth, elevation, distance),
        }
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        self.target + self.distance * Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    /// Pixels per world unit at unit depth.
    pub fn focal_length(&self) -> f32 {
        self.viewport.y / (2.0 * (self.fov_y / 2.0).tan())
    }

    /// Project a world point. Returns `None` for points at or behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let view = self.view_matrix().transform_point3(world);
        let depth = -view.z;
        if depth <= self.near {
            return None;
        }
        let clip = self.projection_matrix() * view.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        Some(Projection {
            pos: Vec2::new(
                (ndc.x + 1.0) * 0.5 * self.viewport.x,
                (1.0 - ndc.y) * 0.5 * self.viewport.y,
            ),
            depth,
            scale: self.focal_length() / depth,
        })
    }

    /// Rotate by a pointer drag delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * Self::ROTATE_SENSITIVITY;
        self.elevation = (self.elevation + dy * Self::ROTATE_SENSITIVITY)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom one wheel notch: positive moves closer.
    pub fn zoom(&mut self, direction: f32) {
        if direction > 0.0 {
            self.distance /= Self::ZOOM_STEP;
        } else if direction < 0.0 {
            self.distance *= Self::ZOOM_STEP;
        }
        self.distance = self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Return to the pose the camera was created with.
    pub fn reset(&mut self) {
        (self.azimuth, self.elevation, self.distance) = self.home;
        self.target = Vec3::ZERO;
    }

    /// Resize the viewport (e.g. on window resize). Zero sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }
}
