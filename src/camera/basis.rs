use glam::{Mat3, Vec3};

/// The world's up axis. The camera never rolls around its view direction.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Right and up vectors completing a view direction into an orthonormal
/// frame, and the camera-to-world rotation built from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Unit vector to the camera's right.
    pub right: Vec3,
    /// Unit vector above the camera, perpendicular to the view direction.
    pub up: Vec3,
    /// Columns `(right, up, orientation)`.
    pub camera_to_world: Mat3,
}

/// Complete `orientation` (unit length) into an orthonormal basis.
///
/// `right = normalize(orientation × world_up)`, `up = right × orientation`.
/// An orientation parallel to `world_up` has no defined right vector; the
/// world X axis is used in that case so the result stays finite.
#[must_use]
pub fn derive_basis(orientation: Vec3, world_up: Vec3) -> Basis {
    let right = orientation.cross(world_up).try_normalize().unwrap_or(Vec3::X);
    let up = right.cross(orientation);
    Basis {
        right,
        up,
        camera_to_world: Mat3::from_cols(right, up, orientation),
    }
}

/// Unit view direction for `yaw` and `pitch` given in degrees.
///
/// Yaw 0 looks down +X, yaw 90 down +Z; positive pitch looks up.
#[must_use]
pub fn orientation_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}
