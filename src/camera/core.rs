use glam::{Mat3, UVec2, Vec2, Vec3};

use super::basis::{derive_basis, orientation_from_angles, WORLD_UP};
use super::input::{FrameInput, MoveDirection, MovementSet};
use crate::options::{CameraOptions, DisplayBuffer};

/// Pitch never reaches ±90 degrees, where the view direction would be
/// parallel to [`WORLD_UP`] and the basis would degenerate.
pub const PITCH_LIMIT: f32 = 89.5;

/// First-person camera driven by per-frame input.
///
/// `orientation`, `right` and `up` always form an orthonormal basis and
/// `camera_to_world` is always the matrix with columns
/// `(right, up, orientation)`: every operation that changes the angles
/// rebuilds all of them before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    position: Vec3,
    orientation: Vec3,
    right: Vec3,
    up: Vec3,
    camera_to_world: Mat3,
    yaw: f32,
    pitch: f32,
    /// Distance moved per frame for each held direction.
    pub speed: f32,
    /// Degrees of rotation per pixel of pointer offset.
    pub sensitivity: f32,
    viewport: UVec2,
    capture_active: bool,
    just_captured: bool,
    display_buffer: DisplayBuffer,
}

impl CameraState {
    /// Camera at `position` looking down -Z (yaw -90, pitch 0) with default
    /// speed and sensitivity.
    #[must_use]
    pub fn new(position: Vec3, viewport: UVec2) -> Self {
        Self::from_options(
            &CameraOptions {
                position: position.to_array(),
                ..CameraOptions::default()
            },
            viewport,
        )
    }

    /// Camera with initial placement and tuning taken from `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions, viewport: UVec2) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(options.position),
            orientation: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            camera_to_world: Mat3::IDENTITY,
            yaw: options.yaw,
            pitch: options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            speed: options.speed,
            sensitivity: options.sensitivity,
            viewport,
            capture_active: false,
            just_captured: false,
            display_buffer: DisplayBuffer::default(),
        };
        camera.refresh_orientation();
        camera
    }

    /// Apply one frame of input: display buffer selection, movement, then
    /// look.
    ///
    /// Look input is consumed only while `input.capture` is set. The frame
    /// on which capture engages applies no look delta, whatever the pointer
    /// position; the caller is expected to warp the pointer to
    /// [`recenter_target`](Self::recenter_target) after every captured
    /// frame, so later frames measure their delta from the viewport center.
    pub fn process_input(&mut self, input: &FrameInput) {
        self.viewport = input.viewport;
        if let Some(buffer) = input.display_buffer {
            self.display_buffer = buffer;
        }

        self.apply_movement(input.movement);

        if input.capture {
            if self.capture_active {
                self.just_captured = false;
                self.apply_look(input.pointer);
            } else {
                self.capture_active = true;
                self.just_captured = true;
                log::debug!("look capture engaged");
            }
        } else if self.capture_active {
            self.capture_active = false;
            self.just_captured = false;
            log::debug!("look capture released");
        }
    }

    fn apply_movement(&mut self, movement: MovementSet) {
        // Diagonals are deliberately not re-normalized.
        for direction in movement.iter() {
            let step = match direction {
                MoveDirection::Forward => self.orientation,
                MoveDirection::Backward => -self.orientation,
                MoveDirection::Left => -self.right,
                MoveDirection::Right => self.right,
                MoveDirection::Up => WORLD_UP,
                MoveDirection::Down => -WORLD_UP,
            };
            self.position += self.speed * step;
        }
    }

    fn apply_look(&mut self, pointer: Vec2) {
        let center = self.viewport_center();
        let dx = self.sensitivity * (pointer.x - center.x);
        let dy = self.sensitivity * (center.y - pointer.y);
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        if !(dx.is_finite() && dy.is_finite() && (self.yaw + dx).is_finite()) {
            log::warn!("ignoring non-finite look delta ({dx}, {dy})");
            return;
        }

        self.yaw += dx;
        self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.refresh_orientation();
    }

    fn refresh_orientation(&mut self) {
        self.orientation = orientation_from_angles(self.yaw, self.pitch);
        let basis = derive_basis(self.orientation, WORLD_UP);
        self.right = basis.right;
        self.up = basis.up;
        self.camera_to_world = basis.camera_to_world;
    }

    /// Viewport center in whole pixels, the point the pointer is warped to
    /// while capturing.
    #[must_use]
    pub fn viewport_center(&self) -> Vec2 {
        Vec2::new((self.viewport.x / 2) as f32, (self.viewport.y / 2) as f32)
    }

    /// Where the caller should warp the pointer after this frame, `None`
    /// when capture is not active.
    #[must_use]
    pub fn recenter_target(&self) -> Option<Vec2> {
        self.capture_active.then(|| self.viewport_center())
    }

    /// Whether the pointer should be hidden (capture is active).
    #[must_use]
    pub fn cursor_hidden(&self) -> bool {
        self.capture_active
    }

    /// World-space camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the camera without changing its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Unit view direction.
    #[must_use]
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Unit vector to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector above the camera.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Rotation with columns `(right, up, orientation)`.
    #[must_use]
    pub fn camera_to_world(&self) -> Mat3 {
        self.camera_to_world
    }

    /// [`camera_to_world`](Self::camera_to_world) as nine column-major
    /// floats, ready for a `mat3` uniform.
    #[must_use]
    pub fn camera_to_world_cols(&self) -> [f32; 9] {
        self.camera_to_world.to_cols_array()
    }

    /// Accumulated yaw in degrees (unbounded).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the yaw in degrees and rebuild the view basis.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.refresh_orientation();
    }

    /// Pitch in degrees, always within `±PITCH_LIMIT`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch in degrees (clamped) and rebuild the view basis.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.refresh_orientation();
    }

    /// Viewport size reported by the last input frame.
    #[must_use]
    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    /// Whether pointer look is currently engaged.
    #[must_use]
    pub fn capture_active(&self) -> bool {
        self.capture_active
    }

    /// Whether capture engaged on the last processed frame.
    #[must_use]
    pub fn just_captured(&self) -> bool {
        self.just_captured
    }

    /// Debug buffer the renderer should present.
    #[must_use]
    pub fn display_buffer(&self) -> DisplayBuffer {
        self.display_buffer
    }
}
