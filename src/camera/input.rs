use glam::{UVec2, Vec2};

use crate::options::DisplayBuffer;

/// A direction the camera can be moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Along world +Y.
    Up,
    /// Along world -Y.
    Down,
}

impl MoveDirection {
    /// Every direction, in the order movement is applied.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of movement directions active this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementSet(u8);

impl MovementSet {
    /// No movement.
    pub const EMPTY: Self = Self(0);

    /// Add a direction. Returns whether it was newly inserted.
    pub fn insert(&mut self, direction: MoveDirection) -> bool {
        let was_absent = !self.contains(direction);
        self.0 |= direction.bit();
        was_absent
    }

    /// Remove a direction. Returns whether it was present.
    pub fn remove(&mut self, direction: MoveDirection) -> bool {
        let was_present = self.contains(direction);
        self.0 &= !direction.bit();
        was_present
    }

    /// Whether `direction` is active.
    #[must_use]
    pub fn contains(self, direction: MoveDirection) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Whether no direction is active.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Active directions in [`MoveDirection::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = MoveDirection> {
        MoveDirection::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

impl FromIterator<MoveDirection> for MovementSet {
    fn from_iter<I: IntoIterator<Item = MoveDirection>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            let _ = set.insert(direction);
        }
        set
    }
}

/// Per-frame input snapshot consumed by
/// [`CameraState::process_input`](super::CameraState::process_input).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Movement directions held this frame.
    pub movement: MovementSet,
    /// Whether look capture is requested (pointer drives the view).
    pub capture: bool,
    /// Pointer position in window pixels. Only meaningful while capturing.
    pub pointer: Vec2,
    /// Current viewport size in pixels.
    pub viewport: UVec2,
    /// Debug display buffer selected this frame, if any.
    pub display_buffer: Option<DisplayBuffer>,
}
