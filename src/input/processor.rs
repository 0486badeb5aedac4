//! Converts raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (held movement
//! keys, cursor position, held mouse buttons, viewport size) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and [`CameraState::process_input`](crate::camera::CameraState::process_input).

use std::collections::{HashMap, HashSet};

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::camera::{FrameInput, MoveDirection, MovementSet};
use crate::options::{DisplayBuffer, KeybindingOptions};

/// Discrete actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction while held.
    MoveForward,
    /// Move against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Move along world +Y while held.
    MoveUp,
    /// Move along world -Y while held.
    MoveDown,
    /// Present the shaded image.
    ShowFinal,
    /// Present surface normals.
    ShowNormal,
    /// Present hit distance.
    ShowDistance,
    /// Present object ids.
    ShowId,
    /// Present traversal step counts.
    ShowStepCount,
}

impl KeyAction {
    /// Movement direction for held-key actions.
    #[must_use]
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            Self::MoveUp => Some(MoveDirection::Up),
            Self::MoveDown => Some(MoveDirection::Down),
            _ => None,
        }
    }

    /// Display buffer for buffer-selection actions.
    #[must_use]
    pub fn display_buffer(self) -> Option<DisplayBuffer> {
        match self {
            Self::ShowFinal => Some(DisplayBuffer::Final),
            Self::ShowNormal => Some(DisplayBuffer::Normal),
            Self::ShowDistance => Some(DisplayBuffer::Distance),
            Self::ShowId => Some(DisplayBuffer::Id),
            Self::ShowStepCount => Some(DisplayBuffer::StepCount),
            _ => None,
        }
    }
}

/// Folds window events into [`FrameInput`] snapshots.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(&event);
///
/// // Once per frame:
/// camera.process_input(&input_processor.frame_input());
/// if let Some(center) = camera.recenter_target() {
///     window.set_cursor_position(center);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Held movement keys and the direction each one drives. A direction
    /// stays active while any key bound to it is held.
    held_keys: HashMap<String, MoveDirection>,
    held_buttons: HashSet<MouseButton>,
    pointer: Vec2,
    viewport: UVec2,
    /// Buffer selected since the last snapshot, consumed by it.
    pending_display_buffer: Option<DisplayBuffer>,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings and a zero-sized
    /// viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            held_keys: HashMap::new(),
            held_buttons: HashSet::new(),
            pointer: Vec2::ZERO,
            viewport: UVec2::ZERO,
            pending_display_buffer: None,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Set the viewport size before the first resize event arrives.
    #[must_use]
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = UVec2::new(width, height);
        self
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held movement is cleared so no key stays
    /// stuck under a binding that no longer exists.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held_keys.clear();
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether look capture is requested (right mouse button held).
    #[must_use]
    pub fn capture_requested(&self) -> bool {
        self.held_buttons.contains(&MouseButton::Right)
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => self.handle_key(key, *pressed),
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Vec2::new(*x, *y);
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    let _ = self.held_buttons.insert(*button);
                } else {
                    let _ = self.held_buttons.remove(button);
                }
            }
            InputEvent::Resized { width, height } => {
                self.viewport = UVec2::new(*width, *height);
            }
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(action) = self.key_bindings.lookup(key) else {
            return;
        };
        if let Some(direction) = action.move_direction() {
            if pressed {
                let _ = self.held_keys.insert(key.to_owned(), direction);
            } else {
                let _ = self.held_keys.remove(key);
            }
        } else if let Some(buffer) = action.display_buffer() {
            if pressed {
                log::debug!("display buffer: {buffer}");
                self.pending_display_buffer = Some(buffer);
            }
        }
    }

    /// Directions driven by at least one held key.
    #[must_use]
    pub fn movement(&self) -> MovementSet {
        self.held_keys.values().copied().collect()
    }

    /// Snapshot of the current input for one frame.
    ///
    /// A display buffer selection is reported once, by the first snapshot
    /// taken after the key press.
    pub fn frame_input(&mut self) -> FrameInput {
        FrameInput {
            movement: self.movement(),
            capture: self.capture_requested(),
            pointer: self.pointer,
            viewport: self.viewport,
            display_buffer: self.pending_display_buffer.take(),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
