/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds them into the per-frame [`FrameInput`](crate::camera::FrameInput)
/// snapshot.
///
/// # Example
///
/// ```
/// use refraction::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(&InputEvent::Key { key: "KeyW".into(), pressed: true });
/// assert!(!input.frame_input().movement.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"F1"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button. Held to look around.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
