use winit::keyboard::KeyCode;

/// Keys the view controller reacts to.
///
/// Declaration order is the order held keys are processed each frame:
/// exit and projection changes first, then movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewKey {
    Exit,
    Perspective,
    Orthographic,
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl ViewKey {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(Self::Forward),
            KeyCode::KeyS => Some(Self::Backward),
            KeyCode::KeyA => Some(Self::Left),
            KeyCode::KeyD => Some(Self::Right),
            KeyCode::KeyQ => Some(Self::Up),
            KeyCode::KeyE => Some(Self::Down),
            KeyCode::KeyP => Some(Self::Perspective),
            KeyCode::KeyO => Some(Self::Orthographic),
            KeyCode::Escape => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What the controller asks of its owner after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Continue,
    /// Shutdown requested; the window owner decides how to exit.
    Exit,
}
