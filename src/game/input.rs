//! UI-agnostic input actions and the flap key latch.

/// Input actions the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap key went down (Space, Up or Enter).
    FlapDown,
    /// Flap key came back up.
    FlapUp,
    /// Leave the game (Esc or q).
    Quit,
    /// Any other key.
    Other,
}

/// Edge-triggered latch for the flap key.
///
/// A flap fires once per physical press: further presses (autorepeat) are
/// swallowed while the key is held, and the latch re-arms on release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlapLatch {
    held: bool,
}

impl FlapLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down. Returns true if this press should flap.
    pub fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    /// Register a key-up, re-arming the latch.
    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
