//! Presentation lifecycle of a floating window.
//!
//! Maximized and minimized are mutually exclusive display states layered
//! on top of the normal size. Closing hides the window for good; it stays
//! attached to its host but no control can bring it back.

use serde::{Deserialize, Serialize};

/// Display state of a floating window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Closed,
}

/// One of the three header controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowControl {
    Minimize,
    Maximize,
    Close,
}

impl WindowControl {
    pub const ALL: [WindowControl; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// CSS class of the control's button.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Minimize => "minimizeButton",
            Self::Maximize => "maximizeButton",
            Self::Close => "closeButton",
        }
    }
}

/// Presentation flags derived from a [`WindowState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowClasses {
    /// Body expanded to near-full viewport.
    pub maximized: bool,
    /// Content collapsed to zero height.
    pub minimized: bool,
    /// Body invisible and non-interactive.
    pub closed: bool,
}

impl WindowClasses {
    pub const MAXIMIZED: &'static str = "maximizeWindow";
    pub const MINIMIZED: &'static str = "minimizeWindow";
    pub const CLOSED: &'static str = "closeWindow";
}

/// State machine behind the minimize/maximize/close controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowLifecycle {
    state: WindowState,
}

impl WindowLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == WindowState::Closed
    }

    pub fn is_visible(&self) -> bool {
        !self.is_closed()
    }

    /// Whether the window still accepts drags and control clicks.
    pub fn is_interactive(&self) -> bool {
        !self.is_closed()
    }

    /// Toggle between maximized and normal. Clears a minimized state.
    ///
    /// Returns `false` when the window is closed.
    pub fn toggle_maximize(&mut self) -> bool {
        self.state = match self.state {
            WindowState::Closed => return false,
            WindowState::Maximized => WindowState::Normal,
            WindowState::Normal | WindowState::Minimized => WindowState::Maximized,
        };
        true
    }

    /// Toggle between minimized and normal. Clears a maximized state.
    ///
    /// Returns `false` when the window is closed.
    pub fn toggle_minimize(&mut self) -> bool {
        self.state = match self.state {
            WindowState::Closed => return false,
            WindowState::Minimized => WindowState::Normal,
            WindowState::Normal | WindowState::Maximized => WindowState::Minimized,
        };
        true
    }

    /// Hide the window permanently. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.state = WindowState::Closed;
        true
    }

    /// Apply a header control. Returns whether the state changed.
    pub fn apply(&mut self, control: WindowControl) -> bool {
        match control {
            WindowControl::Minimize => self.toggle_minimize(),
            WindowControl::Maximize => self.toggle_maximize(),
            WindowControl::Close => self.close(),
        }
    }

    pub fn classes(&self) -> WindowClasses {
        WindowClasses {
            maximized: self.state == WindowState::Maximized,
            minimized: self.state == WindowState::Minimized,
            closed: self.state == WindowState::Closed,
        }
    }
}
