//! The host platform's conventional key bindings for standard actions.
//!
//! Bindings use portable notation: `Ctrl` is the Command key on macOS.
//! An empty string means the platform has no standard binding.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardKey {
    Quit,
    New,
    Open,
    Save,
    Close,
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
}

impl StandardKey {
    pub fn binding(self) -> &'static str {
        match self {
            StandardKey::Quit => quit_binding(),
            StandardKey::New => "Ctrl+N",
            StandardKey::Open => "Ctrl+O",
            StandardKey::Save => "Ctrl+S",
            StandardKey::Close => close_binding(),
            StandardKey::Undo => "Ctrl+Z",
            StandardKey::Redo => redo_binding(),
            StandardKey::ZoomIn => "Ctrl++",
            StandardKey::ZoomOut => "Ctrl+-",
        }
    }
}

// Windows leaves quitting to Alt+F4 in the window manager
#[cfg(target_os = "windows")]
fn quit_binding() -> &'static str {
    ""
}

#[cfg(not(target_os = "windows"))]
fn quit_binding() -> &'static str {
    "Ctrl+Q"
}

#[cfg(target_os = "windows")]
fn close_binding() -> &'static str {
    "Ctrl+F4"
}

#[cfg(not(target_os = "windows"))]
fn close_binding() -> &'static str {
    "Ctrl+W"
}

#[cfg(target_os = "windows")]
fn redo_binding() -> &'static str {
    "Ctrl+Y"
}

#[cfg(not(target_os = "windows"))]
fn redo_binding() -> &'static str {
    "Ctrl+Shift+Z"
}
