//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear form shortcut display
/// - macOS: "Cmd+R"
/// - Linux/Windows: "Ctrl+R"
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+R";

/// Members view shortcut display
#[cfg(target_os = "macos")]
pub const MEMBERS_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const MEMBERS_SHORTCUT: &str = "Ctrl+L";

/// Theme toggle key display
pub const THEME_SHORTCUT: &str = "F2";
