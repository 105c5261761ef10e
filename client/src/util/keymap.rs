//! Keyboard shortcut resolution.

#[cfg(test)]
#[path = "keymap_test.rs"]
mod keymap_test;

/// Widget-level action a shortcut resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Wipe the surface.
    Clear,
    /// Request a capture of the surface.
    Save,
}

/// Map a key event to a widget command.
///
/// Ctrl and Cmd are interchangeable platform modifiers; Escape clears
/// without any modifier.
#[must_use]
pub fn command_for_key(key: &str, ctrl: bool, meta: bool) -> Option<Command> {
    let platform_modifier = ctrl || meta;
    match key {
        "Escape" => Some(Command::Clear),
        "z" | "Z" if platform_modifier => Some(Command::Clear),
        "s" | "S" if platform_modifier => Some(Command::Save),
        _ => None,
    }
}

/// Whether the browser default (e.g. the save dialog) must be
/// suppressed for this key event. Escape keeps its default behavior.
#[must_use]
pub fn should_prevent_default(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && matches!(key, "z" | "Z" | "s" | "S")
}
