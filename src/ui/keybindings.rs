//! Centralized keyboard shortcuts registry, consumed by the key dispatch
//! in `app` and by the help overlay.

use crossterm::event::KeyCode;

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: KeyCode,
    /// Alternative key (e.g., arrow variant)
    pub alt_key: Option<KeyCode>,
    pub description: &'static str,
    /// Screen where this shortcut is active
    pub context: ShortcutContext,
}

/// Screens where shortcuts apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Recipe overview, before and after a run
    Overview,
    /// Active cooking playback
    Cooking,
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Overview => "Overview",
            ShortcutContext::Cooking => "Cooking",
        }
    }

    pub fn all() -> &'static [ShortcutContext] {
        &[ShortcutContext::Overview, ShortcutContext::Cooking]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "n/→")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }
}

fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Overview ===
    Shortcut {
        key: KeyCode::Enter,
        alt_key: Some(KeyCode::Char('s')),
        description: "Start cooking",
        context: ShortcutContext::Overview,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "Quit",
        context: ShortcutContext::Overview,
    },
    Shortcut {
        key: KeyCode::Char('?'),
        alt_key: None,
        description: "Toggle help",
        context: ShortcutContext::Overview,
    },
    // === Cooking ===
    Shortcut {
        key: KeyCode::Char(' '),
        alt_key: None,
        description: "Start / pause the step timer",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: None,
        description: "Reset the step timer",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Char('n'),
        alt_key: Some(KeyCode::Right),
        description: "Next step / finish (once the timer is done)",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Char('p'),
        alt_key: Some(KeyCode::Left),
        description: "Previous step",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Char('k'),
        alt_key: None,
        description: "Skip this step",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Char('1'),
        alt_key: Some(KeyCode::Char('9')),
        description: "Jump to step 1-9",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Esc,
        alt_key: None,
        description: "Exit cooking mode",
        context: ShortcutContext::Cooking,
    },
    Shortcut {
        key: KeyCode::Char('?'),
        alt_key: None,
        description: "Toggle help",
        context: ShortcutContext::Cooking,
    },
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shortcuts_have_descriptions() {
        for shortcut in SHORTCUTS {
            assert!(
                !shortcut.description.is_empty(),
                "Shortcut {:?} has empty description",
                shortcut.key
            );
        }
    }

    #[test]
    fn test_key_display() {
        let shortcut = Shortcut {
            key: KeyCode::Char('n'),
            alt_key: Some(KeyCode::Right),
            description: "Test",
            context: ShortcutContext::Cooking,
        };
        assert_eq!(shortcut.key_display(), "n/→");
        assert_eq!(format_keycode(&KeyCode::Char(' ')), "Space");
    }

    #[test]
    fn test_both_contexts_have_shortcuts() {
        for context in ShortcutContext::all() {
            assert!(shortcuts_for_context(*context).next().is_some());
        }
    }
}
