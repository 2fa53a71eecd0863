//! Keyboard bindings for carousels.
//!
//! The view layer forwards key presses into a [`Signal<KeyPress>`]; a
//! controller bound to that signal queues the matching [`CarouselCommand`]
//! and applies it on its next event pump.
//!
//! | Key          | Command                         |
//! |--------------|---------------------------------|
//! | `ArrowRight` | [`CarouselCommand::Next`]       |
//! | `ArrowLeft`  | [`CarouselCommand::Previous`]   |
//! | `Home`       | [`CarouselCommand::First`]      |
//! | `End`        | [`CarouselCommand::Last`]       |
//! | `Space`      | [`CarouselCommand::ToggleAutoplay`] |
//!
//! Presses with Ctrl, Alt or Meta held are left to the host (browser history,
//! window management) and never bound.
//!
//! [`Signal<KeyPress>`]: vitrine_core::Signal

/// Keys a carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Space bar.
    Space,
    /// A printable character.
    Character(char),
    /// Any other key.
    Other,
}

/// Modifier keys held during a press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub ctrl: bool,
    /// Alt / Option.
    pub alt: bool,
    /// Meta / Command / Windows.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Control only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    fn is_command_chord(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A key press delivered by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// A press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// A press with modifiers.
    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// A navigation request queued for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselCommand {
    /// Advance one item.
    Next,
    /// Go back one item.
    Previous,
    /// Jump to the first visible item.
    First,
    /// Jump to the last visible item.
    Last,
    /// Pause a playing carousel or resume a paused one.
    ToggleAutoplay,
}

impl CarouselCommand {
    /// The command bound to `press`, if any.
    pub fn for_key(press: &KeyPress) -> Option<Self> {
        if press.modifiers.is_command_chord() {
            return None;
        }
        match press.key {
            Key::ArrowRight => Some(Self::Next),
            Key::ArrowLeft => Some(Self::Previous),
            Key::Home => Some(Self::First),
            Key::End => Some(Self::Last),
            Key::Space => Some(Self::ToggleAutoplay),
            Key::Character(_) | Key::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        assert_eq!(
            CarouselCommand::for_key(&Key::ArrowRight.into()),
            Some(CarouselCommand::Next)
        );
        assert_eq!(
            CarouselCommand::for_key(&Key::ArrowLeft.into()),
            Some(CarouselCommand::Previous)
        );
        assert_eq!(CarouselCommand::for_key(&Key::Home.into()), Some(CarouselCommand::First));
        assert_eq!(CarouselCommand::for_key(&Key::End.into()), Some(CarouselCommand::Last));
        assert_eq!(
            CarouselCommand::for_key(&Key::Space.into()),
            Some(CarouselCommand::ToggleAutoplay)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(CarouselCommand::for_key(&Key::Character('n').into()), None);
        assert_eq!(CarouselCommand::for_key(&Key::Other.into()), None);
    }

    #[test]
    fn test_command_chords_are_ignored() {
        let press = KeyPress::with_modifiers(Key::ArrowLeft, Modifiers::CTRL);
        assert_eq!(CarouselCommand::for_key(&press), None);

        let shifted = KeyPress::with_modifiers(
            Key::ArrowRight,
            Modifiers {
                shift: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(CarouselCommand::for_key(&shifted), Some(CarouselCommand::Next));
    }
}
