//! Keyboard shortcuts as declared key → action maps.
//!
//! A component registers its [`Keymap`] as a layer on the [`InputRouter`]
//! when it mounts and removes that same layer when it unmounts. Lookup
//! walks the layers top-down.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenApplication,
    ComposePartnership,
    ComposeContact,
    /// Scroll so the named anchor is at the top.
    JumpTo(&'static str),
    ScrollBy(i32),
    /// Scroll by a number of viewport heights.
    ScrollPages(i32),
    ScrollToTop,
    ScrollToBottom,
    /// Show the founder's letter over the page.
    OpenLetter,
    CloseLetter,
    Quit,
}

/// A key plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Plain key. Letters match either case.
    pub const fn key(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        let wanted_ctrl = self.modifiers.contains(KeyModifiers::CONTROL);
        if key.modifiers.contains(KeyModifiers::CONTROL) != wanted_ctrl
            || key.modifiers.contains(KeyModifiers::ALT)
        {
            return false;
        }
        match (self.code, key.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => want.eq_ignore_ascii_case(&got),
            (want, got) => want == got,
        }
    }
}

/// Declared bindings of one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, binding: KeyBinding, action: Action) -> Self {
        self.bindings.push((binding, action));
        self
    }

    pub fn bind_char(self, ch: char, action: Action) -> Self {
        self.bind(KeyBinding::key(KeyCode::Char(ch)), action)
    }

    pub fn lookup(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }

    /// Shortcuts of the landing page.
    pub fn page() -> Self {
        Self::new()
            .bind_char('f', Action::OpenApplication)
            .bind_char('p', Action::ComposePartnership)
            .bind_char('c', Action::ComposeContact)
            .bind_char('1', Action::JumpTo("fellowship"))
            .bind_char('2', Action::JumpTo("team"))
            .bind_char('3', Action::JumpTo("partners"))
            .bind_char('a', Action::OpenLetter)
            .bind_char('j', Action::ScrollBy(1))
            .bind_char('k', Action::ScrollBy(-1))
            .bind(KeyBinding::key(KeyCode::Down), Action::ScrollBy(1))
            .bind(KeyBinding::key(KeyCode::Up), Action::ScrollBy(-1))
            .bind_char(' ', Action::ScrollPages(1))
            .bind(KeyBinding::key(KeyCode::PageDown), Action::ScrollPages(1))
            .bind(KeyBinding::key(KeyCode::PageUp), Action::ScrollPages(-1))
            .bind(KeyBinding::key(KeyCode::Home), Action::ScrollToTop)
            .bind(KeyBinding::key(KeyCode::End), Action::ScrollToBottom)
            .bind_char('q', Action::Quit)
            .bind(KeyBinding::key(KeyCode::Esc), Action::Quit)
            .bind(KeyBinding::ctrl('c'), Action::Quit)
    }

    /// Keys of the letter view, layered over the page keys it falls
    /// through to.
    pub fn letter() -> Self {
        Self::new()
            .bind(KeyBinding::key(KeyCode::Esc), Action::CloseLetter)
            .bind(KeyBinding::key(KeyCode::Backspace), Action::CloseLetter)
            .bind_char('a', Action::CloseLetter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerId(u64);

/// Stack of registered keymaps.
#[derive(Debug, Default)]
pub struct InputRouter {
    layers: Vec<(LayerId, Keymap)>,
    next_id: u64,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a keymap on top of the stack.
    pub fn register(&mut self, keymap: Keymap) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push((id, keymap));
        id
    }

    /// Remove a layer. Returns false if it was not registered.
    pub fn deregister(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|(layer, _)| *layer != id);
        self.layers.len() != before
    }

    pub fn layers(&self) -> usize {
        self.layers.len()
    }

    /// Action bound to a key press, searching the newest layer first.
    /// Releases and repeats of non-press kinds resolve to nothing.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.layers
            .iter()
            .rev()
            .find_map(|(_, keymap)| keymap.lookup(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn letters_match_either_case() {
        let keymap = Keymap::page();
        let upper = press(KeyCode::Char('F'), KeyModifiers::SHIFT);
        assert_eq!(keymap.lookup(&upper), Some(Action::OpenApplication));
    }

    #[test]
    fn ctrl_binding_requires_ctrl() {
        let keymap = Keymap::page();
        assert_eq!(
            keymap.lookup(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.lookup(&press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Action::ComposeContact)
        );
    }

    #[test]
    fn alt_chords_are_ignored() {
        let keymap = Keymap::page();
        assert_eq!(
            keymap.lookup(&press(KeyCode::Char('f'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn newest_layer_wins() {
        let mut router = InputRouter::new();
        router.register(Keymap::page());
        let overlay = router.register(Keymap::new().bind_char('f', Action::Quit));
        let key = press(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(router.resolve(&key), Some(Action::Quit));
        assert!(router.deregister(overlay));
        assert_eq!(router.resolve(&key), Some(Action::OpenApplication));
    }
}
