use std::collections::BTreeMap;

/// Logical keys the viewer binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    W,
    A,
    S,
    D,
    C,
    Up,
    Down,
    Left,
    Right,
    Space,
    ShiftLeft,
    Escape,
}

/// A high-level action the app loop consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    /// Speed multiplier while held.
    Boost,
    Quit,
}

/// Key-to-action table.
///
/// The default layout merges WASD flying with arrow-key movement: both
/// schemes drive the same actions. Space/C fly up and down, left shift
/// boosts, escape quits.
#[derive(Debug, Clone)]
pub struct Bindings {
    map: BTreeMap<Key, Action>,
}

impl Default for Bindings {
    fn default() -> Self {
        let map = BTreeMap::from([
            (Key::W, Action::MoveForward),
            (Key::S, Action::MoveBackward),
            (Key::A, Action::StrafeLeft),
            (Key::D, Action::StrafeRight),
            (Key::Up, Action::MoveForward),
            (Key::Down, Action::MoveBackward),
            (Key::Left, Action::StrafeLeft),
            (Key::Right, Action::StrafeRight),
            (Key::Space, Action::Ascend),
            (Key::C, Action::Descend),
            (Key::ShiftLeft, Action::Boost),
            (Key::Escape, Action::Quit),
        ]);
        Self { map }
    }
}

impl Bindings {
    /// Action bound to `key`, if any.
    pub fn action(&self, key: Key) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// Bind or rebind a key.
    pub fn bind(&mut self, key: Key, action: Action) {
        self.map.insert(key, action);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_covers_wasd() {
        let bindings = Bindings::default();
        assert_eq!(bindings.action(Key::W), Some(Action::MoveForward));
        assert_eq!(bindings.action(Key::A), Some(Action::StrafeLeft));
        assert_eq!(bindings.action(Key::S), Some(Action::MoveBackward));
        assert_eq!(bindings.action(Key::D), Some(Action::StrafeRight));
    }

    #[test]
    fn arrow_keys_mirror_wasd() {
        let bindings = Bindings::default();
        assert_eq!(bindings.action(Key::Up), bindings.action(Key::W));
        assert_eq!(bindings.action(Key::Down), bindings.action(Key::S));
        assert_eq!(bindings.action(Key::Left), bindings.action(Key::A));
        assert_eq!(bindings.action(Key::Right), bindings.action(Key::D));
    }

    #[test]
    fn escape_quits() {
        let bindings = Bindings::default();
        assert_eq!(bindings.action(Key::Escape), Some(Action::Quit));
    }

    #[test]
    fn rebinding_overrides() {
        let mut bindings = Bindings::default();
        bindings.bind(Key::C, Action::Boost);
        assert_eq!(bindings.action(Key::C), Some(Action::Boost));
    }
}
