//! Logical input keys and the per-frame held-key snapshot

/// The keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Doubles acceleration while held
    Boost,
    /// +Y (screen coordinates grow downwards)
    Down,
    /// -Y
    Up,
    /// -X
    Left,
    /// +X
    Right,
}

impl Key {
    /// Every key, boost first
    pub const ALL: [Key; 5] = [Key::Boost, Key::Down, Key::Up, Key::Left, Key::Right];

    /// Direction keys in evaluation order.
    ///
    /// Later entries overwrite earlier ones on the same axis, so Up wins over
    /// Down and Right wins over Left when both are held.
    pub const DIRECTIONS: [Key; 4] = [Key::Down, Key::Up, Key::Left, Key::Right];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of keys held down when input was sampled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    bits: u8,
}

impl HeldKeys {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, key: Key) {
        self.bits |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.bits &= !key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Held keys in `Key::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut held = HeldKeys::empty();
        for key in iter {
            held.insert(key);
        }
        held
    }
}

impl<const N: usize> From<[Key; N]> for HeldKeys {
    fn from(keys: [Key; N]) -> Self {
        keys.into_iter().collect()
    }
}
