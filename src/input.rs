//! Keyboard state tracking.
//!
//! Backends translate their native key events into [`Key`] and feed them to
//! [`InputState`]. Queries distinguish a held key ([`InputState::key_pressed`])
//! from the up-to-down edge ([`InputState::key_pressed_once`]).

macro_rules! keys {
    ($($name:ident),* $(,)?) => {
        /// Platform-neutral key codes accepted by every input query.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($name),*
        }

        impl Key {
            /// Every key, in table order.
            pub const ALL: &'static [Key] = &[$(Key::$name),*];
        }
    };
}

keys! {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
    Space, Minus, Equals, LeftBracket, RightBracket, Backslash,
    Semicolon, Apostrophe, Backtick, Comma, Period, Slash,
    Up, Down, Left, Right,
    Enter, Escape, Shift, Ctrl, Alt, Tab, CapsLock, Backspace,
}

pub const KEY_COUNT: usize = Key::ALL.len();

impl Key {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps an ASCII character to the key that produces it unshifted.
    pub fn from_char(c: char) -> Option<Key> {
        let key = match c.to_ascii_lowercase() {
            c @ 'a'..='z' => Key::ALL[Key::A.index() + (c as usize - 'a' as usize)],
            c @ '0'..='9' => Key::ALL[Key::Num0.index() + (c as usize - '0' as usize)],
            ' ' => Key::Space,
            '-' => Key::Minus,
            '=' => Key::Equals,
            '[' => Key::LeftBracket,
            ']' => Key::RightBracket,
            '\\' => Key::Backslash,
            ';' => Key::Semicolon,
            '\'' => Key::Apostrophe,
            '`' => Key::Backtick,
            ',' => Key::Comma,
            '.' => Key::Period,
            '/' => Key::Slash,
            '\n' | '\r' => Key::Enter,
            '\t' => Key::Tab,
            _ => return None,
        };
        Some(key)
    }
}

/// Current and previous down-state for every [`Key`].
#[derive(Debug, Clone)]
pub struct InputState {
    current: [bool; KEY_COUNT],
    previous: [bool; KEY_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self {
            current: [false; KEY_COUNT],
            previous: [false; KEY_COUNT],
        }
    }

    pub fn press(&mut self, key: Key) {
        self.current[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.current[key.index()] = false;
    }

    /// True while the key is held down.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.current[key.index()]
    }

    /// True only on the up-to-down transition.
    ///
    /// Consumes the edge: the previous state of `key` is updated, so asking
    /// again before the next poll returns false.
    pub fn key_pressed_once(&mut self, key: Key) -> bool {
        let i = key.index();
        let current = self.current[i];
        let last = std::mem::replace(&mut self.previous[i], current);
        current && !last
    }

    /// Forgets every key, including pending edges.
    pub fn clear(&mut self) {
        self.current = [false; KEY_COUNT];
        self.previous = [false; KEY_COUNT];
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
