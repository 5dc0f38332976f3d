use std::fmt::{Display, Formatter};

pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ'".as_bytes();
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// One position of the dictionary alphabet: the 26 letters, case folded,
/// plus the apostrophe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Symbol {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Apostrophe,
}

const SYMBOLS: [Symbol; ALPHABET_LEN] = {
    use Symbol::*;
    [A, B, C, D, E, F, G, H, I, J, K, L, M,
     N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
     Apostrophe]
};

impl Symbol {
    pub fn from_byte(b: u8) -> Option<Symbol> {
        match b {
            b'a'..=b'z' => Some(SYMBOLS[(b - b'a') as usize]),
            b'A'..=b'Z' => Some(SYMBOLS[(b - b'A') as usize]),
            b'\'' => Some(Symbol::Apostrophe),
            _ => None
        }
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        if c.is_ascii() {
            Symbol::from_byte(c as u8)
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Symbol> {
        SYMBOLS.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        ALPHABET[self.index()] as char
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Maps a word onto the alphabet, or `None` if any character falls outside it.
pub fn symbols(word: &str) -> Option<Vec<Symbol>> {
    word.chars().map(Symbol::from_char).collect()
}
