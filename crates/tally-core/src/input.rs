//! Input adapter: key tokens to calculator operations.
//!
//! Key sequences are written the way they would be typed on a keypad:
//!
//! | Token                      | Key                 |
//! |----------------------------|---------------------|
//! | `0`-`9`, `.`, `+ - * /`    | [`Key::Symbol`]     |
//! | `=`, `enter`               | [`Key::Equals`]     |
//! | `<`, `backspace`, `del`    | [`Key::Backspace`]  |
//! | `c`, `clear`               | [`Key::Clear`]      |
//! | `ms`, `mr`, `mc`, `m+`     | memory keys         |
//!
//! Tokens may be run together (`"5+3=*2="`) or separated by whitespace
//! (`"12 ms c mr"`).

use std::{fmt, str::FromStr};

use crate::{
    calculator::{Calculator, Surface, Symbol},
    error::{Result, TallyError},
};

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Symbol(Symbol),
    Equals,
    Backspace,
    Clear,
    MemoryStore,
    MemoryRecall,
    MemoryClear,
    MemoryAdd,
}

impl Key {
    /// Splits a key string into keys.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidSymbol` naming the first token that is not
    /// a key.
    pub fn parse_sequence(text: &str) -> Result<Vec<Key>> {
        let mut keys = Vec::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_whitespace() {
                continue;
            }
            if c == 'm' && chars.peek() == Some(&'+') {
                chars.next();
                keys.push(Key::MemoryAdd);
                continue;
            }
            if c.is_ascii_alphabetic() {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !next.is_ascii_alphabetic() {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                keys.push(word.parse()?);
                continue;
            }
            keys.push(Key::from_char(c)?);
        }

        Ok(keys)
    }

    fn from_char(c: char) -> Result<Key> {
        match c {
            '=' => Ok(Key::Equals),
            '<' => Ok(Key::Backspace),
            _ => Symbol::try_from(c).map(Key::Symbol),
        }
    }
}

impl FromStr for Key {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "enter" => Ok(Key::Equals),
            "backspace" | "del" => Ok(Key::Backspace),
            "c" | "clear" => Ok(Key::Clear),
            "ms" => Ok(Key::MemoryStore),
            "mr" => Ok(Key::MemoryRecall),
            "mc" => Ok(Key::MemoryClear),
            "m+" => Ok(Key::MemoryAdd),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::from_char(c),
                    _ => Err(TallyError::InvalidSymbol {
                        symbol: s.to_string(),
                    }),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Symbol(symbol) => write!(f, "{symbol}"),
            Key::Equals => write!(f, "="),
            Key::Backspace => write!(f, "<"),
            Key::Clear => write!(f, "c"),
            Key::MemoryStore => write!(f, "ms"),
            Key::MemoryRecall => write!(f, "mr"),
            Key::MemoryClear => write!(f, "mc"),
            Key::MemoryAdd => write!(f, "m+"),
        }
    }
}

impl<S: Surface> Calculator<S> {
    /// Dispatches one key press to the matching engine operation.
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched operation; the calculator has
    /// already recovered when it is returned.
    pub fn press(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Symbol(symbol) => self.append_symbol(symbol)?,
            Key::Equals => {
                self.evaluate()?;
            }
            Key::Backspace => self.delete_last(),
            Key::Clear => self.clear(),
            Key::MemoryStore => {
                self.store()?;
            }
            Key::MemoryRecall => self.recall(),
            Key::MemoryClear => self.clear_memory(),
            Key::MemoryAdd => {
                self.add_to_memory()?;
            }
        }
        Ok(())
    }
}
