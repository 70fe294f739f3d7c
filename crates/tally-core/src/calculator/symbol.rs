//! Symbols accepted by the calculator engine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// Type-safe enumeration of the four binary operators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Character used for this operator on the keypad.
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Maps a keypad character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Applies the operator. The caller is responsible for rejecting a zero
    /// divisor before calling this.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single symbol typed into the calculator: a digit, the decimal point or
/// an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// One of `+ - * /`
    Operator(Operator),
}

impl Symbol {
    /// Character this symbol appends to the operand text.
    ///
    /// Out-of-range digits render as `?`; the engine rejects them before
    /// they reach an operand.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Symbol::Point => '.',
            Symbol::Operator(op) => op.as_char(),
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(self, Symbol::Operator(_))
    }

    /// Whether the symbol can be typed at all (digits must be 0-9).
    pub fn is_valid(self) -> bool {
        !matches!(self, Symbol::Digit(d) if d > 9)
    }
}

impl TryFrom<char> for Symbol {
    type Error = TallyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if let Some(d) = c.to_digit(10) {
            return Ok(Symbol::Digit(d as u8));
        }
        if c == '.' {
            return Ok(Symbol::Point);
        }
        Operator::from_char(c)
            .map(Symbol::Operator)
            .ok_or_else(|| TallyError::InvalidSymbol {
                symbol: c.to_string(),
            })
    }
}

impl FromStr for Symbol {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::try_from(c),
            _ => Err(TallyError::InvalidSymbol {
                symbol: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_from_char() {
        assert_eq!(Symbol::try_from('7').unwrap(), Symbol::Digit(7));
        assert_eq!(Symbol::try_from('.').unwrap(), Symbol::Point);
        assert_eq!(
            Symbol::try_from('/').unwrap(),
            Symbol::Operator(Operator::Divide)
        );
        assert!(matches!(
            Symbol::try_from('x'),
            Err(TallyError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_symbol_from_str() {
        assert_eq!("0".parse::<Symbol>().unwrap(), Symbol::Digit(0));
        assert!("12".parse::<Symbol>().is_err());
        assert!("".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_symbol_char_roundtrip() {
        for c in "0123456789.+-*/".chars() {
            assert_eq!(Symbol::try_from(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_operator_serde() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
    }
}
