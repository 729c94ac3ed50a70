// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

use crate::error::TokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A decimal digit key. Only `0..=9` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One keypad press that is recorded in the sequence log.
///
/// Clear and clear-entry are not tokens, they act on the session directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
}

impl Token {
    pub const ADD: Self = Self::Operator(Operator::Add);
    pub const SUBTRACT: Self = Self::Operator(Operator::Subtract);
    pub const MULTIPLY: Self = Self::Operator(Operator::Multiply);
    pub const DIVIDE: Self = Self::Operator(Operator::Divide);

    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(digit) => Some(Self::Digit(digit)),
            None => None,
        }
    }

    /// The text printed on the key, also used when serializing the log.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Token {
    type Error = TokenError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::digit)
                .ok_or(TokenError::UnknownKey(c)),
            '.' => Ok(Self::Decimal),
            '+' => Ok(Self::ADD),
            '-' => Ok(Self::SUBTRACT),
            '×' | '*' | 'x' | 'X' => Ok(Self::MULTIPLY),
            '÷' | '/' => Ok(Self::DIVIDE),
            '=' => Ok(Self::Equals),
            _ => Err(TokenError::UnknownKey(c)),
        }
    }
}

/// Parse a key string such as `"911×2="`. Whitespace is skipped.
///
/// # Errors
/// Will return an error on the first character that is not a keypad key
pub fn parse_tokens(input: &str) -> Result<Vec<Token>, TokenError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Token::try_from)
        .collect()
}

/// Concatenate the canonical text of each token, no separators.
#[must_use]
pub fn to_token_string(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.as_char()).collect()
}
