// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only record of every key pressed since the last clear.

use std::fmt;

use crate::token::{to_token_string, Token};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceLog {
    tokens: Vec<Token>,
}

impl SequenceLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn append(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the most recent `suffix.len()` tokens equal `suffix`, element-wise.
    #[must_use]
    pub fn ends_with(&self, suffix: &[Token]) -> bool {
        self.tokens.ends_with(suffix)
    }

    /// The log as typed, e.g. `"12+3="`.
    #[must_use]
    pub fn as_token_string(&self) -> String {
        to_token_string(&self.tokens)
    }
}

impl fmt::Display for SequenceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.tokens.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for token in iter {
                write!(f, " {token}")?;
            }
        }

        Ok(())
    }
}

impl FromIterator<Token> for SequenceLog {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
