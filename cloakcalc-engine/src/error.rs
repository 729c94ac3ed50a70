// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("'{0}' is not a keypad key")]
    UnknownKey(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("the navigation pattern is empty")]
    EmptyNavigation,
    #[error("result pattern #{index} has an empty key")]
    EmptyKey { index: usize },
    #[error("invalid key in pattern \"{pattern}\"")]
    InvalidKey {
        pattern: String,
        #[source]
        source: TokenError,
    },
    #[error("substitute value \"{value}\" for \"{key}\" is not a finite number")]
    InvalidSubstitute { key: String, value: String },
}
