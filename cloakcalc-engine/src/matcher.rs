// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cloakcalc_common::config::{PatternConfig, ResultPatternConfig};

use crate::{
    error::PatternError,
    sequence::SequenceLog,
    token::{parse_tokens, to_token_string, Digit, Token},
};

/// What the session should do with the key that was just logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Leave the calculator for the emergency screen.
    Navigate,
    /// Show this value instead of the real result.
    SubstituteResult(String),
    /// Nothing matched, run the arithmetic as usual.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPattern {
    key: String,
    value: String,
}

impl ResultPattern {
    /// `key` is normalized to keypad text, so `"911*2="` and `"911×2="` are the same pattern.
    ///
    /// # Errors
    /// Will return an error if the key is empty or not made of keypad keys, or if the
    /// value would not leave a number on the display
    pub fn new(key: &str, value: &str) -> Result<Self, PatternError> {
        let tokens = parse_tokens(key).map_err(|source| PatternError::InvalidKey {
            pattern: key.to_string(),
            source,
        })?;

        if tokens.is_empty() {
            return Err(PatternError::EmptyKey { index: 0 });
        }

        let trimmed = value.trim();
        if !trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(PatternError::InvalidSubstitute {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        Ok(Self {
            key: to_token_string(&tokens),
            value: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Suffix matcher for the hidden sequences.
///
/// Holds no state of its own: [`PatternMatcher::evaluate`] only looks at the log it is
/// handed. The navigation pattern is checked before the result table, and the result
/// table is checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatcher {
    navigation: Vec<Token>,
    results: Vec<ResultPattern>,
    // in tokens, one char per token
    longest_key: usize,
}

impl Default for PatternMatcher {
    fn default() -> Self {
        // the built-in tables are validated by the test suite
        Self::from_config(&PatternConfig::default()).unwrap_or_else(|e| {
            error!("Built-in pattern table is invalid: {e}");
            Self {
                navigation: DEFAULT_NAVIGATION.to_vec(),
                results: Vec::new(),
                longest_key: 0,
            }
        })
    }
}

const SEVEN: Token = Token::Digit(Digit::ALL[7]);

const DEFAULT_NAVIGATION: [Token; 8] = [
    SEVEN,
    SEVEN,
    SEVEN,
    Token::ADD,
    SEVEN,
    SEVEN,
    SEVEN,
    Token::Equals,
];

impl PatternMatcher {
    /// # Errors
    /// Will return an error if the navigation pattern is empty
    pub fn new(navigation: Vec<Token>, results: Vec<ResultPattern>) -> Result<Self, PatternError> {
        if navigation.is_empty() {
            return Err(PatternError::EmptyNavigation);
        }

        let longest_key = results
            .iter()
            .map(|pattern| pattern.key().chars().count())
            .max()
            .unwrap_or(0);

        Ok(Self {
            navigation,
            results,
            longest_key,
        })
    }

    /// # Errors
    /// Will return an error if any configured pattern is invalid
    pub fn from_config(config: &PatternConfig) -> Result<Self, PatternError> {
        let navigation =
            parse_tokens(&config.navigation).map_err(|source| PatternError::InvalidKey {
                pattern: config.navigation.clone(),
                source,
            })?;

        let results = config
            .results
            .iter()
            .enumerate()
            .map(|(index, ResultPatternConfig { key, value })| {
                ResultPattern::new(key, value).map_err(|e| match e {
                    PatternError::EmptyKey { .. } => PatternError::EmptyKey { index },
                    e => e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(navigation, results)
    }

    #[must_use]
    pub fn navigation(&self) -> &[Token] {
        &self.navigation
    }

    #[must_use]
    pub fn results(&self) -> &[ResultPattern] {
        &self.results
    }

    #[must_use]
    pub fn evaluate(&self, log: &SequenceLog) -> Outcome {
        if log.ends_with(&self.navigation) {
            trace!("Pattern matcher: navigation");
            return Outcome::Navigate;
        }

        if self.results.is_empty() {
            return Outcome::Continue;
        }

        // only the tail that could hold a key needs to be serialized
        let tokens = log.tokens();
        let typed = to_token_string(&tokens[tokens.len().saturating_sub(self.longest_key)..]);
        self.results
            .iter()
            .find(|pattern| typed.ends_with(pattern.key()))
            .map_or(Outcome::Continue, |pattern| {
                trace!("Pattern matcher: substitute");
                Outcome::SubstituteResult(pattern.value().to_string())
            })
    }
}
