// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    arithmetic::CalculatorState,
    matcher::{Outcome, PatternMatcher},
    navigation::{Navigator, Route},
    sequence::SequenceLog,
    token::Token,
};

/// What the presentation layer gets to see after each key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    pub display: String,
    /// The key log, space separated.
    pub sequence: String,
}

/// One calculator session: the key log, the arithmetic state and the patterns the log is
/// matched against.
///
/// Every key runs to completion before the next one is accepted: it is logged, the
/// navigation pattern is checked, then the result patterns, and only if neither matched
/// does the arithmetic run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    log: SequenceLog,
    state: CalculatorState,
    matcher: PatternMatcher,
}

impl Session {
    #[must_use]
    pub fn new(matcher: PatternMatcher) -> Self {
        Self {
            log: SequenceLog::new(),
            state: CalculatorState::new(),
            matcher,
        }
    }

    #[must_use]
    pub const fn log(&self) -> &SequenceLog {
        &self.log
    }

    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    #[must_use]
    pub const fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Process one key and return the next session along with what happened.
    #[must_use]
    pub fn step(mut self, token: Token) -> (Self, Outcome) {
        let outcome = self.step_in_place(token);
        (self, outcome)
    }

    /// Process one key, handing control to `navigator` if the navigation pattern was typed.
    pub fn press<N: Navigator + ?Sized>(&mut self, token: Token, navigator: &mut N) -> Outcome {
        let outcome = self.step_in_place(token);

        if outcome == Outcome::Navigate {
            navigator.navigate_to(Route::Emergency);
        }

        outcome
    }

    fn step_in_place(&mut self, token: Token) -> Outcome {
        self.log.append(token);

        let outcome = self.matcher.evaluate(&self.log);
        match &outcome {
            Outcome::Navigate => (),
            Outcome::SubstituteResult(value) => self.state.settle(value),
            Outcome::Continue => self.state.apply(token),
        }

        outcome
    }

    /// Full reset of the display, pending operation and key log.
    pub fn clear(&mut self) {
        self.state.clear();
        self.log.clear();
    }

    /// Resets the display and the key log but keeps the pending operation.
    pub fn clear_entry(&mut self) {
        self.state.clear_entry();
        self.log.clear();
    }

    #[must_use]
    pub fn render(&self) -> RenderView {
        RenderView {
            display: self.state.display().to_string(),
            sequence: self.log.to_string(),
        }
    }
}
