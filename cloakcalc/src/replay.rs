// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run a key sequence through a session without a window.

use std::io::Write;

use cloakcalc_engine::{
    error::TokenError,
    navigation::{RecordingNavigator, Route},
    RenderView, Session, Token,
};
use thiserror::Error;

/// Full clear in a replay string.
pub const CLEAR_KEY: char = 'C';
/// Clear-entry in a replay string.
pub const CLEAR_ENTRY_KEY: char = 'E';

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("invalid replay sequence at position {position}")]
    InvalidKey {
        position: usize,
        #[source]
        source: TokenError,
    },
    #[error("failed to write replay output")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayKey {
    Press(Token),
    Clear,
    ClearEntry,
}

/// # Errors
/// Will return an error on the first character that is neither a keypad key nor a clear key
pub fn parse_replay(input: &str) -> Result<Vec<ReplayKey>, ReplayError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| match c {
            CLEAR_KEY => Ok(ReplayKey::Clear),
            CLEAR_ENTRY_KEY => Ok(ReplayKey::ClearEntry),
            c => Token::try_from(c)
                .map(ReplayKey::Press)
                .map_err(|source| ReplayError::InvalidKey { position, source }),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub routes: Vec<Route>,
    pub view: RenderView,
}

#[must_use]
pub fn replay(mut session: Session, keys: &[ReplayKey]) -> ReplayReport {
    let mut navigator = RecordingNavigator::default();

    for key in keys {
        match key {
            ReplayKey::Press(token) => {
                session.press(*token, &mut navigator);
            }
            ReplayKey::Clear => session.clear(),
            ReplayKey::ClearEntry => session.clear_entry(),
        }
    }

    ReplayReport {
        routes: navigator.routes,
        view: session.render(),
    }
}

/// # Errors
/// Will return an error if the sequence is invalid or the output cannot be written
pub fn run<W: Write>(session: Session, input: &str, out: &mut W) -> Result<(), ReplayError> {
    let keys = parse_replay(input)?;
    let report = replay(session, &keys);

    for route in &report.routes {
        writeln!(out, "navigate: {route}")?;
    }
    writeln!(out, "display: {}", report.view.display)?;
    writeln!(out, "sequence: {}", report.view.sequence)?;

    Ok(())
}
