// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

#[macro_use]
extern crate tracing;

pub mod arithmetic;
pub mod error;
pub mod matcher;
pub mod navigation;
pub mod sequence;
pub mod session;
pub mod token;

pub use crate::matcher::{Outcome, PatternMatcher};
pub use crate::navigation::{Navigator, Route};
pub use crate::session::{RenderView, Session};
pub use crate::token::{Digit, Token};
