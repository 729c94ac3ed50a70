// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eframe::egui::Color32;

use super::calculator::KeypadKey;
use cloakcalc_engine::Token;

pub const PANEL_BG: Color32 = Color32::from_rgb(243, 244, 246);
pub const DISPLAY_BG: Color32 = Color32::from_rgb(229, 231, 235);
pub const DISPLAY_TEXT: Color32 = Color32::from_rgb(31, 41, 55);
pub const TAPE_TEXT: Color32 = Color32::from_rgb(107, 114, 128);
pub const HINT_TEXT: Color32 = Color32::from_rgba_premultiplied(156, 163, 175, 60);

pub const SOS_BG: Color32 = Color32::from_rgb(254, 242, 242);
pub const SOS_RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const SOS_BANNER_BG: Color32 = Color32::from_rgb(254, 226, 226);
pub const SOS_BANNER_TEXT: Color32 = Color32::from_rgb(153, 27, 27);
pub const CARD_BG: Color32 = Color32::WHITE;
pub const MUTED_TEXT: Color32 = Color32::from_rgb(75, 85, 99);
pub const NOTICE_INFO_BG: Color32 = Color32::from_rgb(31, 41, 55);

/// Button fill and label color for a keypad key.
#[must_use]
pub const fn key_colors(key: KeypadKey) -> (Color32, Color32) {
    match key {
        KeypadKey::Clear => (
            Color32::from_rgb(254, 226, 226),
            Color32::from_rgb(185, 28, 28),
        ),
        KeypadKey::ClearEntry => (
            Color32::from_rgb(255, 237, 213),
            Color32::from_rgb(194, 65, 12),
        ),
        KeypadKey::Press(Token::Operator(_)) => (
            Color32::from_rgb(219, 234, 254),
            Color32::from_rgb(29, 78, 216),
        ),
        KeypadKey::Press(Token::Equals) => (Color32::from_rgb(22, 163, 74), Color32::WHITE),
        KeypadKey::Press(Token::Digit(_) | Token::Decimal) => {
            (Color32::WHITE, Color32::from_rgb(31, 41, 55))
        }
    }
}
