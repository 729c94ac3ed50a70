// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cloakcalc_engine::{
    token::{to_token_string, Digit},
    Navigator, Session, Token,
};
use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::colors;

pub const KEY_WIDTH: f32 = 64.0;
pub const KEY_HEIGHT: f32 = 52.0;
pub const KEY_SPACING: f32 = 8.0;
const KEY_FONT_SIZE: f32 = 22.0;
const DISPLAY_FONT_SIZE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Clear,
    ClearEntry,
    Press(Token),
}

impl KeypadKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Press(token) => token.to_string(),
        }
    }

    /// Width in key columns.
    #[must_use]
    pub const fn columns(self) -> u8 {
        match self {
            Self::Press(Token::Digit(Digit::ZERO)) => 2,
            _ => 1,
        }
    }
}

const fn digit(d: usize) -> KeypadKey {
    KeypadKey::Press(Token::Digit(Digit::ALL[d]))
}

pub const KEYPAD_ROWS: [&[KeypadKey]; 5] = [
    &[
        KeypadKey::Clear,
        KeypadKey::ClearEntry,
        KeypadKey::Press(Token::DIVIDE),
        KeypadKey::Press(Token::MULTIPLY),
    ],
    &[digit(7), digit(8), digit(9), KeypadKey::Press(Token::SUBTRACT)],
    &[digit(4), digit(5), digit(6), KeypadKey::Press(Token::ADD)],
    &[digit(1), digit(2), digit(3), KeypadKey::Press(Token::Equals)],
    &[digit(0), KeypadKey::Press(Token::Decimal)],
];

/// Route a keypad press into the session.
pub fn press_key<N: Navigator + ?Sized>(session: &mut Session, navigator: &mut N, key: KeypadKey) {
    match key {
        KeypadKey::Clear => session.clear(),
        KeypadKey::ClearEntry => session.clear_entry(),
        KeypadKey::Press(token) => {
            session.press(token, navigator);
        }
    }
}

fn key_button(ui: &mut Ui, key: KeypadKey) -> bool {
    let (fill, text) = colors::key_colors(key);
    let columns = f32::from(key.columns());
    let width = KEY_WIDTH.mul_add(columns, KEY_SPACING * (columns - 1.0));

    let button =
        egui::Button::new(RichText::new(key.label()).size(KEY_FONT_SIZE).color(text)).fill(fill);

    ui.add_sized([width, KEY_HEIGHT], button).clicked()
}

fn show_display(ui: &mut Ui, session: &Session, width: f32) {
    let view = session.render();

    egui::Frame::none()
        .fill(colors::DISPLAY_BG)
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(width);
            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                ui.label(
                    RichText::new(view.sequence)
                        .monospace()
                        .small()
                        .color(colors::TAPE_TEXT),
                );
                ui.label(
                    RichText::new(view.display)
                        .monospace()
                        .size(DISPLAY_FONT_SIZE)
                        .color(colors::DISPLAY_TEXT),
                );
            });
        });
}

/// Draw the calculator. Key presses are applied to `session` before this returns.
pub fn show<N: Navigator + ?Sized>(
    ui: &mut Ui,
    session: &mut Session,
    navigator: &mut N,
    show_hint: bool,
) {
    let keypad_width = KEY_WIDTH.mul_add(4.0, KEY_SPACING * 3.0);

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(RichText::new("Calculator").color(colors::DISPLAY_TEXT));
        ui.add_space(12.0);

        show_display(ui, session, keypad_width);
        ui.add_space(KEY_SPACING * 2.0);

        let mut pressed = None;
        ui.spacing_mut().item_spacing = egui::vec2(KEY_SPACING, KEY_SPACING);

        for row in KEYPAD_ROWS {
            ui.horizontal(|ui| {
                // rows start at the left edge of the display
                let offset = (ui.available_width() - keypad_width) / 2.0;
                ui.add_space(offset.max(0.0));

                for key in row {
                    if key_button(ui, *key) {
                        pressed = Some(*key);
                    }
                }
            });
        }

        if let Some(key) = pressed {
            press_key(session, navigator, key);
        }

        if show_hint {
            ui.add_space(16.0);
            ui.label(
                RichText::new(format!(
                    "Try: {}",
                    to_token_string(session.matcher().navigation())
                ))
                .small()
                .color(colors::HINT_TEXT),
            );
        }
    });
}
