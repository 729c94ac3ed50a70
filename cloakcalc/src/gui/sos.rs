// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Instant;

use eframe::egui::{self, Align2, RichText, Ui};

use super::colors;
use crate::sos::{EmergencyScreen, NoticeKind, SAFETY_TIPS};

const CARD_WIDTH: f32 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosAction {
    Stay,
    Back,
}

fn card<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::none()
        .fill(colors::CARD_BG)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(
                RichText::new(title)
                    .strong()
                    .size(17.0)
                    .color(colors::DISPLAY_TEXT),
            );
            ui.add_space(8.0);
            add_contents(ui)
        })
        .inner
}

fn show_notices(ctx: &egui::Context, screen: &EmergencyScreen) {
    if screen.notices().is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("sos-notices"))
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            for notice in screen.notices() {
                let fill = match notice.kind {
                    NoticeKind::Info => colors::NOTICE_INFO_BG,
                    NoticeKind::Destructive => colors::SOS_RED,
                };

                egui::Frame::none()
                    .fill(fill)
                    .rounding(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&notice.title).strong().color(egui::Color32::WHITE));
                        ui.label(RichText::new(&notice.description).color(egui::Color32::WHITE));
                    });
                ui.add_space(6.0);
            }
        });
}

/// Draw the emergency screen. Returns [`SosAction::Back`] when the user asks to leave.
pub fn show(ui: &mut Ui, screen: &mut EmergencyScreen, now: Instant) -> SosAction {
    let mut action = SosAction::Stay;
    let alert_active = screen.is_alert_active(now);

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            action = SosAction::Back;
        }
        ui.add_space(24.0);
        ui.heading(RichText::new("Emergency SOS").strong().color(colors::SOS_RED));
    });
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        if alert_active {
            egui::Frame::none()
                .fill(colors::SOS_BANNER_BG)
                .rounding(8.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.label(
                        RichText::new("EMERGENCY ALERT ACTIVE - Help is on the way!")
                            .strong()
                            .color(colors::SOS_BANNER_TEXT),
                    );
                });
            ui.add_space(12.0);
        }

        card(ui, "Quick Emergency", |ui| {
            let label = if alert_active {
                "Emergency Alert Sent..."
            } else {
                "EMERGENCY CALL"
            };
            let button = egui::Button::new(RichText::new(label).size(18.0).color(egui::Color32::WHITE))
                .fill(colors::SOS_RED);

            if ui
                .add_enabled(!alert_active, button.min_size(egui::vec2(CARD_WIDTH, 48.0)))
                .clicked()
            {
                screen.trigger_alert(now);
            }
            ui.label(
                RichText::new("Sends immediate alert with your location to emergency contacts")
                    .small()
                    .color(colors::MUTED_TEXT),
            );
        });
        ui.add_space(12.0);

        card(ui, "Emergency Contact", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut screen.contact)
                    .hint_text("Enter emergency contact number")
                    .desired_width(CARD_WIDTH),
            );
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut screen.message)
                    .hint_text("Emergency message")
                    .desired_width(CARD_WIDTH),
            );
            ui.add_space(6.0);

            if ui
                .add(egui::Button::new("Send Custom Message").min_size(egui::vec2(CARD_WIDTH, 32.0)))
                .clicked()
            {
                if let Err(e) = screen.send_message(now) {
                    debug!("Message not sent: {e}");
                }
            }
        });
        ui.add_space(12.0);

        card(ui, "Safety Tips", |ui| {
            for tip in SAFETY_TIPS {
                ui.label(RichText::new(format!("• {tip}")).color(colors::MUTED_TEXT));
            }
        });
        ui.add_space(12.0);

        ui.label(
            RichText::new("Access calculator: Return to main screen")
                .small()
                .color(colors::TAPE_TEXT),
        );
    });

    show_notices(ui.ctx(), screen);

    action
}
