// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::{Duration, Instant};

use anyhow::Result;
use cloakcalc_common::config::Config;
use cloakcalc_engine::{Navigator, PatternMatcher, Route, Session};
use eframe::egui::{self, CentralPanel};

use crate::sos::EmergencyScreen;

pub mod calculator;
pub mod colors;
pub mod sos;

/// Which screen is showing. The session only ever asks it to go to the emergency screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Router {
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, route: Route) {
        trace!("Router: {} -> {}", self.current, route);
        self.current = route;
    }
}

/// Screens and the state they share, without anything egui specific.
#[derive(Debug, Clone)]
pub struct AppState {
    pub router: Router,
    pub session: Session,
    pub emergency: EmergencyScreen,
    pub show_hint: bool,
    matcher: PatternMatcher,
}

impl AppState {
    #[must_use]
    pub fn new(matcher: PatternMatcher, config: &Config, show_hint: bool) -> Self {
        Self {
            router: Router::default(),
            session: Session::new(matcher.clone()),
            emergency: EmergencyScreen::new(Duration::from_secs(
                config.emergency.alert_duration_secs,
            )),
            show_hint: show_hint || config.ui.show_hint,
            matcher,
        }
    }

    /// Leave the emergency screen. The calculator comes back as a fresh session.
    pub fn return_to_calculator(&mut self) {
        self.session = Session::new(self.matcher.clone());
        self.router.navigate_to(Route::Calculator);
    }
}

fn set_egui_options(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.style_mut(|style| {
        style.visuals.panel_fill = colors::PANEL_BG;
    });
    ctx.options_mut(|options| {
        options.zoom_with_keyboard = false;
    });
}

struct CloakCalcGui {
    state: AppState,
}

impl CloakCalcGui {
    fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        set_egui_options(&cc.egui_ctx);

        Self { state }
    }
}

impl eframe::App for CloakCalcGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.emergency.tick(now);

        let route = self.state.router.current();
        let frame = match route {
            Route::Calculator => egui::Frame::central_panel(&ctx.style()),
            Route::Emergency => egui::Frame::central_panel(&ctx.style()).fill(colors::SOS_BG),
        };

        let action = CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| match route {
                Route::Calculator => {
                    let state = &mut self.state;
                    calculator::show(ui, &mut state.session, &mut state.router, state.show_hint);
                    sos::SosAction::Stay
                }
                Route::Emergency => {
                    egui::ScrollArea::vertical()
                        .show(ui, |ui| sos::show(ui, &mut self.state.emergency, now))
                        .inner
                }
            })
            .inner;

        if action == sos::SosAction::Back {
            self.state.return_to_calculator();
        }

        if self.state.router.current() != route {
            ctx.request_repaint();
        }

        if let Some(deadline) = self.state.emergency.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

/// Run the GUI
///
/// # Errors
/// Will return an error if the configured patterns are invalid or the GUI fails to run
pub fn run(config: &Config, show_hint: bool) -> Result<()> {
    let matcher = PatternMatcher::from_config(&config.patterns)?;
    let state = AppState::new(matcher, config, show_hint);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 600.0])
            .with_title("Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Calculator",
        native_options,
        Box::new(move |cc| Ok(Box::new(CloakCalcGui::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the calculator window: {e}"))?;

    Ok(())
}
