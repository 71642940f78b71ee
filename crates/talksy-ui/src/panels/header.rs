//! Top bar: product name, beta badge, settings toggle.

use egui::{self, Align, Layout, RichText};
use crate::state::UiState;
use crate::theme::*;

pub const TAGLINE: &str = "Your Private Voice Assistant";

pub fn header(ui: &mut egui::Ui, state: &mut UiState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Talksy").strong().color(ACCENT).size(20.0));
        egui::Frame::default()
            .fill(ACCENT_ALT)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.label(RichText::new("Beta").color(TEXT_PRIMARY).small());
            });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .selectable_label(state.show_settings, "Settings")
                .clicked()
            {
                state.show_settings = !state.show_settings;
            }
            ui.label(RichText::new(TAGLINE).color(TEXT_SECONDARY).small());
        });
    });
}
