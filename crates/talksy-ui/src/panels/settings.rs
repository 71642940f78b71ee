//! Settings panel — backend URL, probe timeout, manual connection check.

use egui::{self, RichText};
use talksy_types::status::ConnectionStatus;
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    /// Apply `UiState::settings_draft`
    SaveClicked,
    /// Run a one-off connectivity probe
    CheckConnection,
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    status: ConnectionStatus,
) -> SettingsAction {
    let mut action = SettingsAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Server URL").color(TEXT_SECONDARY).small());
            ui.add(
                egui::TextEdit::singleline(&mut state.settings_draft.api_base)
                    .hint_text("http://localhost:8000")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(4.0);
            ui.label(RichText::new("Probe timeout").color(TEXT_SECONDARY).small());
            ui.add(
                egui::DragValue::new(&mut state.settings_draft.probe_timeout_ms)
                    .range(250..=30_000)
                    .speed(50)
                    .suffix(" ms"),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new(RichText::new("Save").color(TEXT_PRIMARY)).fill(ACCENT))
                    .clicked()
                {
                    action = SettingsAction::SaveClicked;
                }
                if ui.button("Check connection").clicked() {
                    action = SettingsAction::CheckConnection;
                }
            });

            if let Some(feedback) = &state.save_feedback {
                let color = if feedback.success { SUCCESS } else { LISTENING };
                ui.label(RichText::new(&feedback.message).color(color).small());
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Status: {}", status.label()))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });

    action
}
