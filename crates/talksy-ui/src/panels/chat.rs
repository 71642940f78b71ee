//! Chat panel — status banner, message bubbles, voice/text input form.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use talksy_core::session::SessionController;
use talksy_types::message::ChatMessage;
use crate::panels::voice_indicator::voice_indicator;
use crate::state::{banner_text, input_placeholder, ChatIntent, UiState};
use crate::theme::*;

/// Render the chat panel. Returns an intent when the user acts.
pub fn chat_panel(
    ui: &mut egui::Ui,
    session: &SessionController,
    state: &mut UiState,
) -> Option<ChatIntent> {
    let mut intent = None;

    if let Some(text) = banner_text(session.status()) {
        egui::Frame::default()
            .fill(BANNER_BG)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).color(BANNER_FG).small());
                });
            });
    }

    // Messages area
    let reserved = if session.is_busy() { 110.0 } else { 70.0 };
    let available_height = (ui.available_height() - reserved).max(0.0);
    ScrollArea::vertical()
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (index, message) in session.messages().iter().enumerate() {
                if let Some(speak) = render_message(ui, index, message) {
                    intent = Some(speak);
                }
                ui.add_space(6.0);
            }
        });

    ui.separator();

    if session.is_listening() {
        ui.horizontal(|ui| {
            voice_indicator(ui, true);
            ui.label(RichText::new("Listening...").color(ACCENT).small());
        });
    }

    // Input form
    ui.horizontal(|ui| {
        let listening = session.is_listening();
        let mic_label = if listening { "Stop" } else { "Mic" };
        let mic_fill = if listening { LISTENING } else { ACCENT };
        let mic = ui
            .add_enabled(
                session.can_toggle_listen(),
                egui::Button::new(RichText::new(mic_label).color(TEXT_PRIMARY))
                    .fill(mic_fill)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(48.0, 0.0)),
            )
            .on_hover_text(if listening { "Stop listening" } else { "Start listening" });
        if mic.clicked() {
            intent = Some(ChatIntent::ToggleListen);
        }

        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text(input_placeholder(session.status()))
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add_enabled(session.input_enabled(), input);
        if state.focus_input && session.input_enabled() {
            response.request_focus();
            state.focus_input = false;
        }

        let send_enabled = session.can_submit(&state.input_text);
        let send = ui
            .add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                    .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(60.0, 0.0)),
            )
            .on_hover_text("Send message");

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (enter && send_enabled) || send.clicked() {
            intent = Some(ChatIntent::Submit(state.input_text.clone()));
        }
    });

    if session.is_loading() && !session.is_listening() {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Processing...").color(TEXT_SECONDARY).small());
        });
    }

    intent
}

/// One bubble: user on the right, assistant on the left.
fn render_message(ui: &mut egui::Ui, index: usize, message: &ChatMessage) -> Option<ChatIntent> {
    let mut intent = None;
    let layout = if message.is_user {
        Layout::right_to_left(Align::TOP)
    } else {
        Layout::left_to_right(Align::TOP)
    };
    let fill = if message.is_user { ACCENT } else { BG_SECONDARY };

    ui.push_id(index, |ui| {
        ui.with_layout(layout, |ui| {
            let max_width = ui.available_width() * 0.8;
            egui::Frame::default()
                .fill(fill)
                .corner_radius(BUBBLE_ROUNDING)
                .inner_margin(PANEL_PADDING)
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(message.time_label())
                                    .color(TEXT_SECONDARY)
                                    .small(),
                            );
                            if !message.is_user && ui.small_button("Speak").clicked() {
                                intent = Some(ChatIntent::Speak(message.text.clone()));
                            }
                        });
                    });
                });
        });
    });

    intent
}
