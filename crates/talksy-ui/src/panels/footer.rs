use egui::{self, RichText};
use crate::theme::*;

pub fn footer_text(year: i32) -> String {
    format!("Talksy - {} \u{a9} {}", super::header::TAGLINE, year)
}

pub const PRIVACY_NOTE: &str = "All processing happens locally. Your privacy is guaranteed.";

pub fn footer(ui: &mut egui::Ui, year: i32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(footer_text(year)).color(TEXT_SECONDARY).small());
        ui.label(RichText::new(PRIVACY_NOTE).color(TEXT_SECONDARY).small());
    });
}
