//! Voice-activity bars shown while listening. Purely decorative.

use egui::{self, Pos2, Rect, Sense, Vec2};
use crate::theme::*;

pub const BAR_COUNT: usize = 5;
const BAR_WIDTH: f32 = 4.0;
const BAR_GAP: f32 = 4.0;
const IDLE_HEIGHT: f32 = 12.0;
const MIN_HEIGHT: f32 = 6.0;
const MAX_HEIGHT: f32 = 28.0;

/// Bar heights at `time` seconds. Idle bars are flat.
pub fn bar_heights(time: f64, active: bool) -> [f32; BAR_COUNT] {
    let mut heights = [IDLE_HEIGHT; BAR_COUNT];
    if !active {
        return heights;
    }
    for (i, h) in heights.iter_mut().enumerate() {
        let speed = 5.0 + i as f64 * 1.7;
        let wave = 0.5 + 0.5 * (time * speed + i as f64 * 1.3).sin();
        *h = MIN_HEIGHT + (MAX_HEIGHT - MIN_HEIGHT) * wave as f32;
    }
    heights
}

pub fn voice_indicator(ui: &mut egui::Ui, active: bool) {
    let width = BAR_COUNT as f32 * BAR_WIDTH + (BAR_COUNT - 1) as f32 * BAR_GAP;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, MAX_HEIGHT), Sense::hover());
    let time = ui.input(|i| i.time);
    let color = if active { ACCENT } else { IDLE_BAR.linear_multiply(0.5) };

    let painter = ui.painter_at(rect);
    for (i, height) in bar_heights(time, active).iter().enumerate() {
        let x = rect.left() + BAR_WIDTH / 2.0 + i as f32 * (BAR_WIDTH + BAR_GAP);
        let bar = Rect::from_center_size(Pos2::new(x, rect.center().y), Vec2::new(BAR_WIDTH, *height));
        painter.rect_filled(bar, PANEL_ROUNDING, color);
    }

    if active {
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(50));
    }
}
