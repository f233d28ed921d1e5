use eframe::egui;

use crate::model::catalog::Difficulty;

pub const LEAF: egui::Color32 = egui::Color32::from_rgb(46, 160, 90);
pub const SKY: egui::Color32 = egui::Color32::from_rgb(52, 132, 196);
pub const SUN: egui::Color32 = egui::Color32::from_rgb(230, 160, 40);
pub const EMBER: egui::Color32 = egui::Color32::from_rgb(206, 72, 60);

/// `m:ss`
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn difficulty_color(difficulty: Difficulty) -> egui::Color32 {
    match difficulty {
        Difficulty::Easy => LEAF,
        Difficulty::Medium => SUN,
        Difficulty::Hard => EMBER,
    }
}

pub fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.small(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}

/// Small tinted caption above a bold value.
pub fn stat_tile(ui: &mut egui::Ui, label: &str, value: &str, tone: egui::Color32) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, tone))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(7))
        .show(ui, |ui| {
            ui.small(egui::RichText::new(label).color(tone));
            ui.strong(value);
        });
}

pub fn progress(ui: &mut egui::Ui, fraction: f32, text: impl Into<egui::WidgetText>, tone: egui::Color32) {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(tone)
            .text(text),
    );
}

pub fn ratio(done: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        done as f32 / total as f32
    }
}
