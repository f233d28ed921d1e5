use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::challenges::TreeStage;
use crate::engine::protocol::EngineCommand;
use crate::model::leaderboard::player_title;
use crate::model::profile::Avatar;
use crate::ui::app::UiState;
use crate::ui::widgets::{self, LEAF, SKY, SUN};

/// Point totals where the player's title changes.
const TITLE_STEPS: [u64; 4] = [250, 1000, 2000, 3000];

pub fn draw_right_panel(ctx: &egui::Context, ui_state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(300.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_profile(ui, ui_state, cmd_tx);
                ui.separator();
                draw_progress(ui, ui_state);
                ui.separator();
                draw_streak_tree(ui, ui_state);
            });
        });
}

/* =========================
   Profile
   ========================= */

fn draw_profile(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("My Profile");

    if !state.editing_profile {
        let profile = &state.profile;
        ui.horizontal(|ui| {
            ui.heading(profile.avatar.glyph());
            ui.vertical(|ui| {
                ui.strong(&profile.display_name);
                ui.small(format!("{} · {}", profile.avatar.name(), player_title(profile.total_points)));
            });
        });
        ui.weak(profile.avatar.motto());

        if ui.button("✏ Edit").clicked() {
            state.name_draft = state.profile.display_name.clone();
            state.avatar_draft = state.profile.avatar;
            state.editing_profile = true;
        }
        return;
    }

    ui.label("Name");
    ui.text_edit_singleline(&mut state.name_draft);

    ui.label("Avatar");
    for avatar in Avatar::ALL {
        ui.radio_value(
            &mut state.avatar_draft,
            avatar,
            format!("{} {}", avatar.glyph(), avatar.name()),
        );
    }

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            let _ = cmd_tx.send(EngineCommand::SaveProfile {
                name: state.name_draft.trim().to_string(),
                avatar: state.avatar_draft,
            });
            state.editing_profile = false;
        }
        if ui.button("Cancel").clicked() {
            state.editing_profile = false;
        }
    });
}

/* =========================
   Progress
   ========================= */

fn next_title_step(points: u64) -> Option<u64> {
    TITLE_STEPS.iter().copied().find(|step| points < *step)
}

fn draw_progress(ui: &mut egui::Ui, state: &UiState) {
    ui.heading("Progress");

    let points = state.profile.total_points;
    ui.horizontal(|ui| {
        widgets::stat_tile(ui, "Points", &points.to_string(), SUN);
        let lessons_done = state.lessons.iter().filter(|l| l.completed).count();
        widgets::stat_tile(ui, "Lessons", &format!("{lessons_done}/{}", state.lessons.len()), SKY);
        if let Some(board) = &state.board {
            widgets::stat_tile(
                ui,
                "Challenges",
                &format!("{}/{}", board.completed, board.challenges.len()),
                LEAF,
            );
        }
    });

    ui.add_space(4.0);
    match next_title_step(points) {
        Some(step) => widgets::progress(
            ui,
            points as f32 / step as f32,
            format!("{} pts to {}", step - points, player_title(step)),
            SUN,
        ),
        None => {
            ui.label("🏆 Top title reached!");
        }
    }

    if let Some(outcome) = &state.outcome {
        ui.add_space(4.0);
        ui.small(format!("Last game: {}", outcome.headline()));
    }
}

/* =========================
   Streak tree
   ========================= */

fn draw_streak_tree(ui: &mut egui::Ui, state: &UiState) {
    ui.heading("Streak Tree");

    let Some(board) = &state.board else {
        return;
    };

    let stage = TreeStage::for_streak(board.streak);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(stage.glyph()).size(48.0));
        ui.strong(stage.name());
        ui.small(format!("🔥 {} day streak", board.streak));
    });

    match TreeStage::days_to_next(board.streak) {
        Some(days) => {
            ui.small(format!("{days} more days to grow"));
        }
        None => {
            ui.small("Your tree is fully grown!");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_title_step_tracks_thresholds() {
        assert_eq!(next_title_step(0), Some(250));
        assert_eq!(next_title_step(250), Some(1000));
        assert_eq!(next_title_step(2999), Some(3000));
        assert_eq!(next_title_step(3000), None);
    }

    #[test]
    fn steps_match_title_changes() {
        for step in TITLE_STEPS {
            assert_ne!(player_title(step - 1), player_title(step));
        }
    }
}
