use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::challenges::{load_photo_proof, Proof, WHEEL};
use crate::engine::protocol::EngineCommand;
use crate::model::catalog::{Cadence, LessonCategory, LessonLevel};
use crate::model::game_state::GameKind;
use crate::model::leaderboard::standings;
use crate::ui::app::{Screen, UiState};
use crate::ui::widgets::{self, LEAF, SKY, SUN};

pub fn draw_left_panel(ctx: &egui::Context, ui_state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    egui::SidePanel::left("left")
        .resizable(true)
        .default_width(360.0)
        .min_width(300.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut ui_state.screen, Screen::Games, "🎮 Games");
                ui.selectable_value(&mut ui_state.screen, Screen::Lessons, "📚 Lessons");
                ui.selectable_value(&mut ui_state.screen, Screen::Challenges, "🏅 Challenges");
                ui.selectable_value(&mut ui_state.screen, Screen::Leaderboard, "🏆 Ranks");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match ui_state.screen {
                Screen::Games => draw_games(ui, ui_state, cmd_tx),
                Screen::Lessons => draw_lessons(ui, ui_state, cmd_tx),
                Screen::Challenges => draw_challenges(ui, ui_state, cmd_tx),
                Screen::Leaderboard => draw_leaderboard(ui, ui_state),
            });
        });
}

/* =========================
   Games
   ========================= */

fn draw_games(ui: &mut egui::Ui, state: &UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("Eco Games");
    ui.label("Play, learn and earn points for your profile.");
    ui.add_space(6.0);

    let busy = state.session.is_some();

    for kind in GameKind::ARCADE {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading(kind.icon());
                ui.vertical(|ui| {
                    ui.strong(kind.title());
                    ui.add(egui::Label::new(kind.blurb()).wrap());
                });
            });

            if ui.add_enabled(!busy, egui::Button::new("▶ Play")).clicked() {
                let _ = cmd_tx.send(EngineCommand::OpenGame(kind));
            }
        });
        ui.add_space(4.0);
    }
}

/* =========================
   Lessons
   ========================= */

fn level_label(level: LessonLevel) -> &'static str {
    match level {
        LessonLevel::Beginner => "Beginner",
        LessonLevel::Intermediate => "Intermediate",
        LessonLevel::Advanced => "Advanced",
    }
}

fn draw_lessons(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("Lessons");

    let done = state.lessons.iter().filter(|l| l.completed).count();
    widgets::progress(
        ui,
        widgets::ratio(done, state.lessons.len()),
        format!("{done} of {} lessons complete", state.lessons.len()),
        LEAF,
    );

    ui.horizontal_wrapped(|ui| {
        ui.selectable_value(&mut state.lesson_category, None, "All");
        for category in LessonCategory::ALL {
            ui.selectable_value(&mut state.lesson_category, Some(category), category.label());
        }
    });
    ui.separator();

    let busy = state.session.is_some();
    let filter = state.lesson_category;

    for lesson in state
        .lessons
        .iter()
        .filter(|l| filter.map_or(true, |c| l.category == c))
    {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading(&lesson.icon);
                ui.vertical(|ui| {
                    ui.strong(&lesson.title);
                    ui.horizontal(|ui| {
                        widgets::badge(ui, level_label(lesson.level), SKY);
                        ui.small(format!("⏱ {} min", lesson.minutes));
                        if lesson.completed {
                            widgets::badge(ui, "✔ Done", LEAF);
                        }
                    });
                });
            });

            let label = if lesson.completed { "Review & Quiz" } else { "Finish & Take Quiz" };
            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                let _ = cmd_tx.send(EngineCommand::CompleteLesson(lesson.id.clone()));
            }
        });
        ui.add_space(4.0);
    }
}

/* =========================
   Challenges
   ========================= */

fn draw_challenges(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.heading("Challenges");

    let Some(board) = state.board.clone() else {
        ui.label("Loading challenges…");
        return;
    };

    ui.horizontal(|ui| {
        widgets::stat_tile(ui, "Streak", &format!("🔥 {} days", board.streak), SUN);
        widgets::stat_tile(ui, "Best", &format!("{} days", board.max_streak), SKY);
        let done = board.completed;
        widgets::stat_tile(ui, "Done", &format!("{done}/{}", board.challenges.len()), LEAF);
    });

    ui.add_space(6.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("🎡 Daily Spin");
        ui.small(
            WHEEL
                .iter()
                .map(|r| r.label())
                .collect::<Vec<_>>()
                .join(" · "),
        );
        if ui.add_enabled(board.can_spin, egui::Button::new("Spin!")).clicked() {
            let _ = cmd_tx.send(EngineCommand::SpinWheel);
        }
        if let Some(reward) = state.last_spin {
            ui.label(format!("Last spin: {}", reward.label()));
        }
        if let Some(m) = board.multiplier {
            widgets::badge(ui, &format!("{m}x on your next challenge"), SUN);
        }
    });

    ui.separator();

    for cadence in [Cadence::Daily, Cadence::Weekly] {
        ui.strong(match cadence {
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
        });

        for challenge in board.challenges.iter().filter(|c| c.cadence == cadence) {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.heading(&challenge.icon);
                    ui.vertical(|ui| {
                        ui.strong(&challenge.title);
                        ui.add(egui::Label::new(&challenge.description).wrap());
                        ui.horizontal(|ui| {
                            widgets::badge(
                                ui,
                                &format!("{:?}", challenge.difficulty),
                                widgets::difficulty_color(challenge.difficulty),
                            );
                            ui.small(format!("⭐ {} pts", challenge.points));
                        });
                    });
                });

                if challenge.completed {
                    widgets::badge(ui, "✔ Completed", LEAF);
                } else if state.draft.id.as_deref() == Some(challenge.id.as_str()) {
                    draw_proof_form(ui, state, cmd_tx);
                } else if ui.button("Submit proof").clicked() {
                    state.draft = Default::default();
                    state.draft.id = Some(challenge.id.clone());
                }
            });
            ui.add_space(4.0);
        }
    }
}

fn draw_proof_form(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    let draft = &mut state.draft;

    ui.label("What did you do?");
    ui.text_edit_multiline(&mut draft.description);

    ui.horizontal(|ui| {
        if ui.button("📷 Attach photo").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg"])
                .pick_file()
            {
                match load_photo_proof(&path) {
                    Ok(photo) => {
                        draft.photo = Some(photo);
                        draft.error = None;
                    }
                    Err(e) => draft.error = Some(format!("{e:#}")),
                }
            }
        }

        if let Some(photo) = &draft.photo {
            let name = photo
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.small(format!("{name} ({}×{})", photo.width, photo.height));
        }
    });

    if let Some(err) = &draft.error {
        ui.colored_label(widgets::EMBER, err);
    }

    ui.horizontal(|ui| {
        if ui.button("Submit").clicked() {
            if draft.description.trim().is_empty() {
                draft.error = Some("Describe what you did first.".into());
            } else if let Some(id) = draft.id.take() {
                let proof = Proof {
                    description: draft.description.trim().to_string(),
                    photo: draft.photo.take(),
                };
                let _ = cmd_tx.send(EngineCommand::CompleteChallenge { id, proof });
                *draft = Default::default();
            }
        }
        if ui.button("Cancel").clicked() {
            *draft = Default::default();
        }
    });
}

/* =========================
   Leaderboard
   ========================= */

fn draw_leaderboard(ui: &mut egui::Ui, state: &UiState) {
    ui.heading("Leaderboard");

    let profile = &state.profile;
    let rows = standings(&profile.display_name, profile.total_points, profile.avatar);

    egui::Grid::new("leaderboard")
        .striped(true)
        .num_columns(4)
        .show(ui, |ui| {
            for row in rows {
                let medal = match row.rank {
                    1 => "🥇".to_string(),
                    2 => "🥈".to_string(),
                    3 => "🥉".to_string(),
                    n => format!("#{n}"),
                };
                ui.label(medal);

                let name = format!("{} {}", row.avatar.glyph(), row.name);
                if row.is_player {
                    ui.colored_label(LEAF, egui::RichText::new(format!("{name} (you)")).strong());
                } else {
                    ui.label(name);
                }
                ui.small(&row.title);
                ui.label(format!("{} pts", row.points));
                ui.end_row();
            }
        });
}
