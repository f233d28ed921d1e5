use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::protocol::EngineCommand;
use crate::model::event_result::EndReason;
use crate::model::game_state::{GaugeView, SessionView};
use crate::ui::app::UiState;
use crate::ui::widgets::{self, EMBER, LEAF, SKY, SUN};

pub fn draw_game_window(ctx: &egui::Context, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    if let Some(view) = state.session.clone() {
        draw_session(ctx, state, &view, cmd_tx);
    } else if state.outcome.is_some() {
        draw_outcome(ctx, state);
    }
}

fn draw_session(ctx: &egui::Context, state: &UiState, view: &SessionView, cmd_tx: &Sender<EngineCommand>) {
    let mut open = true;

    egui::Window::new(format!("{} {}", view.kind.icon(), view.title))
        .id(egui::Id::new("game_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                widgets::stat_tile(ui, "Score", &view.score.to_string(), SUN);
                widgets::stat_tile(ui, "Time", &widgets::format_clock(view.remaining_secs), SKY);
                if view.rounds > 0 {
                    widgets::stat_tile(ui, "Round", &format!("{}/{}", view.round + 1, view.rounds), LEAF);
                }
            });

            let time_fraction = widgets::ratio(view.remaining_secs as usize, view.duration_secs as usize);
            let tone = if time_fraction < 0.2 { EMBER } else { SKY };
            widgets::progress(ui, time_fraction, "", tone);

            if let Some(secs) = view.prompt_remaining_secs {
                ui.small(format!("⏱ {secs}s for this question"));
            }

            if let Some(gauge) = &view.gauge {
                widgets::progress(
                    ui,
                    gauge.fraction(),
                    format!("{}: {}", gauge.label, gauge.value),
                    gauge_color(gauge),
                );
            }

            ui.separator();

            if let Some(prompt) = &view.prompt {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&prompt.icon).size(40.0));
                    ui.heading(&prompt.label);
                    if !prompt.detail.is_empty() {
                        ui.add(egui::Label::new(&prompt.detail).wrap());
                    }
                });

                ui.add_space(8.0);
                for (choice, option) in prompt.options.iter().enumerate() {
                    let button = egui::Button::new(option).min_size(egui::vec2(ui.available_width(), 28.0));
                    if ui.add(button).clicked() {
                        let _ = cmd_tx.send(EngineCommand::Choose {
                            session_id: view.session_id,
                            choice,
                        });
                    }
                }
            }

            if let Some(last) = state.last_resolution {
                ui.add_space(6.0);
                if last.correct {
                    ui.colored_label(LEAF, format!("✔ Correct! +{}", last.points_delta));
                } else if last.points_delta > 0 {
                    ui.colored_label(SUN, format!("➖ Could be greener +{}", last.points_delta));
                } else if last.points_delta < 0 {
                    ui.colored_label(EMBER, format!("✘ Not quite ({})", last.points_delta));
                } else {
                    ui.colored_label(EMBER, "✘ Not quite");
                }
            }
        });

    if !open {
        let _ = cmd_tx.send(EngineCommand::CloseGame {
            session_id: view.session_id,
        });
    }
}

fn gauge_color(gauge: &GaugeView) -> egui::Color32 {
    let fraction = gauge.fraction();
    if gauge.high_is_good {
        if fraction >= 0.7 {
            LEAF
        } else if fraction >= 0.4 {
            SUN
        } else {
            EMBER
        }
    } else if fraction <= 1.0 / 6.0 {
        // clean air sits at the bottom of the scale
        LEAF
    } else if fraction <= 1.0 / 3.0 {
        SUN
    } else {
        EMBER
    }
}

fn draw_outcome(ctx: &egui::Context, state: &mut UiState) {
    let Some(outcome) = &state.outcome else {
        return;
    };

    let mut dismiss = false;

    egui::Window::new("Game Over")
        .id(egui::Id::new("game_outcome"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let icon = match outcome.end {
                EndReason::PromptsExhausted => "🎉",
                EndReason::TimeUp => "⏰",
                EndReason::Closed => "👋",
            };
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(40.0));
                ui.heading(outcome.headline());
                if outcome.answered > 0 {
                    ui.label(format!("{} of {} answers right", outcome.correct, outcome.answered));
                }
                if let Some(value) = outcome.gauge {
                    ui.label(format!("Final reading: {value}"));
                }
                ui.add_space(6.0);
                if ui.button("Continue").clicked() {
                    dismiss = true;
                }
            });
        });

    if dismiss {
        state.outcome = None;
    }
}
