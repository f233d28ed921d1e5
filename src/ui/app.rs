use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use eframe::egui;
use egui::Layout;
use tracing::{info, warn};

use crate::engine::challenges::{PhotoProof, SpinReward};
use crate::engine::chat::GREETING;
use crate::engine::engine::Engine;
use crate::engine::profile_store::{default_profile_path, FileStore, ProfileStore};
use crate::engine::protocol::{BoardSnapshot, EngineCommand, EngineResponse};
use crate::engine::session::Resolution;
use crate::model::catalog::{LessonCategory, LessonRecord};
use crate::model::event_result::SessionOutcome;
use crate::model::game_state::SessionView;
use crate::model::message::Message;
use crate::model::profile::{Avatar, ProfileSnapshot};
use crate::ui::center_panel::draw_center_panel;
use crate::ui::game_window::draw_game_window;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::right_panel::draw_right_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io::save_settings;
use crate::ui::widgets;

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Games,
    Lessons,
    Challenges,
    Leaderboard,
}

/* =========================
   UI State
   ========================= */

/// Proof form for the challenge currently being submitted.
#[derive(Default)]
pub struct ChallengeDraft {
    pub id: Option<String>,
    pub description: String,
    pub photo: Option<PhotoProof>,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct UiState {
    pub screen: Screen,
    pub lesson_category: Option<LessonCategory>,

    pub input_text: String,
    pub rendered_messages: Vec<Message>,
    pub should_auto_scroll: bool,
    pub pending_replies: usize,

    pub profile: ProfileSnapshot,
    pub editing_profile: bool,
    pub name_draft: String,
    pub avatar_draft: Avatar,

    pub lessons: Vec<LessonRecord>,
    pub board: Option<BoardSnapshot>,
    pub last_spin: Option<SpinReward>,
    pub draft: ChallengeDraft,

    pub session: Option<SessionView>,
    pub last_resolution: Option<Resolution>,
    pub outcome: Option<SessionOutcome>,

    pub notice: Option<String>,
    pub settings: UiSettings,
    pub show_settings: bool,
    /// Edited since the last save
    pub settings_dirty: bool,
}

/* =========================
   App
   ========================= */

pub struct EcoApp {
    pub ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
    engine: Option<JoinHandle<()>>,
}

impl EcoApp {
    pub fn new(settings: UiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let profile = ProfileStore::new(Box::new(FileStore::open(default_profile_path())));
        let loopback = cmd_tx.clone();
        let config = settings.engine_config();

        let engine = std::thread::Builder::new()
            .name("engine".into())
            .spawn(move || {
                let mut engine = Engine::new(cmd_rx, resp_tx, loopback, profile, config);
                engine.run();
            });

        let engine = match engine {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "could not start engine thread");
                None
            }
        };

        Self {
            ui: UiState {
                rendered_messages: vec![Message::Coach(GREETING.to_string())],
                settings,
                ..Default::default()
            },
            cmd_tx,
            resp_rx,
            engine,
        }
    }

    pub fn send_command(&self, cmd: EngineCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            warn!("engine is gone, command dropped");
        }
    }

    pub fn draw_message(&self, ui: &mut egui::Ui, msg: &Message) {
        let bg = self.ui.settings.color(msg.speaker_key());
        let right = matches!(msg, Message::User(_));

        ui.add_space(6.0);

        if right {
            ui.with_layout(Layout::right_to_left(egui::Align::TOP), |ui| {
                widgets::bubble(ui, bg, msg.text());
            });
        } else {
            widgets::bubble(ui, bg, msg.text());
        }
    }

    fn drain_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::SessionStarted(view) => {
                    self.ui.outcome = None;
                    self.ui.last_resolution = None;
                    self.ui.session = Some(view);
                }
                EngineResponse::SessionUpdated { view, last } => {
                    let current = self.ui.session.as_ref().map(|s| s.session_id);
                    if current == Some(view.session_id) {
                        if last.is_some() {
                            self.ui.last_resolution = last;
                        }
                        self.ui.session = Some(view);
                    }
                }
                EngineResponse::SessionFinished { session_id, outcome } => {
                    if self.ui.session.as_ref().is_some_and(|s| s.session_id == session_id) {
                        self.ui.session = None;
                    }
                    self.ui.notice = Some(outcome.headline());
                    self.ui.outcome = Some(outcome);
                }
                EngineResponse::CoachReply(text) => {
                    self.ui.pending_replies = self.ui.pending_replies.saturating_sub(1);
                    self.ui.rendered_messages.push(Message::Coach(text));
                    self.ui.should_auto_scroll = true;
                }
                EngineResponse::ProfileChanged(profile) => {
                    self.ui.profile = profile;
                }
                EngineResponse::LessonsChanged(lessons) => {
                    self.ui.lessons = lessons;
                }
                EngineResponse::ChallengesChanged(board) => {
                    self.ui.board = Some(board);
                }
                EngineResponse::SpinResult(reward) => {
                    self.ui.last_spin = Some(reward);
                    self.ui.notice = Some(format!("You won {}!", reward.label()));
                }
                EngineResponse::Notice(text) => {
                    self.ui.notice = Some(text);
                }
            }
        }
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌍 EcoLearn");
                ui.separator();
                ui.label(format!("{} {}", self.ui.profile.avatar.glyph(), self.ui.profile.display_name));
                ui.strong(format!("⭐ {} pts", self.ui.profile.total_points));

                if let Some(notice) = &self.ui.notice {
                    ui.separator();
                    ui.label(notice);
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.ui.show_settings = !self.ui.show_settings;
                    }
                });
            });
        });
    }

    fn draw_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.ui.show_settings;
        let mut settled = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("UI Scale");
                let scale = ui.add(egui::Slider::new(&mut self.ui.settings.ui_scale, 0.75..=2.0));
                self.ui.settings_dirty |= scale.changed();
                settled |= scale.drag_stopped() || scale.lost_focus();

                ui.label("Coach reply delay (ms)");
                let delay = ui.add(egui::Slider::new(
                    &mut self.ui.settings.chat_reply_delay_ms,
                    0..=3000,
                ));
                self.ui.settings_dirty |= delay.changed();
                settled |= delay.drag_stopped() || delay.lost_focus();

                ui.separator();
                ui.label("Chat colours");
                for key in ["User", "Coach", "System"] {
                    let mut color = self.ui.settings.color(key);
                    ui.horizontal(|ui| {
                        // the picker reports a change on every frame of a drag
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            self.ui.settings.set_color(key, color);
                            self.ui.settings_dirty = true;
                        }
                        ui.label(key);
                    });
                }

                ui.separator();
                ui.small("Timing changes apply on next launch.");
            });

        self.ui.show_settings = open;
        if should_persist(self.ui.settings_dirty, settled, open) {
            save_settings(&self.ui.settings);
            self.ui.settings_dirty = false;
        }
    }
}

/// Settings go to disk once an edit settles or the window goes away.
fn should_persist(dirty: bool, settled: bool, open: bool) -> bool {
    dirty && (settled || !open)
}

/* =========================
   egui App
   ========================= */

impl eframe::App for EcoApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        self.drain_responses();

        self.draw_top_bar(ctx);
        draw_left_panel(ctx, &mut self.ui, &self.cmd_tx);
        draw_right_panel(ctx, &mut self.ui, &self.cmd_tx);
        draw_center_panel(ctx, self);
        draw_game_window(ctx, &mut self.ui, &self.cmd_tx);
        self.draw_settings_window(ctx);

        self.ui.should_auto_scroll = false;

        // Engine responses arrive off the UI thread.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl Drop for EcoApp {
    fn drop(&mut self) {
        if self.ui.settings_dirty {
            save_settings(&self.ui.settings);
        }
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(handle) = self.engine.take() {
            let _ = handle.join();
        }
        info!("app closed");
    }
}
