use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::message::Message;
use super::app::EcoApp;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut EcoApp) {
    let input_id = egui::Id::new("coach_input_box");

    // ---------- Input bar ----------
    egui::TopBottomPanel::bottom("coach_input").show(ctx, |ui| {
        let mut send_now = false;

        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [ui.available_width() - 60.0, 40.0],
                egui::TextEdit::multiline(&mut app.ui.input_text)
                    .id(input_id)
                    .hint_text("Ask EcoBuddy about nature…")
                    .lock_focus(true),
            );

            // Enter vs Shift+Enter
            if response.has_focus() {
                let (enter, shift) = ui.input(|i| (i.key_pressed(egui::Key::Enter), i.modifiers.shift));
                if enter && !shift {
                    send_now = true;
                }
            }

            if ui.button("Send").clicked() {
                send_now = true;
            }
        });

        if send_now {
            let text = app.ui.input_text.trim().to_string();

            if !text.is_empty() {
                app.ui.rendered_messages.push(Message::User(text.clone()));
                app.ui.pending_replies += 1;
                app.ui.should_auto_scroll = true;
                app.send_command(EngineCommand::AskCoach(text));
            }
            app.ui.input_text.clear();

            // Keep cursor focused
            ui.memory_mut(|m| m.request_focus(input_id));
        }
    });

    // ---------- Transcript ----------
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("🤖 EcoBuddy");
        ui.separator();

        egui::ScrollArea::vertical()
            .stick_to_bottom(app.ui.should_auto_scroll)
            .show(ui, |ui| {
                for msg in &app.ui.rendered_messages {
                    app.draw_message(ui, msg);
                }

                if app.ui.pending_replies > 0 {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("EcoBuddy is thinking…");
                    });
                }
            });
    });
}
