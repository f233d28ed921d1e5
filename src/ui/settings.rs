use std::collections::HashMap;
use std::time::Duration;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::engine::engine::EngineConfig;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Speaker → color mapping for chat bubbles
    pub speaker_colors: HashMap<String, [u8; 4]>,

    /// Pause before the coach answers.
    pub chat_reply_delay_ms: u64,

    pub tick_interval_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut speaker_colors = HashMap::new();

        speaker_colors.insert("User".into(), [34, 110, 70, 255]);
        speaker_colors.insert("Coach".into(), [30, 90, 120, 255]);
        speaker_colors.insert("System".into(), [80, 80, 80, 255]);

        Self {
            ui_scale: 1.0,
            speaker_colors,
            chat_reply_delay_ms: 1000,
            tick_interval_ms: 1000,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.speaker_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::DARK_GRAY)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.speaker_colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }

    /// Engine timings. A zero tick interval would spin, so it is floored.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            tick_interval: Duration::from_millis(self.tick_interval_ms.max(50)),
            chat_reply_delay: Duration::from_millis(self.chat_reply_delay_ms),
        }
    }
}
