pub mod catalog;
pub mod event_result;
pub mod game_state;
pub mod leaderboard;
pub mod message;
pub mod profile;
