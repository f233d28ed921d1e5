pub mod engine;
pub mod protocol;

pub mod challenges;
pub mod chat;
pub mod games;
pub mod lessons;
pub mod profile_store;
pub mod session;
pub mod ticker;
