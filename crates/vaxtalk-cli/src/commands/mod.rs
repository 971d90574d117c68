pub mod chat;
pub mod config;
pub mod personas;
pub mod responder;
pub mod score;
