pub mod app_state;
pub mod chat;
pub mod messages;
pub mod payment;
pub mod user;
