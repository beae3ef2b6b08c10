pub mod chat;
pub mod friends_sidebar;
pub mod logger;
pub mod login;
pub mod payment_history;
pub mod payment_modal;
pub mod payments;
pub mod sidebar;
