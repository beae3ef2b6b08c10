pub mod avatar;
pub mod message_list;
pub mod stat_card;
