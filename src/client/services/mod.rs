pub mod fixtures;
pub mod payment_service;
