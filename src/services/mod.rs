pub mod chat;
pub mod intake;
pub mod lead_service;
pub mod mailer;
pub mod templates;
