//! API client modules for external service integrations.
//!
//! The only external collaborator taskdo talks to over the network is the
//! mail gateway used for reminder delivery.

pub mod mailer;

pub use mailer::MailerConfig;
