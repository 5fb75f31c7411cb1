//! Outbound notification adapters
//!
//! reqwest-based implementations of the mailer and webhook ports.

pub mod mail_relay;
pub mod webhook;

pub use mail_relay::HttpMailRelay;
pub use webhook::HttpWebhookSink;
