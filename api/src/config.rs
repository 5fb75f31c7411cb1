use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Automation endpoint receiving appointment lifecycle events
    pub webhook_url: Option<String>,
    /// HTTP relay that renders and delivers patient emails
    pub mail_relay_url: Option<String>,
    /// Base URL of the patient-facing frontend (used in email links)
    pub frontend_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            webhook_url: env::var("WEBHOOK_URL").ok(),
            mail_relay_url: env::var("MAIL_RELAY_URL").ok(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3002".to_string()),
        }
    }
}
