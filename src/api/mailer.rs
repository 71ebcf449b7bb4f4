//! HTTP mail gateway client for reminder delivery.
//!
//! Reminder emails go out as a JSON POST to a configured gateway endpoint.
//! The gateway owns transport timeouts and delivery; the client imposes no
//! additional retry budget of its own.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Mail gateway connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Endpoint accepting `{from, to, subject, text}` JSON messages.
    pub api_url: String,

    /// Sender address stamped on every reminder.
    pub from: String,

    /// Optional bearer token for the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl MailerConfig {
    /// Configuration module metadata for the interactive setup wizard.
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "mailer".to_string(),
            name: "Mailer".to_string(),
        }
    }

    /// Prompts for gateway settings, pre-filling existing values as defaults.
    pub fn init(config: &Option<MailerConfig>) -> Result<Self> {
        let current = config.clone().unwrap_or_else(|| MailerConfig {
            api_url: String::new(),
            from: String::new(),
            auth_token: None,
        });

        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMailerApiUrl.to_string())
            .with_initial_text(current.api_url)
            .interact_text()?;
        let from: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMailerFrom.to_string())
            .with_initial_text(current.from)
            .interact_text()?;
        let auth_token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMailerToken.to_string())
            .with_initial_text(current.auth_token.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            api_url,
            from,
            auth_token: if auth_token.is_empty() { None } else { Some(auth_token) },
        })
    }
}

/// Outgoing message body in the gateway's wire format.
#[derive(Debug, Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

pub struct Mailer {
    client: Client,
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Sends one message. A non-success gateway status is an error; the
    /// caller decides whether to surface or swallow it.
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<()> {
        let mail = OutgoingMail {
            from: &self.config.from,
            to,
            subject,
            text,
        };

        let mut request = self.client.post(&self.config.api_url).json(&mail);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(msg_error_anyhow!(Message::MailerRejected(response.status().to_string())));
        }
        Ok(())
    }
}
