use std::fmt;

use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Posts new-feedback notices to a Telegram chat through the Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramNotifier {
    /// Returns `None` unless both the bot token and the chat id are set and
    /// non-empty. A missing credential disables notification; it is not an error.
    pub fn from_credentials(
        api_base: &str,
        token: Option<String>,
        chat_id: Option<String>,
    ) -> Option<Self> {
        let token = token.filter(|t| !t.is_empty())?;
        let chat_id = chat_id.filter(|c| !c.is_empty())?;

        Some(Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
            chat_id,
        })
    }

    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }

    /// Single attempt, no retry. A non-2xx reply is an error.
    pub async fn send(&self, text: &str) -> Result<()> {
        self.client
            .post(self.send_message_url())
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            // The URL embeds the bot token; keep it out of logs.
            .map_err(|e| e.without_url())?;

        Ok(())
    }
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("api_base", &self.api_base)
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

/// Plain-text notice for a freshly stored feedback.
pub fn compose_message(
    app_id: &str,
    version: Option<&str>,
    contact: Option<&str>,
    content: &str,
) -> String {
    let app_line = match version {
        Some(version) => format!("App: {} ({})", app_id, version),
        None => format!("App: {}", app_id),
    };

    format!(
        "New Feedback Received!\n{}\nContact: {}\nContent:\n{}",
        app_line,
        contact.unwrap_or("N/A"),
        content.trim_end(),
    )
}
