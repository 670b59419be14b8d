use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::common::{ChatReply, EventRecord, TransportError};
use crate::config::ApiConfig;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct ChatPayload {
    response: Option<String>,
    events: Option<Vec<EventRecord>>,
    error: Option<String>,
}

pub fn build_endpoint(config: &ApiConfig) -> Result<Url, TransportError> {
    Url::parse(&config.base_url)
        .and_then(|base| base.join(&config.chat_path))
        .map_err(|err| {
            TransportError::InvalidEndpoint(format!(
                "{}{}: {err}",
                config.base_url, config.chat_path
            ))
        })
}

/// Body được đọc như JSON bất kể HTTP status; `error` luôn thắng.
fn decode_payload(status: StatusCode, body: &[u8]) -> Result<ChatReply, TransportError> {
    let payload: ChatPayload = serde_json::from_slice(body)
        .map_err(|source| TransportError::Decode { status, source })?;

    if let Some(error) = payload.error {
        return Err(TransportError::Server(error));
    }
    if !status.is_success() {
        return Err(TransportError::Server(format!("HTTP {status}")));
    }

    let Some(response) = payload.response else {
        return Err(TransportError::MissingResponse(status));
    };

    Ok(ChatReply {
        response,
        events: payload.events.unwrap_or_default(),
    })
}

pub struct ChatApiClient {
    http: Client,
    endpoint: Url,
}

impl ChatApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let endpoint = build_endpoint(config)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn send_user_message(&self, text: &str) -> Result<ChatReply, TransportError> {
        log::debug!("POST {} ({} chars)", self.endpoint, text.chars().count());

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ChatRequest { message: text })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let reply = decode_payload(status, &body)?;

        log::info!(
            "Chat reply received ({} chars, {} events)",
            reply.response.chars().count(),
            reply.events.len()
        );
        Ok(reply)
    }
}
