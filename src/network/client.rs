use tokio::sync::mpsc;

use crate::common::{ChatReply, TransportCommand, TransportError, TransportEvent};
use crate::config::ApiConfig;

use super::api::ChatApiClient;

/// Task nền nhận lệnh từ UI và gọi chat API.
///
/// Lệnh được xử lý tuần tự nên mỗi lúc chỉ có tối đa một request đang chạy.
pub struct ChatTransport {
    event_sender: mpsc::Sender<TransportEvent>,
    command_receiver: mpsc::Receiver<TransportCommand>,
    config: ApiConfig,
}

impl ChatTransport {
    pub fn new(
        event_sender: mpsc::Sender<TransportEvent>,
        command_receiver: mpsc::Receiver<TransportCommand>,
        config: ApiConfig,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            config,
        }
    }

    pub async fn run(mut self) {
        let api = match ChatApiClient::new(&self.config) {
            Ok(api) => {
                log::info!("Chat transport started, endpoint {}", api.endpoint());
                Some(api)
            }
            Err(err) => {
                log::error!("Chat transport has no usable endpoint: {err}");
                None
            }
        };

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command, api.as_ref()).await;
        }

        log::info!("Command channel closed; chat transport stopping");
    }

    async fn handle_command(&mut self, command: TransportCommand, api: Option<&ChatApiClient>) {
        match command {
            TransportCommand::SendMessage(text) => {
                let outcome = self.send(&text, api).await;
                if let Err(err) = &outcome {
                    log::warn!("Chat request failed: {err}");
                }

                if let Err(err) = self
                    .event_sender
                    .send(TransportEvent::Settled(outcome))
                    .await
                {
                    log::warn!("Failed to notify UI about chat reply: {err}");
                }
            }
        }
    }

    async fn send(
        &self,
        text: &str,
        api: Option<&ChatApiClient>,
    ) -> Result<ChatReply, TransportError> {
        match api {
            Some(api) => api.send_user_message(text).await,
            None => Err(TransportError::InvalidEndpoint(format!(
                "{}{}",
                self.config.base_url, self.config.chat_path
            ))),
        }
    }
}
