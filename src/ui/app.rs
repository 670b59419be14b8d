use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{TransportCommand, TransportError, TransportEvent};

use super::components::{about, chat_area, faq_pills, input_bar, welcome};
use super::state::{AppState, Screen};

/// Context duy nhất của widget: giữ state và hai đầu channel tới transport.
pub struct ChatWidget {
    state: AppState,
    window_title: String,
    command_sender: mpsc::Sender<TransportCommand>,
    event_receiver: mpsc::Receiver<TransportEvent>,
}

impl ChatWidget {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        window_title: String,
        command_sender: mpsc::Sender<TransportCommand>,
        event_receiver: mpsc::Receiver<TransportEvent>,
    ) -> Self {
        Self::with_channels(window_title, command_sender, event_receiver)
    }

    fn with_channels(
        window_title: String,
        command_sender: mpsc::Sender<TransportCommand>,
        event_receiver: mpsc::Receiver<TransportEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            window_title,
            command_sender,
            event_receiver,
        }
    }

    fn handle_transport_events(&mut self) {
        while let Ok(TransportEvent::Settled(outcome)) = self.event_receiver.try_recv() {
            self.state.settle_send(outcome);
        }
    }

    fn send(&mut self, text: &str, display_text: Option<&str>) {
        let Some(message) = self.state.begin_send(text, display_text) else {
            return;
        };

        if let Err(err) = self
            .command_sender
            .try_send(TransportCommand::SendMessage(message))
        {
            log::warn!("Failed to send command to transport: {err}");
            self.state.settle_send(Err(TransportError::Disconnected));
        }
    }

    fn render_chat(&mut self, ctx: &egui::Context) {
        let enabled = self.state.is_input_enabled();
        let mut outgoing: Option<(String, Option<&'static str>)> = None;

        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.window_title.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Inicio").clicked() {
                        self.state.back_to_welcome();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            if self.state.faq_visible {
                if let Some(faq) = faq_pills::render(ui, enabled) {
                    self.state.faq_visible = false;
                    outgoing = Some((faq.query.to_string(), Some(faq.text)));
                }
                ui.add_space(4.0);
            }
            if let Some(text) = input_bar::render(ui, &mut self.state.input_text, enabled) {
                outgoing = Some((text, None));
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let actions = chat_area::render(ui, &mut self.state);
            if let Some(query) = actions.card_query {
                outgoing = Some((query, None));
            }
        });

        if let Some((text, display_text)) = outgoing {
            self.send(&text, display_text);
        }
    }
}

impl eframe::App for ChatWidget {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_transport_events();

        match self.state.screen {
            Screen::Welcome => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let actions = welcome::render(ui, &self.window_title);
                    if actions.start {
                        self.state.start_chat();
                    }
                    if actions.about {
                        self.state.show_about();
                    }
                });
            }
            Screen::About => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if about::render(ui) {
                        self.state.back_to_welcome();
                    }
                });
            }
            Screen::Chat => self.render_chat(ctx),
        }

        // Reply đến qua channel, không phải qua input nên phải tự poll
        if self.state.is_typing() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
