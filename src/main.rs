mod common;
mod config;
mod network;
mod render;
mod ui;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use eframe::egui;
use network::{ChatApiClient, ChatTransport};
use tokio::sync::mpsc;
use ui::ChatWidget;
use ui::state::AppState;

use config::AppConfig;

#[derive(Parser)]
#[command(
    name = "event_chat_client",
    version,
    about = "Desktop chat client for the city events assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the chat API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Write the effective config to --config and exit
    #[arg(long)]
    write_config: bool,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Send one message without UI and print the transcript
    Ask {
        message: String,
        /// Print the transcript as HTML instead of plain text
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(base_url) = cli.base_url {
        app_config.api.base_url = base_url;
    }

    if cli.write_config {
        match config::save_config(&cli.config, &app_config) {
            Ok(()) => log::info!("Wrote config to {}", cli.config),
            Err(err) => log::error!("Failed to write config {}: {err}", cli.config),
        }
        return Ok(());
    }

    match cli.mode {
        Some(Mode::Ask { message, html }) => {
            run_headless(&app_config, &message, html).await;
            Ok(())
        }
        None => run_gui(app_config).await,
    }
}

async fn run_headless(app_config: &AppConfig, message: &str, html: bool) {
    let mut state = AppState::new();
    state.start_chat();

    let Some(text) = state.begin_send(message, None) else {
        log::warn!("Nothing to send: message is empty");
        return;
    };

    let outcome = match ChatApiClient::new(&app_config.api) {
        Ok(api) => api.send_user_message(&text).await,
        Err(err) => Err(err),
    };
    state.settle_send(outcome);

    let output = if html {
        render::transcript_html(&state.timeline)
    } else {
        render::transcript_plain(&state.timeline)
    };
    println!("{output}");
}

async fn run_gui(app_config: AppConfig) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Transport
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    // Transport -> UI
    let (event_tx, event_rx) = mpsc::channel(16);

    // 2. Khởi chạy Transport Task (Chạy ngầm)
    let api_config = app_config.api.clone();
    tokio::spawn(async move {
        ChatTransport::new(event_tx, cmd_rx, api_config).run().await;
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let window_title = app_config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title.clone())
            .with_inner_size([760.0, 680.0]),
        ..Default::default()
    };
    let app_name = window_title.clone();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatWidget should only be initialized once");

            log::info!(
                "Client started against {}{}",
                app_config.api.base_url,
                app_config.api.chat_path
            );

            Ok(Box::new(ChatWidget::new(
                cc,
                window_title,
                cmd_tx,
                event_receiver,
            )))
        }),
    )
}
