mod action;
mod api;
mod app;
mod catalog;
mod config;
mod error;
mod event;
mod feed;
mod notify;
mod resolve;
mod trigger;
mod tui;
mod types;
mod ui;

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::api::RemoteCatalog;
use crate::app::App;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::event::Event;
use crate::tui::EventHandler;

#[derive(Parser, Debug)]
#[command(
    name = "squanch",
    version,
    about = "Browse Rick and Morty episodes and their casts from the terminal"
)]
struct Cli {
    /// Catalog API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    // Flag wins over environment wins over config file.
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("SQUANCH_CATALOG_URL").ok())
        .unwrap_or(config.catalog.base_url);

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let catalog: Arc<dyn Catalog> = Arc::new(RemoteCatalog::new(base_url));

    let result = run(catalog, config.scroll.margin_rows).await;

    // Restore terminal
    tui::restore()?;

    result
}

async fn run(
    catalog: Arc<dyn Catalog>,
    margin_rows: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = tui::init()?;

    // Create action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut app = App::new(catalog, margin_rows, action_tx.clone());

    // The list viewport height is known as soon as the terminal is.
    action_tx.send(Action::ViewportResized(terminal.size()?.height))?;

    let tick_rate = Duration::from_millis(250);
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(tick_rate, render_rate);

    // Main loop
    loop {
        tokio::select! {
            Some(event) = events.next() => {
                if event.is_quit() {
                    break;
                }

                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
