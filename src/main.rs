use anyhow::Result;
use clap::Parser;

mod app;
mod backend;
mod config;
mod handler;
mod safety;
mod transcript;
mod tui;
mod ui;

use app::App;
use backend::ChatClient;
use config::Config;

#[derive(Parser)]
#[command(name = "consuelo")]
#[command(about = "Terminal client for a supportive mental-health chat backend")]
struct Cli {
    /// Backend chat endpoint URL (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Persist the given endpoint to the config file
    #[arg(long, requires = "endpoint")]
    save: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|_| Config::new());
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = Some(endpoint);
        if cli.save {
            config.save()?;
        }
    }

    let mut app = App::new(ChatClient::new(config.endpoint()));

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;

    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut events = tui::EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event).await?,
            None => break,
        }
    }

    Ok(())
}
