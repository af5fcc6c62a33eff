use std::io::stdout;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use nextprompt::domain::Prompt;
use nextprompt::infrastructure::{AppConfig, CliArgs, PromptApiClient, StorageManager};
use nextprompt::presentation::{App, PromptScreenStyle};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;

    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn create_app(config: &AppConfig) -> Result<App> {
    let prompt_source = Arc::new(PromptApiClient::with_endpoint(
        config.prompt.endpoint.clone(),
        config.prompt.timeout(),
    )?);
    let style = PromptScreenStyle::from_config(&config.ui);

    Ok(App::new(
        prompt_source,
        style,
        Prompt::new(config.prompt.default_text.clone()),
    ))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(
        version = nextprompt::VERSION,
        endpoint = %config.prompt.endpoint,
        "Starting nextprompt"
    );

    let app = create_app(&config)?;

    let mut terminal = ratatui::init();

    if config.mouse
        && let Err(e) = execute!(stdout(), EnableMouseCapture)
    {
        warn!(error = %e, "Failed to enable mouse capture");
    }

    let result = app.run(&mut terminal).await;

    if config.mouse
        && let Err(e) = execute!(stdout(), DisableMouseCapture)
    {
        warn!(error = %e, "Failed to disable mouse capture");
    }
    ratatui::restore();

    result
}
