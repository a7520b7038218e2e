use aura::adapters::{HttpBackend, OfflineBackend, SystemDialer};
use aura::app::{App, AppMessage};
use aura::cli::{parse_args, run_cli_command};
use aura::startup::{init_logging, AppConfig, BackendMode};
use aura::terminal::{setup_panic_hook, TerminalManager};
use aura::traits::Backend;
use aura::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Animation tick, roughly 60 frames per second
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    // Informational flags exit before the terminal is touched
    let overrides = match run_cli_command(parse_args(std::env::args())) {
        Ok(overrides) => overrides,
        Err(code) => std::process::exit(code),
    };

    let config = AppConfig::from_env().apply_cli(&overrides);
    let log_path = init_logging(&config)?;
    for warning in &config.warnings {
        warn!("{}", warning);
    }
    info!(version = aura::cli::VERSION, log = ?log_path, "starting aura");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let backend: Arc<dyn Backend> = match config.backend_mode() {
        BackendMode::Http { base_url } => {
            info!(%base_url, "using HTTP backend");
            Arc::new(HttpBackend::new(base_url)?.with_token(config.api_token.clone()))
        }
        BackendMode::Offline => {
            info!(latency_ms = config.mock_latency.as_millis() as u64, "using offline backend");
            Arc::new(OfflineBackend::new(config.mock_latency))
        }
    };

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(backend, Arc::new(SystemDialer), &config);
    if let Ok(size) = term_manager.terminal().size() {
        app.update_terminal_dimensions(size.width, size.height);
    }

    let result = run_app(term_manager.terminal(), &mut app).await;

    app.shutdown();
    term_manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "app exited with error");
    }
    info!("aura stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "terminal event error");
                    }
                    // Input closed; nothing more can arrive
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
