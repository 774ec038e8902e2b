use storylist::app::{App, AppMessage};
use storylist::cli::{parse_args, run_cli_command};
use storylist::config::AppConfig;
use storylist::logging;
use storylist::terminal::{setup_panic_hook, TerminalManager};
use storylist::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        return result;
    }

    color_eyre::install()?;

    let config = AppConfig::from_env();
    // A missing log file should not stop the TUI from starting
    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Restore the terminal before the panic message prints
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(&config);

    let result = runtime.block_on(async {
        app.activate();
        run_app(term_manager.terminal(), &mut app).await
    });

    // Any fetch still in flight must not touch the app after this point
    app.teardown();
    term_manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Event loop failed: {}", e);
    }
    tracing::info!("storylist exiting");
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
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse_event(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    // Input closed
                    None => app.quit(),
                }
            }

            // Fetch results
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
