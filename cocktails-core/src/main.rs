//! src/main.rs
//! Cocktail catalog browser: terminal setup, event loop, shutdown.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event as TerminalEvent, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::{
    signal,
    sync::{Notify, mpsc},
};
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use cocktails_core::{
    AppError, AppState, Logger,
    catalog::HttpCatalogSource,
    config::Config,
    controller::{
        Action, ActionDispatcher, DispatcherStats, EventLoop, KeyMap, MetricsSnap, TaskResult,
    },
    model::{FavoritesStore, FileStorage},
    view::ui::{UIRenderer, list_viewport_rows},
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app = App::new()
        .await
        .context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    event_loop: EventLoop,
    action_dispatcher: ActionDispatcher,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
    _log_guard: WorkerGuard,
}

impl App {
    async fn new() -> Result<Self> {
        let (config, config_err) = match Config::load().await {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };

        let log_guard = Logger::init_tracing(&config.log_dir(), &config.logging.level)
            .context("Failed to initialize logging")?;
        info!("Starting cocktail browser");
        if let Some(e) = config_err {
            warn!("Failed to load config, using defaults: {}", e);
        }

        let favorites_path = config
            .favorites_path()
            .context("Failed to resolve favorites location")?;
        let favorites = FavoritesStore::hydrate(Box::new(FileStorage::new(favorites_path)));

        let source = HttpCatalogSource::from_config(&config.catalog)
            .context("Failed to build catalog client")?;

        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();
        let state = AppState::new(Arc::new(config), Arc::new(source), favorites, task_tx);

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        info!("Application initialized successfully");

        Ok(Self {
            terminal,
            state,
            event_loop: EventLoop::new(task_rx),
            action_dispatcher: ActionDispatcher::new(),
            ui_renderer: UIRenderer::new(),
            shutdown: Arc::new(Notify::new()),
            _log_guard: log_guard,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();

        let size = self.terminal.size().context("Failed to query terminal size")?;
        self.update_list_height(size.width, size.height);
        self.state.start();

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(action) = self.process_terminal_event(event) {
                                if !self.action_dispatcher.handle(&mut self.state, action) {
                                    info!("Quit requested");
                                    break;
                                }
                            }
                        }
                        Some(Err(e)) => warn!("Terminal event error: {}", e),
                        None => {
                            info!("Terminal event stream closed");
                            break;
                        }
                    }
                }

                task = self.event_loop.next_task() => {
                    self.action_dispatcher.handle_task(&mut self.state, task);
                }
            }
        }

        self.log_final_metrics();
        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn process_terminal_event(&mut self, event: TerminalEvent) -> Option<Action> {
        match event {
            TerminalEvent::Key(key) => {
                let action = KeyMap::map(key, ActionDispatcher::key_context(&self.state));
                debug!(?key, ?action, "Key event");
                action
            }
            TerminalEvent::Resize(width, height) => {
                self.update_list_height(width, height);
                Some(Action::Resize(width, height))
            }
            _ => None,
        }
    }

    fn update_list_height(&mut self, width: u16, height: u16) {
        let rows = list_viewport_rows(Rect::new(0, 0, width, height));
        let len = self.state.visible_len();
        self.state.ui.set_list_height(rows, len);
        self.state.ui.request_redraw();
        debug!(width, height, rows, "List viewport resized");
    }

    fn render(&mut self) -> Result<()> {
        if !self.state.ui.needs_redraw() {
            return Ok(());
        }

        let state = &self.state;
        let renderer = &mut self.ui_renderer;
        self.terminal
            .draw(|frame: &mut Frame<'_>| renderer.render(frame, state))
            .context("Failed to draw terminal")?;

        self.state.ui.clear_redraw();
        Ok(())
    }

    fn log_final_metrics(&self) {
        let loop_metrics: MetricsSnap = self.event_loop.snapshot_metrics();
        let dispatcher_stats: DispatcherStats = self.action_dispatcher.get_stats();
        let render_stats = self.ui_renderer.stats();

        info!("Final metrics:");
        info!(
            "  Tasks processed: {} ({} failed)",
            loop_metrics.tasks, loop_metrics.failed_tasks
        );
        info!("  Actions processed: {}", dispatcher_stats.total_actions);
        info!("  Pages requested by dispatcher: {}", dispatcher_stats.pages_requested);
        info!(
            "  Frames: {} ({} slow, {:.1} fps while drawing)",
            render_stats.frames,
            render_stats.slow,
            render_stats.fps()
        );
        info!(
            "  Cocktails loaded: {}, favorites: {}",
            self.state.loader.items().len(),
            self.state.favorites.len()
        );
        info!("  Uptime: {:.1}s", loop_metrics.uptime.as_secs_f64());
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm = match signal(SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("Failed to create SIGTERM handler: {}", e);
                        return;
                    }
                };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal, AppError> {
    enable_raw_mode().map_err(|e| AppError::Terminal(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::Terminal(format!("failed to enter alternate screen: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)
        .map_err(|e| AppError::Terminal(format!("failed to create terminal: {e}")))?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
