//! Main UI rendering and coordination

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Alignment,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::app::App;
use super::components::{LogPanel, StatusBar};
use super::core::{Action, EventHandler, EventType, Host};
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::GALLERY_TITLE;
use crate::logger::Logger;

/// Run the component gallery until the user quits
pub async fn run_app(config: &Config, logger: Logger) -> Result<()> {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, logger).with_action_sender(action_tx);

    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    log::info!("Gallery started with {} theme", app.theme.name());
    let res = run_ui(&mut terminal, &mut app, action_rx).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    app.logger.flush();

    res
}

/// Main UI loop
async fn run_ui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut action_rx: UnboundedReceiver<Action>,
) -> Result<()> {
    let mut host = Host::new(app.theme);
    let mut event_handler = EventHandler::new(app.tick_rate);
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| render_ui(f, app, &mut host))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                if app.show_logs {
                    let action = app.handle_global_key(key);
                    app.update(action);
                } else {
                    let dispatch = host.dispatch_key(key);
                    let consumed = dispatch.consumed;
                    app.update(dispatch.action);
                    if !consumed {
                        let action = app.handle_global_key(key);
                        app.update(action);
                    }
                }
                needs_render = true;
            }
            EventType::Mouse(mouse) => {
                if app.mouse_enabled && !app.show_logs {
                    let dispatch = host.dispatch_mouse(mouse);
                    needs_render |= dispatch.consumed;
                    app.update(dispatch.action);
                }
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => {
                host.tick();
                // The spinner is the only frame-driven animation
                needs_render |= app.verifying;
            }
            EventType::Other => {}
        }

        // Actions from background tasks
        while let Ok(action) = action_rx.try_recv() {
            app.update(action);
            needs_render = true;
        }

        if app.should_quit {
            break;
        }
    }

    log::info!("Gallery closed");
    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut Frame, app: &App, host: &mut Host) {
    let areas = LayoutManager::gallery_layout(f.area());

    let header = Paragraph::new(format!("{GALLERY_TITLE} ({} theme)", app.theme.name()))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(header, areas.header);

    host.set_theme(app.theme);
    host.mount(app.mounts(&areas));
    host.render(f.buffer_mut());

    StatusBar::render(f, areas.status, app);

    // Log panel last so it stays on top
    if app.show_logs {
        LogPanel::render(f, f.area(), &app.logger);
    }
}
