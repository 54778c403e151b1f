//! Event handling for the TUI.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tracing::info;

use portfolio_core::{ContactTransport, Showcase};
use portfolio_models::SectionId;

use super::app::{App, Focus};
use super::ui;
use crate::error::{CliError, Result};

/// Time between frames.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Initialize the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Options for a TUI session.
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    pub seed: u64,
    pub all_projects: bool,
}

/// Run the TUI until the user quits.
pub fn run(transport: Arc<dyn ContactTransport>, options: TuiOptions) -> Result<()> {
    // Deliveries run here while the event loop stays on this thread.
    let runtime = Runtime::new()?;

    let mut app = App::new(
        transport,
        runtime.handle().clone(),
        Showcase::new(options.seed),
    );
    if options.all_projects {
        app.toggle_projects();
    }

    let mut terminal = setup_terminal()?;
    info!(seed = options.seed, "terminal viewer started");

    let result = run_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    info!("terminal viewer stopped");
    result
}

/// Main event loop.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| CliError::Terminal(e.to_string()))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            app.on_tick(last_tick);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Applies one key press.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.focus {
        Focus::Form(_) => match key.code {
            KeyCode::Esc => app.leave_form(),
            KeyCode::Tab | KeyCode::Down => app.next_field(),
            KeyCode::BackTab | KeyCode::Up => app.prev_field(),
            KeyCode::Enter => app.submit_form(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Char(c) => app.enter_char(c),
            _ => {}
        },
        Focus::Page => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
            KeyCode::PageUp => app.scroll_page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page_down(),
            KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
            KeyCode::Char('p') => app.toggle_projects(),
            KeyCode::Char('c') | KeyCode::Enter => app.focus_form(),
            KeyCode::Char(c) => {
                if let Some(section) = section_for_digit(c) {
                    app.jump_to(section);
                }
            }
            _ => {}
        },
    }
}

/// `1`..`6` jump to the sections in page order.
fn section_for_digit(c: char) -> Option<SectionId> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    SectionId::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::contact::FormField;
    use portfolio_core::SimulatedTransport;
    use tokio::runtime::Handle;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn make_app() -> App {
        let mut app = App::new(
            Arc::new(SimulatedTransport::new(Duration::ZERO)),
            Handle::current(),
            Showcase::with_particles(4, 1),
        );
        app.viewport_height = 12;
        app
    }

    #[test]
    fn test_section_for_digit() {
        assert_eq!(section_for_digit('1'), Some(SectionId::Home));
        assert_eq!(section_for_digit('6'), Some(SectionId::Contact));
        assert_eq!(section_for_digit('0'), None);
        assert_eq!(section_for_digit('7'), None);
        assert_eq!(section_for_digit('x'), None);
    }

    #[tokio::test]
    async fn test_page_keys() {
        let mut app = make_app();

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.current_section(), SectionId::Projects);

        press(&mut app, KeyCode::Char('p'));
        assert!(app.projects.is_expanded());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_form_keys() {
        let mut app = make_app();

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.focus, Focus::Form(FormField::Name));

        // 'q' types instead of quitting while editing
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.field(FormField::Name), "q");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Form(FormField::Email));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Page);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = make_app();
        app.focus_form();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
