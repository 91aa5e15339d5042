//! # exam-master
//!
//! A terminal browser for study questions stored as
//! `<root>/<subject>/<unit>/{Short,Long}.json`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_master::{Browser, BrowserError};
//!
//! fn main() -> Result<(), BrowserError> {
//!     // Browse the questions under ./data
//!     let browser = Browser::open("data");
//!
//!     // Run the browser in the terminal
//!     browser.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod logging;
mod models;
pub mod terminal;
pub mod ui;

use std::io;
use std::path::PathBuf;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use thiserror::Error;
use tracing::info;

pub use app::{App, Focus, NAV_COLUMNS};
pub use data::{ContentStore, DEFAULT_DATA_DIR, LoadError};
pub use models::{Answer, AnswerPart, NO_ANSWER, Question, QuestionType, Selection};

/// Error type for browser sessions.
///
/// Content problems never end a session; only a broken terminal does.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A browsing session that can be run in the terminal.
pub struct Browser {
    app: App,
}

impl Browser {
    pub fn new(store: ContentStore) -> Self {
        Self {
            app: App::new(store),
        }
    }

    /// Browse the content tree rooted at `data_dir`.
    pub fn open<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self::new(ContentStore::new(data_dir))
    }

    /// Run the browser in the terminal.
    ///
    /// This will take over the terminal and return when the user quits.
    pub fn run(mut self) -> Result<(), BrowserError> {
        info!(root = %self.app.store().root().display(), "starting browser");
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::Tui, app: &mut App) -> Result<(), BrowserError> {
    app.refresh();
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        if handle_event(app, screen, event::read()?) {
            break;
        }
    }

    Ok(())
}

/// Apply one input event to `app`, then re-read the content for the new
/// selection and bound the answer scroll to what fits on `screen`, the area
/// the last frame was drawn in.
///
/// Returns true if the browser should exit.
pub fn handle_event(app: &mut App, screen: Rect, event: Event) -> bool {
    let quit = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, screen, mouse);
            false
        }
        _ => false,
    };

    if !quit {
        app.refresh();
        let limit = ui::scroll_limit(screen, app);
        app.clamp_answer_scroll(limit);
    }
    quit
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Right | KeyCode::Char('l') => app.move_question(1),
        KeyCode::Left | KeyCode::Char('h') => app.move_question(-1),
        KeyCode::Home => app.select_index(0),
        KeyCode::End => app.select_last(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_mode(),
        KeyCode::PageDown => app.scroll_answer_down(),
        KeyCode::PageUp => app.scroll_answer_up(),
        _ => {}
    }
    false
}

fn handle_mouse(app: &mut App, screen: Rect, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = ui::question_at(screen, app, mouse.column, mouse.row) {
                app.set_focus(Focus::Questions);
                app.select_index(index);
            }
        }
        MouseEventKind::ScrollDown => app.scroll_answer_down(),
        MouseEventKind::ScrollUp => app.scroll_answer_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_with_units() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        for unit in ["Algebra", "Geometry"] {
            let path = dir.path().join("Math").join(unit);
            fs::create_dir_all(&path).unwrap();
            fs::write(
                path.join("Short.json"),
                format!(r#"[{{"q":"{unit} 1"}},{{"q":"{unit} 2"}}]"#),
            )
            .unwrap();
        }
        let mut app = App::new(ContentStore::new(dir.path()));
        app.refresh();
        (dir, app)
    }

    #[test]
    fn quit_keys() {
        let (_dir, mut app) = app_with_units();
        let screen = Rect::new(0, 0, 100, 30);
        assert!(handle_event(&mut app, screen, key(KeyCode::Char('q'))));
        assert!(handle_event(&mut app, screen, key(KeyCode::Esc)));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(&mut app, screen, ctrl_c));
        assert!(!handle_event(&mut app, screen, key(KeyCode::Char('c'))));
    }

    #[test]
    fn tab_then_down_switches_unit() {
        let (_dir, mut app) = app_with_units();
        let screen = Rect::new(0, 0, 100, 30);
        app.select_index(1);

        handle_event(&mut app, screen, key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Units);
        handle_event(&mut app, screen, key(KeyCode::Down));

        assert_eq!(app.selection().unit(), Some("Geometry"));
        assert_eq!(app.selection().current_index(), 0);
        assert_eq!(app.current_question().unwrap().prompt, "Geometry 1");
    }

    #[test]
    fn mode_key_loads_other_list() {
        let (_dir, mut app) = app_with_units();
        let screen = Rect::new(0, 0, 100, 30);
        handle_event(&mut app, screen, key(KeyCode::Char('m')));

        assert_eq!(app.selection().question_type(), QuestionType::Long);
        assert!(app.questions().is_empty());
        assert!(app.load_error().is_none());
    }

    #[test]
    fn arrows_jump_between_questions() {
        let (_dir, mut app) = app_with_units();
        let screen = Rect::new(0, 0, 100, 30);
        handle_event(&mut app, screen, key(KeyCode::Right));
        assert_eq!(app.selection().current_index(), 1);
        handle_event(&mut app, screen, key(KeyCode::Right));
        assert_eq!(app.selection().current_index(), 1);
        handle_event(&mut app, screen, key(KeyCode::Home));
        assert_eq!(app.selection().current_index(), 0);
    }
}
