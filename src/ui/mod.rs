//! Terminal rendering of the browser.

mod navigation;
mod question;
mod sidebar;
mod study;
mod welcome;

use ratatui::{prelude::*, widgets::{Block, Paragraph}};

use crate::app::App;

pub use question::answer_lines;

const SIDEBAR_WIDTH: u16 = 30;

/// Top-level regions of the screen.
pub struct ScreenLayout {
    pub sidebar: Rect,
    pub main: Rect,
    pub controls: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
    let columns =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)]).split(rows[0]);

    ScreenLayout {
        sidebar: columns[0],
        main: columns[1],
        controls: rows[1],
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let layout = screen_layout(area);
    sidebar::render(frame, layout.sidebar, app);

    let selection = app.selection();
    match (selection.subject(), selection.unit()) {
        (Some(subject), Some(unit)) => study::render(frame, layout.main, app, subject, unit),
        _ => welcome::render(frame, layout.main),
    }

    render_controls(frame, layout.controls);
}

/// Question index of the navigation button at (`column`, `row`) on a
/// screen of size `area`, laid out as [`render`] draws it.
pub fn question_at(area: Rect, app: &App, column: u16, row: u16) -> Option<usize> {
    let main = screen_layout(area).main;
    let navigation = study::navigation_area(main, app)?;
    navigation::button_at(
        navigation,
        app.total_questions(),
        app.selection().current_index(),
        column,
        row,
    )
}

/// Largest answer scroll offset that still shows content on a screen of
/// size `area`.
pub fn scroll_limit(area: Rect, app: &App) -> u16 {
    study::scroll_limit(screen_layout(area).main, app)
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "tab panel  ·  j/k choose  ·  h/l or click jump  ·  m mode  ·  PgUp/PgDn scroll  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);

    frame.render_widget(widget, area);
}
