//! Main pane once a subject and unit are selected.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;

use super::{navigation, question};

const HEADER_HEIGHT: u16 = 2;

struct StudyAreas {
    header: Rect,
    navigation: Rect,
    card: Rect,
    answer: Rect,
    /// Prompt rows hidden below the card.
    prompt_overflow: u16,
    /// Answer rows hidden below the answer panel.
    answer_overflow: u16,
}

/// Split the main pane; `None` when there is no question to show.
///
/// The card fits the wrapped prompt but takes at most half of the rows left
/// under the navigator; whatever does not fit is reached by scrolling.
fn areas(area: Rect, app: &App) -> Option<StudyAreas> {
    let current = app.current_question()?;
    let width = area.width.saturating_sub(2);
    let navigation_height = navigation::height(app.total_questions(), width);
    let remaining = area.height.saturating_sub(2 + HEADER_HEIGHT + navigation_height);

    let prompt_rows = question::prompt_rows(&current.prompt, width).max(1);
    let card_height = prompt_rows.saturating_add(2).min((remaining / 2).max(3));

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(navigation_height),
        Constraint::Length(card_height),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let answer_rows = question::answer_rows(&current.answer, chunks[3].width);

    Some(StudyAreas {
        header: chunks[0],
        navigation: chunks[1],
        card: chunks[2],
        answer: chunks[3],
        prompt_overflow: prompt_rows.saturating_sub(chunks[2].height.saturating_sub(2)),
        answer_overflow: answer_rows.saturating_sub(chunks[3].height.saturating_sub(2)),
    })
}

/// Area of the navigator inside the main pane, if it is shown.
pub fn navigation_area(area: Rect, app: &App) -> Option<Rect> {
    areas(area, app).map(|areas| areas.navigation)
}

/// Largest useful scroll offset: enough to reveal the end of whichever of
/// prompt and answer overflows more.
pub fn scroll_limit(area: Rect, app: &App) -> u16 {
    areas(area, app).map_or(0, |areas| areas.prompt_overflow.max(areas.answer_overflow))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, subject: &str, unit: &str) {
    let Some(areas) = areas(area, app) else {
        render_empty(frame, area, app, subject, unit);
        return;
    };
    let Some(current) = app.current_question() else {
        return;
    };
    let scroll = app.answer_scroll();

    render_header(frame, areas.header, subject, unit);
    navigation::render(
        frame,
        areas.navigation,
        app.total_questions(),
        app.selection().current_index(),
    );
    question::render_card(
        frame,
        areas.card,
        current,
        app.current_question_number(),
        scroll.min(areas.prompt_overflow),
    );
    question::render_answer(
        frame,
        areas.answer,
        &current.answer,
        scroll.min(areas.answer_overflow),
    );
}

fn render_header(frame: &mut Frame, area: Rect, subject: &str, unit: &str) {
    let content = vec![
        Line::from(Span::styled(
            subject.to_string(),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(Span::styled(
            unit.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_empty(frame: &mut Frame, area: Rect, app: &App, subject: &str, unit: &str) {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)])
        .margin(1)
        .split(area);
    render_header(frame, chunks[0], subject, unit);

    let mut lines = vec![Line::from("")];
    if let Some(err) = app.load_error() {
        lines.push(Line::from(Span::styled(
            format!("Error loading data: {}", err),
            Style::default().fg(Color::Red).bold(),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "No {} questions available yet.",
            app.selection().question_type()
        ),
        Style::default().fg(Color::Cyan),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
