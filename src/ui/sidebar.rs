//! Subject, unit and mode pickers.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::app::{App, Focus};
use crate::models::QuestionType;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(4),
    ])
    .split(area);

    let title = Paragraph::new("STUDY FILTERS")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(title, chunks[0]);

    let selection = app.selection();

    let subjects = if app.subjects().is_empty() {
        vec![Line::from(Span::styled(
            "No subjects found.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        picker_lines(app.subjects(), selection.subject())
    };
    render_picker(
        frame,
        chunks[1],
        " Subject ",
        subjects,
        position(app.subjects(), selection.subject()),
        app.focus() == Focus::Subjects,
    );

    let units = match selection.subject() {
        Some(_) if app.units().is_empty() => vec![Line::from(Span::styled(
            "No units found.",
            Style::default().fg(Color::Yellow),
        ))],
        Some(_) => picker_lines(app.units(), selection.unit()),
        None => Vec::new(),
    };
    render_picker(
        frame,
        chunks[2],
        " Unit ",
        units,
        position(app.units(), selection.unit()),
        app.focus() == Focus::Units,
    );

    let modes = QuestionType::ALL
        .iter()
        .map(|question_type| {
            let is_selected = *question_type == selection.question_type();
            let (marker, style) = if is_selected {
                ("(•) ", Style::default().fg(Color::Red).bold())
            } else {
                ("( ) ", Style::default().fg(Color::Gray))
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(question_type.label(), style),
            ])
        })
        .collect();
    render_picker(frame, chunks[3], " Mode ", modes, 0, app.focus() == Focus::Mode);
}

fn position(items: &[String], selected: Option<&str>) -> usize {
    selected
        .and_then(|name| items.iter().position(|item| item == name))
        .unwrap_or(0)
}

fn picker_lines<'a>(items: &'a [String], selected: Option<&str>) -> Vec<Line<'a>> {
    items
        .iter()
        .map(|item| {
            let is_selected = selected == Some(item.as_str());
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_selected { "> " } else { "  " };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(item.as_str(), style),
            ])
        })
        .collect()
}

fn render_picker(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line>,
    selected: usize,
    focused: bool,
) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let visible = block.inner(area).height as usize;
    let scroll = selected.saturating_sub(visible.saturating_sub(1));

    let widget = Paragraph::new(lines).block(block).scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}
