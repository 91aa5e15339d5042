//! Question card and answer panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::models::{Answer, AnswerPart, Question};

const SEPARATOR_WIDTH: usize = 40;
/// Columns taken by a panel's borders and horizontal padding.
const PANEL_CHROME: u16 = 4;

fn prompt_paragraph(prompt: &str) -> Paragraph<'_> {
    Paragraph::new(prompt)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White).bold())
}

fn answer_paragraph(answer: &Answer) -> Paragraph<'static> {
    Paragraph::new(answer_lines(answer)).wrap(Wrap { trim: false })
}

fn wrapped_rows(paragraph: &Paragraph, width: u16) -> u16 {
    let text_width = width.saturating_sub(PANEL_CHROME).max(1);
    u16::try_from(paragraph.line_count(text_width)).unwrap_or(u16::MAX)
}

/// Rows the prompt wraps to inside a card `width` cells wide.
pub fn prompt_rows(prompt: &str, width: u16) -> u16 {
    wrapped_rows(&prompt_paragraph(prompt), width)
}

/// Rows the answer body wraps to inside a panel `width` cells wide.
pub fn answer_rows(answer: &Answer, width: u16) -> u16 {
    wrapped_rows(&answer_paragraph(answer), width)
}

pub fn render_card(frame: &mut Frame, area: Rect, question: &Question, number: usize, scroll: u16) {
    let widget = prompt_paragraph(&question.prompt)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(format!(" QUESTION {} ", number))
                .title_style(Style::default().fg(Color::Red).bold())
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

pub fn render_answer(frame: &mut Frame, area: Rect, answer: &Answer, scroll: u16) {
    let widget = answer_paragraph(answer).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Answer ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

/// Lines of the answer body, in display order.
pub fn answer_lines(answer: &Answer) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match answer {
        Answer::Split { part_a, part_b } => {
            push_part(&mut lines, part_a, Some("Part A"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "─".repeat(SEPARATOR_WIDTH),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
            if let Some(part_b) = part_b {
                push_part(&mut lines, part_b, Some("Part B"));
            }
        }
        Answer::Single(part) => push_part(&mut lines, part, None),
    }
    lines
}

fn push_part(lines: &mut Vec<Line<'static>>, part: &AnswerPart, label: Option<&str>) {
    lines.extend(
        part.text
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Gray)))),
    );

    if let Some(diagram) = &part.diagram {
        push_section(lines, "Diagram", label, diagram, Color::Yellow);
    }
    if let Some(table) = &part.table {
        push_section(lines, "Table", label, table, Color::White);
    }
}

fn push_section(
    lines: &mut Vec<Line<'static>>,
    heading: &str,
    label: Option<&str>,
    body: &str,
    color: Color,
) {
    let heading = match label {
        Some(label) => format!("{} ({})", heading, label),
        None => heading.to_string(),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().fg(Color::Cyan).bold(),
    )));
    lines.extend(
        body.lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(color)))),
    );
}
