//! Grid of numbered jump buttons, one per question.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::NAV_COLUMNS;

const MAX_VISIBLE_ROWS: usize = 4;

/// Button geometry for a list of `count` questions.
///
/// Rows hold `NAV_COLUMNS` buttons unless the panel is too narrow for the
/// widest label, in which case fewer columns are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grid {
    columns: usize,
    cell_width: u16,
    count: usize,
}

impl Grid {
    fn new(inner_width: u16, count: usize) -> Self {
        // widest label plus one cell of spacing
        let label_width = count.max(1).to_string().len() as u16 + 1;
        let columns = if inner_width / NAV_COLUMNS as u16 >= label_width {
            NAV_COLUMNS
        } else {
            ((inner_width / label_width) as usize).max(1)
        };
        Self {
            columns,
            cell_width: (inner_width / columns as u16).max(1),
            count,
        }
    }

    fn rows(&self) -> usize {
        self.count.div_ceil(self.columns)
    }

    /// First row shown so that the active row stays on screen.
    fn first_visible_row(&self, active: usize, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }
        let active_row = active / self.columns;
        let last_start = self.rows().saturating_sub(visible_rows);
        active_row
            .saturating_sub(visible_rows - 1)
            .min(last_start)
    }
}

fn block<'a>(title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold())
}

/// Height of the navigator panel `width` cells wide, borders included.
pub fn height(count: usize, width: u16) -> u16 {
    let grid = Grid::new(width.saturating_sub(2), count);
    grid.rows().min(MAX_VISIBLE_ROWS) as u16 + 2
}

/// Render the navigator; `active` is highlighted.
pub fn render(frame: &mut Frame, area: Rect, count: usize, active: usize) {
    let title = format!(" Navigate · Question {} of {} ", active + 1, count);
    let block = block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = Grid::new(inner.width, count);
    let visible_rows = inner.height as usize;
    let first_row = grid.first_visible_row(active, visible_rows);
    let width = grid.cell_width as usize;

    let lines: Vec<Line> = (first_row..grid.rows())
        .take(visible_rows)
        .map(|row| {
            let start = row * grid.columns;
            let end = (start + grid.columns).min(count);
            let spans: Vec<Span> = (start..end)
                .map(|index| {
                    let label = format!("{:^width$}", index + 1, width = width);
                    if index == active {
                        Span::styled(label, Style::default().fg(Color::White).bg(Color::Red).bold())
                    } else {
                        Span::styled(label, Style::default().fg(Color::Gray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Question index under screen position (`column`, `row`), if any.
///
/// `area` is the same panel area passed to [`render`].
pub fn button_at(area: Rect, count: usize, active: usize, column: u16, row: u16) -> Option<usize> {
    let inner = block(String::new()).inner(area);
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }

    let grid = Grid::new(inner.width, count);
    let grid_column = ((column - inner.x) / grid.cell_width) as usize;
    if grid_column >= grid.columns {
        return None;
    }
    let first_row = grid.first_visible_row(active, inner.height as usize);
    let grid_row = first_row + (row - inner.y) as usize;

    let index = grid_row * grid.columns + grid_column;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_of_ten() {
        assert_eq!(Grid::new(50, 0).rows(), 0);
        assert_eq!(Grid::new(50, 1).rows(), 1);
        assert_eq!(Grid::new(50, 10).rows(), 1);
        assert_eq!(Grid::new(50, 11).rows(), 2);
        assert_eq!(height(5, 52), 3);
        assert_eq!(height(95, 52), MAX_VISIBLE_ROWS as u16 + 2);
    }

    #[test]
    fn active_row_kept_visible() {
        let grid = Grid::new(50, 95);
        assert_eq!(grid.first_visible_row(0, 4), 0);
        assert_eq!(grid.first_visible_row(35, 4), 0);
        assert_eq!(grid.first_visible_row(45, 4), 1);
        assert_eq!(grid.first_visible_row(94, 4), 6);
    }

    #[test]
    fn narrow_panel_uses_fewer_columns() {
        // two-digit labels need three cells each
        let grid = Grid::new(18, 25);
        assert_eq!(grid.columns, 6);
        assert!(grid.cell_width >= 3);
        assert_eq!(grid.rows(), 5);

        assert_eq!(Grid::new(30, 25).columns, NAV_COLUMNS);
        assert_eq!(Grid::new(1, 25).columns, 1);
    }

    #[test]
    fn narrow_clicks_match_drawn_labels() {
        // inner width 18: six buttons of three cells per row
        let area = Rect::new(0, 0, 20, height(25, 20));
        assert_eq!(button_at(area, 25, 0, 1, 1), Some(0));
        assert_eq!(button_at(area, 25, 0, 16, 1), Some(5));
        assert_eq!(button_at(area, 25, 0, 1, 2), Some(6));
        assert_eq!(button_at(area, 25, 0, 4, 4), Some(19));
    }

    #[test]
    fn click_maps_to_index() {
        // 52 wide: 50 inner columns, 5 per button.
        let area = Rect::new(10, 5, 52, height(15, 52));
        assert_eq!(button_at(area, 15, 0, 11, 6), Some(0));
        assert_eq!(button_at(area, 15, 0, 21, 6), Some(2));
        assert_eq!(button_at(area, 15, 0, 60, 6), Some(9));
        assert_eq!(button_at(area, 15, 0, 11, 7), Some(10));
        assert_eq!(button_at(area, 15, 0, 40, 7), None);
        assert_eq!(button_at(area, 15, 0, 10, 6), None);
        assert_eq!(button_at(area, 15, 0, 11, 5), None);
    }

    #[test]
    fn click_follows_scrolled_rows() {
        let area = Rect::new(0, 0, 52, height(95, 52));
        assert_eq!(button_at(area, 95, 94, 1, 1), Some(60));
        assert_eq!(button_at(area, 95, 94, 1, 4), Some(90));
        assert_eq!(button_at(area, 95, 94, 6, 4), Some(91));
    }
}
