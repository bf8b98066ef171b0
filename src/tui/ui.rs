//! UI rendering using ratatui.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rotavex::Grid;

/// Cell footprint on screen, including borders.
const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 5;

/// One color per edge label, ported from the original palette
/// (index 0 is the unused background slot).
const PALETTE: [Color; 10] = [
    Color::Rgb(40, 40, 40),
    Color::Rgb(255, 165, 0),   // 1: orange
    Color::Rgb(192, 192, 192), // 2: light gray
    Color::Rgb(0, 0, 128),     // 3: navy
    Color::Rgb(255, 0, 0),     // 4: red
    Color::Rgb(255, 255, 0),   // 5: yellow
    Color::Rgb(0, 128, 0),     // 6: green
    Color::Rgb(128, 0, 128),   // 7: purple
    Color::Rgb(165, 42, 42),   // 8: brown
    Color::Rgb(0, 191, 255),   // 9: sky blue
];

fn label_style(value: u8) -> Style {
    let color = PALETTE
        .get(value as usize)
        .copied()
        .unwrap_or(Color::White);
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Rotavex - Tile Rotation Puzzle")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_grid(f, chunks[1], app);

    let status_style = if app.session().is_solved() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: Move | Space/Enter: Rotate | N: New Game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Renders the puzzle grid with the cursor highlighted.
fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let grid = app.session().grid();
    let board_area = center_rect(
        area,
        CELL_WIDTH * grid.cols() as u16,
        CELL_HEIGHT * grid.rows() as u16,
    );

    let row_constraints: Vec<Constraint> = (0..grid.rows())
        .map(|_| Constraint::Length(CELL_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(board_area);

    for (r, row_area) in rows.iter().enumerate() {
        let col_constraints: Vec<Constraint> = (0..grid.cols())
            .map(|_| Constraint::Length(CELL_WIDTH))
            .collect();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            render_tile(f, *cell_area, grid, r, c, app.cursor() == (r, c));
        }
    }
}

/// Renders one tile: top/right/bottom/left labels in a diamond layout.
fn render_tile(f: &mut Frame, area: Rect, grid: &Grid, row: usize, col: usize, selected: bool) {
    let Ok(tile) = grid.tile(row, col) else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(tile.top().to_string(), label_style(tile.top()))),
        Line::from(vec![
            Span::styled(tile.left().to_string(), label_style(tile.left())),
            Span::raw("   "),
            Span::styled(tile.right().to_string(), label_style(tile.right())),
        ]),
        Line::from(Span::styled(
            tile.bottom().to_string(),
            label_style(tile.bottom()),
        )),
    ];

    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1]);
    vertical[1]
}
