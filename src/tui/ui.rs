//! Stateless rendering: draws one frame from the application state.

use super::app::App;
use crate::game::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the full frame: title, board, status line, key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(13),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Festive Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = draw_board(frame, chunks[1], app);
    draw_confetti(frame, board_area, app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let opponent = if app.opponent_enabled() { "on" } else { "off" };
    let help = Paragraph::new(format!(
        "1-9/arrows+enter: play | r: restart | a: computer opponent ({opponent}) | q: quit"
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Draws the 3x3 grid, returning the area it occupies so the confetti
/// overlay can cover it.
fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let board_area = center_rect(area, 41, 13);

    // Blast flash: the border lights up for a few ticks on a win.
    let border_style = if app.effects().blast_active() {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(inner.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }

    board_area
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        let pos = Position::from_index(row * 3 + col).expect("row and col in range");
        draw_cell(frame, cols[col * 2], app, pos);
        if col < 2 {
            let sep =
                Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Winning-line highlight beats the cursor highlight.
    let on_line = app
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    let style = if on_line {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

/// Overlays the live confetti pieces on the board area.
fn draw_confetti(frame: &mut Frame, area: Rect, app: &App) {
    for piece in app.effects().pieces() {
        let x = area.x + (piece.col_pct * area.width.saturating_sub(1)) / 100;
        let y = area.y + (piece.row_pct * area.height.saturating_sub(1)) / 100;
        let cell = Rect::new(x, y, 1, 1);
        let glyph = Paragraph::new(Span::styled(
            piece.glyph.to_string(),
            Style::default().fg(piece.color),
        ));
        frame.render_widget(glyph, cell);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1]);
    horiz[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_positions_addressable() {
        // The row/col reconstruction in draw_row must hit every cell.
        for pos in Position::iter() {
            assert_eq!(
                Position::from_index(pos.row() * 3 + pos.col()),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = center_rect(area, 41, 13);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.x >= area.x && rect.y >= area.y);
    }
}
