//! Stateless rendering of a [`View`].

use crate::view::View;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_store::Cell;

/// Draws the whole screen with the cursor cell highlighted.
pub fn draw(frame: &mut Frame, view: &View, cursor: Cell) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Error
            Constraint::Length(1), // Reset
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(view.header().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    draw_board(frame, chunks[1], view, cursor);

    if let Some(error) = view.error() {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[2]);
    }

    if *view.show_reset() {
        let reset = Paragraph::new("reset board (r)")
            .style(Style::default().fg(Color::Blue))
            .alignment(Alignment::Center);
        frame.render_widget(reset, chunks[3]);
    }

    let help_text = format!("{} | arrows, enter or 1-9 to play, q quits", cursor.label());
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &View, cursor: Cell) {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for y in 0..3 {
        draw_row(frame, rows[y * 2], view, cursor, y);
        if y < 2 {
            draw_separator(frame, rows[y * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &View, cursor: Cell, y: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for x in 0..3 {
        draw_cell(frame, cols[x * 2], view.cells()[y][x], cursor.x() == x && cursor.y() == y);
        if x < 2 {
            draw_separator_vertical(frame, cols[x * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, symbol: &str, selected: bool) {
    let base_style = match symbol {
        "x" => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        "o" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the 3-high cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {:1}   ", symbol), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("───────┼───────┼───────").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_store::{Action, DeferredScheduler, GameSettings, Store};

    fn render_at(view: &View, cursor: Cell) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, view, cursor)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn render(view: &View) -> String {
        render_at(view, Cell::new(1, 1).unwrap())
    }

    #[test]
    fn shows_prompt_and_hides_reset() {
        let text = render(&View::from_state(&tictactoe_store::AppState::new()));
        assert!(text.contains("Player x click:"));
        assert!(!text.contains("reset board"));
    }

    #[test]
    fn shows_error_and_reset() {
        let mut store = Store::new(&GameSettings::default(), DeferredScheduler::new());
        store.dispatch(Action::DeclareWinner(tictactoe_store::Player::X));
        store.dispatch(Action::ReportError("Square taken!".into()));

        let text = render(&View::from_state(store.state()));
        assert!(text.contains("Player x won!!"));
        assert!(text.contains("Square taken!"));
        assert!(text.contains("reset board (r)"));
    }

    #[test]
    fn help_line_names_cursor_cell() {
        let view = View::from_state(&tictactoe_store::AppState::new());
        assert!(render(&view).contains("Center | arrows"));
        assert!(render_at(&view, Cell::new(1, 2).unwrap()).contains("Bottom-center | arrows"));
    }
}
