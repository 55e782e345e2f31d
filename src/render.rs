use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::TickResult;
use crate::grid::Pos;

/// Terminal columns per board cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
    /// The snake filled the board; nothing left to eat.
    Cleared,
}

/// Everything drawn in one frame.
pub struct Screen<'a> {
    pub board_size: u16,
    pub tick: &'a TickResult,
    pub best: u32,
    pub phase: Phase,
}

/// The board itself: empty cells, snake, and food.
pub struct BoardView<'a> {
    pub board_size: u16,
    pub tick: &'a TickResult,
}

impl BoardView<'_> {
    /// Screen area the board needs, centered in `area` and clipped to it.
    pub fn area_within(&self, area: Rect) -> Rect {
        let width = self.board_size.saturating_mul(CELL_WIDTH).min(area.width);
        let height = self.board_size.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

fn paint(area: Rect, buf: &mut Buffer, pos: Pos, symbol: &str, style: Style) {
    let x = area.x.saturating_add(pos.x.saturating_mul(CELL_WIDTH));
    let y = area.y.saturating_add(pos.y);
    if y >= area.bottom() || x.saturating_add(CELL_WIDTH) > area.right() {
        return;
    }
    buf[(x, y)].set_symbol(symbol).set_style(style);
    buf[(x + 1, y)].set_symbol(" ").set_style(style);
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let empty = Style::default().fg(Color::DarkGray);
        for y in 0..self.board_size {
            for x in 0..self.board_size {
                paint(area, buf, Pos::new(x, y), "·", empty);
            }
        }

        if let Some(food) = self.tick.food {
            paint(area, buf, food, "●", Style::default().fg(Color::LightRed));
        }

        // Tail first so the head wins if a collision put two segments on one cell.
        for (i, &pos) in self.tick.snake.iter().enumerate().rev() {
            let style = if i == 0 {
                Style::default().bg(Color::Yellow)
            } else {
                Style::default().bg(Color::Green)
            };
            paint(area, buf, pos, " ", style);
        }
    }
}

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + scores
            Constraint::Min(0),    // Board
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(format!(
            "SNAKE    Best: {}    Score: {}",
            screen.best, screen.tick.score
        ))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let title = match screen.phase {
        Phase::Playing => "Playing",
        Phase::Paused => "Paused. Press SPACE to continue",
        Phase::GameOver => "Game over",
        Phase::Cleared => "Board cleared",
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner_area = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);

    let board = BoardView {
        board_size: screen.board_size,
        tick: screen.tick,
    };
    let board_area = board.area_within(inner_area);
    frame.render_widget(board, board_area);

    if let Some(message) = end_message(screen.phase, screen.tick.score) {
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().bold()),
            inner_area,
        );
    }
}

/// Text laid over the board once a session has ended.
fn end_message(phase: Phase, score: u32) -> Option<String> {
    let headline = match phase {
        Phase::GameOver => "GAME OVER",
        Phase::Cleared => "YOU FILLED THE BOARD",
        Phase::Playing | Phase::Paused => return None,
    };
    Some(format!(
        "{}\nFinal Score: {}\nPress SPACE to play again",
        headline, score
    ))
}
