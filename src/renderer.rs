use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::BORDER_HALF_BLOCK;
use crate::game::GameState;
use crate::projection::{self, Cell};
use crate::theme::Theme;

const GLYPH_SNAKE_HEAD: &str = "█";
const GLYPH_SNAKE_BODY: &str = "█";
const GLYPH_FOOD: &str = "●";

/// Renders one full frame from immutable state.
///
/// The play area is a bordered box centered in the terminal, one terminal
/// cell per grid cell. Everything drawn comes from the cell-grid
/// projection; this function never inspects the snake or food directly.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let grid = projection::project(state);
    let bounds = grid.bounds();

    let play_area = centered_play_area(frame.area(), bounds.width + 2, bounds.height + 2);
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let buffer = frame.buffer_mut();
    for (x, y, cell) in grid.iter() {
        let column = inner.x.saturating_add(x);
        let row = inner.y.saturating_add(y);
        if column >= inner.right() || row >= inner.bottom() {
            continue;
        }

        match cell {
            Cell::Empty => {}
            Cell::SnakeHead => buffer.set_string(
                column,
                row,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::SnakeBody => {
                buffer.set_string(column, row, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
            }
            Cell::Food => buffer.set_string(column, row, GLYPH_FOOD, Style::new().fg(theme.food)),
        }
    }

    if state.game_over {
        render_game_over_overlay(frame, play_area, theme);
    }
}

/// Draws the game-over popup over the play area.
fn render_game_over_overlay(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_play_area(area, 18, 6);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from("[R] Restart"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .style(Style::new().fg(theme.overlay_text))
            .block(
                Block::bordered()
                    .title(" snake ")
                    .border_style(Style::new().fg(theme.overlay_title)),
            ),
        popup,
    );
}

fn centered_play_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
