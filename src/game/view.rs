use super::direction::Direction;
use super::field::{Cell, Field};
use super::snapshot::Snapshot;
use crate::consts;
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, bonus_area, field_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        let mut status = format!(
            " Score {}   Level {}   High {}   Mode {}",
            self.score, self.level, self.high_score, self.difficulty
        );
        if self.paused {
            status.push_str("   (paused)");
        }
        Line::styled(status, consts::SCORE_BAR_STYLE).render(score_area, buf);

        if let Some(bonus) = self.bonus {
            Line::styled(
                format!("Bonus fruit fades in {} ticks", bonus.ticks_left),
                consts::HINT_STYLE,
            )
            .centered()
            .render(bonus_area, buf);
        }

        let block_area = field_rect(field_area, self.field);
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area,
            field: self.field,
            buf,
        };
        for &cell in &self.obstacles {
            canvas.draw_cell(cell, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        if let Some(bonus) = self.bonus {
            canvas.draw_cell(bonus.cell, consts::BONUS_SYMBOL, consts::BONUS_STYLE);
        }
        for seg in self.segments.iter().filter(|s| !s.is_head) {
            canvas.draw_cell(seg.cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that it's never hidden
        if let Some(head) = self.head() {
            canvas.draw_cell(head, head_symbol(self.direction), consts::SNAKE_STYLE);
        }
        if let Some(cell) = self.collision {
            canvas.draw_cell(cell, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        if self.game_over {
            Line::from(format!(
                " — GAME OVER — Score {} | Level {}",
                self.score, self.level
            ))
            .render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Retry ("),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(") — Main Menu ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        } else {
            Line::from_iter([
                Span::raw(" Move: "),
                Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
                Span::raw(" — Pause: "),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(" — Menu: "),
                Span::styled("q", consts::KEY_STYLE),
            ])
            .style(consts::HINT_STYLE)
            .render(msg2_area, buf);
        }
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
        Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
        Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
        Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
    }
}

/// Return the part of `area` covered by `field`, walls included
fn field_rect(area: Rect, field: Field) -> Rect {
    let width = u16::try_from(field.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(field.height()).unwrap_or(u16::MAX);
    Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    }
    .intersection(area)
}

#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    field: Field,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Ok(dx) = u16::try_from(cell.col - self.field.left()) else {
            return;
        };
        let Ok(dy) = u16::try_from(cell.row - self.field.top()) else {
            return;
        };
        if dx >= self.area.width || dy >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(dx) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(dy) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
