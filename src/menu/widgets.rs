use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const SNAKE_WIDTH: u16 = 28;
    const ETER_WIDTH: u16 = 20;
    const WORD_GUTTER: u16 = 1;
    const SNAKE_BODY_LENGTH: u16 = 12;
    const DIAGRAM_GUTTER: u16 = 2;
    const TEXT_HEIGHT: u16 = 5;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::SNAKE_WIDTH + Self::WORD_GUTTER + Self::ETER_WIDTH;

    #[rustfmt::skip]
    const SNAKE: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];

    #[rustfmt::skip]
    const ETER: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " _____ _            ",
         "| ____| |_ ___ _ __ ",
        r"|  _| | __/ _ \ '__|",
         "| |___| ||  __/ |   ",
        r"|_____|\__\___|_|   ",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        let [snake_area, eter_area] = Layout::horizontal([Self::SNAKE_WIDTH, Self::ETER_WIDTH])
            .flex(Flex::Start)
            .spacing(Self::WORD_GUTTER)
            .areas(words_area);
        Text::from_iter(Self::SNAKE)
            .style(consts::SNAKE_STYLE)
            .render(snake_area, buf);
        Text::from_iter(Self::ETER)
            .style(consts::FOOD_STYLE)
            .render(eter_area, buf);
        let [body_area, head_area, _, food_area, _, bonus_area] = Layout::horizontal([
            Constraint::Length(Self::SNAKE_BODY_LENGTH),
            Constraint::Length(1),
            Constraint::Length(Self::DIAGRAM_GUTTER),
            Constraint::Length(1),
            Constraint::Length(Self::DIAGRAM_GUTTER),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(diagram_area);
        fill(body_area, buf, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        fill(head_area, buf, consts::SNAKE_HEAD_EAST_SYMBOL, consts::SNAKE_STYLE);
        fill(food_area, buf, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        fill(bonus_area, buf, consts::BONUS_SYMBOL, consts::BONUS_STYLE);
    }
}

fn fill(area: Rect, buf: &mut Buffer, symbol: char, style: Style) {
    for p in area.positions() {
        if let Some(cell) = buf.cell_mut(p) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 22;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            Line::from_iter([
                Span::raw("       "),
                Span::styled("←", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↓", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↑", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("→", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("h", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("j", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("k", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("l", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("a", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("s", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("w", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("d", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("Eat "),
                Span::styled(consts::FOOD_SYMBOL.to_string(), consts::FOOD_STYLE),
                Span::raw(" for 10 points,"),
            ]),
            Line::from_iter([
                Span::raw("grab "),
                Span::styled(consts::BONUS_SYMBOL.to_string(), consts::BONUS_STYLE),
                Span::raw(" before it fades"),
            ]),
            Line::from("and don't hit a thing!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}
