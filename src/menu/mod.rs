mod difficulty;
mod widgets;
pub(crate) use self::difficulty::DifficultyPicker;
use self::widgets::{Instructions, Logo};
use crate::app::Transition;
use crate::command::Command;
use crate::consts;
use crate::difficulty::DifficultyKind;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
    high_score: u32,
    difficulty: DifficultyKind,
}

impl MainMenu {
    pub(crate) fn new(high_score: u32, difficulty: DifficultyKind) -> Self {
        MainMenu {
            selection: Selection::min(),
            high_score,
            difficulty,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Transition>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Transition> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Cancel => return Some(Transition::Quit),
            Command::Confirm => return Some(self.selection.transition()),
            Command::Up => {
                if let Some(sel) = self.selection.prev() {
                    self.selection = sel;
                }
            }
            Command::Down => {
                if let Some(sel) = self.selection.next() {
                    self.selection = sel;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(Selection::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(Selection::max),
            Command::Home => self.selection = Selection::min(),
            Command::End => self.selection = Selection::max(),
            _ => (),
        }
        None
    }

    fn button(&self, sel: Selection) -> Line<'static> {
        let style = if self.selection == sel {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        let label = match sel {
            Selection::Play => String::from("[Play]"),
            Selection::Difficulty => format!("[Difficulty: {}]", self.difficulty),
            Selection::Quit => {
                return Line::from_iter([
                    Span::styled("[Quit (", style),
                    Span::styled("q", consts::KEY_STYLE.patch(style)),
                    Span::styled(")]", style),
                ])
                .centered();
            }
        };
        Line::from(Span::styled(label, style)).centered()
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        #[allow(clippy::cast_possible_truncation)]
        let [logo_area, instructions_area, buttons_area, score_area] = Layout::vertical([
            Logo::HEIGHT,
            Instructions::HEIGHT,
            Selection::LENGTH as u16,
            1,
        ])
        .flex(Flex::Start)
        .spacing(1)
        .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        for (sel, row) in Selection::iter().zip(buttons_area.rows()) {
            self.button(sel).render(row, buf);
        }

        Line::styled(
            format!("High score: {}", self.high_score),
            consts::HINT_STYLE,
        )
        .centered()
        .render(score_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum Selection {
    Play,
    Difficulty,
    Quit,
}

impl Selection {
    fn transition(self) -> Transition {
        match self {
            Selection::Play => Transition::Play,
            Selection::Difficulty => Transition::PickDifficulty,
            Selection::Quit => Transition::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rstest::rstest;

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn render_rows(menu: &MainMenu) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn draw_initial() {
        let menu = MainMenu::new(230, DifficultyKind::Turbo);
        let rows = render_rows(&menu);
        assert!(rows[0].contains(" ____              _          _____ _"));
        assert!(rows[6].contains("⚬<  ●  $"));
        assert!(rows[8].contains("Move the snake with:"));
        assert_eq!(rows[16].trim(), "[Play]");
        assert_eq!(rows[17].trim(), "[Difficulty: Turbo]");
        assert_eq!(rows[18].trim(), "[Quit (q)]");
        assert_eq!(rows[20].trim(), "High score: 230");
    }

    #[test]
    fn navigate() {
        let mut menu = MainMenu::new(0, DifficultyKind::Classic);
        assert_eq!(menu.handle_event(key(KeyCode::Up)), None);
        assert_eq!(menu.selection, Selection::Play);
        assert_eq!(menu.handle_event(key(KeyCode::Down)), None);
        assert_eq!(
            menu.handle_event(key(KeyCode::Enter)),
            Some(Transition::PickDifficulty)
        );
        assert_eq!(menu.handle_event(key(KeyCode::Down)), None);
        assert_eq!(menu.handle_event(key(KeyCode::Down)), None);
        assert_eq!(menu.selection, Selection::Quit);
        assert_eq!(menu.handle_event(key(KeyCode::Tab)), None);
        assert_eq!(menu.handle_event(key(KeyCode::Enter)), Some(Transition::Play));
        assert_eq!(menu.handle_event(key(KeyCode::BackTab)), None);
        assert_eq!(menu.handle_event(key(KeyCode::Enter)), Some(Transition::Quit));
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')))]
    #[case(key(KeyCode::Esc))]
    #[case(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))]
    fn quit_keys(#[case] event: Event) {
        let mut menu = MainMenu::new(0, DifficultyKind::Classic);
        assert_eq!(menu.handle_event(event), Some(Transition::Quit));
    }

    #[test]
    fn selected_button_is_styled() {
        let mut menu = MainMenu::new(0, DifficultyKind::Classic);
        menu.handle_event(key(KeyCode::End));
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let quit_start = (0..80)
            .find(|&x| buffer[(x, 18)].symbol() == "[")
            .expect("quit button should be drawn");
        assert!(buffer[(quit_start, 18)]
            .modifier
            .contains(ratatui::style::Modifier::UNDERLINED));
    }
}
