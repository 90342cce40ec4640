use crate::app::Transition;
use crate::command::Command;
use crate::consts;
use crate::difficulty::{DifficultyKind, Presets};
use crate::util::{center_rect, get_display_area, EnumExt};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// Screen for choosing the difficulty preset used by later rounds
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DifficultyPicker {
    presets: Presets,
    selection: DifficultyKind,
}

impl DifficultyPicker {
    const NAME_WIDTH: usize = 9;
    const HORIZONTAL_PADDING: u16 = 1;
    const ROW_WIDTH: u16 = 36;
    const WIDTH: u16 = Self::ROW_WIDTH + 2 * Self::HORIZONTAL_PADDING + 2;
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (<DifficultyKind as enum_map::Enum>::LENGTH as u16) + 2;

    pub(crate) fn new(presets: Presets, current: DifficultyKind) -> Self {
        DifficultyPicker {
            presets,
            selection: current,
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
            Command::Quit => return Some(Transition::Quit),
            Command::Cancel => return Some(Transition::Menu),
            Command::Confirm => return Some(Transition::SetDifficulty(self.selection)),
            Command::Up => {
                if let Some(kind) = self.selection.prev() {
                    self.selection = kind;
                }
            }
            Command::Down => {
                if let Some(kind) = self.selection.next() {
                    self.selection = kind;
                }
            }
            Command::Next => {
                self.selection = self
                    .selection
                    .next()
                    .unwrap_or_else(<DifficultyKind as EnumExt>::min);
            }
            Command::Prev => {
                self.selection = self
                    .selection
                    .prev()
                    .unwrap_or_else(<DifficultyKind as EnumExt>::max);
            }
            Command::Home => self.selection = <DifficultyKind as EnumExt>::min(),
            Command::End => self.selection = <DifficultyKind as EnumExt>::max(),
            _ => (),
        }
        None
    }

    fn row(&self, kind: DifficultyKind) -> Line<'static> {
        let preset = self.presets.get(kind);
        let selected = kind == self.selection;
        let s = format!(
            "{pointer:2}{kind:width$}tick {speed:>3} ms  obstacles {obstacles}",
            pointer = if selected { "»" } else { "" },
            width = Self::NAME_WIDTH,
            speed = preset.speed_ms,
            obstacles = preset.base_obstacles,
        );
        let style = if selected {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::styled(s, style)
    }
}

impl Widget for &DifficultyPicker {
    /*
     * ┌───────────── Difficulty ─────────────┐
     * │   Calm     tick 140 ms  obstacles 1  │
     * │ » Classic  tick 100 ms  obstacles 3  │
     * │   Turbo    tick  70 ms  obstacles 5  │
     * └──────────────────────────────────────┘
     *        Choose (Enter) — Back (q)
     */
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [menu_area, hint_area] = Layout::vertical([
            Constraint::Length(DifficultyPicker::HEIGHT),
            Constraint::Length(1),
        ])
        .spacing(1)
        .areas(center_rect(
            display,
            Size {
                width: DifficultyPicker::WIDTH,
                height: DifficultyPicker::HEIGHT + 2,
            },
        ));
        let block = Block::bordered()
            .title(" Difficulty ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(DifficultyPicker::HORIZONTAL_PADDING));
        let inner = block.inner(menu_area);
        block.render(menu_area, buf);
        for (kind, row) in DifficultyKind::iter().zip(inner.rows()) {
            self.row(kind).render(row, buf);
        }
        Line::from_iter([
            Span::raw("Choose ("),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(") — Back ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::RawPreset;
    use crossterm::event::KeyCode;
    use std::collections::BTreeMap;

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    #[test]
    fn choose_turbo() {
        let mut picker = DifficultyPicker::new(Presets::default(), DifficultyKind::Classic);
        assert_eq!(picker.handle_event(key(KeyCode::Down)), None);
        assert_eq!(picker.handle_event(key(KeyCode::Down)), None);
        assert_eq!(
            picker.handle_event(key(KeyCode::Enter)),
            Some(Transition::SetDifficulty(DifficultyKind::Turbo))
        );
    }

    #[test]
    fn wrap_around() {
        let mut picker = DifficultyPicker::new(Presets::default(), DifficultyKind::Calm);
        assert_eq!(picker.handle_event(key(KeyCode::BackTab)), None);
        assert_eq!(picker.selection, DifficultyKind::Turbo);
        assert_eq!(picker.handle_event(key(KeyCode::Tab)), None);
        assert_eq!(picker.selection, DifficultyKind::Calm);
        assert_eq!(picker.handle_event(key(KeyCode::End)), None);
        assert_eq!(picker.selection, DifficultyKind::Turbo);
        assert_eq!(picker.handle_event(key(KeyCode::Home)), None);
        assert_eq!(picker.selection, DifficultyKind::Calm);
    }

    #[test]
    fn back_to_menu() {
        let mut picker = DifficultyPicker::new(Presets::default(), DifficultyKind::Calm);
        assert_eq!(picker.handle_event(key(KeyCode::Esc)), Some(Transition::Menu));
    }

    #[test]
    fn render_rows() {
        let overrides = BTreeMap::from([(DifficultyKind::Turbo, RawPreset::default())]);
        let presets = Presets::try_from(overrides).expect("presets should be valid");
        let picker = DifficultyPicker::new(presets, DifficultyKind::Classic);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        picker.render(area, &mut buffer);
        let rows = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        assert!(rows.iter().any(|r| r.contains(" Difficulty ")));
        assert!(rows.iter().any(|r| r.contains("│   Calm     tick 140 ms  obstacles 1  │")));
        assert!(rows.iter().any(|r| r.contains("│ » Classic  tick 100 ms  obstacles 3  │")));
        assert!(rows.iter().any(|r| r.contains("│   Turbo    tick  70 ms  obstacles 5  │")));
        assert!(rows.iter().any(|r| r.trim() == "Choose (Enter) — Back (q)"));
    }
}
