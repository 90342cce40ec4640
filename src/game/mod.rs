mod board;
mod direction;
mod field;
mod moves;
mod paused;
mod round;
mod snake;
mod snapshot;
mod view;
pub(crate) use self::board::BoardFull;
use self::direction::Direction;
pub(crate) use self::field::{Cell, Field};
use self::paused::{PauseOpt, Paused};
use self::round::{Round, TickOutcome};
pub(crate) use self::snapshot::Snapshot;
use crate::app::Transition;
use crate::command::Command;
use crate::difficulty::Difficulty;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use log::info;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    widgets::Widget,
    Frame,
};
use std::time::Instant;

/// The screen on which a round is played
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    round: Round<R>,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(
        field: Field,
        difficulty: Difficulty,
        high_score: u32,
    ) -> Result<Self, BoardFull> {
        Game::new_with_rng(field, difficulty, high_score, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        field: Field,
        difficulty: Difficulty,
        high_score: u32,
        rng: R,
    ) -> Result<Game<R>, BoardFull> {
        info!(
            "Starting a {} round on a {}x{} field",
            difficulty.kind,
            field.width(),
            field.height()
        );
        Ok(Game {
            round: Round::new(field, difficulty, high_score, rng)?,
            state: GameState::Running,
            next_tick: None,
        })
    }

    /// Wait for either the next tick or the next input event, whichever
    /// comes first, and act on it
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Transition>> {
        if self.running() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + self.round.tick_period());
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn tick(&mut self) {
        if !self.running() {
            return;
        }
        match self.round.advance() {
            TickOutcome::Continue => (),
            TickOutcome::Crashed { at, cause } => {
                info!(
                    "Round over: crashed into {cause:?}; score {}, level {}",
                    self.round.score(),
                    self.round.level()
                );
                self.state = GameState::Over {
                    collision: Some(at),
                };
            }
            TickOutcome::Exhausted => {
                info!(
                    "Round over: the field is full; score {}",
                    self.round.score()
                );
                self.state = GameState::Over { collision: None };
            }
        }
    }

    /// Start a fresh round with the same field and difficulty
    ///
    /// # Errors
    ///
    /// Returns `Err` if the new round could not be laid out.
    pub(crate) fn retry(&mut self) -> Result<(), BoardFull> {
        self.round.reset()?;
        self.state = GameState::Running;
        self.next_tick = None;
        Ok(())
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Transition> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Transition::Quit),
                        Command::Up => self.steer(Direction::North),
                        Command::Left => self.steer(Direction::West),
                        Command::Down => self.steer(Direction::South),
                        Command::Right => self.steer(Direction::East),
                        Command::Pause => self.pause(),
                        Command::Cancel => return Some(Transition::Menu),
                        _ => (),
                    }
                }
            }
            GameState::Paused(ref mut paused) => {
                let cmd = Command::from_key_event(event.as_key_press_event()?)?;
                match paused.handle_command(cmd)? {
                    PauseOpt::Resume => {
                        self.state = GameState::Running;
                        self.next_tick = None;
                    }
                    PauseOpt::MainMenu => return Some(Transition::Menu),
                    PauseOpt::Quit => return Some(Transition::Quit),
                }
            }
            GameState::Over { .. } => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Confirm => return Some(Transition::Retry),
                Command::Cancel => return Some(Transition::Menu),
                Command::Quit => return Some(Transition::Quit),
                _ => (),
            },
        }
        None
    }

    fn steer(&mut self, direction: Direction) {
        if !self.round.steer(direction) {
            log::trace!("Ignoring turn to {direction:?}");
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused(Paused::new());
    }

    /// The best score seen so far, including the current round's
    pub(crate) fn high_score(&self) -> u32 {
        self.round.high_score()
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        let mut snapshot = self.round.snapshot();
        match self.state {
            GameState::Running => (),
            GameState::Paused(_) => snapshot.paused = true,
            GameState::Over { collision } => {
                snapshot.game_over = true;
                snapshot.collision = collision;
            }
        }
        snapshot
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.snapshot().render(area, buf);
        if let GameState::Paused(paused) = self.state {
            let pause_area = center_rect(
                get_display_area(area),
                Size {
                    width: Paused::WIDTH,
                    height: Paused::HEIGHT,
                },
            );
            paused.render(pause_area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    /// The round has ended.  `collision` is the cell the snake ran into, or
    /// `None` if the round ended because the field filled up.
    Over { collision: Option<Cell> },
}
