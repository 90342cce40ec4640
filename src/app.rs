use crate::command::Command;
use crate::difficulty::{DifficultyKind, Presets};
use crate::game::{Field, Game};
use crate::highscore::HighScoreStore;
use crate::menu::{DifficultyPicker, MainMenu};
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use log::{error, info};
use ratatui::{
    backend::Backend,
    layout::{Position, Rect, Size},
    Terminal,
};
use std::io;

/// Settings and state shared by all screens for the life of the program
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) presets: Presets,
    pub(crate) difficulty: DifficultyKind,
    pub(crate) high_score: u32,
    pub(crate) store: HighScoreStore,
}

#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
    globals: Globals,
    warning: Option<Warning>,
    /// Size of the terminal as of the last draw
    area: Size,
}

impl App {
    pub(crate) fn new(globals: Globals) -> App {
        App {
            screen: Screen::Main(MainMenu::new(globals.high_score, globals.difficulty)),
            globals,
            warning: None,
            area: Size::default(),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.area = terminal.size()?;
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            match self.screen {
                Screen::Main(ref menu) => menu.draw(frame),
                Screen::Difficulty(ref picker) => picker.draw(frame),
                Screen::Game(ref game) => game.draw(frame),
                Screen::Quit => (),
            }
            if let Some(ref warning) = self.warning {
                frame.render_widget(warning, frame.area());
            }
        })?;
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        if let Some(ref mut warning) = self.warning {
            let outcome = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
                .and_then(|cmd| warning.handle_command(cmd));
            match outcome {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => {
                    self.warning = None;
                    self.apply(Transition::Quit);
                }
                None => (),
            }
            return Ok(());
        }
        let transition = match self.screen {
            Screen::Main(ref mut menu) => menu.process_input()?,
            Screen::Difficulty(ref mut picker) => picker.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::Quit => None,
        };
        if let Some(t) = transition {
            self.apply(t);
        }
        Ok(())
    }

    fn apply(&mut self, transition: Transition) {
        log::debug!("Applying transition {transition:?}");
        match transition {
            Transition::Play => self.start_round(),
            Transition::PickDifficulty => {
                self.screen = Screen::Difficulty(DifficultyPicker::new(
                    self.globals.presets.clone(),
                    self.globals.difficulty,
                ));
            }
            Transition::SetDifficulty(kind) => {
                info!("Difficulty set to {kind}");
                self.globals.difficulty = kind;
                self.show_menu();
            }
            Transition::Retry => {
                self.end_round();
                if let Screen::Game(ref mut game) = self.screen {
                    if let Err(e) = game.retry() {
                        error!("Could not restart round: {e}");
                        self.warning = Some(Warning::from(e));
                        self.show_menu();
                    }
                }
            }
            Transition::Menu => {
                self.end_round();
                self.show_menu();
            }
            Transition::Quit => {
                self.end_round();
                self.screen = Screen::Quit;
            }
        }
    }

    fn show_menu(&mut self) {
        self.screen = Screen::Main(MainMenu::new(
            self.globals.high_score,
            self.globals.difficulty,
        ));
    }

    fn start_round(&mut self) {
        let display = get_display_area(Rect::from((Position::ORIGIN, self.area)));
        let field = match Field::for_display(display.as_size()) {
            Ok(field) => field,
            Err(e) => {
                error!("Could not start round: {e}");
                self.warning = Some(Warning::from(e));
                return;
            }
        };
        let difficulty = self.globals.presets.get(self.globals.difficulty);
        match Game::new(field, difficulty, self.globals.high_score) {
            Ok(game) => self.screen = Screen::Game(game),
            Err(e) => {
                error!("Could not start round: {e}");
                self.warning = Some(Warning::from(e));
            }
        }
    }

    /// If a round is on screen, fold its best score into the global high
    /// score and write that to disk
    fn end_round(&mut self) {
        let Screen::Game(ref game) = self.screen else {
            return;
        };
        let score = game.high_score();
        if score > self.globals.high_score {
            info!("New high score: {score}");
            self.globals.high_score = score;
        }
        if let Err(e) = self.globals.store.save(self.globals.high_score) {
            error!("Failed to save high score: {e}");
            self.warning = Some(Warning::from(e));
        }
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
enum Screen {
    Main(MainMenu),
    Difficulty(DifficultyPicker),
    Game(Game),
    Quit,
}

/// A request from a screen to move the program to another screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Transition {
    /// Start a round with the current difficulty
    Play,
    /// Open the difficulty picker
    PickDifficulty,
    /// Make the given preset current and return to the main menu
    SetDifficulty(DifficultyKind),
    /// Start a new round in place of the one that just ended
    Retry,
    /// Return to the main menu, abandoning any round in progress
    Menu,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app_with_store(path: std::path::PathBuf, high_score: u32) -> App {
        let mut app = App::new(Globals {
            presets: Presets::default(),
            difficulty: DifficultyKind::Classic,
            high_score,
            store: HighScoreStore::new(Some(path)),
        });
        app.area = Size::new(80, 24);
        app
    }

    #[test]
    fn pick_difficulty() {
        let tmpdir = tempdir().unwrap();
        let mut app = app_with_store(tmpdir.path().join("highscore"), 0);
        app.apply(Transition::PickDifficulty);
        assert!(matches!(app.screen, Screen::Difficulty(_)));
        app.apply(Transition::SetDifficulty(DifficultyKind::Calm));
        assert_eq!(app.globals.difficulty, DifficultyKind::Calm);
        assert!(matches!(app.screen, Screen::Main(_)));
    }

    #[test]
    fn play_then_leave_saves() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore");
        let mut app = app_with_store(path.clone(), 17);
        app.apply(Transition::Play);
        assert!(matches!(app.screen, Screen::Game(_)));
        assert_eq!(app.warning, None);
        app.apply(Transition::Menu);
        assert!(matches!(app.screen, Screen::Main(_)));
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "17\n");
    }

    #[test]
    fn retry_keeps_game_screen() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore");
        let mut app = app_with_store(path.clone(), 5);
        app.apply(Transition::Play);
        app.apply(Transition::Retry);
        assert!(matches!(app.screen, Screen::Game(_)));
        assert_eq!(HighScoreStore::new(Some(path)).load(), 5);
    }

    #[test]
    fn quit_from_menu_writes_nothing() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore");
        let mut app = app_with_store(path.clone(), 3);
        app.apply(Transition::Quit);
        assert!(app.quitting());
        assert!(!path.exists());
    }

    #[test]
    fn tiny_terminal_warns() {
        let tmpdir = tempdir().unwrap();
        let mut app = app_with_store(tmpdir.path().join("highscore"), 0);
        app.area = Size::new(4, 6);
        app.apply(Transition::Play);
        assert!(matches!(app.screen, Screen::Main(_)));
        assert!(app.warning.is_some());
    }

    #[test]
    fn failed_save_warns() {
        let tmpdir = tempdir().unwrap();
        let blocker = tmpdir.path().join("file");
        fs_err::write(&blocker, "not a directory").unwrap();
        let mut app = app_with_store(blocker.join("highscore"), 0);
        app.apply(Transition::Play);
        app.apply(Transition::Menu);
        assert!(matches!(app.screen, Screen::Main(_)));
        assert!(app.warning.is_some());
    }
}
