use super::board::{Board, BoardFull, Bonus};
use super::direction::Direction;
use super::field::{Cell, Field};
use super::moves::MoveQueue;
use super::snapshot::Snapshot;
use crate::consts;
use crate::difficulty::Difficulty;
use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;

/// The simulation state of one round, advanced one tick at a time
#[derive(Clone, Debug)]
pub(crate) struct Round<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) field: Field,
    pub(super) difficulty: Difficulty,
    pub(super) board: Board,
    pub(super) moves: MoveQueue,
    /// Number of ticks for which the tail will stay put
    pub(super) pending_growth: u32,
    pub(super) score: u32,
    pub(super) level: u32,
    /// Current time between ticks, in milliseconds
    pub(super) speed_ms: u64,
    pub(super) high_score: u32,
}

/// What happened during a call to [`Round::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    Continue,
    /// The snake tried to move into `at` and hit something.  The board is
    /// left as it was before the tick.
    Crashed { at: Cell, cause: CrashCause },
    /// The food was eaten and there is nowhere left to put a new one
    Exhausted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CrashCause {
    Wall,
    Snake,
    Obstacle,
}

impl<R: Rng> Round<R> {
    pub(crate) fn new(
        field: Field,
        difficulty: Difficulty,
        high_score: u32,
        mut rng: R,
    ) -> Result<Round<R>, BoardFull> {
        let board = Board::new(field, &difficulty, &mut rng)?;
        Ok(Round {
            rng,
            field,
            difficulty,
            board,
            moves: MoveQueue::new(),
            pending_growth: 0,
            score: 0,
            level: 1,
            speed_ms: difficulty.speed_ms,
            high_score,
        })
    }

    /// Throw away the current round and lay out a fresh one with the same
    /// field and difficulty.  The high score carries over.
    pub(crate) fn reset(&mut self) -> Result<(), BoardFull> {
        self.board = Board::new(self.field, &self.difficulty, &mut self.rng)?;
        self.moves.clear();
        self.pending_growth = 0;
        self.score = 0;
        self.level = 1;
        self.speed_ms = self.difficulty.speed_ms;
        Ok(())
    }

    /// Move the snake one cell and resolve whatever it runs into or eats
    pub(crate) fn advance(&mut self) -> TickOutcome {
        if let Some(d) = self.moves.pop() {
            // Re-checked against the live direction since the queue only
            // validated against the direction at the time of the keypress
            if d != self.board.snake.direction().reverse() {
                self.board.snake.turn(d);
            }
        }
        let new_head = self.board.snake.direction().advance(self.board.snake.head());
        if let Some(cause) = self.collision_at(new_head) {
            debug!("Snake crashed into {cause:?} at {new_head:?}");
            return TickOutcome::Crashed { at: new_head, cause };
        }

        self.board.snake.push_head(new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.board.snake.pop_tail();
        }

        let ate_bonus = self.board.bonus.is_some_and(|b| b.cell == new_head);
        let ate_food = self.board.food == new_head;
        if ate_bonus || ate_food {
            self.score += if ate_bonus {
                consts::BONUS_POINTS
            } else {
                consts::FOOD_POINTS
            };
            self.pending_growth += 1;
            if ate_bonus {
                self.board.bonus = None;
                self.speed_ms = speed_up(
                    self.speed_ms,
                    consts::BONUS_SPEEDUP_MS,
                    consts::BONUS_SPEED_FLOOR_MS,
                );
                debug!("Bonus eaten; score {}, tick period {} ms", self.score, self.speed_ms);
            } else {
                match self.board.sample_free_cell(self.field, &mut self.rng) {
                    Ok(cell) => self.board.food = cell,
                    Err(BoardFull) => {
                        info!("No room left for new food; ending round");
                        self.record_high_score();
                        return TickOutcome::Exhausted;
                    }
                }
                self.maybe_spawn_bonus();
            }
            self.maybe_level_up();
        }

        if let Some(bonus) = self.board.bonus.as_mut() {
            bonus.ticks_left = bonus.ticks_left.saturating_sub(1);
            if bonus.ticks_left == 0 {
                self.board.bonus = None;
            }
        }
        self.record_high_score();
        TickOutcome::Continue
    }

    fn maybe_spawn_bonus(&mut self) {
        if self.board.bonus.is_some() || !self.rng.random_bool(consts::BONUS_PROBABILITY) {
            return;
        }
        match self.board.sample_free_cell(self.field, &mut self.rng) {
            Ok(cell) => {
                debug!("Spawning bonus fruit at {cell:?}");
                self.board.bonus = Some(Bonus {
                    cell,
                    ticks_left: consts::BONUS_LIFETIME,
                });
            }
            Err(BoardFull) => warn!("No room for a bonus fruit; skipping"),
        }
    }

    /// Advance at most one level per call, even if the score has passed more
    /// than one threshold
    fn maybe_level_up(&mut self) {
        let target = consts::POINTS_PER_LEVEL.saturating_mul(self.level);
        if self.score < target {
            return;
        }
        self.level += 1;
        self.speed_ms = speed_up(
            self.speed_ms,
            consts::LEVEL_SPEEDUP_MS,
            consts::LEVEL_SPEED_FLOOR_MS,
        );
        match self.board.sample_free_cell(self.field, &mut self.rng) {
            Ok(cell) => {
                self.board.obstacles.insert(cell);
            }
            Err(BoardFull) => warn!("No room for a new obstacle at level {}", self.level),
        }
        info!(
            "Reached level {} with score {}; tick period now {} ms",
            self.level, self.score, self.speed_ms
        );
    }
}

impl<R> Round<R> {
    /// Queue a turn to be applied on a later tick.  Returns `false` if the
    /// turn was rejected.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        self.moves.push(direction, self.board.snake.direction())
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn level(&self) -> u32 {
        self.level
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.field,
            segments: self.board.snake.segments().collect(),
            direction: self.board.snake.direction(),
            food: self.board.food,
            bonus: self.board.bonus,
            obstacles: self.board.obstacles.iter().copied().collect(),
            score: self.score,
            level: self.level,
            high_score: self.high_score,
            difficulty: self.difficulty.kind,
            paused: false,
            game_over: false,
            collision: None,
        }
    }

    fn collision_at(&self, cell: Cell) -> Option<CrashCause> {
        if self.field.is_wall(cell) {
            Some(CrashCause::Wall)
        } else if self.board.snake.contains(cell) {
            Some(CrashCause::Snake)
        } else if self.board.obstacles.contains(&cell) {
            Some(CrashCause::Obstacle)
        } else {
            None
        }
    }

    fn record_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

/// Lower a tick period by `by` milliseconds, clamping the result to at least
/// `floor`.  A period already under `floor` is raised to it.
fn speed_up(speed_ms: u64, by: u64, floor: u64) -> u64 {
    speed_ms.saturating_sub(by).max(floor)
}
