use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::error::{Error, FoodError};
use crate::food::place_food;
use crate::input::{Direction, Velocity, direction_change_is_valid, steer};
use crate::presenter::{Audio, CellRole, Renderer, Track};
use crate::snake::{Snake, StepOutcome};
use crate::timer::{TickHandle, TickTimer};

/// Whether the scheduler keeps ticking.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Idle,
    Running,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    Collision(Collision),
    /// The snake filled every cell; nowhere left to put food.
    BoardFilled,
}

/// Complete mutable state for one game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub velocity: Velocity,
    pub food: Cell,
    pub score: u32,
    pub run_state: RunState,
    pub game_over_reason: Option<GameOverReason>,
    /// Direction actually used by the last step.
    heading: Direction,
}

impl GameState {
    /// Builds the canonical starting position with freshly placed food.
    pub fn fresh<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Result<Self, FoodError> {
        let snake = Snake::initial(board.unit());
        let food = place_food(rng, board, &snake)?;

        Ok(Self {
            snake,
            velocity: Velocity::new(Direction::Right, board.unit()),
            food,
            score: 0,
            run_state: RunState::Idle,
            game_over_reason: None,
            heading: Direction::Right,
        })
    }
}

/// Owns the game state and drives it one tick at a time.
///
/// The scheduler never sleeps. A host loop reports elapsed time through
/// [`Scheduler::advance`], or fires handles itself through
/// [`Scheduler::fire`]. At most one tick is pending.
#[derive(Debug)]
pub struct Scheduler<R = StdRng> {
    board: Board,
    interval: Duration,
    state: GameState,
    timer: TickTimer,
    rng: R,
}

impl Scheduler<StdRng> {
    /// Creates an idle scheduler from validated configuration.
    pub fn from_config(config: &GameConfig, seed: Option<u64>) -> Result<Self, Error> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::with_rng(config.board()?, config.tick_interval()?, rng)
    }

    /// Creates a deterministic scheduler for tests and reproducible runs.
    pub fn new_with_seed(board: Board, interval: Duration, seed: u64) -> Result<Self, Error> {
        Self::with_rng(board, interval, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn with_rng(board: Board, interval: Duration, mut rng: R) -> Result<Self, Error> {
        let state = GameState::fresh(board, &mut rng)?;

        Ok(Self {
            board,
            interval,
            state,
            timer: TickTimer::new(),
            rng,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage a position.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.timer.pending()
    }

    /// Starts a game from `Idle`. Does nothing in any other state.
    pub fn start(
        &mut self,
        renderer: &mut dyn Renderer,
        audio: &mut dyn Audio,
    ) -> Result<bool, FoodError> {
        if self.state.run_state != RunState::Idle {
            return Ok(false);
        }

        self.begin(renderer, audio)?;
        Ok(true)
    }

    /// Restarts from any state.
    ///
    /// The pending tick is cancelled before any state is touched, so a tick
    /// scheduled by the previous game can never run against the new one.
    pub fn reset(
        &mut self,
        renderer: &mut dyn Renderer,
        audio: &mut dyn Audio,
    ) -> Result<(), FoodError> {
        if let Some(stale) = self.timer.cancel() {
            debug!("reset cancelled pending tick {stale:?}");
        }

        audio.stop(Track::GameOver);
        self.begin(renderer, audio)
    }

    /// Feeds one directional key press into the velocity.
    ///
    /// Besides the current velocity, the press is checked against the heading
    /// of the last step, so two quick turns between ticks cannot reverse the
    /// snake into its own neck.
    pub fn on_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.state.heading, direction) {
            return;
        }

        self.state.velocity = steer(direction, self.state.velocity);
    }

    /// Lets `elapsed` pass and runs the tick if one came due.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        renderer: &mut dyn Renderer,
        audio: &mut dyn Audio,
    ) -> bool {
        let Some(handle) = self.timer.advance(elapsed) else {
            return false;
        };

        debug!("tick {handle:?} due");
        self.tick(renderer, audio);
        true
    }

    /// Runs the tick for `handle` if it is still the pending one.
    ///
    /// Returns false for handles cancelled by a reset or by game over.
    pub fn fire(
        &mut self,
        handle: TickHandle,
        renderer: &mut dyn Renderer,
        audio: &mut dyn Audio,
    ) -> bool {
        if !self.timer.claim(handle) {
            debug!("ignoring stale tick {handle:?}");
            return false;
        }

        self.tick(renderer, audio);
        true
    }

    fn begin(
        &mut self,
        renderer: &mut dyn Renderer,
        audio: &mut dyn Audio,
    ) -> Result<(), FoodError> {
        self.state = GameState::fresh(self.board, &mut self.rng)?;
        self.state.run_state = RunState::Running;

        info!(
            "game started on {}x{} board (unit {}), food at {:?}",
            self.board.width(),
            self.board.height(),
            self.board.unit(),
            self.state.food
        );

        renderer.hide_game_over();
        renderer.show_score(self.state.score);
        audio.play_start();
        renderer.draw_cell(self.state.food, CellRole::Food);

        self.timer.schedule(self.interval);
        Ok(())
    }

    fn tick(&mut self, renderer: &mut dyn Renderer, audio: &mut dyn Audio) {
        if self.state.run_state != RunState::Running {
            return;
        }

        let velocity = self.state.velocity;

        renderer.clear();
        renderer.draw_cell(self.state.food, CellRole::Food);

        self.state.heading = velocity.direction();
        let mut board_filled = false;
        if self.state.snake.step(velocity, self.state.food) == StepOutcome::Ate {
            self.state.score += 1;
            renderer.show_score(self.state.score);

            match place_food(&mut self.rng, self.board, &self.state.snake) {
                Ok(food) => {
                    debug!("food eaten, score {}, next food at {food:?}", self.state.score);
                    self.state.food = food;
                }
                Err(FoodError::NoFreeCell) => board_filled = true,
            }
        }

        for segment in self.state.snake.segments() {
            renderer.draw_cell(segment, CellRole::SnakeBody);
        }

        let reason = collision::detect(&self.state.snake, self.board)
            .map(GameOverReason::Collision)
            .or(board_filled.then_some(GameOverReason::BoardFilled));

        match reason {
            Some(reason) => self.finish(reason, renderer, audio),
            None => {
                self.timer.schedule(self.interval);
            }
        }
    }

    fn finish(
        &mut self,
        reason: GameOverReason,
        renderer: &mut dyn Renderer,
        audio: &mut dyn Audio,
    ) {
        let _ = self.timer.cancel();
        self.state.run_state = RunState::GameOver;
        self.state.game_over_reason = Some(reason);

        info!(
            "game over ({reason:?}) with score {} and length {}",
            self.state.score,
            self.state.snake.len()
        );

        renderer.show_game_over();
        audio.play_game_over();
    }
}
