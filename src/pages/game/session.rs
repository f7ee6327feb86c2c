use strum::Display;
use tracing::{debug, info, trace};

use crate::{
    constants::game::{BOARD_HEIGHT, GRAVITY, JUMP_VELOCITY, PIPE_VELOCITY, SCORE_PER_PIPE},
    pages::game::{bird::Bird, clock::Cadence, object::Object, pipe::Pipe},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// One game session. All mutation goes through `handle_confirm`, `update` and `place_pipes`,
/// which the app calls one at a time from its action loop.
pub struct Session<C: Cadence> {
    state: GameState,
    bird: Bird,
    pipes: Vec<Pipe>,
    velocity: i32,
    score: f64,
    game_over: bool,
    clock: C,
}

impl<C: Cadence> Session<C> {
    pub fn new(clock: C) -> Self {
        Session {
            state: GameState::Menu,
            bird: Bird::new(),
            pipes: Vec::new(),
            velocity: 0,
            score: 0.0,
            game_over: false,
            clock,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    #[cfg(test)]
    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    #[cfg(test)]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The confirm/jump input.
    pub fn handle_confirm(&mut self) {
        match self.state {
            GameState::Menu => {
                self.state = GameState::Playing;
                self.reset();
                info!("Round started");
            },
            GameState::Playing => {
                self.velocity = JUMP_VELOCITY;
                trace!("Jump at y={}", self.bird.y());
            },
            // Pipes and score stay as they are until the next round starts.
            GameState::GameOver => {
                self.state = GameState::Menu;
                debug!("Back to menu");
            },
        }
    }

    fn reset(&mut self) {
        self.bird.reset();
        self.pipes.clear();
        self.score = 0.0;
        self.velocity = 0;
        self.game_over = false;
        self.clock.start();
    }

    /// One frame tick. Does nothing unless a round is in progress.
    pub fn update(&mut self) {
        if self.state != GameState::Playing || self.game_over {
            return;
        }

        self.velocity += GRAVITY;
        self.bird.fall(self.velocity);

        let mut hit = false;
        for pipe in self.pipes.iter_mut() {
            pipe.scroll(PIPE_VELOCITY);
            if pipe.mark_passed(self.bird.x()) {
                self.score += SCORE_PER_PIPE;
            }
            hit |= self.bird.collides_with(pipe);
        }
        // Anything fully past the left edge has been scored and can no longer be hit.
        self.pipes.retain(|pipe| pipe.right() > 0);

        if hit || self.bird.y() > BOARD_HEIGHT {
            self.end_game();
        }
    }

    /// Appends a freshly spawned pair. Spawns that arrive after the round ended are dropped.
    pub fn place_pipes(&mut self, pair: [Pipe; 2]) {
        if self.state != GameState::Playing {
            trace!("Ignoring pipe spawn in {}", self.state);
            return;
        }
        self.pipes.extend(pair);
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.state = GameState::GameOver;
        self.clock.stop();
        info!("Game over with score {}", self.score as i64);
    }
}
