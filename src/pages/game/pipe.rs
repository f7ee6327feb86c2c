use strum::Display;

use crate::{
    constants::game::{PIPE_HEIGHT, PIPE_WIDTH},
    pages::game::object::{Bounds, Object},
};

/// Which half of a pair a pipe is. Picks the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PipeKind {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    kind: PipeKind,
    bounds: Bounds,
    passed: bool,
}

impl Pipe {
    pub fn new(kind: PipeKind, x: i32, y: i32) -> Self {
        Pipe { kind, bounds: Bounds::new(x, y, PIPE_WIDTH, PIPE_HEIGHT), passed: false }
    }

    pub fn kind(&self) -> PipeKind {
        self.kind
    }

    #[cfg(test)]
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn scroll(&mut self, velocity: i32) {
        self.bounds.x += velocity;
    }

    pub fn right(&self) -> i32 {
        self.bounds.right()
    }

    /// Flags the pipe once `bird_x` is past its trailing edge.
    /// Returns true only for the tick on which the flag flips.
    pub fn mark_passed(&mut self, bird_x: i32) -> bool {
        if self.passed || bird_x <= self.right() {
            return false;
        }
        self.passed = true;
        true
    }
}

impl Object for Pipe {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_passed_once() {
        let mut pipe = Pipe::new(PipeKind::Top, -20, -200);
        assert!(!pipe.mark_passed(44));
        assert!(!pipe.mark_passed(45 - 1));
        assert!(pipe.mark_passed(45));
        assert!(pipe.passed());
        assert!(!pipe.mark_passed(45));
    }

    #[test]
    fn test_leading_edge_on_trailing_edge_is_not_passed() {
        let mut pipe = Pipe::new(PipeKind::Bottom, -19, 400);
        assert_eq!(pipe.right(), 45);
        assert!(!pipe.mark_passed(45));
        pipe.scroll(-1);
        assert!(pipe.mark_passed(45));
    }
}
