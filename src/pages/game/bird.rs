use crate::{
    constants::game::{BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, BIRD_Y},
    pages::game::object::{Bounds, Object},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    bounds: Bounds,
}

impl Bird {
    pub fn new() -> Self {
        Bird { bounds: Bounds::new(BIRD_X, BIRD_Y, BIRD_WIDTH, BIRD_HEIGHT) }
    }

    pub fn x(&self) -> i32 {
        self.bounds.x
    }

    pub fn y(&self) -> i32 {
        self.bounds.y
    }

    pub fn reset(&mut self) {
        self.bounds.y = BIRD_Y;
    }

    /// Moves vertically by `velocity`. The top of the board stops the bird, the bottom does not.
    pub fn fall(&mut self, velocity: i32) {
        self.bounds.y = (self.bounds.y + velocity).max(0);
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for Bird {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
