/// Axis-aligned rectangle on the board. `y` grows downwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Bounds { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Strict overlap on both axes. Rectangles that only share an edge do not collide.
pub fn collides(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

pub trait Object {
    fn bounds(&self) -> Bounds;

    fn collides_with<T: Object>(&self, other: &T) -> bool {
        collides(&self.bounds(), &other.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRD: Bounds = Bounds::new(45, 320, 34, 24);

    #[test]
    fn test_touching_edges_do_not_collide() {
        let left = Bounds::new(11, 320, 34, 24);
        let right = Bounds::new(79, 320, 34, 24);
        let above = Bounds::new(45, 296, 34, 24);
        let below = Bounds::new(45, 344, 34, 24);
        for other in [left, right, above, below] {
            assert!(!collides(&BIRD, &other), "{other:?}");
            assert!(!collides(&other, &BIRD), "{other:?}");
        }
    }

    #[test]
    fn test_corner_contact_does_not_collide() {
        assert!(!collides(&BIRD, &Bounds::new(79, 344, 10, 10)));
    }

    #[test]
    fn test_strict_overlap_collides() {
        assert!(collides(&BIRD, &Bounds::new(78, 343, 64, 512)));
        assert!(collides(&BIRD, &Bounds::new(0, 0, 46, 321)));
    }

    #[test]
    fn test_containment_collides() {
        assert!(collides(&BIRD, &Bounds::new(50, 325, 2, 2)));
        assert!(collides(&Bounds::new(0, 0, 360, 640), &BIRD));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        assert!(!collides(&BIRD, &Bounds::new(50, 0, 64, 100)));
        assert!(!collides(&BIRD, &Bounds::new(200, 320, 64, 512)));
    }
}
