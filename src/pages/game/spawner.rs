use rand::Rng;

use crate::{
    constants::game::{PIPE_GAPS, PIPE_HEIGHT, PIPE_X, PIPE_Y},
    pages::game::pipe::{Pipe, PipeKind},
};

/// A new top/bottom pair at the right edge with a randomly sized and placed gap.
pub fn spawn_pair<R: Rng + ?Sized>(rng: &mut R) -> [Pipe; 2] {
    let gap = PIPE_GAPS[rng.gen_range(0..PIPE_GAPS.len())];
    let offset = rng.gen_range(0..PIPE_HEIGHT / 2);
    pair(gap, offset)
}

/// The top pipe sits `offset` above a quarter pipe over the baseline; the bottom pipe
/// starts exactly `gap` below the top pipe's end.
pub fn pair(gap: i32, offset: i32) -> [Pipe; 2] {
    let top_y = PIPE_Y - PIPE_HEIGHT / 4 - offset;
    [Pipe::new(PipeKind::Top, PIPE_X, top_y), Pipe::new(PipeKind::Bottom, PIPE_X, top_y + PIPE_HEIGHT + gap)]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        constants::game::BOARD_WIDTH,
        pages::game::object::{Bounds, Object},
    };

    #[test]
    fn test_pair_gap_for_every_candidate() {
        for gap in PIPE_GAPS {
            for offset in [0, 100, PIPE_HEIGHT / 2 - 1] {
                let [top, bottom] = pair(gap, offset);
                assert_eq!(bottom.bounds().y, top.bounds().y + PIPE_HEIGHT + gap);
                assert_eq!(bottom.bounds().y - top.bounds().bottom(), gap);
            }
        }
    }

    #[test]
    fn test_pair_layout() {
        let [top, bottom] = pair(80, 0);
        assert_eq!(top.kind(), PipeKind::Top);
        assert_eq!(bottom.kind(), PipeKind::Bottom);
        assert_eq!(top.bounds(), Bounds::new(BOARD_WIDTH, -128, 64, 512));
        assert_eq!(bottom.bounds(), Bounds::new(BOARD_WIDTH, 464, 64, 512));
        assert!(!top.passed() && !bottom.passed());
    }

    #[test]
    fn test_spawned_pairs_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut gaps = HashSet::new();
        for _ in 0..500 {
            let [top, bottom] = spawn_pair(&mut rng);
            let top_y = top.bounds().y;
            assert!((-383..=-128).contains(&top_y), "top pipe at {top_y}");

            let gap = bottom.bounds().y - top.bounds().bottom();
            assert!(PIPE_GAPS.contains(&gap), "gap {gap}");
            gaps.insert(gap);

            assert_eq!(top.bounds().x, PIPE_X);
            assert_eq!(bottom.bounds().x, PIPE_X);
        }
        assert_eq!(gaps.len(), PIPE_GAPS.len());
    }
}
