use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::Pos;
use crate::snake::Snake;

/// Picks a random cell not covered by `snake`.
///
/// Draws uniformly from the whole board and redraws on a hit. After one
/// board's worth of misses it falls back to choosing among the free cells
/// directly, so a nearly full board cannot spin forever. A full board
/// reports [`GameError::NoSpace`] without touching `rng`.
pub fn place(snake: &Snake, board_size: u16, rng: &mut impl Rng) -> Result<Pos, GameError> {
    let cells = board_size as usize * board_size as usize;
    if snake.len() >= cells {
        return Err(GameError::NoSpace);
    }

    for _ in 0..cells {
        let pos = Pos {
            x: rng.gen_range(0..board_size),
            y: rng.gen_range(0..board_size),
        };
        if !snake.occupies(pos) {
            return Ok(pos);
        }
    }

    let free: Vec<Pos> = (0..board_size)
        .flat_map(|y| (0..board_size).map(move |x| Pos::new(x, y)))
        .filter(|&pos| !snake.occupies(pos))
        .collect();

    free.choose(rng).copied().ok_or(GameError::NoSpace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Walks the board row by row, head first.
    fn snake_covering(board_size: u16, count: usize) -> Snake {
        let cells = (0..board_size)
            .flat_map(|y| (0..board_size).map(move |x| Pos::new(x, y)))
            .take(count);
        Snake::from_segments(cells).unwrap()
    }

    #[test]
    fn test_placement_avoids_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = snake_covering(10, 40);

        for _ in 0..200 {
            let pos = place(&snake, 10, &mut rng).unwrap();
            assert!(!snake.occupies(pos), "food placed on snake at {:?}", pos);
            assert!(pos.x < 10 && pos.y < 10);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(42);
        let snake = snake_covering(4, 15);

        for _ in 0..20 {
            assert_eq!(place(&snake, 4, &mut rng), Ok(Pos::new(3, 3)));
        }
    }

    #[test]
    fn test_full_board_reports_no_space() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = snake_covering(3, 9);

        assert_eq!(place(&snake, 3, &mut rng), Err(GameError::NoSpace));
    }

    #[test]
    fn test_full_board_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut untouched = StdRng::seed_from_u64(5);
        let snake = snake_covering(3, 9);

        assert_eq!(place(&snake, 3, &mut rng), Err(GameError::NoSpace));
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }
}
