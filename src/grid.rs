use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Returned when an input symbol does not name a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Accepts the WASD letters and the direction names, case-insensitively.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim().to_ascii_lowercase().as_str() {
            "w" | "up" => Ok(Direction::Up),
            "s" | "down" => Ok(Direction::Down),
            "a" | "left" => Ok(Direction::Left),
            "d" | "right" => Ok(Direction::Right),
            _ => Err(UnknownDirection(symbol.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub fn new(x: u16, y: u16) -> Self {
        Pos { x, y }
    }

    /// Cell at the middle of a square board, rounding down.
    pub fn center(board_size: u16) -> Self {
        Pos::new(board_size / 2, board_size / 2)
    }

    /// Adds `delta`, wrapping each coordinate onto a square board of side `board_size`.
    pub fn wrapped_add(&self, delta: PosDelta, board_size: u16) -> Pos {
        let side = board_size as i32;
        let new_x = (self.x as i32 + delta.x).rem_euclid(side) as u16;
        let new_y = (self.y as i32 + delta.y).rem_euclid(side) as u16;
        Pos { x: new_x, y: new_y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Right => PosDelta { x: 1, y: 0 },
            Direction::Left => PosDelta { x: -1, y: 0 },
        }
    }
}

/// One cell in `direction`, wrapped around the board edges.
pub fn step(pos: Pos, direction: Direction, board_size: u16) -> Pos {
    pos.wrapped_add(direction.into(), board_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("w".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("A".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" Right ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "x".parse::<Direction>(),
            Err(UnknownDirection("x".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_center() {
        assert_eq!(Pos::center(10), Pos::new(5, 5));
        assert_eq!(Pos::center(3), Pos::new(1, 1));
        assert_eq!(Pos::center(7), Pos::new(3, 3));
    }

    #[test]
    fn test_all_directions() {
        let pos = Pos::new(5, 5);

        assert_eq!(step(pos, Direction::Up, 10), Pos::new(5, 4));
        assert_eq!(step(pos, Direction::Down, 10), Pos::new(5, 6));
        assert_eq!(step(pos, Direction::Right, 10), Pos::new(6, 5));
        assert_eq!(step(pos, Direction::Left, 10), Pos::new(4, 5));
    }

    #[test]
    fn test_wrap_underflow() {
        assert_eq!(step(Pos::new(0, 3), Direction::Left, 10), Pos::new(9, 3));
        assert_eq!(step(Pos::new(3, 0), Direction::Up, 10), Pos::new(3, 9));
        assert_eq!(step(Pos::new(0, 0), Direction::Up, 4), Pos::new(0, 3));
    }

    #[test]
    fn test_wrap_overflow() {
        assert_eq!(step(Pos::new(9, 3), Direction::Right, 10), Pos::new(0, 3));
        assert_eq!(step(Pos::new(3, 9), Direction::Down, 10), Pos::new(3, 0));
        assert_eq!(step(Pos::new(3, 3), Direction::Down, 4), Pos::new(3, 0));
    }

    #[test]
    fn test_large_deltas() {
        let pos = Pos::new(5, 5);

        let new_pos = pos.wrapped_add(PosDelta { x: 8, y: 12 }, 10);
        assert_eq!(new_pos, Pos::new(3, 7));

        let new_pos = pos.wrapped_add(PosDelta { x: -12, y: -8 }, 10);
        assert_eq!(new_pos, Pos::new(3, 7));

        let new_pos = pos.wrapped_add(PosDelta { x: 10, y: -10 }, 10);
        assert_eq!(new_pos, pos);
    }
}
