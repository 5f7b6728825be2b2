//! Well-known starting patterns.
//!
//! Offsets are `(row, col)` relative to the pattern's top-left corner.

use crate::types::Position;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
    /// Generations until the pattern repeats (1 for still lifes).
    /// Gliders repeat their shape after 4 but shifted by one cell diagonally.
    pub period: u32,
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    period: 1,
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
    period: 2,
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    period: 2,
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    period: 2,
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    period: 4,
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

impl Pattern {
    /// Absolute positions with the pattern's corner at `origin`.
    pub fn at(&self, origin: Position) -> Vec<Position> {
        self.cells
            .iter()
            .map(|&(r, c)| Position::new(origin.row + r, origin.col + c))
            .collect()
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Positions with the pattern centered in a `width x height` grid.
    pub fn centered(&self, width: usize, height: usize) -> Vec<Position> {
        let (rows, cols) = self.extent();
        let origin = Position::new(height.saturating_sub(rows) / 2, width.saturating_sub(cols) / 2);
        self.at(origin)
    }
}

/// Look up a pattern by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find(" BLINKER ").map(|p| p.name), Some("Blinker"));
        assert!(find("gosper").is_none());
    }

    #[test]
    fn extent_and_centering() {
        assert_eq!(BEACON.extent(), (4, 4));
        assert_eq!(BLINKER.extent(), (1, 3));

        let cells = BLINKER.centered(9, 9);
        assert_eq!(
            cells,
            vec![Position::new(4, 3), Position::new(4, 4), Position::new(4, 5)]
        );
    }

    #[test]
    fn at_offsets_from_origin() {
        let cells = BLOCK.at(Position::new(10, 20));
        assert!(cells.contains(&Position::new(11, 21)));
        assert_eq!(cells.len(), 4);
    }
}
