use std::ops::Deref;

use crate::board::Cell;

/// The closed ring of cells puppets travel along. Every index handed to a
/// track is taken modulo its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    cells: Vec<Cell>,
}

impl Track {
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty(), "a track needs at least one cell");
        Track { cells }
    }

    /// Wraps any (possibly negative) offset into a valid index.
    pub fn wrap(&self, index: i64) -> usize {
        index.rem_euclid(self.cells.len() as i64) as usize
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index % self.cells.len()]
    }

    /// Length of one of the four equal arcs between seat starts.
    pub fn arc_len(&self, num_players: usize) -> usize {
        self.cells.len() / num_players
    }

    pub fn is_closed(&self) -> bool {
        self.cells
            .iter()
            .zip(self.cells.iter().cycle().skip(1))
            .all(|(a, b)| a.is_adjacent(*b))
    }
}

impl Deref for Track {
    type Target = [Cell];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Track {
        Track::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)])
    }

    #[test]
    fn test_wrap() {
        let track = square();
        assert_eq!(track.wrap(-1), 3);
        assert_eq!(track.wrap(4), 0);
        assert_eq!(track.wrap(9), 1);
        assert_eq!(track.cell(6), Cell::new(1, 1));
    }

    #[test]
    fn test_closed() {
        assert!(square().is_closed());
        let open = Track::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        assert!(!open.is_closed());
    }
}
