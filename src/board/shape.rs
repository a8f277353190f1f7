use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Longest side a board may have.
pub const MAX_SIDE: i32 = 4096;

/// Segment lengths of the cross-shaped ring. Both sides count cells along one
/// leg of a quarter, including the shared corner cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardShape {
    pub long_side: i32,
    pub short_side: i32,
}

impl Default for BoardShape {
    fn default() -> Self {
        BoardShape { long_side: 6, short_side: 3 }
    }
}

impl BoardShape {
    pub fn new(long_side: i32, short_side: i32) -> Self {
        BoardShape { long_side, short_side }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let valid = 2..=MAX_SIDE;
        if !valid.contains(&self.long_side) || !valid.contains(&self.short_side) {
            return Err(GameError::InvalidBoardShape {
                long_side: self.long_side,
                short_side: self.short_side,
            });
        }
        Ok(())
    }

    /// Cells walked in one quarter turn of the ring.
    pub fn quarter_len(&self) -> usize {
        (2 * self.long_side + self.short_side - 3) as usize
    }

    /// Number of cells on the whole track. Only meaningful for a validated shape.
    pub fn track_len(&self) -> usize {
        4 * self.quarter_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(BoardShape::new(2, 2).validate().is_ok());
        assert!(BoardShape::default().validate().is_ok());
        assert!(BoardShape::new(MAX_SIDE, MAX_SIDE).validate().is_ok());
        let too_short = [(1, 3), (6, 1), (0, 0), (-4, 3), (i32::MIN, 2)];
        let too_long = [(MAX_SIDE + 1, 3), (6, MAX_SIDE + 1), (i32::MAX, 2), (2, i32::MAX)];
        for (long, short) in too_short.into_iter().chain(too_long) {
            assert_eq!(
                BoardShape::new(long, short).validate(),
                Err(GameError::InvalidBoardShape { long_side: long, short_side: short })
            );
        }
    }

    #[test]
    fn test_track_len() {
        assert_eq!(BoardShape::new(6, 3).track_len(), 48);
        assert_eq!(BoardShape::new(2, 2).track_len(), 12);
        assert_eq!(BoardShape::new(5, 3).track_len(), 40);
        assert_eq!(BoardShape::new(MAX_SIDE, MAX_SIDE).track_len(), 4 * (3 * 4096 - 3));
    }
}
