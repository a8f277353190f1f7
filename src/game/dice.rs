use std::fmt::Display;

use rand::Rng;

use crate::error::GameError;

pub const FACES: u8 = 6;

/// Rolls a fair six-sided die.
pub fn roll<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=FACES)
}

pub fn check_face(face: u8) -> Result<u8, GameError> {
    match face {
        1..=FACES => Ok(face),
        _ => Err(GameError::InvalidDieFace(face)),
    }
}

/// How often each face came up. Only kept for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollHistogram {
    counts: [u64; FACES as usize],
}

impl RollHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// `face` must already be a valid face.
    pub fn record(&mut self, face: u8) {
        self.counts[face as usize - 1] += 1;
    }

    pub fn count(&self, face: u8) -> u64 {
        self.counts[face as usize - 1]
    }

    pub fn counts(&self) -> &[u64; FACES as usize] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn frequency(&self, face: u8) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(face) as f64 / total as f64,
        }
    }

    pub fn merge(mut self, other: RollHistogram) -> Self {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
        self
    }
}

impl Display for RollHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, count) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", i + 1, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_roll() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut histogram = RollHistogram::new();
        for _ in 0..6000 {
            let face = roll(&mut rng);
            assert!((1..=6).contains(&face));
            histogram.record(face);
        }
        assert_eq!(histogram.total(), 6000);
        for face in 1..=6 {
            let count = histogram.count(face);
            assert!(count > 800 && count < 1200, "face {face} came up {count} times");
        }
    }

    #[test]
    fn test_check_face() {
        assert_eq!(check_face(1), Ok(1));
        assert_eq!(check_face(6), Ok(6));
        assert_eq!(check_face(0), Err(GameError::InvalidDieFace(0)));
        assert_eq!(check_face(7), Err(GameError::InvalidDieFace(7)));
    }

    #[test]
    fn test_histogram() {
        let mut a = RollHistogram::new();
        assert_eq!(a.frequency(3), 0.0);
        a.record(3);
        a.record(3);
        a.record(6);
        let mut b = RollHistogram::new();
        b.record(1);

        let merged = a.merge(b);
        assert_eq!(merged.counts(), &[1, 0, 2, 0, 0, 1]);
        assert_eq!(merged.frequency(3), 0.5);
        assert_eq!(merged.to_string(), "1: 1, 2: 0, 3: 2, 4: 0, 5: 0, 6: 1");
    }
}
