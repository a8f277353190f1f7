use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::game::Seat;

/// Identifies a puppet for the whole session: its seat plus the order in which
/// that seat brought it onto the track.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PuppetId {
    seat: Seat,
    serial: u16,
}

impl PuppetId {
    pub fn new(seat: Seat, serial: u16) -> Self {
        PuppetId { seat, serial }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn serial(&self) -> u16 {
        self.serial
    }
}

impl Debug for PuppetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.seat, self.serial)
    }
}

/// Where a puppet ended up after moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuppetStatus {
    OnTrack(usize),
    Retired,
}

/// A token on the track. It carries a copy of its owner's start index and
/// goal distance so it can compute its own cell without borrowing the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puppet {
    id: PuppetId,
    start_index: usize,
    goal_distance: usize,
    track_len: usize,
    distance: usize,
}

impl Puppet {
    /// The goal distance is `start_index + finish_index` of the owner, so a
    /// seat's lap is measured from its own start.
    pub fn new(id: PuppetId, start_index: usize, finish_index: usize, track_len: usize) -> Self {
        Puppet {
            id,
            start_index,
            goal_distance: start_index + finish_index,
            track_len,
            distance: 0,
        }
    }

    pub fn id(&self) -> PuppetId {
        self.id
    }

    pub fn seat(&self) -> Seat {
        self.id.seat()
    }

    pub fn distance_traveled(&self) -> usize {
        self.distance
    }

    pub fn goal_distance(&self) -> usize {
        self.goal_distance
    }

    pub fn is_retired(&self) -> bool {
        self.distance > self.goal_distance
    }

    /// Track index of the puppet, `None` once it has passed its goal.
    pub fn track_index(&self) -> Option<usize> {
        (!self.is_retired()).then(|| (self.distance + self.start_index) % self.track_len)
    }

    pub fn status(&self) -> PuppetStatus {
        match self.track_index() {
            Some(index) => PuppetStatus::OnTrack(index),
            None => PuppetStatus::Retired,
        }
    }

    pub fn advance_by(&mut self, amount: usize) -> PuppetStatus {
        self.distance = self.distance.saturating_add(amount);
        self.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puppet(start: usize, finish: usize) -> Puppet {
        Puppet::new(PuppetId::new(Seat::Red, 0), start, finish, 48)
    }

    #[test]
    fn test_goal_bound() {
        let mut p = puppet(0, 11);
        assert_eq!(p.advance_by(11), PuppetStatus::OnTrack(11));
        assert_eq!(p.distance_traveled(), 11);
        assert_eq!(p.advance_by(1), PuppetStatus::Retired);
        assert!(p.is_retired());
        assert_eq!(p.track_index(), None);
    }

    #[test]
    fn test_position_wraps() {
        let mut p = puppet(36, 35);
        assert_eq!(p.status(), PuppetStatus::OnTrack(36));
        assert_eq!(p.advance_by(12), PuppetStatus::OnTrack(0));
        assert_eq!(p.advance_by(59), PuppetStatus::OnTrack(11));
        assert_eq!(p.distance_traveled(), 71);
        assert_eq!(p.advance_by(1), PuppetStatus::Retired);
    }

    #[test]
    fn test_zero_move() {
        let mut p = puppet(12, 11);
        assert_eq!(p.advance_by(0), PuppetStatus::OnTrack(12));
        assert_eq!(p.distance_traveled(), 0);
    }

    #[test]
    fn test_huge_move_retires() {
        let mut p = puppet(36, 35);
        assert_eq!(p.advance_by(10), PuppetStatus::OnTrack(46));
        assert_eq!(p.advance_by(usize::MAX), PuppetStatus::Retired);
        assert_eq!(p.distance_traveled(), usize::MAX);
        assert_eq!(p.advance_by(usize::MAX), PuppetStatus::Retired);
    }
}
