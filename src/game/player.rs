use tracing::info;

use crate::{
    board::Cell,
    error::GameError,
    game::{Puppet, PuppetId, PuppetStatus, Seat},
};

#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    name: String,
    start_index: usize,
    finish_index: usize,
    home_cells: Vec<Cell>,
    puppets: Vec<Puppet>,
    retired: Vec<Puppet>,
    spawned: u16,
}

impl Player {
    pub fn new(seat: Seat, start_index: usize, finish_index: usize, home_cells: Vec<Cell>) -> Self {
        Player {
            seat,
            name: seat.display_name(),
            start_index,
            finish_index,
            home_cells,
            puppets: Vec::new(),
            retired: Vec::new(),
            spawned: 0,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Track cell right behind the start; passing it leads into the home row.
    pub fn finish_index(&self) -> usize {
        self.finish_index
    }

    pub fn home_cells(&self) -> &[Cell] {
        &self.home_cells
    }

    /// Puppets currently on the track.
    pub fn puppets(&self) -> &[Puppet] {
        &self.puppets
    }

    /// Puppets that made it past their goal, in the order they got there.
    pub fn retired(&self) -> &[Puppet] {
        &self.retired
    }

    pub fn has_active_puppets(&self) -> bool {
        !self.puppets.is_empty()
    }

    /// Puppets that have not entered the track yet.
    pub fn puppets_at_home(&self, num_puppets: usize) -> usize {
        num_puppets.saturating_sub(self.spawned as usize)
    }

    pub fn start_is_occupied(&self) -> bool {
        self.puppets
            .iter()
            .any(|p| p.track_index() == Some(self.start_index))
    }

    pub fn puppet(&self, id: PuppetId) -> Option<&Puppet> {
        self.puppets.iter().find(|p| p.id() == id)
    }

    /// Brings a new puppet onto the start cell.
    pub fn spawn_puppet(&mut self, track_len: usize) -> PuppetId {
        let id = PuppetId::new(self.seat, self.spawned);
        self.spawned += 1;
        self.puppets
            .push(Puppet::new(id, self.start_index, self.finish_index, track_len));
        id
    }

    /// Moves one of this player's puppets. A puppet that passes its goal is
    /// moved to the retired list.
    pub fn move_puppet(&mut self, id: PuppetId, amount: usize) -> Result<PuppetStatus, GameError> {
        let position = self
            .puppets
            .iter()
            .position(|p| p.id() == id)
            .ok_or(GameError::UnknownPuppet { seat: self.seat, puppet: id })?;

        let status = self.puppets[position].advance_by(amount);
        if status == PuppetStatus::Retired {
            let puppet = self.puppets.remove(position);
            info!(player = %self.name, puppet = ?puppet.id(), "{} has reached the goal!", self.name);
            self.retired.push(puppet);
        }
        Ok(status)
    }
}
