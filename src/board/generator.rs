use tracing::debug;

use crate::{
    board::{BoardShape, Cell, Step, Track},
    error::GameError,
    game::{GameRules, Player, Seat},
};

/// Leg directions of the four quarter turns. Each quarter walks
/// `long - 1` cells along the first leg, `long - 1` along the second and
/// `short - 1` along the third, which tiles a closed cross-shaped ring.
const QUARTERS: [[Step; 3]; 4] = [
    [Step::PosX, Step::PosY, Step::PosX],
    [Step::NegY, Step::PosX, Step::NegY],
    [Step::NegX, Step::NegY, Step::NegX],
    [Step::PosY, Step::NegX, Step::PosY],
];

/// Static board layout: the track plus one player per seat, each with its
/// start/finish indices and home row. Produced once and never reshaped.
#[derive(Debug, Clone)]
pub struct Board {
    shape: BoardShape,
    track: Track,
    players: Vec<Player>,
}

impl Board {
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub(crate) fn into_parts(self) -> (BoardShape, Track, Vec<Player>) {
        (self.shape, self.track, self.players)
    }
}

/// Lays out the track for `shape` and derives every seat's start, finish and
/// home cells.
pub fn generate(shape: BoardShape, rules: &GameRules) -> Result<Board, GameError> {
    shape.validate()?;
    rules.validate()?;

    let track = walk_ring(shape);
    let arc = track.arc_len(rules.num_players);

    let players = Seat::ALL
        .iter()
        .map(|&seat| {
            let start_index = track.wrap((arc * seat.index()) as i64);
            let finish_index = track.wrap(start_index as i64 - 1);
            let entry = track.cell(finish_index);
            let axis = seat.home_axis();
            let home_cells = (1..)
                .take(rules.num_puppets)
                .map(|j| entry + axis.times(j))
                .collect();
            Player::new(seat, start_index, finish_index, home_cells)
        })
        .collect::<Vec<_>>();

    debug!(
        long_side = shape.long_side,
        short_side = shape.short_side,
        track_len = track.len(),
        "generated board"
    );

    Ok(Board { shape, track, players })
}

fn walk_ring(shape: BoardShape) -> Track {
    let start = Cell::new(-shape.long_side, shape.short_side - 2);
    let legs = [shape.long_side - 1, shape.long_side - 1, shape.short_side - 1];

    let mut cursor = start;
    let mut cells = Vec::with_capacity(shape.track_len());
    for quarter in QUARTERS {
        for (step, count) in quarter.into_iter().zip(legs) {
            for _ in 0..count {
                cells.push(cursor);
                cursor = cursor + step;
            }
        }
    }
    debug_assert_eq!(cursor, start, "ring walk must end where it started");

    Track::from_cells(cells)
}
