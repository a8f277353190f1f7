//! Glue for front-ends: what to draw where. Nothing here feeds back into the
//! game state.

use std::f32::consts::{FRAC_PI_2, PI};

use hashbrown::{HashMap, HashSet};

use crate::{
    board::Cell,
    game::{GameSession, Puppet, PuppetId, Seat},
};

pub const SEAT_COLORS: [u32; 4] = [0xff5555, 0x55ff55, 0x5555ff, 0xfff055];

pub const DIE_MODEL: &str = "models/Dice.ply";
pub const PUPPET_MODEL: &str = "models/DefaultPlayer.obj";

pub fn seat_color(seat: Seat) -> u32 {
    SEAT_COLORS[seat.index()]
}

pub fn seat_rgb(seat: Seat) -> (u8, u8, u8) {
    let c = seat_color(seat);
    ((c >> 16) as u8, (c >> 8) as u8, c as u8)
}

/// Euler angles (radians, XYZ) that turn the die model's `face` upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieOrientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

const DIE_ORIENTATIONS: [DieOrientation; 6] = [
    DieOrientation { x: -FRAC_PI_2, y: 0.0, z: 0.0 },
    DieOrientation { x: 0.0, y: FRAC_PI_2, z: 0.0 },
    DieOrientation { x: PI, y: 0.0, z: 0.0 },
    DieOrientation { x: 0.0, y: 0.0, z: 0.0 },
    DieOrientation { x: 0.0, y: -FRAC_PI_2, z: 0.0 },
    DieOrientation { x: FRAC_PI_2, y: 0.0, z: 0.0 },
];

/// `None` for 0 (nothing rolled) or anything that is not a face.
pub fn die_orientation(face: u8) -> Option<DieOrientation> {
    DIE_ORIENTATIONS.get((face as usize).checked_sub(1)?).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Track,
    Start(Seat),
    Home(Seat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCell {
    pub cell: Cell,
    pub kind: CellKind,
}

/// Every cell that never moves: the track, with start cells tagged by seat,
/// followed by each seat's home row.
pub fn static_cells(session: &GameSession) -> Vec<StaticCell> {
    let track = session.track();
    let mut cells = track
        .iter()
        .map(|&cell| StaticCell { cell, kind: CellKind::Track })
        .collect::<Vec<_>>();

    for player in session.players() {
        cells[player.start_index()].kind = CellKind::Start(player.seat());
        cells.extend(player.home_cells().iter().map(|&cell| StaticCell {
            cell,
            kind: CellKind::Home(player.seat()),
        }));
    }
    cells
}

/// Loads the models a renderer needs. Implementations may block or resolve a
/// future internally; the core never calls this.
pub trait AssetProvider {
    type Asset;
    type Error: std::error::Error;

    fn load(&mut self, name: &str) -> Result<Self::Asset, Self::Error>;
}

pub struct Models<A> {
    pub die: A,
    pub puppet: A,
}

pub fn load_models<P: AssetProvider>(provider: &mut P) -> Result<Models<P::Asset>, P::Error> {
    Ok(Models {
        die: provider.load(DIE_MODEL)?,
        puppet: provider.load(PUPPET_MODEL)?,
    })
}

/// Maps puppets to whatever handle the renderer uses for their meshes.
#[derive(Debug)]
pub struct PuppetRegistry<H> {
    handles: HashMap<PuppetId, H>,
}

impl<H> Default for PuppetRegistry<H> {
    fn default() -> Self {
        PuppetRegistry { handles: HashMap::new() }
    }
}

impl<H> PuppetRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn handle(&self, id: PuppetId) -> Option<&H> {
        self.handles.get(&id)
    }

    /// Creates handles for new puppets and releases the ones whose puppet has
    /// retired.
    pub fn sync<S, D>(&mut self, session: &GameSession, mut spawn: S, mut despawn: D)
    where
        S: FnMut(&Puppet) -> H,
        D: FnMut(PuppetId, H),
    {
        let active = session
            .players()
            .iter()
            .flat_map(|p| p.puppets())
            .map(Puppet::id)
            .collect::<HashSet<_>>();

        let stale = self
            .handles
            .keys()
            .filter(|id| !active.contains(*id))
            .copied()
            .collect::<Vec<_>>();
        for id in stale {
            if let Some(handle) = self.handles.remove(&id) {
                despawn(id, handle);
            }
        }

        for puppet in session.players().iter().flat_map(|p| p.puppets()) {
            self.handles
                .entry(puppet.id())
                .or_insert_with(|| spawn(puppet));
        }
    }

    /// Current cell of every registered puppet still on the track.
    pub fn placements<'a>(&'a self, session: &'a GameSession) -> impl Iterator<Item = (&'a H, Cell)> + 'a {
        session
            .players()
            .iter()
            .flat_map(|p| p.puppets())
            .filter_map(move |puppet| {
                let handle = self.handles.get(&puppet.id())?;
                let index = puppet.track_index()?;
                Some((handle, session.track().cell(index)))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::BoardShape,
        game::{GameRules, TurnEngine},
    };

    fn session() -> GameSession {
        GameSession::new(BoardShape::default(), GameRules::default()).unwrap()
    }

    #[test]
    fn test_die_orientation() {
        assert_eq!(die_orientation(0), None);
        assert_eq!(die_orientation(7), None);
        assert_eq!(die_orientation(4), Some(DieOrientation { x: 0.0, y: 0.0, z: 0.0 }));
        assert_eq!(die_orientation(3).map(|o| o.x), Some(PI));
        // Opposite faces are half a turn apart.
        let one = die_orientation(1).unwrap();
        let six = die_orientation(6).unwrap();
        assert_eq!(six.x - one.x, PI);
    }

    #[test]
    fn test_seat_colors() {
        assert_eq!(seat_rgb(Seat::Red), (0xff, 0x55, 0x55));
        assert_eq!(seat_rgb(Seat::Yellow), (0xff, 0xf0, 0x55));
    }

    #[test]
    fn test_static_cells() {
        let session = session();
        let cells = static_cells(&session);
        assert_eq!(cells.len(), 48 + 4 * 4);
        for seat in Seat::ALL {
            let starts = cells.iter().filter(|c| c.kind == CellKind::Start(seat)).count();
            let homes = cells.iter().filter(|c| c.kind == CellKind::Home(seat)).count();
            assert_eq!((starts, homes), (1, 4));
        }
        assert_eq!(cells[12].kind, CellKind::Start(Seat::Green));
    }

    #[test]
    fn test_registry_follows_session() {
        let mut session = session();
        let mut engine = TurnEngine::with_seed(3);
        let mut registry = PuppetRegistry::new();
        let mut next_handle = 0u32;
        let mut released = Vec::new();

        engine.advance(&mut session);
        engine.submit_roll(&mut session, 6).unwrap();
        engine.advance(&mut session);

        let mut spawn = |_: &Puppet| {
            next_handle += 1;
            next_handle
        };
        registry.sync(&session, &mut spawn, |id, h| released.push((id, h)));
        assert_eq!(registry.len(), 1);

        let id = session.player(Seat::Red).puppets()[0].id();
        assert_eq!(registry.handle(id), Some(&1));
        let placed = registry.placements(&session).collect::<Vec<_>>();
        assert_eq!(placed, vec![(&1, session.track().cell(0))]);

        // Syncing again must not hand out a second handle.
        registry.sync(&session, &mut spawn, |id, h| released.push((id, h)));
        assert_eq!(registry.handle(id), Some(&1));

        engine.move_puppet(&mut session, id, 48).unwrap();
        registry.sync(&session, &mut spawn, |id, h| released.push((id, h)));
        assert!(registry.is_empty());
        assert_eq!(released, vec![(id, 1)]);
    }

    #[derive(Debug)]
    struct Missing(String);

    impl std::fmt::Display for Missing {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "missing asset {}", self.0)
        }
    }

    impl std::error::Error for Missing {}

    struct InMemory(Vec<&'static str>);

    impl AssetProvider for InMemory {
        type Asset = String;
        type Error = Missing;

        fn load(&mut self, name: &str) -> Result<String, Missing> {
            self.0
                .iter()
                .find(|n| **n == name)
                .map(|n| n.to_uppercase())
                .ok_or_else(|| Missing(name.to_string()))
        }
    }

    #[test]
    fn test_load_models() {
        let mut provider = InMemory(vec![DIE_MODEL, PUPPET_MODEL]);
        let models = load_models(&mut provider).unwrap();
        assert_eq!(models.die, "MODELS/DICE.PLY");
        assert_eq!(models.puppet, "MODELS/DEFAULTPLAYER.OBJ");

        let mut provider = InMemory(vec![DIE_MODEL]);
        assert!(load_models(&mut provider).is_err());
    }
}
