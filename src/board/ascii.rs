use crate::{board::Cell, game::GameSession};

/// Top-down text picture of a session, north up.
///
/// `.` track, lowercase seat letter on a seat's start cell, `o` home slot,
/// uppercase seat letter where a puppet stands.
pub fn render_ascii(session: &GameSession) -> String {
    let track = session.track();
    let homes = session.players().iter().flat_map(|p| p.home_cells().iter());
    let cells = track.iter().chain(homes).copied().collect::<Vec<Cell>>();

    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let max_x = cells.iter().map(|c| c.x).max().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let max_y = cells.iter().map(|c| c.y).max().unwrap_or(0);

    let width = (max_x - min_x + 1) as usize;
    let height = (max_y - min_y + 1) as usize;
    let mut grid = vec![vec![' '; width]; height];
    let mut put = |cell: Cell, ch: char| {
        grid[(max_y - cell.y) as usize][(cell.x - min_x) as usize] = ch;
    };

    for cell in track.iter() {
        put(*cell, '.');
    }
    for player in session.players() {
        let letter = player.seat().letter();
        put(track.cell(player.start_index()), letter.to_ascii_lowercase());
        for cell in player.home_cells() {
            put(*cell, 'o');
        }
    }
    for player in session.players() {
        for puppet in player.puppets() {
            if let Some(index) = puppet.track_index() {
                put(track.cell(index), player.seat().letter());
            }
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
