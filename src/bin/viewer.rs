use ludo_board::{
    GameConfig, GameSession, Seat,
    game::{TurnEngine, TurnPhase},
    presentation::{CellKind, PuppetRegistry, StaticCell, seat_rgb, static_cells},
    simulate::move_rearmost,
};
use nannou::{
    color::{self, BLACK, WHITE, rgb8},
    event::{Key, Update},
    frame::Frame,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const LOG_LINES: usize = 10;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    nannou::app(model).update(update).run();
}

struct Model {
    session: GameSession,
    engine: TurnEngine,
    cells: Vec<StaticCell>,
    registry: PuppetRegistry<(Seat, u32)>,
    next_handle: u32,
    last_roll: u8,
    log: Vec<String>,
}

fn model(app: &nannou::App) -> Model {
    app.new_window()
        .title("ludo-board")
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).unwrap_or_else(|e| panic!("{e}")),
        None => GameConfig::default(),
    };
    let session = GameSession::from_config(&config).unwrap_or_else(|e| panic!("{e}"));
    let cells = static_cells(&session);

    Model {
        session,
        engine: TurnEngine::new(),
        cells,
        registry: PuppetRegistry::new(),
        next_handle: 0,
        last_roll: 0,
        log: Vec::new(),
    }
}

fn key_pressed(_app: &nannou::App, model: &mut Model, key: Key) {
    if key != Key::Space || model.session.state().phase() != TurnPhase::AwaitingRoll {
        return;
    }
    let face = model.engine.roll_dice(&mut model.session);
    model.last_roll = face;
    if let Err(e) = move_rearmost(&model.engine, &mut model.session, face) {
        warn!("{e}");
    }
}

fn update(_app: &nannou::App, model: &mut Model, _update: Update) {
    for event in model.engine.advance(&mut model.session) {
        model.log.push(event.to_string());
    }
    if model.log.len() > LOG_LINES {
        model.log.drain(..model.log.len() - LOG_LINES);
    }

    model.registry.sync(
        &model.session,
        |puppet| {
            model.next_handle += 1;
            (puppet.seat(), model.next_handle)
        },
        |id, _| model.log.push(format!("{:?} has reached the goal!", id)),
    );
}

fn seat_color(seat: Seat) -> color::Rgb8 {
    let (r, g, b) = seat_rgb(seat);
    rgb8(r, g, b)
}

fn view(app: &nannou::App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(color::DARKSLATEGRAY);

    let window_rect = app.window_rect();
    let span = model
        .cells
        .iter()
        .map(|c| c.cell.x.abs().max(c.cell.y.abs()))
        .max()
        .unwrap_or(1) as f32;
    let tile = window_rect.w().min(window_rect.h()) / (2.0 * span + 3.0);

    for cell in &model.cells {
        let (x, y) = (cell.cell.x as f32 * tile, cell.cell.y as f32 * tile);
        let color = match cell.kind {
            CellKind::Track => rgb8(0xff, 0xeb, 0xcd),
            CellKind::Start(seat) | CellKind::Home(seat) => seat_color(seat),
        };
        draw.ellipse().x_y(x, y).w_h(tile * 0.9, tile * 0.9).color(BLACK);
        draw.ellipse().x_y(x, y).w_h(tile * 0.8, tile * 0.8).color(color);
    }

    for (&(seat, handle), cell) in model.registry.placements(&model.session) {
        let (x, y) = (cell.x as f32 * tile, cell.y as f32 * tile);
        draw.tri()
            .points((x - tile * 0.3, y - tile * 0.3), (x + tile * 0.3, y - tile * 0.3), (x, y + tile * 0.35))
            .color(seat_color(seat));
        draw.text(&handle.to_string())
            .x_y(x, y - tile * 0.1)
            .font_size((tile / 3.0) as u32)
            .color(BLACK);
    }

    // Flat die showing the face value; the orientation table is for 3D renderers.
    if model.last_roll != 0 {
        draw.rect().x_y(0.0, 0.0).w_h(tile * 1.4, tile * 1.4).color(WHITE);
        draw.text(&model.last_roll.to_string())
            .x_y(0.0, 0.0)
            .font_size((tile * 0.8) as u32)
            .color(BLACK);
    }

    let state = model.session.state();
    let status = format!(
        "{} | tries: {} | space: roll",
        model.session.current_player().name(),
        state.tries_remaining()
    );
    let mut y = window_rect.top() - 20.0;
    draw.text(&status)
        .x_y(window_rect.left() + 160.0, y)
        .w(300.0)
        .font_size(16)
        .color(seat_color(state.current_seat()));

    for line in &model.log {
        y -= 20.0;
        draw.text(line)
            .x_y(window_rect.left() + 160.0, y)
            .w(300.0)
            .font_size(12)
            .color(WHITE);
    }

    draw.to_frame(app, &frame).unwrap();
}
