use gridcast::{Board, Engine, Map, Player, Side, Turn, Walk};
use std::io::{self, BufRead, Write};

const CELL_SIZE: f32 = 50.0;
const NRAYS: usize = 60;
// character rows in the first-person strip
const VIEW_ROWS: usize = 12;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("GRIDCAST_LOG");

    log::info!("authoring demo board");
    let mut board = Board::new(10)?;
    // a few interior walls of each material class so there is something to
    // look at; toggling N times selects class N
    for (row, col, clicks) in [(3, 3, 1), (3, 4, 1), (6, 6, 2), (6, 7, 2), (2, 7, 3)] {
        for _ in 0..clicks {
            board.toggle_wall(row, col);
        }
    }

    let map = Map::new(board.grid(), CELL_SIZE, CELL_SIZE)?;
    let (spawn_row, spawn_col) = board.player_cell();
    let spawn = map.cell_center(spawn_row, spawn_col);
    let player = Player::new(spawn.x, spawn.y, 10.0, 66.0, NRAYS, 10.0, 10.0)?;

    log::info!("starting engine");
    let mut engine = Engine::new(map, player);

    let stdin = io::stdin();
    let mut out = io::stdout();
    draw(&engine, &mut out)?;

    for line in stdin.lock().lines() {
        for key in line?.chars() {
            match key {
                'a' => engine.turn(Turn::Left),
                'd' => engine.turn(Turn::Right),
                'w' => {
                    if !engine.step(Walk::Forward) {
                        log::info!("bumped into a wall");
                    }
                }
                's' => {
                    if !engine.step(Walk::Backward) {
                        log::info!("bumped into a wall");
                    }
                }
                'q' => return Ok(()),
                _ => {}
            }
        }
        draw(&engine, &mut out)?;
    }

    Ok(())
}

fn draw(engine: &Engine, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", first_person(engine))?;
    writeln!(out, "{}", top_down(engine))?;
    writeln!(out, "[a] turn left  [d] turn right  [w] forward  [s] back  [q] quit")?;
    out.flush()?;
    Ok(())
}

/// Top-down map: one character per cell, material digits for walls, `@` for
/// the player.
fn top_down(engine: &Engine) -> String {
    let map = engine.map();
    let player_cell = map.cell_indices(engine.player().position());

    let mut text = String::new();
    for row in 0..map.height() {
        for col in 0..map.width() {
            let glyph = if (row as isize, col as isize) == player_cell {
                '@'
            } else {
                match map.material(row, col) {
                    0 => '.',
                    class => char::from(b'0' + class),
                }
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

/// Pseudo-3D strip: one character column per ray. Nearer walls draw taller
/// columns; the perpendicular distances in the hit array already correct for
/// fisheye. Rays that found nothing leave the column blank.
fn first_person(engine: &Engine) -> String {
    let map = engine.map();
    let mut grid = vec![vec![' '; engine.hits().len()]; VIEW_ROWS];

    for (col, hit) in engine.hits().iter().enumerate() {
        let Some(hit) = hit else { continue };

        let height = ((map.cell_height() * VIEW_ROWS as f32) / hit.distance)
            .min(VIEW_ROWS as f32) as usize;
        let glyph = wall_glyph(map.material(hit.row, hit.col), hit.side);
        let top = (VIEW_ROWS - height) / 2;
        for text_row in grid.iter_mut().skip(top).take(height) {
            text_row[col] = glyph;
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>() + "\n")
        .collect()
}

/// Glyph family per material class, with the two wall orientations shaded
/// differently so corners stay readable.
fn wall_glyph(material: u8, side: Side) -> char {
    match (material, side) {
        (2, Side::Vertical) => '%',
        (2, Side::Horizontal) => '~',
        (3, Side::Vertical) => '&',
        (3, Side::Horizontal) => '-',
        (_, Side::Vertical) => '#',
        (_, Side::Horizontal) => '=',
    }
}
