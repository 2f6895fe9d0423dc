//! Plain-text frame renderer.

use std::fmt::Write as _;

use roguelike_core::{Cell, Position};
use roguelike_world::{query, World};

const BLOCKED_GLYPH: char = '#';
const OPEN_GLYPH: char = '.';
const HOSTILE_GLYPH: char = '$';
const PLAYER_GLYPH: char = '@';

/// Draws the map, player health and event log into a single frame.
///
/// Every cell takes two columns so the map keeps a roughly square aspect.
pub(crate) fn render_frame(world: &World) -> String {
    let mut canvas: Vec<Vec<char>> = query::grid(world)
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Blocked => BLOCKED_GLYPH,
                    Cell::Open => OPEN_GLYPH,
                })
                .collect()
        })
        .collect();

    for hostile in query::hostile_view(world).iter() {
        plot(&mut canvas, hostile.position, HOSTILE_GLYPH);
    }
    let player = query::player(world);
    plot(&mut canvas, player.position, PLAYER_GLYPH);

    let mut frame = String::new();
    for row in &canvas {
        let line: String = row.iter().flat_map(|glyph| [*glyph, ' ']).collect();
        frame.push_str(line.trim_end());
        frame.push('\n');
    }
    let _ = writeln!(frame, "HP: {}/{}", player.health, player.max_health);
    for line in query::log(world).iter() {
        frame.push_str(line);
        frame.push('\n');
    }
    frame
}

fn plot(canvas: &mut [Vec<char>], position: Position, glyph: char) {
    let (Ok(row), Ok(column)) = (
        usize::try_from(position.row()),
        usize::try_from(position.column()),
    ) else {
        return;
    };
    if let Some(cell) = canvas.get_mut(row).and_then(|line| line.get_mut(column)) {
        *cell = glyph;
    }
}
