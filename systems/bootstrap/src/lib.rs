#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that turns a layout into a playable session.

use roguelike_core::{Grid, GridError, HostileKind, Position};
use roguelike_world::{query, HostilePlacement, SeededDice, World};
use thiserror::Error;

/// Map and starting placements supplied by a map provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Rows of cell codes, `0` blocked and `1` open.
    pub rows: Vec<Vec<u8>>,
    /// Cell the player starts on.
    pub player: Position,
    /// Hostiles in turn order.
    pub hostiles: Vec<HostilePlacement>,
    /// Dice seed recorded with the layout, if any.
    pub seed: Option<u64>,
}

impl Layout {
    /// The walled 9x9 keep with two bandits.
    #[must_use]
    pub fn keep() -> Self {
        let size = 9;
        let rows = (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| {
                        let edge = row == 0 || column == 0 || row == size - 1 || column == size - 1;
                        u8::from(!edge)
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            player: Position::new(2, 2),
            hostiles: vec![
                HostilePlacement::new(HostileKind::Bandit, Position::new(5, 5)),
                HostilePlacement::new(HostileKind::Bandit, Position::new(3, 5)),
            ],
            seed: None,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::keep()
    }
}

/// Reasons a layout cannot be turned into a session.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The map rows do not form a valid grid.
    #[error("invalid map: {0}")]
    Grid(#[from] GridError),
}

/// Produces sessions and the data required to greet the player.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Builds a session from the layout, rolling damage with the given seed.
    ///
    /// Only the map is validated. Starting placements are trusted as given.
    pub fn build(&self, layout: &Layout, seed: u64) -> Result<World, LayoutError> {
        let grid = Grid::from_rows(&layout.rows)?;
        Ok(World::new(
            grid,
            layout.player,
            &layout.hostiles,
            SeededDice::new(seed),
        ))
    }

    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }
}
