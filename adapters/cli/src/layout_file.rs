//! TOML layout files.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use roguelike_core::{HostileKind, Position};
use roguelike_system_bootstrap::Layout;
use roguelike_world::HostilePlacement;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    rows: Vec<Vec<u8>>,
    player: CellEntry,
    #[serde(default)]
    hostiles: Vec<HostileEntry>,
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CellEntry {
    row: i32,
    column: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HostileEntry {
    kind: HostileKind,
    row: i32,
    column: i32,
}

/// Reads and parses the layout stored at `path`.
pub(crate) fn load_layout(path: &Path) -> Result<Layout> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout at {}", path.display()))?;
    parse_layout(&contents)
        .with_context(|| format!("failed to load layout from {}", path.display()))
}

fn parse_layout(contents: &str) -> Result<Layout> {
    let file: LayoutFile =
        toml::from_str(contents).context("failed to parse layout toml contents")?;

    Ok(Layout {
        rows: file.rows,
        player: Position::new(file.player.row, file.player.column),
        hostiles: file
            .hostiles
            .into_iter()
            .map(|entry| HostilePlacement::new(entry.kind, Position::new(entry.row, entry.column)))
            .collect(),
        seed: file.seed,
    })
}
