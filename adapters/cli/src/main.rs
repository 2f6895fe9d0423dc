#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a roguelike session on the terminal.

mod keymap;
mod layout_file;
mod render;

use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use roguelike_core::Action;
use roguelike_system_bootstrap::{Bootstrap, Layout};
use roguelike_system_turn::TurnController;
use roguelike_world::World;
use tracing_subscriber::EnvFilter;

/// Turn-based grid roguelike.
#[derive(Parser, Debug)]
#[command(name = "roguelike", about = "Explore the keep and fight off the bandits")]
struct Args {
    /// TOML layout to play instead of the built-in keep
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Dice seed, overriding any seed stored in the layout
    #[arg(long)]
    seed: Option<u64>,
}

/// Entry point for the roguelike command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let layout = match &args.layout {
        Some(path) => layout_file::load_layout(path)?,
        None => Layout::keep(),
    };
    let seed = resolve_seed(args.seed, layout.seed);
    tracing::info!(seed, "session configured");

    let bootstrap = Bootstrap;
    let mut world = bootstrap
        .build(&layout, seed)
        .context("layout does not describe a playable map")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", bootstrap.welcome_banner(&world))?;

    let mut controller = TurnController::new();
    play(&mut world, &mut controller, io::stdin().lock(), &mut out)
}

/// Feeds every input character to the controller until the session ends.
///
/// Running out of input quits the session.
fn play(
    world: &mut World,
    controller: &mut TurnController,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let _ = controller.start(world);
    write!(out, "{}", render::render_frame(world))?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        for action in keymap::actions_for_line(&line) {
            let outcome = controller.submit_input(world, action);
            if outcome.consumed {
                write!(out, "{}", render::render_frame(world))?;
            }
            if outcome.game_over {
                out.flush()?;
                return Ok(());
            }
        }
        out.flush()?;
    }

    let _ = controller.submit_input(world, Action::Quit);
    Ok(())
}

/// Picks the dice seed: the flag first, then the layout, then fresh entropy.
fn resolve_seed(flag: Option<u64>, layout: Option<u64>) -> u64 {
    flag.or(layout).unwrap_or_else(rand::random)
}
