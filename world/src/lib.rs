#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the roguelike turn engine.
//!
//! The [`World`] owns the map, the player, the live hostiles, the event log and
//! the damage source. It is only ever mutated through [`apply`], and only ever
//! read through the [`query`] module.

mod actors;
mod combat;
mod journal;
mod movement;
mod occupancy;

use roguelike_core::{
    Actor, Command, Event, Grid, HostileId, HostileKind, Position, PLAYER_MAX_HEALTH,
    WELCOME_BANNER,
};

use crate::actors::{Body, Hostile, Player};

pub use crate::combat::{DamageRoll, SeededDice};
pub use crate::journal::EventLog;

/// Initial placement of a hostile supplied by the map provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostilePlacement {
    /// Behaviour parameters of the hostile.
    pub kind: HostileKind,
    /// Cell the hostile starts on.
    pub position: Position,
}

impl HostilePlacement {
    /// Creates a placement for a hostile of the given kind.
    #[must_use]
    pub const fn new(kind: HostileKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Represents one game session: map, actors, event log and dice.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid: Grid,
    player: Player,
    hostiles: Vec<Hostile>,
    next_hostile_id: u32,
    log: EventLog,
    dice: Box<dyn DamageRoll>,
}

impl World {
    /// Creates a session from a validated grid and initial placements.
    ///
    /// Placements are taken as given; overlapping or blocked starting cells
    /// are a configuration error of the caller.
    #[must_use]
    pub fn new<D>(grid: Grid, player: Position, hostiles: &[HostilePlacement], dice: D) -> Self
    where
        D: DamageRoll + 'static,
    {
        let mut world = Self {
            banner: WELCOME_BANNER,
            grid,
            player: Player::new(Body::new(player, PLAYER_MAX_HEALTH)),
            hostiles: Vec::with_capacity(hostiles.len()),
            next_hostile_id: 0,
            log: EventLog::default(),
            dice: Box::new(dice),
        };
        for placement in hostiles {
            let _ = world.place_hostile(*placement);
        }
        world
    }

    fn place_hostile(&mut self, placement: HostilePlacement) -> HostileId {
        let id = HostileId::new(self.next_hostile_id);
        self.next_hostile_id = self.next_hostile_id.saturating_add(1);
        self.hostiles.push(Hostile::new(
            id,
            placement.kind,
            Body::new(placement.position, placement.kind.max_health()),
        ));
        id
    }

    fn hostile(&self, id: HostileId) -> Option<&Hostile> {
        self.hostiles.iter().find(|hostile| hostile.id == id)
    }

    fn hostile_index(&self, id: HostileId) -> Option<usize> {
        self.hostiles.iter().position(|hostile| hostile.id == id)
    }

    fn body(&self, actor: Actor) -> Option<&Body> {
        match actor {
            Actor::Player => Some(&self.player.body),
            Actor::Hostile(id) => self.hostile(id).map(|hostile| &hostile.body),
        }
    }

    fn body_mut(&mut self, actor: Actor) -> Option<&mut Body> {
        match actor {
            Actor::Player => Some(&mut self.player.body),
            Actor::Hostile(id) => self
                .hostiles
                .iter_mut()
                .find(|hostile| hostile.id == id)
                .map(|hostile| &mut hostile.body),
        }
    }

    fn remove_hostile(&mut self, id: HostileId) -> Option<Hostile> {
        self.hostile_index(id)
            .map(|index| self.hostiles.remove(index))
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    tracing::debug!(?command, "applying command");
    match command {
        Command::MoveActor { actor, step } => {
            movement::apply_move(world, actor, step, out_events);
        }
        Command::Attack { attacker, defender } => {
            combat::apply_attack(world, attacker, defender, out_events);
        }
        Command::RecordLog { line } => {
            world.log.record(line.clone());
            out_events.push(Event::LogRecorded { line });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use roguelike_core::{
        Actor, Grid, HostileId, HostileSnapshot, HostileView, PlayerSnapshot, Position,
    };

    use super::{EventLog, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the session's walkability grid.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Captures the player's current state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        world.player.snapshot()
    }

    /// Captures every live hostile in turn order.
    #[must_use]
    pub fn hostile_view(world: &World) -> HostileView {
        HostileView::from_snapshots(
            world
                .hostiles
                .iter()
                .map(|hostile| hostile.snapshot())
                .collect(),
        )
    }

    /// Captures a single live hostile, `None` once it has been removed.
    #[must_use]
    pub fn hostile(world: &World, id: HostileId) -> Option<HostileSnapshot> {
        world.hostile(id).map(|hostile| hostile.snapshot())
    }

    /// Identifies the actor standing on the provided cell, if any.
    #[must_use]
    pub fn occupant_at(world: &World, position: Position) -> Option<Actor> {
        world.occupant_at(position)
    }

    /// Reports whether a live hostile stands on the provided cell.
    #[must_use]
    pub fn is_occupied_by_hostile(world: &World, position: Position) -> bool {
        world.hostile_at(position).is_some()
    }

    /// Reports whether the player stands on the provided cell.
    #[must_use]
    pub fn is_occupied_by_player(world: &World, position: Position) -> bool {
        world.is_player_at(position)
    }

    /// Returns the live hostile standing on the provided cell, if any.
    #[must_use]
    pub fn hostile_at(world: &World, position: Position) -> Option<HostileSnapshot> {
        world.hostile_at(position).map(|hostile| hostile.snapshot())
    }

    /// Reports whether any actor could step onto the provided cell right now.
    #[must_use]
    pub fn can_enter(world: &World, position: Position) -> bool {
        world.can_enter(position)
    }

    /// Provides read-only access to the bounded event log.
    #[must_use]
    pub fn log(world: &World) -> &EventLog {
        &world.log
    }
}
