#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the roguelike turn engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. The turn controller submits
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then reports [`Event`] values
//! describing what actually happened. Systems read immutable snapshots and
//! respond exclusively with new commands.

use std::fmt;

use serde::{Deserialize, Serialize};

mod grid;

pub use grid::{Cell, Grid, GridError};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to the keep. Mind the bandits.";

/// Maximum number of lines retained by the session event log.
pub const LOG_CAPACITY: usize = 10;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that an actor move one step, subject to the movement rule.
    MoveActor {
        /// Actor attempting to move.
        actor: Actor,
        /// Offset applied to the actor's current position.
        step: Step,
    },
    /// Requests that one actor attack another.
    Attack {
        /// Actor delivering the blow.
        attacker: Actor,
        /// Actor receiving the damage.
        defender: Actor,
    },
    /// Appends a line to the session event log.
    RecordLog {
        /// Text recorded in the log.
        line: String,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that an actor moved between two cells.
    ActorMoved {
        /// Actor that moved.
        actor: Actor,
        /// Cell the actor occupied before moving.
        from: Position,
        /// Cell the actor occupies after the move.
        to: Position,
    },
    /// Reports that a move was refused because the target was not enterable.
    MoveRejected {
        /// Actor whose move was refused.
        actor: Actor,
        /// Cell the actor attempted to enter.
        target: Position,
    },
    /// Confirms that an attack was rolled and applied.
    AttackResolved {
        /// Actor that delivered the blow.
        attacker: Actor,
        /// Actor that received the damage.
        defender: Actor,
        /// Rolled damage amount, possibly zero.
        damage: u32,
        /// Defender health after the damage was applied.
        remaining: Health,
    },
    /// Announces that a hostile died and left the live collection.
    HostileDied {
        /// Identifier of the slain hostile.
        hostile: HostileId,
        /// Kind of the slain hostile.
        kind: HostileKind,
    },
    /// Announces that the player's health reached zero.
    PlayerDied,
    /// Confirms that a line was pushed into the event log.
    LogRecorded {
        /// Text that was recorded.
        line: String,
    },
}

/// Participant in the turn order that can move or fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The player character.
    Player,
    /// A hostile identified by the world.
    Hostile(HostileId),
}

/// Location of a single map cell expressed as row and column.
///
/// Coordinates are signed so that off-map targets can be computed and then
/// rejected by the walkability check instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Position reached by applying the provided step.
    #[must_use]
    pub const fn offset(self, step: Step) -> Self {
        Self {
            row: self.row.saturating_add(step.row_delta),
            column: self.column.saturating_add(step.column_delta),
        }
    }

    /// Computes the Chebyshev (king move) distance between two positions.
    #[must_use]
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.column.abs_diff(other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Offset of at most one cell along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    row_delta: i32,
    column_delta: i32,
}

impl Step {
    /// Step that leaves the actor in place.
    pub const WAIT: Self = Self::new(0, 0);

    /// Creates a step, clamping each axis into `-1..=1`.
    #[must_use]
    pub const fn new(row_delta: i32, column_delta: i32) -> Self {
        Self {
            row_delta: clamp_unit(row_delta),
            column_delta: clamp_unit(column_delta),
        }
    }

    /// Row component of the step.
    #[must_use]
    pub const fn row_delta(&self) -> i32 {
        self.row_delta
    }

    /// Column component of the step.
    #[must_use]
    pub const fn column_delta(&self) -> i32 {
        self.column_delta
    }

    /// Reports whether the step leaves the actor in place.
    #[must_use]
    pub const fn is_wait(&self) -> bool {
        self.row_delta == 0 && self.column_delta == 0
    }
}

const fn clamp_unit(value: i32) -> i32 {
    if value > 0 {
        1
    } else if value < 0 {
        -1
    } else {
        0
    }
}

/// Closed set of tokens the input translator may submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move or attack toward decreasing rows.
    Up,
    /// Move or attack toward increasing rows.
    Down,
    /// Move or attack toward decreasing columns.
    Left,
    /// Move or attack toward increasing columns.
    Right,
    /// Diagonal toward the upper left.
    UpLeft,
    /// Diagonal toward the upper right.
    UpRight,
    /// Diagonal toward the lower left.
    DownLeft,
    /// Diagonal toward the lower right.
    DownRight,
    /// Spend the turn without moving.
    Wait,
    /// End the session immediately.
    Quit,
    /// Input the translator could not map; never consumes a turn.
    Invalid,
}

impl Action {
    /// Every directional action in keypad order.
    pub const DIRECTIONS: [Action; 8] = [
        Action::UpLeft,
        Action::Up,
        Action::UpRight,
        Action::Left,
        Action::Right,
        Action::DownLeft,
        Action::Down,
        Action::DownRight,
    ];

    /// Step associated with a directional action, `None` otherwise.
    #[must_use]
    pub const fn step(self) -> Option<Step> {
        match self {
            Self::Up => Some(Step::new(-1, 0)),
            Self::Down => Some(Step::new(1, 0)),
            Self::Left => Some(Step::new(0, -1)),
            Self::Right => Some(Step::new(0, 1)),
            Self::UpLeft => Some(Step::new(-1, -1)),
            Self::UpRight => Some(Step::new(-1, 1)),
            Self::DownLeft => Some(Step::new(1, -1)),
            Self::DownRight => Some(Step::new(1, 1)),
            Self::Wait | Self::Quit | Self::Invalid => None,
        }
    }

    /// Reports whether the action names one of the eight directions.
    #[must_use]
    pub const fn is_direction(self) -> bool {
        self.step().is_some()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Unique identifier assigned to a hostile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HostileId(u32);

impl HostileId {
    /// Creates a new hostile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Kinds of hostiles that can inhabit the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    /// Weak melee hostile that chases the player.
    Bandit,
}

impl HostileKind {
    /// Name shown in log lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bandit => "Bandit",
        }
    }

    /// Health a freshly placed hostile of this kind starts with.
    #[must_use]
    pub const fn max_health(self) -> Health {
        match self {
            Self::Bandit => Health::new(10),
        }
    }

    /// Largest value the kind's damage roll can produce.
    #[must_use]
    pub const fn max_damage_roll(self) -> u32 {
        match self {
            Self::Bandit => 1,
        }
    }

    /// Chebyshev radius within which the hostile attacks instead of moving.
    #[must_use]
    pub const fn detection_radius(self) -> u32 {
        match self {
            Self::Bandit => 1,
        }
    }
}

/// Player starting health.
pub const PLAYER_MAX_HEALTH: Health = Health::new(15);

/// Largest value the player's damage roll can produce.
pub const PLAYER_MAX_DAMAGE_ROLL: u32 = 6;

/// Non-negative hit point amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Health(u32);

impl Health {
    /// Health of a dead actor.
    pub const ZERO: Self = Self(0);

    /// Creates a new health value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the raw hit point count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether no hit points remain.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts damage, stopping at zero.
    #[must_use]
    pub const fn saturating_sub(self, damage: u32) -> Self {
        Self(self.0.saturating_sub(damage))
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Cell currently occupied by the player.
    pub position: Position,
    /// Current hit points.
    pub health: Health,
    /// Hit points the player started with.
    pub max_health: Health,
}

impl PlayerSnapshot {
    /// Reports whether the player has died.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health.is_zero()
    }
}

/// Immutable representation of a single hostile's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostileSnapshot {
    /// Unique identifier assigned to the hostile.
    pub id: HostileId,
    /// Behaviour parameters of the hostile.
    pub kind: HostileKind,
    /// Cell currently occupied by the hostile.
    pub position: Position,
    /// Current hit points.
    pub health: Health,
    /// Hit points the hostile started with.
    pub max_health: Health,
}

impl HostileSnapshot {
    /// Reports whether the hostile has died.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health.is_zero()
    }
}

/// Read-only snapshot describing every live hostile in turn order.
#[derive(Clone, Debug, Default)]
pub struct HostileView {
    snapshots: Vec<HostileSnapshot>,
}

impl HostileView {
    /// Creates a new hostile view, preserving the provided order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<HostileSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &HostileSnapshot> {
        self.snapshots.iter()
    }

    /// Reports whether the view holds no hostiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<HostileSnapshot> {
        self.snapshots
    }
}
