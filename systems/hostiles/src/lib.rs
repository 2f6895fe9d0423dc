#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that decides what each hostile does on its turn.
//!
//! Decisions are recomputed from current positions every turn; nothing is
//! remembered between turns. A hostile next to the player attacks, otherwise
//! it steps toward the player along the first enterable chase candidate.

use roguelike_core::{Actor, Command, HostileSnapshot, PlayerSnapshot, Position, Step};

/// Outcome of a hostile's decision for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Strike the player; the hostile does not move this turn.
    Attack,
    /// Step toward the player.
    Advance(Step),
    /// Do nothing: dead, boxed in, or already on the player's cell.
    Idle,
}

/// Hostile decision system that emits attack or move commands.
#[derive(Debug, Default)]
pub struct HostileAi;

impl HostileAi {
    /// Creates a new hostile decision system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decides the hostile's action and queues the matching command.
    ///
    /// `can_enter` must report whether a cell is walkable and unoccupied right
    /// now; it is consulted in chase priority order.
    pub fn handle<F>(
        &self,
        hostile: &HostileSnapshot,
        player: &PlayerSnapshot,
        can_enter: F,
        out: &mut Vec<Command>,
    ) where
        F: Fn(Position) -> bool,
    {
        let actor = Actor::Hostile(hostile.id);
        match self.decide(hostile, player, can_enter) {
            Decision::Attack => out.push(Command::Attack {
                attacker: actor,
                defender: Actor::Player,
            }),
            Decision::Advance(step) => out.push(Command::MoveActor { actor, step }),
            Decision::Idle => {}
        }
    }

    /// Computes the hostile's decision without emitting commands.
    #[must_use]
    pub fn decide<F>(
        &self,
        hostile: &HostileSnapshot,
        player: &PlayerSnapshot,
        can_enter: F,
    ) -> Decision
    where
        F: Fn(Position) -> bool,
    {
        if hostile.is_dead() || player.is_dead() {
            return Decision::Idle;
        }

        if hero_nearby(hostile, player.position) {
            return Decision::Attack;
        }

        chase_candidates(hostile.position, player.position)
            .find(|step| can_enter(hostile.position.offset(*step)))
            .map_or(Decision::Idle, Decision::Advance)
    }
}

/// Reports whether the player stands within the hostile's detection radius.
#[must_use]
pub fn hero_nearby(hostile: &HostileSnapshot, player: Position) -> bool {
    hostile.position.chebyshev_distance(player) <= hostile.kind.detection_radius()
}

/// Enumerates chase steps from `from` toward `target` in priority order.
///
/// Row candidates are `{sign(dy), 0}` and column candidates `{sign(dx), 0}`,
/// each deduplicated. Steps are their cross product with rows outer, so the
/// diagonal comes first, then the vertical step, then the horizontal one. The
/// zero step is never produced.
pub fn chase_candidates(from: Position, target: Position) -> ChaseCandidates {
    let rows = axis_candidates(target.row().saturating_sub(from.row()));
    let columns = axis_candidates(target.column().saturating_sub(from.column()));

    let mut candidates = ChaseCandidates::default();
    for row_delta in rows.iter().flatten() {
        for column_delta in columns.iter().flatten() {
            let step = Step::new(*row_delta, *column_delta);
            if !step.is_wait() {
                candidates.push(step);
            }
        }
    }
    candidates
}

fn axis_candidates(delta: i32) -> [Option<i32>; 2] {
    match delta.signum() {
        0 => [Some(0), None],
        sign => [Some(sign), Some(0)],
    }
}

/// Fixed-capacity iterator over chase steps.
#[derive(Clone, Debug, Default)]
pub struct ChaseCandidates {
    buffer: [Option<Step>; 3],
    len: usize,
    cursor: usize,
}

impl ChaseCandidates {
    fn push(&mut self, step: Step) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = Some(step);
            self.len += 1;
        }
    }
}

impl Iterator for ChaseCandidates {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }

        let value = self.buffer[self.cursor];
        self.cursor += 1;
        value
    }
}
