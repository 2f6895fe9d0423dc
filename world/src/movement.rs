//! The single rule through which any actor changes position.

use roguelike_core::{Actor, Event, Position, Step};

use crate::World;

/// Result of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    /// The actor now stands on `to`.
    Moved { from: Position, to: Position },
    /// A zero step; always legal, changes nothing.
    Stayed,
    /// The target was blocked, occupied or off the map.
    Rejected { target: Position },
    /// The actor is dead or no longer exists.
    Inert,
}

impl World {
    /// Target is on the map, walkable and free of live actors.
    pub(crate) fn can_enter(&self, target: Position) -> bool {
        self.grid.is_open(target) && self.occupant_at(target).is_none()
    }

    pub(crate) fn try_move(&mut self, actor: Actor, step: Step) -> MoveOutcome {
        let Some(body) = self.body(actor) else {
            return MoveOutcome::Inert;
        };
        if body.is_dead() {
            return MoveOutcome::Inert;
        }
        if step.is_wait() {
            return MoveOutcome::Stayed;
        }

        let from = body.position;
        let target = from.offset(step);
        if !self.can_enter(target) {
            return MoveOutcome::Rejected { target };
        }

        match self.body_mut(actor) {
            Some(body) => {
                body.position = target;
                MoveOutcome::Moved { from, to: target }
            }
            None => MoveOutcome::Inert,
        }
    }
}

pub(crate) fn apply_move(world: &mut World, actor: Actor, step: Step, out_events: &mut Vec<Event>) {
    match world.try_move(actor, step) {
        MoveOutcome::Moved { from, to } => out_events.push(Event::ActorMoved { actor, from, to }),
        MoveOutcome::Rejected { target } => {
            out_events.push(Event::MoveRejected { actor, target });
        }
        MoveOutcome::Stayed | MoveOutcome::Inert => {}
    }
}
