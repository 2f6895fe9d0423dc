//! Answers "who stands here" for the player and the live hostiles.
//!
//! Lookups scan the actor list directly. Sessions hold tens of actors at most,
//! and scanning keeps removals visible immediately without a second index to
//! keep in sync.

use roguelike_core::{Actor, Position};

use crate::{actors::Hostile, World};

impl World {
    pub(crate) fn occupant_at(&self, position: Position) -> Option<Actor> {
        if self.is_player_at(position) {
            return Some(Actor::Player);
        }
        self.hostile_at(position)
            .map(|hostile| Actor::Hostile(hostile.id))
    }

    pub(crate) fn hostile_at(&self, position: Position) -> Option<&Hostile> {
        self.hostiles
            .iter()
            .find(|hostile| !hostile.body.is_dead() && hostile.body.position == position)
    }

    pub(crate) fn is_player_at(&self, position: Position) -> bool {
        !self.player.body.is_dead() && self.player.body.position == position
    }
}
