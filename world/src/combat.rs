//! Damage rolls and their application. The only path that changes health.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roguelike_core::{Actor, Event, Health};

use crate::World;

/// Source of attack damage injected into the world.
pub trait DamageRoll: fmt::Debug {
    /// Rolls a value uniformly distributed over `0..=max`.
    fn roll(&mut self, max: u32) -> u32;
}

/// Reproducible dice backed by a seeded ChaCha stream.
#[derive(Clone, Debug)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    /// Creates dice whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DamageRoll for SeededDice {
    fn roll(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AttackOutcome {
    pub(crate) damage: u32,
    pub(crate) remaining: Health,
}

impl World {
    fn max_damage_roll(&self, actor: Actor) -> Option<u32> {
        match actor {
            Actor::Player => Some(self.player.max_damage_roll()),
            Actor::Hostile(id) => self.hostile(id).map(|hostile| hostile.kind.max_damage_roll()),
        }
    }

    /// Rolls the attacker's damage and applies it to the defender.
    ///
    /// Returns `None` when either side is missing or already dead.
    pub(crate) fn resolve_attack(
        &mut self,
        attacker: Actor,
        defender: Actor,
    ) -> Option<AttackOutcome> {
        if self.body(attacker)?.is_dead() || self.body(defender)?.is_dead() {
            return None;
        }
        let max = self.max_damage_roll(attacker)?;
        let damage = self.dice.roll(max).min(max);
        let remaining = self.body_mut(defender)?.take_damage(damage);
        Some(AttackOutcome { damage, remaining })
    }
}

pub(crate) fn apply_attack(
    world: &mut World,
    attacker: Actor,
    defender: Actor,
    out_events: &mut Vec<Event>,
) {
    let Some(outcome) = world.resolve_attack(attacker, defender) else {
        return;
    };
    out_events.push(Event::AttackResolved {
        attacker,
        defender,
        damage: outcome.damage,
        remaining: outcome.remaining,
    });
    if !outcome.remaining.is_zero() {
        return;
    }

    match defender {
        Actor::Player => out_events.push(Event::PlayerDied),
        Actor::Hostile(id) => {
            if let Some(hostile) = world.remove_hostile(id) {
                tracing::debug!(hostile = id.get(), "hostile removed");
                out_events.push(Event::HostileDied {
                    hostile: id,
                    kind: hostile.kind,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use roguelike_core::{
        Actor, Command, Event, Health, HostileId, HostileKind, Position, PLAYER_MAX_DAMAGE_ROLL,
    };

    use super::{DamageRoll, SeededDice};
    use crate::test_support::{bandit, world_with};
    use crate::{apply, query};

    const BANDIT: Actor = Actor::Hostile(HostileId::new(0));

    fn attack(world: &mut crate::World, attacker: Actor, defender: Actor) -> Vec<Event> {
        let mut events = Vec::new();
        apply(world, Command::Attack { attacker, defender }, &mut events);
        events
    }

    #[test]
    fn seeded_dice_stay_within_bounds() {
        let mut dice = SeededDice::new(7);
        for _ in 0..2_000 {
            assert!(dice.roll(PLAYER_MAX_DAMAGE_ROLL) <= PLAYER_MAX_DAMAGE_ROLL);
            assert!(dice.roll(1) <= 1);
            assert_eq!(dice.roll(0), 0);
        }
    }

    #[test]
    fn seeded_dice_cover_the_whole_range() {
        let mut dice = SeededDice::new(11);
        let mut seen = [false; 7];
        for _ in 0..2_000 {
            let value = dice.roll(PLAYER_MAX_DAMAGE_ROLL) as usize;
            seen[value] = true;
        }
        assert!(seen.iter().all(|hit| *hit), "rolls {seen:?}");
    }

    #[test]
    fn same_seed_reproduces_the_same_rolls() {
        let mut first = SeededDice::new(99);
        let mut second = SeededDice::new(99);
        let left: Vec<u32> = (0..32).map(|_| first.roll(6)).collect();
        let right: Vec<u32> = (0..32).map(|_| second.roll(6)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn player_attack_reduces_hostile_health() {
        let mut world = world_with(Position::new(2, 3), &[bandit(2, 4)], 4);

        let events = attack(&mut world, Actor::Player, BANDIT);

        assert_eq!(
            events,
            vec![Event::AttackResolved {
                attacker: Actor::Player,
                defender: BANDIT,
                damage: 4,
                remaining: Health::new(6),
            }]
        );
        assert_eq!(
            query::hostile(&world, HostileId::new(0)).map(|h| h.health),
            Some(Health::new(6))
        );
    }

    #[test]
    fn lethal_attack_removes_the_hostile() {
        let mut world = world_with(Position::new(2, 3), &[bandit(2, 4)], 6);

        let _ = attack(&mut world, Actor::Player, BANDIT);
        let events = attack(&mut world, Actor::Player, BANDIT);

        assert_eq!(
            events,
            vec![
                Event::AttackResolved {
                    attacker: Actor::Player,
                    defender: BANDIT,
                    damage: 6,
                    remaining: Health::ZERO,
                },
                Event::HostileDied {
                    hostile: HostileId::new(0),
                    kind: HostileKind::Bandit,
                },
            ]
        );
        assert!(query::hostile_view(&world).is_empty());
        assert!(attack(&mut world, Actor::Player, BANDIT).is_empty());
    }

    #[test]
    fn hostile_damage_is_capped_by_its_roll() {
        let mut world = world_with(Position::new(2, 3), &[bandit(2, 4)], 6);

        let events = attack(&mut world, BANDIT, Actor::Player);

        assert_eq!(
            events,
            vec![Event::AttackResolved {
                attacker: BANDIT,
                defender: Actor::Player,
                damage: 1,
                remaining: Health::new(14),
            }]
        );
    }

    #[test]
    fn player_death_is_reported_and_ends_further_attacks() {
        let mut world = world_with(Position::new(2, 3), &[bandit(2, 4)], 1);

        for _ in 0..14 {
            let _ = attack(&mut world, BANDIT, Actor::Player);
        }
        let last = attack(&mut world, BANDIT, Actor::Player);

        assert_eq!(last.last(), Some(&Event::PlayerDied));
        assert!(query::player(&world).is_dead());
        assert!(attack(&mut world, BANDIT, Actor::Player).is_empty());
        assert!(attack(&mut world, Actor::Player, BANDIT).is_empty());
    }

    #[test]
    fn zero_damage_rolls_leave_health_untouched() {
        let mut world = world_with(Position::new(2, 3), &[bandit(2, 4)], 0);

        let _ = attack(&mut world, Actor::Player, BANDIT);

        assert_eq!(
            query::hostile(&world, HostileId::new(0)).map(|h| h.health),
            Some(HostileKind::Bandit.max_health())
        );
    }
}
