use std::collections::HashSet;

use proptest::prelude::*;
use roguelike_core::{Actor, Command, Event, Grid, HostileKind, Position, Step};
use roguelike_world::{self as world, query, HostilePlacement, SeededDice, World};

fn arena(seed: u64) -> World {
    let grid = Grid::from_rows(&[
        [0u8, 0, 0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1, 1, 0],
        [0, 1, 0, 1, 1, 1, 0],
        [0, 1, 1, 1, 0, 1, 0],
        [0, 1, 1, 1, 1, 1, 0],
        [0, 1, 1, 1, 1, 1, 0],
        [0, 0, 0, 0, 0, 0, 0],
    ])
    .expect("arena is rectangular");
    let hostiles = [
        HostilePlacement::new(HostileKind::Bandit, Position::new(5, 5)),
        HostilePlacement::new(HostileKind::Bandit, Position::new(3, 5)),
        HostilePlacement::new(HostileKind::Bandit, Position::new(1, 5)),
    ];
    World::new(grid, Position::new(1, 1), &hostiles, SeededDice::new(seed))
}

fn command_for(world: &World, op: u8, pick: usize, row_delta: i32, column_delta: i32) -> Command {
    let hostiles = query::hostile_view(world).into_vec();
    let hostile = hostiles
        .get(pick % hostiles.len().max(1))
        .map(|snapshot| Actor::Hostile(snapshot.id));
    let step = Step::new(row_delta, column_delta);
    match (op % 3, hostile) {
        (0, _) | (_, None) => Command::MoveActor {
            actor: Actor::Player,
            step,
        },
        (1, Some(actor)) => Command::MoveActor { actor, step },
        (_, Some(actor)) if pick % 2 == 0 => Command::Attack {
            attacker: Actor::Player,
            defender: actor,
        },
        (_, Some(actor)) => Command::Attack {
            attacker: actor,
            defender: Actor::Player,
        },
    }
}

fn assert_invariants(world: &World) {
    let grid = query::grid(world);
    let player = query::player(world);
    assert!(player.health <= player.max_health);
    assert!(grid.is_open(player.position), "player on blocked cell");

    let mut occupied = HashSet::new();
    if !player.is_dead() {
        assert!(occupied.insert(player.position));
    }
    for hostile in query::hostile_view(world).iter() {
        assert!(!hostile.is_dead(), "dead hostile left in live collection");
        assert!(hostile.health <= hostile.max_health);
        assert!(grid.is_open(hostile.position), "hostile on blocked cell");
        assert!(
            occupied.insert(hostile.position),
            "two actors share {}",
            hostile.position
        );
    }
}

proptest! {
    #[test]
    fn random_command_streams_preserve_world_invariants(
        seed in any::<u64>(),
        script in proptest::collection::vec((0u8..3, 0usize..6, -1i32..=1, -1i32..=1), 0..80),
    ) {
        let mut world = arena(seed);
        assert_invariants(&world);

        for (op, pick, row_delta, column_delta) in script {
            let command = command_for(&world, op, pick, row_delta, column_delta);
            let before = query::player(&world).position;
            let mut events = Vec::new();
            world::apply(&mut world, command, &mut events);

            for event in &events {
                match event {
                    Event::AttackResolved { attacker: Actor::Player, damage, .. } => {
                        prop_assert!(*damage <= 6);
                    }
                    Event::AttackResolved { damage, .. } => {
                        prop_assert!(*damage <= HostileKind::Bandit.max_damage_roll());
                    }
                    Event::MoveRejected { actor: Actor::Player, .. } => {
                        prop_assert_eq!(query::player(&world).position, before);
                    }
                    _ => {}
                }
            }
            assert_invariants(&world);
        }
    }
}
