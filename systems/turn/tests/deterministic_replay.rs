use roguelike_core::{Action, Grid, HostileKind, Position};
use roguelike_system_turn::TurnController;
use roguelike_world::{query, HostilePlacement, SeededDice, World};

const SCRIPT: [Action; 16] = [
    Action::Right,
    Action::Right,
    Action::DownRight,
    Action::Wait,
    Action::Invalid,
    Action::Down,
    Action::Right,
    Action::Right,
    Action::Right,
    Action::Wait,
    Action::UpLeft,
    Action::Right,
    Action::Right,
    Action::Right,
    Action::Down,
    Action::Right,
];

fn keep(seed: u64) -> World {
    let mut rows = vec![vec![1u8; 9]; 9];
    for (index, row) in rows.iter_mut().enumerate() {
        if index == 0 || index == 8 {
            row.fill(0);
        } else {
            row[0] = 0;
            row[8] = 0;
        }
    }
    let grid = Grid::from_rows(&rows).expect("keep is rectangular");
    let hostiles = [
        HostilePlacement::new(HostileKind::Bandit, Position::new(5, 5)),
        HostilePlacement::new(HostileKind::Bandit, Position::new(3, 5)),
    ];
    World::new(grid, Position::new(2, 2), &hostiles, SeededDice::new(seed))
}

fn replay(seed: u64) -> (Vec<String>, Vec<Position>, u32) {
    let mut world = keep(seed);
    let mut controller = TurnController::new();
    let mut lines = controller.start(&mut world).log_lines;

    for action in SCRIPT {
        let outcome = controller.submit_input(&mut world, action);
        lines.extend(outcome.log_lines);
        if outcome.game_over {
            break;
        }
    }

    let positions = query::hostile_view(&world)
        .iter()
        .map(|hostile| hostile.position)
        .collect();
    (lines, positions, query::player(&world).health.get())
}

#[test]
fn identical_seeds_replay_identically() {
    let first = replay(0x5eed);
    let second = replay(0x5eed);

    assert_eq!(first, second, "turn replay diverged");
    assert_eq!(first.0.first().map(String::as_str), Some("Game start."));
}

#[test]
fn first_turn_is_independent_of_the_seed() {
    let mut world = keep(1);
    let mut controller = TurnController::new();

    let outcome = controller.submit_input(&mut world, Action::Right);

    // Neither bandit is adjacent yet, so both close in without rolling dice.
    assert_eq!(outcome.log_lines, vec!["Y:2 X:3 input:Right".to_owned()]);
    let positions: Vec<Position> = query::hostile_view(&world)
        .iter()
        .map(|hostile| hostile.position)
        .collect();
    assert_eq!(positions, vec![Position::new(4, 4), Position::new(2, 4)]);
}
