//! Vi-style key bindings.

use roguelike_core::Action;

const ESCAPE: char = '\u{1b}';

/// Translates a single key into the action it requests.
pub(crate) fn action_for_key(key: char) -> Action {
    match key {
        'h' => Action::Left,
        'j' => Action::Down,
        'k' => Action::Up,
        'l' => Action::Right,
        'y' => Action::UpLeft,
        'u' => Action::UpRight,
        'b' => Action::DownLeft,
        'n' => Action::DownRight,
        '.' => Action::Wait,
        'q' | ESCAPE => Action::Quit,
        _ => Action::Invalid,
    }
}

/// Splits an input line into one action per character.
pub(crate) fn actions_for_line(line: &str) -> impl Iterator<Item = Action> + '_ {
    line.chars().map(action_for_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vi_keys_cover_every_direction() {
        let keys = ['y', 'k', 'u', 'h', 'l', 'b', 'j', 'n'];
        let actions: Vec<Action> = keys.into_iter().map(action_for_key).collect();

        let mut expected = Action::DIRECTIONS.to_vec();
        expected.sort_by_key(|action| format!("{action:?}"));
        let mut found = actions.clone();
        found.sort_by_key(|action| format!("{action:?}"));
        assert_eq!(found, expected);
        assert!(actions.iter().all(|action| action.is_direction()));
    }

    #[test]
    fn wait_and_quit_keys() {
        assert_eq!(action_for_key('.'), Action::Wait);
        assert_eq!(action_for_key('q'), Action::Quit);
        assert_eq!(action_for_key(ESCAPE), Action::Quit);
    }

    #[test]
    fn unknown_keys_are_invalid() {
        for key in ['x', 'H', ' ', '5', '\t'] {
            assert_eq!(action_for_key(key), Action::Invalid, "key {key:?}");
        }
    }

    #[test]
    fn each_character_is_a_token() {
        let actions: Vec<Action> = actions_for_line("hl.x").collect();
        assert_eq!(
            actions,
            vec![Action::Left, Action::Right, Action::Wait, Action::Invalid]
        );
    }
}
