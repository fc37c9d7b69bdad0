//! Property tests: every reachable engine state satisfies the invariants.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{EngineInvariants, InvariantSet};
use rewind_tictactoe::{Board, GameEngine, Player};

#[derive(Debug, Clone)]
enum Command {
    Play(usize),
    Jump(usize),
    Toggle,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0usize..11).prop_map(Command::Play),
        2 => (0usize..12).prop_map(Command::Jump),
        1 => Just(Command::Toggle),
    ]
}

fn apply(engine: &mut GameEngine, command: &Command) {
    match command {
        Command::Play(cell) => {
            let _ = engine.play(*cell);
        }
        Command::Jump(step) => {
            let _ = engine.jump_to(*step);
        }
        Command::Toggle => engine.toggle_history_order(),
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_command_sequence(commands in prop::collection::vec(command(), 0..40)) {
        let mut engine = GameEngine::new();
        for command in &commands {
            apply(&mut engine, command);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn history_starts_empty_and_grows_by_one_mark(commands in prop::collection::vec(command(), 0..40)) {
        let mut engine = GameEngine::new();
        for command in &commands {
            apply(&mut engine, command);
        }
        let entries = engine.history().entries();
        prop_assert_eq!(*entries[0].board(), Board::new());
        for (k, pair) in entries.windows(2).enumerate() {
            prop_assert_eq!(pair[0].board().occupied() + 1, pair[1].board().occupied());
            prop_assert_eq!(pair[1].board().occupied(), k + 1);
        }
    }

    #[test]
    fn marks_alternate_by_step_parity(commands in prop::collection::vec(command(), 0..40)) {
        let mut engine = GameEngine::new();
        for command in &commands {
            apply(&mut engine, command);
        }
        for (k, mv) in engine.history().moves().enumerate() {
            let mv = mv.expect("consecutive entries differ");
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(mv.player, expected);
        }
    }

    #[test]
    fn rejected_commands_leave_state_untouched(
        commands in prop::collection::vec(command(), 0..30),
        probe in command(),
    ) {
        let mut engine = GameEngine::new();
        for command in &commands {
            apply(&mut engine, command);
        }
        let before = engine.clone();
        let rejected = match &probe {
            Command::Play(cell) => engine.play(*cell).is_err(),
            Command::Jump(step) => engine.jump_to(*step).is_err(),
            Command::Toggle => false,
        };
        if rejected {
            prop_assert_eq!(engine, before);
        }
    }

    #[test]
    fn descending_is_reverse_of_ascending(commands in prop::collection::vec(command(), 0..30)) {
        let mut engine = GameEngine::new();
        for command in &commands {
            apply(&mut engine, command);
        }
        let first: Vec<_> = engine.history_descriptions().collect();
        engine.toggle_history_order();
        let mut second: Vec<_> = engine.history_descriptions().collect();
        second.reverse();
        prop_assert_eq!(first, second);
    }
}
