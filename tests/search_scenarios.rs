//! Search behaviour: pruning equivalence, tactics and self-play

mod common;

use common::all_reachable_states;
use tictactoe_negamax::{
    BoardState, EngineConfig, Move, Outcome, SearchStrategy, Side, best_move, full_search,
    parallel_best_move,
    pipeline::{EngineOpponent, MatchConfig, MatchRunner, RandomOpponent, play_game},
};

#[test]
fn search_is_deterministic() {
    for label in ["", "X........", "XO..X...._O", "X.O.O.X.._X"] {
        let state = if label.is_empty() {
            BoardState::new()
        } else {
            BoardState::from_string(label).unwrap()
        };
        let first = best_move(&state, 8).unwrap();
        let second = best_move(&state, 8).unwrap();
        assert_eq!(first, second, "{label}");
    }
}

#[test]
fn pruning_matches_full_search_to_the_end() {
    for state in all_reachable_states() {
        if state.occupied_count() < 4 {
            continue;
        }
        let pruned = best_move(&state, 9).unwrap();
        let full = full_search(&state, 9).unwrap();
        assert_eq!(pruned.score, full.score, "{}", state.encode());
        assert_eq!(pruned.best_move, full.best_move, "{}", state.encode());
        assert!(pruned.stats.nodes <= full.stats.nodes);
    }
}

#[test]
fn pruning_matches_full_search_at_shallow_depth() {
    for state in all_reachable_states() {
        if state.occupied_count() > 3 {
            continue;
        }
        for depth in [1, 2, 4] {
            let pruned = best_move(&state, depth).unwrap();
            let full = full_search(&state, depth).unwrap();
            assert_eq!(pruned.score, full.score, "{} depth {depth}", state.encode());
            assert_eq!(
                pruned.best_move,
                full.best_move,
                "{} depth {depth}",
                state.encode()
            );
        }
    }
}

#[test]
fn pruning_matches_full_search_from_empty_board() {
    for first in [Side::Human, Side::Computer] {
        let state = BoardState::new_with_side(first);
        let pruned = best_move(&state, 8).unwrap();
        let full = full_search(&state, 8).unwrap();
        assert_eq!(pruned.score, full.score);
        assert_eq!(pruned.best_move, full.best_move);
        assert!(pruned.stats.nodes < full.stats.nodes);
    }
}

#[test]
fn parallel_matches_sequential() {
    for state in all_reachable_states().into_iter().step_by(11) {
        for depth in [1, 3, 9] {
            let sequential = best_move(&state, depth).unwrap();
            let parallel = parallel_best_move(&state, depth).unwrap();
            assert_eq!(sequential.score, parallel.score, "{}", state.encode());
            assert_eq!(sequential.best_move, parallel.best_move, "{}", state.encode());
        }
    }
}

#[test]
fn best_move_is_legal_on_every_open_position() {
    for state in all_reachable_states().into_iter().step_by(5) {
        let result = best_move(&state, 8).unwrap();
        if state.is_terminal() {
            assert_eq!(result.best_move, None);
            assert_eq!(result.score, state.evaluate(8));
        } else {
            let mv = result.best_move.unwrap();
            assert!(state.legal_moves().contains(&mv));
        }
    }
}

#[test]
fn immediate_win_is_taken() {
    // O O .
    // X X .
    // X . .
    let state = BoardState::from_string("OO.XX.X.._O").unwrap();
    let result = best_move(&state, 8).unwrap();
    assert_eq!(result.best_move, Some(Move::new(0, 2)));
    assert_eq!(result.score, 800);

    // mirrored: the human side finds the same win
    let mirror = state.swap_sides();
    let mirrored = best_move(&mirror, 8).unwrap();
    assert_eq!(mirrored.best_move, Some(Move::new(0, 2)));
    assert_eq!(mirrored.score, 800);
}

#[test]
fn open_two_is_blocked() {
    // X X .
    // . O .
    // . . .
    let state = BoardState::from_string("XX..O....").unwrap();
    for depth in [2, 4, 8] {
        let result = best_move(&state, depth).unwrap();
        assert_eq!(result.best_move, Some(Move::new(0, 2)), "depth {depth}");
    }

    // X . .
    // X O .
    // . . .
    let state = BoardState::from_string("X..XO....").unwrap();
    let result = best_move(&state, 8).unwrap();
    assert_eq!(result.best_move, Some(Move::new(2, 0)));
}

#[test]
fn mirrored_positions_get_the_same_answer() {
    for state in all_reachable_states().into_iter().step_by(13) {
        let original = best_move(&state, 6).unwrap();
        let mirrored = best_move(&state.swap_sides(), 6).unwrap();
        assert_eq!(original.score, mirrored.score);
        assert_eq!(original.best_move, mirrored.best_move);
    }
}

#[test]
fn engine_self_play_draws() {
    for strategy in [SearchStrategy::AlphaBeta, SearchStrategy::ParallelRoot] {
        let config = EngineConfig::default().with_strategy(strategy);
        for first in [Side::Human, Side::Computer] {
            let mut computer = EngineOpponent::new("computer", config).unwrap();
            let mut human = EngineOpponent::new("human", config).unwrap();
            let game = play_game(&mut computer, &mut human, first, 1, &mut []).unwrap();
            assert_eq!(game.outcome(), Some(Outcome::Draw), "{strategy:?} {first}");
            assert_eq!(game.moves().len(), 9);
        }
    }
}

#[test]
fn engine_never_loses_to_random_play() {
    let mut runner = MatchRunner::new(MatchConfig::default().with_games(40).with_seed(Some(2024)));
    let mut engine = EngineOpponent::new("engine", EngineConfig::default()).unwrap();
    let mut random = RandomOpponent::new("random");
    let summary = runner.run(&mut engine, &mut random).unwrap();

    assert_eq!(summary.games, 40);
    assert_eq!(summary.human_wins, 0);
    assert!(summary.computer_wins > 0);
}
