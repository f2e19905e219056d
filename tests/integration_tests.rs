//! Integration tests for kinarow
//!
//! These exercise the board model, the heuristic and the search engine through
//! the public API. Randomised checks use seeded generators so failures can be
//! replayed.

use kinarow::config::{Rules, SearchConfig};
use kinarow::error::ConfigError;
use kinarow::constants::WIN_SCORE;
use kinarow::eval::evaluate;
use kinarow::position::{
    Move, Player, Position, apply_move, is_draw, is_win, legal_moves, lines, winner,
};
use kinarow::search::{SearchResult, minimax, search, search_with_stats};

// =============================================================================
// Helper functions
// =============================================================================

fn rules() -> Rules {
    Rules::default()
}

fn pos(text: &str) -> Position {
    Position::parse(text, &rules()).unwrap()
}

fn depth(d: u32) -> SearchConfig {
    SearchConfig::new(d).unwrap()
}

/// Play random alternating moves from the empty board, stopping early if
/// someone wins.
fn random_position(rng: &mut fastrand::Rng, rules: &Rules, plies: usize) -> Position {
    let mut p = Position::empty(rules);
    let mut side = Player::X;
    for _ in 0..plies {
        let moves = legal_moves(&p);
        if moves.is_empty() || winner(&p, rules).is_some() {
            break;
        }
        let mv = moves[rng.usize(..moves.len())];
        p = apply_move(&p, rules, mv, side).unwrap();
        side = side.opponent();
    }
    p
}

/// Brute-force win check: any run of at least `k` markers in any direction.
fn has_run(p: &Position, player: Player, k: usize) -> bool {
    let n = p.size() as isize;
    let dirs = [(0, 1), (1, 0), (1, 1), (1, -1)];
    for r in 0..n {
        for c in 0..n {
            for (dr, dc) in dirs {
                let mut len = 0;
                let (mut rr, mut cc) = (r, c);
                while rr >= 0
                    && rr < n
                    && cc >= 0
                    && cc < n
                    && p.get(Move::new(rr as usize, cc as usize)) == Some(player)
                {
                    len += 1;
                    rr += dr;
                    cc += dc;
                }
                if len >= k {
                    return true;
                }
            }
        }
    }
    false
}

fn all_rules() -> Vec<Rules> {
    vec![
        Rules::new(3, 3).unwrap(),
        Rules::new(4, 3).unwrap(),
        Rules::new(4, 4).unwrap(),
        Rules::new(5, 4).unwrap(),
        Rules::new(6, 3).unwrap(),
    ]
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_malformed_settings_fail_before_search() {
    assert!(matches!(
        Rules::new(4, 5),
        Err(ConfigError::WinLength { win_length: 5, .. })
    ));
    assert!(matches!(
        Rules::new(8, 3),
        Err(ConfigError::BoardSize { size: 8, .. })
    ));
    assert!(matches!(
        SearchConfig::new(0),
        Err(ConfigError::Depth { depth: 0, .. })
    ));
}

#[test]
fn test_every_accepted_setting_searches() {
    for r in all_rules() {
        let result = search(&Position::empty(&r), &r, &depth(1), true).unwrap();
        assert!(result.best_move.is_some(), "{r:?}");
    }
}

// =============================================================================
// Board model
// =============================================================================

#[test]
fn test_is_win_matches_brute_force() {
    let mut rng = fastrand::Rng::with_seed(17);
    for r in all_rules() {
        for _ in 0..200 {
            let plies = rng.usize(..=r.size() * r.size());
            let p = random_position(&mut rng, &r, plies);
            for player in [Player::X, Player::O] {
                assert_eq!(
                    is_win(&p, &r, player),
                    has_run(&p, player, r.win_length()),
                    "{player} on\n{p}"
                );
            }
        }
    }
}

#[test]
fn test_every_line_is_a_win_for_its_owner_only() {
    for r in all_rules() {
        for line in lines(&r) {
            let mut p = Position::empty(&r);
            for mv in line.cells() {
                p = apply_move(&p, &r, mv, Player::O).unwrap();
            }
            assert!(is_win(&p, &r, Player::O), "{line:?}");
            assert!(!is_win(&p, &r, Player::X), "{line:?}");
        }
    }
}

#[test]
fn test_one_short_is_not_a_win() {
    for r in all_rules() {
        for line in lines(&r) {
            let mut p = Position::empty(&r);
            for mv in line.cells().skip(1) {
                p = apply_move(&p, &r, mv, Player::X).unwrap();
            }
            assert!(!is_win(&p, &r, Player::X), "{line:?}");
        }
    }
}

#[test]
fn test_full_board_has_no_moves_and_is_draw() {
    let p = pos("XOXO/XOXO/OXOX/OXOX");
    assert!(!is_win(&p, &rules(), Player::X));
    assert!(!is_win(&p, &rules(), Player::O));
    assert!(legal_moves(&p).is_empty());
    assert!(is_draw(&p));
}

// =============================================================================
// Heuristic
// =============================================================================

#[test]
fn test_evaluate_antisymmetric_under_swap() {
    let mut rng = fastrand::Rng::with_seed(99);
    for r in all_rules() {
        for _ in 0..200 {
            let plies = rng.usize(..=r.size() * r.size());
            let p = random_position(&mut rng, &r, plies);
            assert_eq!(evaluate(&p.swapped(), &r), -evaluate(&p, &r), "\n{p}");
        }
    }
}

#[test]
fn test_center_opening_scores_seven_lines() {
    let r = rules();
    let p = apply_move(&Position::empty(&r), &r, Move::new(1, 1), Player::X).unwrap();
    let through_center = lines(&r)
        .filter(|l| l.cells().any(|mv| mv == Move::new(1, 1)))
        .count();
    assert_eq!(through_center, 7);
    assert_eq!(evaluate(&p, &r), 7);
}

#[test]
fn test_evaluate_mixed_position() {
    // X X on row 0: +10 for the near-win segment, +1 for the segment through
    // (0,1) only, and +1 for each column and `\` segment from (0,0) and (0,1).
    // O at (3,3) costs -1 for its row, column and diagonal segments.
    let p = pos("XX../..../..../...O");
    assert_eq!(evaluate(&p, &rules()), 15 - 3);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_horizon_at_root_returns_evaluation() {
    let result = minimax(&Position::empty(&rules()), &rules(), 0, true, 0);
    assert_eq!(result.score, 0);
    assert_eq!(result.best_move, None);
}

#[test]
fn test_already_won_returns_sentinel_without_move() {
    let p = pos("..../.XXX/OO../....");
    for d in 1..=3 {
        let result = search(&p, &rules(), &depth(d), true).unwrap();
        assert_eq!(
            result,
            SearchResult {
                score: WIN_SCORE,
                best_move: None
            }
        );
    }
}

#[test]
fn test_finds_forced_win_in_one() {
    let p = pos("X.../X.../.OO./...O");
    for d in 1..=3 {
        let result = search(&p, &rules(), &depth(d), true).unwrap();
        assert_eq!(result.best_move, Some(Move::new(2, 0)), "depth {d}");
        assert_eq!(result.score, WIN_SCORE - 1, "depth {d}");
        let child = apply_move(&p, &rules(), Move::new(2, 0), Player::X).unwrap();
        assert!(is_win(&child, &rules(), Player::X));
    }
}

#[test]
fn test_prefers_faster_win() {
    // X can win now at (0,2); any other move only wins later, if at all.
    let p = pos("XX../O.../O.../....");
    let result = search(&p, &rules(), &depth(3), true).unwrap();
    assert_eq!(result.best_move, Some(Move::new(0, 2)));
    assert_eq!(result.score, WIN_SCORE - 1);
}

#[test]
fn test_minimizer_prefers_slower_loss() {
    // O cannot stop both X threats; the best it can do is lose at ply 2.
    let p = pos("XX../X.../.O../...O");
    let result = search(&p, &rules(), &depth(2), false).unwrap();
    assert_eq!(result.score, WIN_SCORE - 2);
    assert!(result.best_move.is_some());
}

#[test]
fn test_search_repeatable() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..10 {
        let p = random_position(&mut rng, &rules(), 4);
        let a = search(&p, &rules(), &depth(2), true).unwrap();
        let b = search(&p, &rules(), &depth(2), true).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_search_symmetric_under_swap() {
    let mut rng = fastrand::Rng::with_seed(23);
    for _ in 0..10 {
        let p = random_position(&mut rng, &rules(), 5);
        if winner(&p, &rules()).is_some() {
            continue;
        }
        let max = search(&p, &rules(), &depth(2), true).unwrap();
        let min = search(&p.swapped(), &rules(), &depth(2), false).unwrap();
        assert_eq!(max.score, -min.score, "\n{p}");
        assert_eq!(max.best_move, min.best_move, "\n{p}");
    }
}

#[test]
fn test_search_leaves_position_untouched() {
    let p = pos("X.../.O../..../....");
    let copy = p;
    search(&p, &rules(), &depth(3), true).unwrap();
    assert_eq!(p, copy);
}

#[test]
fn test_search_expands_every_legal_move() {
    let mut rng = fastrand::Rng::with_seed(31);
    for r in all_rules() {
        for _ in 0..20 {
            let plies = rng.usize(..r.size() * r.size());
            let p = random_position(&mut rng, &r, plies);
            if winner(&p, &r).is_some() || is_draw(&p) {
                continue;
            }
            let (_, stats) = search_with_stats(&p, &r, &depth(1), true).unwrap();
            assert_eq!(stats.nodes, 1 + legal_moves(&p).len() as u64, "\n{p}");
        }
    }
}
