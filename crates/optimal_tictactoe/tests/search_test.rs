//! Minimax scenarios and optimal-play guarantees.

use optimal_tictactoe::{
    Board, Move, Outcome, Player, actions, initial_state, minimax, optimal_moves, play_out,
    player, result, terminal, utility, value, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board notation")
}

#[test]
fn test_x_completes_top_row() {
    let b = board("XX./.../...");
    // (0,2) is one of several legal moves, and the only immediate win.
    assert_eq!(player(&b), Player::X);
    assert!(actions(&b).contains(&Move::new(0, 2)));
    assert_eq!(actions(&b).len(), 7);

    let mv = minimax(&b).expect("game not over");
    assert_eq!(mv, Move::new(0, 2));
    assert_eq!(utility(&result(&b, mv).unwrap()), 1);
}

#[test]
fn test_o_blocks_column() {
    // X holds (0,0) and (1,0); O must take (2,0).
    let b = board("X../XO./...");
    assert_eq!(player(&b), Player::O);
    assert_eq!(minimax(&b), Some(Move::new(2, 0)));
}

#[test]
fn test_x_blocks_diagonal() {
    // O threatens the main diagonal; X to move.
    let b = board("OX./.O./X..");
    assert_eq!(player(&b), Player::X);
    assert_eq!(minimax(&b), Some(Move::new(2, 2)));
}

#[test]
fn test_immediate_win_ends_game() {
    let b = board("X.X/.O./O..");
    assert_eq!(value(&b), 1);
    let mv = minimax(&b).unwrap();
    assert_eq!(mv, Move::new(0, 1));
    assert_eq!(winner(&result(&b, mv).unwrap()), Some(Player::X));
}

#[test]
fn test_o_avoids_corner_fork() {
    // Against opposite corners a corner reply lets X fork; edges hold.
    let b = board("X../.O./..X");
    assert_eq!(player(&b), Player::O);
    assert_eq!(value(&b), 0);
    assert_eq!(
        optimal_moves(&b),
        vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 2), Move::new(2, 1)]
    );
    assert_eq!(minimax(&b), Some(Move::new(0, 1)));
}

#[test]
fn test_empty_board_is_a_draw() {
    assert_eq!(value(&initial_state()), 0);
}

#[test]
fn test_every_opening_move_is_optimal() {
    assert_eq!(optimal_moves(&initial_state()).len(), 9);
    assert_eq!(minimax(&initial_state()), Some(Move::new(0, 0)));
}

#[test]
fn test_self_play_from_empty_board_draws() {
    let game = play_out(&initial_state());
    assert_eq!(game.outcome, Outcome::Draw);
    assert_eq!(game.moves.len(), 9);
    let last = game.last().expect("playout records the start board");
    assert!(terminal(last));
    assert_eq!(utility(last), 0);
}

#[test]
fn test_minimax_as_o_never_loses() {
    // X tries every move at every turn; O always follows minimax.
    fn explore(b: Board) {
        if terminal(&b) {
            assert_ne!(winner(&b), Some(Player::X), "X beat minimax: {}", b.to_notation());
            return;
        }
        match player(&b) {
            Player::X => {
                for mv in actions(&b) {
                    explore(result(&b, mv).unwrap());
                }
            }
            Player::O => {
                let mv = minimax(&b).expect("non-terminal board has a move");
                explore(result(&b, mv).unwrap());
            }
        }
    }
    explore(initial_state());
}

#[test]
fn test_winning_side_converts() {
    // Corner reply to opposite corners; X forks and self-play keeps the win.
    let b = board("X.O/.O./..X");
    assert_eq!(value(&b), 1);
    let game = play_out(&b);
    assert_eq!(game.outcome, Outcome::Winner(Player::X));
}

#[test]
fn test_searching_does_not_change_board() {
    let b = board("X../.O./...");
    let before = b;
    let _ = minimax(&b);
    let _ = optimal_moves(&b);
    assert_eq!(b, before);
}

#[test]
fn test_concurrent_searches_agree() {
    let boards = ["X../.../...", ".../.X./...", "XO./.../...", "X.O/X../..."]
        .map(board);
    let expected: Vec<_> = boards.iter().map(minimax).collect();
    let found: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = boards.iter().map(|b| s.spawn(move || minimax(b))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(found, expected);
}
