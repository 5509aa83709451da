//! Tests for minimax search and best-move selection.

use tictactoe_engine::{
    Board, Game, GameOutcome, GameTransition, Player, Position, SearchError, Square, WIN_SCORE,
    best_move, evaluate_outcome, minimax, play_best_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_is_a_forced_draw() {
    let mut b = Board::new();
    assert_eq!(minimax(&mut b, true), 0);
    assert_eq!(minimax(&mut b, false), 0);
    assert_eq!(b, Board::new());
}

#[test]
fn test_opening_move_is_top_left() {
    // Every opening scores 0, so the first square in row-major order wins the tie.
    assert_eq!(best_move(&Board::new(), Player::X), Ok(Position::TopLeft));
}

#[test]
fn test_o_answers_corner_with_center() {
    assert_eq!(
        best_move(&board("X.. ... ..."), Player::O),
        Ok(Position::Center)
    );
}

#[test]
fn test_takes_last_square_when_it_wins() {
    // X O X / O X O / . X O  -> X on (2, 0) completes the anti-diagonal.
    let mut b = board("XOX OXO .XO");
    let pos = play_best_move(&mut b, Player::X).unwrap();
    assert_eq!(pos.coords(), (2, 0));
    assert_eq!(evaluate_outcome(&b), GameOutcome::Won(Player::X));
}

#[test]
fn test_takes_last_square_without_win() {
    let mut b = board("XOX XOO O.X");
    let pos = play_best_move(&mut b, Player::X).unwrap();
    assert_eq!(pos, Position::BottomCenter);
    assert_eq!(evaluate_outcome(&b), GameOutcome::Draw);
}

#[test]
fn test_blocks_open_line() {
    // X holds (0, 0) and (2, 0); O must take (1, 0).
    let b = board("X.. .O. X..");
    assert_eq!(best_move(&b, Player::O), Ok(Position::MiddleLeft));

    // O holds (0, 0) and (1, 1); X must take (2, 2).
    let b = board("OX. .O. X..");
    assert_eq!(best_move(&b, Player::X), Ok(Position::BottomRight));
}

#[test]
fn test_wins_immediately_instead_of_forcing_later() {
    // X X . / O O . / . . .  with O to move. (0, 2) also wins by force through
    // a double threat, but (1, 2) wins on the spot.
    let b = board("XX. OO. ...");
    let pos = best_move(&b, Player::O).unwrap();
    assert_eq!(pos.coords(), (1, 2));

    let mut after = b;
    after.set(pos, Square::Occupied(Player::O));
    assert_eq!(minimax(&mut after, true), -WIN_SCORE);
}

#[test]
fn test_x_wins_immediately() {
    assert_eq!(
        best_move(&board("XX. OO. ..."), Player::X),
        Ok(Position::TopRight)
    );
}

#[test]
fn test_play_best_move_changes_exactly_one_square() {
    let before = board("X.. .O. ..X");
    let mut after = before;
    let pos = play_best_move(&mut after, Player::O).unwrap();

    for p in Position::ALL {
        if p == pos {
            assert_eq!(before.get(p), Square::Empty);
            assert_eq!(after.get(p), Square::Occupied(Player::O));
        } else {
            assert_eq!(before.get(p), after.get(p));
        }
    }
}

#[test]
fn test_best_move_does_not_touch_board() {
    let b = board("X.. .O. ..X");
    let copy = b;
    best_move(&b, Player::O).unwrap();
    assert_eq!(b, copy);
}

#[test]
fn test_no_move_on_finished_boards() {
    let mut full = board("XOX XOO OXX");
    assert_eq!(
        play_best_move(&mut full, Player::X),
        Err(SearchError::BoardFull)
    );
    assert_eq!(full, board("XOX XOO OXX"));

    let won = board("OOO XX. X..");
    assert_eq!(
        best_move(&won, Player::X),
        Err(SearchError::AlreadyWon(Player::O))
    );
}

#[test]
fn test_computer_vs_computer_is_a_draw() {
    let mut b = Board::new();
    let mut mover = Player::X;

    let outcome = loop {
        play_best_move(&mut b, mover).unwrap();
        let x = b.count(Player::X);
        let o = b.count(Player::O);
        assert!(x == o || x == o + 1, "mark balance broken: {} X, {} O", x, o);

        let outcome = evaluate_outcome(&b);
        if outcome.is_terminal() {
            break outcome;
        }
        mover = mover.opponent();
    };

    assert_eq!(outcome, GameOutcome::Draw);
    assert!(b.is_full());
}

#[test]
fn test_computer_vs_computer_is_deterministic() {
    fn play() -> Vec<Position> {
        let mut game = Game::new();
        loop {
            let pos = game.best_move().unwrap();
            match game.place(pos).unwrap() {
                GameTransition::InProgress(next) => game = next,
                GameTransition::Won(done) => return done.history().to_vec(),
                GameTransition::Draw(done) => return done.history().to_vec(),
            }
        }
    }

    let first = play();
    assert_eq!(first.len(), 9);
    assert_eq!(first, play());
    assert_eq!(
        first,
        vec![
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::TopRight,
            Position::BottomLeft,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomRight,
        ]
    );
}

#[test]
fn test_engine_never_loses_to_any_reply() {
    // The engine plays O against every X line of play and must never lose.
    fn explore(b: &mut Board) {
        for pos in Position::ALL {
            if !b.is_empty(pos) {
                continue;
            }
            b.set(pos, Square::Occupied(Player::X));
            match evaluate_outcome(b) {
                GameOutcome::Won(winner) => panic!("{} beat the engine:\n{}", winner, b),
                GameOutcome::Draw => {}
                GameOutcome::InProgress => {
                    let reply = play_best_move(b, Player::O).unwrap();
                    if evaluate_outcome(b) == GameOutcome::InProgress {
                        explore(b);
                    }
                    b.clear(reply);
                }
            }
            b.clear(pos);
        }
    }

    let mut b = Board::new();
    explore(&mut b);
    assert_eq!(b, Board::new());
}
