//! End-to-end sessions driven through an in-memory console.

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;
use tictactoe::{Console, GameMode, Orchestrator, PlayConfig, run_session};
use tictactoe_engine::{GameOutcome, Player as Mark};

/// Output sink the test can read back after the console is done with it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn console(input: &str) -> (Console, SharedBuffer) {
    let output = SharedBuffer::default();
    let console = Console::new(Cursor::new(input.to_string()), output.clone());
    (console, output)
}

#[test]
fn test_computer_vs_computer_draws() {
    let config = PlayConfig::default()
        .with_mode(GameMode::ComputerVsComputer)
        .with_replay(false);
    let (mut console, output) = console("");

    let outcomes = run_session(&config, &mut console).unwrap();

    assert_eq!(outcomes, vec![GameOutcome::Draw]);
    let text = output.contents();
    assert!(text.starts_with("TIC-TAC-TOE\n"));
    assert_eq!(text.matches("Computer X's turn...").count(), 5);
    assert_eq!(text.matches("Computer O's turn...").count(), 4);
    assert!(text.contains("It's a draw!"));
    assert!(text.trim_end().ends_with("GAME OVER."));
}

#[test]
fn test_replay_until_declined() {
    let config = PlayConfig::default().with_mode(GameMode::ComputerVsComputer);
    let (mut console, output) = console("y\nn\n");

    let outcomes = run_session(&config, &mut console).unwrap();

    assert_eq!(outcomes, vec![GameOutcome::Draw, GameOutcome::Draw]);
    assert_eq!(output.contents().matches("Play again? (y/n): ").count(), 2);
}

#[test]
fn test_human_loses_to_engine() {
    // The human (X) tries squares in row-major order. The engine answers in
    // the center, blocks at (0, 2) and completes the anti-diagonal.
    let config = PlayConfig::default()
        .with_mode(GameMode::HumanVsComputer)
        .with_replay(false);
    let (mut console, output) = console("0 0\n0 1\n0 2\n1 0\n");

    let outcomes = run_session(&config, &mut console).unwrap();

    assert_eq!(outcomes, vec![GameOutcome::Won(Mark::O)]);
    let text = output.contents();
    assert_eq!(text.matches("Invalid move. Try again.").count(), 1);
    assert!(text.contains("Player O wins!"));
    assert!(text.contains("X | X | O\n--+---+--\nX | O |  \n--+---+--\nO |   |  \n"));
}

#[test]
fn test_human_vs_human_from_menu() {
    let input = "5\n2\n0 0\n1 1\n0 1\n2 2\nbad\n0 2\nmaybe\nn\n";
    let (mut console, output) = console(input);

    let outcomes = run_session(&PlayConfig::default(), &mut console).unwrap();

    assert_eq!(outcomes, vec![GameOutcome::Won(Mark::X)]);
    let text = output.contents();
    assert!(text.contains("Invalid choice. Try again."));
    assert!(text.contains("2 - Human vs Human"));
    assert!(text.contains("Player O, enter row and column (0-2): "));
    assert!(text.contains("Player X wins!"));
    assert!(text.contains("Invalid input. Enter 'y' or 'n': "));
}

#[test]
fn test_human_can_play_o() {
    // Engine (X) opens top-left; the human's first attempt is occupied.
    let config = PlayConfig::default()
        .with_mode(GameMode::HumanVsComputer)
        .with_human(Mark::O)
        .with_replay(false);
    let orchestrator = Orchestrator::for_mode(*config.mode().as_ref().unwrap(), *config.human());
    assert_eq!(orchestrator.name(Mark::X), "Computer X");
    assert_eq!(orchestrator.name(Mark::O), "Human O");

    let (mut console, output) = console("0 0\n");
    let err = run_session(&config, &mut console).unwrap_err();

    assert!(err.to_string().contains("Input closed"));
    let text = output.contents();
    assert!(text.contains("Computer X's turn..."));
    assert!(text.contains("Invalid move. Try again."));
}
