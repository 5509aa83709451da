//! Line-oriented console I/O: board rendering, menus and move entry.

use crate::config::GameMode;
use derive_more::Display;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tictactoe_engine::{Board, Position};
use tracing::{debug, instrument};

/// Reasons a line of human input is not a playable square.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// The line is not two integers.
    #[display("Expected row and column, got {:?}", _0)]
    Malformed(String),

    /// A coordinate is outside 0-2.
    #[display("Row {} / column {} is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for InputError {}

/// Parses `"row col"` (whitespace or comma separated, zero-based) into a
/// position on `board` that is still empty.
pub fn parse_move(line: &str, board: &Board) -> Result<Position, InputError> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(InputError::Malformed(line.trim().to_string()));
    };
    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err(InputError::Malformed(line.trim().to_string()));
    };

    let pos = Position::from_coords(row, col).ok_or(InputError::OutOfRange { row, col })?;
    if !board.is_empty(pos) {
        return Err(InputError::Occupied(pos));
    }
    Ok(pos)
}

/// Console bound to an input and an output stream.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    /// Creates a console over arbitrary streams.
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    /// Reads one line without its terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes `text` without a newline and flushes.
    pub fn prompt(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Renders the board surrounded by blank lines.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "\n{}\n", board)?;
        self.output.flush()
    }

    /// Shows the mode menu until a valid choice is read.
    ///
    /// # Errors
    ///
    /// Fails with `UnexpectedEof` if input ends before a choice is made.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self) -> io::Result<GameMode> {
        loop {
            self.say("\nSelect mode:")?;
            for (choice, mode) in GameMode::iter().enumerate() {
                self.say(format!("{} - {}", choice, mode))?;
            }
            self.prompt("Choice: ")?;

            let Some(line) = self.read_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Input closed before a mode was chosen",
                ));
            };

            if let Some(mode) = line.trim().parse().ok().and_then(GameMode::from_choice) {
                debug!(%mode, "Mode selected");
                return Ok(mode);
            }
            self.say("Invalid choice. Try again.")?;
        }
    }

    /// Asks whether to play another round. End of input means no.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        self.prompt("\nPlay again? (y/n): ")?;
        while let Some(line) = self.read_line()? {
            match line.trim().chars().next() {
                Some('y' | 'Y') => return Ok(true),
                Some('n' | 'N') => return Ok(false),
                _ => self.prompt("Invalid input. Enter 'y' or 'n': ")?,
            }
        }
        Ok(false)
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
