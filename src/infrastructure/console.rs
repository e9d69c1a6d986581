use std::io::{self, BufRead, Write};

use crate::domain::board::HyperBoard;
use crate::domain::models::{BoardState, PlayerId};
use crate::domain::services::MoveSource;
use crate::error::PlacementError;

/// Anything a line of text can be read from.
pub trait LineReader {
    /// Appends the next line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineReader for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Standard input, locked only while one line is read so that both seats
/// of a two-person game can share it.
pub struct SharedStdin;

impl LineReader for SharedStdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Reads coordinates typed by a person.
pub struct HumanConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl HumanConsolePlayer<SharedStdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(SharedStdin, io::stdout())
    }
}

impl<R: LineReader, W: Write> HumanConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, player: PlayerId, dimension: usize) -> io::Result<Option<String>> {
        write!(
            self.output,
            "\n{} please input coordinates ({}) of move: ",
            player,
            coordinate_hint(dimension)
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// `<3rd index>.<rows>.<cols>` style description of the expected input.
fn coordinate_hint(dimension: usize) -> String {
    (0..dimension)
        .map(|axis| match dimension - axis {
            1 => "<cols>".to_string(),
            2 => "<rows>".to_string(),
            3 => "<3rd index>".to_string(),
            n => format!("<{}th index>", n),
        })
        .collect::<Vec<_>>()
        .join(".")
}

impl<S: BoardState, R: LineReader, W: Write> MoveSource<S> for HumanConsolePlayer<R, W> {
    fn propose_move(&mut self, board: &HyperBoard<S>, player: PlayerId) -> Option<String> {
        match self.prompt(player, board.dimension()) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("could not read a move for {}: {}", player, err);
                None
            }
        }
    }

    fn on_rejected(&mut self, error: &PlacementError, remaining_attempts: usize) {
        let reason = match error {
            PlacementError::NonNumericInput { .. } => {
                "There is a non-integer value between the '.' separators."
            }
            PlacementError::DimensionMismatch { .. } => {
                "The number of indexes does not match the number of dimensions."
            }
            PlacementError::AlreadyOccupied(_) => "That space is already claimed.",
            PlacementError::ImpossibleCoordinate(_) => "An index is outside the board.",
            PlacementError::GameOver => "The game is already over.",
        };
        let result = writeln!(self.output, "Input error on coordinate ({}). {}", error, reason)
            .and_then(|_| {
                writeln!(
                    self.output,
                    "Remaining attempts: {}; running out results in a random placement.",
                    remaining_attempts
                )
            });
        if let Err(err) = result {
            log::warn!("could not report a rejected move: {}", err);
        }
    }
}
