use std::io::{self, Write};

use crate::application::game_service::GameService;
use crate::domain::models::{BoardState, GameStatus};
use crate::infrastructure::display::{format_winning_path, render_board, RenderStyle};

pub struct ConsoleRunner;

impl ConsoleRunner {
    /// Plays the game to the end, printing the board after every turn.
    pub fn run<S, W>(
        game_service: &mut GameService<'_, S>,
        style: RenderStyle,
        out: &mut W,
    ) -> io::Result<GameStatus>
    where
        S: BoardState,
        W: Write,
    {
        writeln!(out, "{}", render_board(game_service.engine().board(), style))?;

        while !game_service.status().is_terminal() {
            match game_service.play_next_turn() {
                Ok(report) => {
                    if report.fallback {
                        writeln!(
                            out,
                            "{} was placed at random on {}.",
                            report.player, report.placement.coordinate
                        )?;
                    }
                    writeln!(out, "{}", render_board(game_service.engine().board(), style))?;
                }
                Err(e) => {
                    writeln!(out, "Error making move: {}", e)?;
                    break;
                }
            }
        }

        let status = game_service.status();
        Self::report(game_service, status, out)?;
        Ok(status)
    }

    fn report<S: BoardState, W: Write>(
        game_service: &GameService<'_, S>,
        status: GameStatus,
        out: &mut W,
    ) -> io::Result<()> {
        let engine = game_service.engine();
        match status {
            GameStatus::Won(winner) => {
                writeln!(
                    out,
                    "Victory to {} - respect. The {}'s win!",
                    winner,
                    winner.token().glyph()
                )?;
                if let Some(line) = engine.winning_line() {
                    write!(out, "The winning path is:\n{}", format_winning_path(line))?;
                }
                writeln!(out, "Game Over. Thanks for playing, play again.")
            }
            GameStatus::Drawn => writeln!(
                out,
                "Board has filled and no victor has been found. Game Over. Thanks for playing, try again."
            ),
            GameStatus::InProgress => writeln!(out, "Game stopped before it was decided."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::GameEngine;
    use crate::infrastructure::console::HumanConsolePlayer;
    use crate::infrastructure::random::RandomPlayer;
    use crate::infrastructure::storage::FlatBoardState;

    #[test]
    fn test_reports_victory_and_path() {
        let engine = GameEngine::<FlatBoardState>::with_seed(2, 1).unwrap();
        let first = HumanConsolePlayer::new("0.0\n0.1\n0.2\n".as_bytes(), io::sink());
        let second = HumanConsolePlayer::new("1.0\n1.1\n".as_bytes(), io::sink());
        let mut service = GameService::new(engine, Box::new(first), Box::new(second), 3);

        let mut out = Vec::new();
        let status = ConsoleRunner::run(&mut service, RenderStyle { color: false }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(status, GameStatus::Won(crate::domain::models::PlayerId::First));
        assert!(text.contains("Victory to Player 1 - respect. The O's win!"));
        assert!(text.contains("(0 0)\n"));
        assert!(text.contains("(0 2)\n"));
    }

    #[test]
    fn test_random_players_finish() {
        let engine = GameEngine::<FlatBoardState>::with_seed(3, 8).unwrap();
        let mut service = GameService::new(
            engine,
            Box::new(RandomPlayer::with_seed(1)),
            Box::new(RandomPlayer::with_seed(2)),
            3,
        );
        let mut out = Vec::new();
        let status = ConsoleRunner::run(&mut service, RenderStyle { color: false }, &mut out).unwrap();
        assert!(status.is_terminal());
        assert!(String::from_utf8(out).unwrap().contains("Game Over"));
    }
}
