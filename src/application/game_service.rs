use crate::domain::board::Placement;
use crate::domain::game::GameEngine;
use crate::domain::models::{BoardState, GameStatus, PlayerId};
use crate::domain::services::MoveSource;
use crate::error::PlacementError;

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub placement: Placement,
    /// Proposals the engine turned down before this placement.
    pub rejected: usize,
    /// The placement was made at random after the source gave up or ran out of attempts.
    pub fallback: bool,
}

pub struct GameService<'a, S: BoardState> {
    engine: GameEngine<S>,
    first: Box<dyn MoveSource<S> + 'a>,
    second: Box<dyn MoveSource<S> + 'a>,
    max_attempts: usize,
}

impl<'a, S: BoardState> GameService<'a, S> {
    pub fn new(
        engine: GameEngine<S>,
        first: Box<dyn MoveSource<S> + 'a>,
        second: Box<dyn MoveSource<S> + 'a>,
        max_attempts: usize,
    ) -> Self {
        GameService {
            engine,
            first,
            second,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn current_player(&self) -> PlayerId {
        self.engine.current_player()
    }

    /// Asks the current player's source for up to `max_attempts` proposals,
    /// then places at random for them.
    pub fn play_next_turn(&mut self) -> Result<TurnReport, PlacementError> {
        let player = self.engine.current_player();
        let source = match player {
            PlayerId::First => &mut self.first,
            PlayerId::Second => &mut self.second,
        };

        let mut rejected = 0;
        while rejected < self.max_attempts {
            let Some(raw) = source.propose_move(self.engine.board(), player) else {
                break;
            };
            match self.engine.play(&raw) {
                Ok(placement) => {
                    return Ok(TurnReport {
                        player,
                        placement,
                        rejected,
                        fallback: false,
                    })
                }
                Err(err) if err.is_recoverable() => {
                    rejected += 1;
                    source.on_rejected(&err, self.max_attempts - rejected);
                }
                Err(err) => return Err(err),
            }
        }

        log::debug!("{} gave no usable move, placing at random", player);
        let placement = self.engine.play_random()?;
        Ok(TurnReport {
            player,
            placement,
            rejected,
            fallback: true,
        })
    }

    /// Plays turns until the game ends.
    pub fn play_to_end(&mut self) -> Result<GameStatus, PlacementError> {
        while !self.engine.status().is_terminal() {
            self.play_next_turn()?;
        }
        Ok(self.engine.status())
    }

    pub fn into_engine(self) -> GameEngine<S> {
        self.engine
    }
}
