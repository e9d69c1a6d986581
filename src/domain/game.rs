use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::board::{HyperBoard, Placement};
use crate::domain::coordinate::Coordinate;
use crate::domain::lines::Line;
use crate::domain::models::{BoardState, GameStatus, Player, PlayerId};
use crate::error::{BoardError, PlacementError};

/// The Game Aggregate Root.
/// It controls the lifecycle of the game, turns, and winning conditions.
pub struct GameEngine<S: BoardState> {
    board: HyperBoard<S>,
    players: [Player; 2],
    turn: PlayerId,
    status: GameStatus,
    rng: StdRng,
}

impl<S: BoardState> GameEngine<S> {
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        Self::with_rng(dimension, StdRng::from_entropy())
    }

    /// An engine whose random placements are reproducible.
    pub fn with_seed(dimension: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(dimension, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dimension: usize, rng: StdRng) -> Result<Self, BoardError> {
        Ok(Self {
            board: HyperBoard::new(dimension)?,
            players: [Player::new(PlayerId::First), Player::new(PlayerId::Second)],
            turn: PlayerId::First,
            status: GameStatus::InProgress,
            rng,
        })
    }

    /// Makes the exact center unplayable by claiming it with the blocker.
    pub fn lock_center(&mut self) -> Result<Coordinate, BoardError> {
        let center = self
            .board
            .center_coordinate()
            .ok_or(BoardError::NoCenter(self.board.dimension()))?;
        if self.board.round() > 0 {
            return Err(BoardError::AlreadyStarted);
        }
        self.board
            .place_blocker(&center)
            .map_err(|_| BoardError::AlreadyStarted)?;
        Ok(center)
    }

    /// Places for the player whose turn it is.
    pub fn play(&mut self, raw: &str) -> Result<Placement, PlacementError> {
        self.ensure_in_progress()?;
        let player = &mut self.players[self.turn.index()];
        let placement = self.board.place(raw, player)?;
        self.advance();
        Ok(placement)
    }

    pub fn play_coordinate(&mut self, coord: Coordinate) -> Result<Placement, PlacementError> {
        self.ensure_in_progress()?;
        let player = &mut self.players[self.turn.index()];
        let placement = self.board.place_coordinate(coord, player)?;
        self.advance();
        Ok(placement)
    }

    /// Random placement for the current player, retried until a free cell is hit.
    pub fn play_random(&mut self) -> Result<Placement, PlacementError> {
        self.ensure_in_progress()?;
        if self.board.is_full() {
            return Err(PlacementError::GameOver);
        }
        let player = &mut self.players[self.turn.index()];
        let placement = loop {
            match self.board.place_random(player, &mut self.rng) {
                Err(PlacementError::AlreadyOccupied(_)) => continue,
                other => break other?,
            }
        };
        self.advance();
        Ok(placement)
    }

    fn ensure_in_progress(&self) -> Result<(), PlacementError> {
        if self.status.is_terminal() {
            return Err(PlacementError::GameOver);
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.status = if let Some(winner) = self.board.winner() {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        };

        match self.status {
            GameStatus::InProgress => self.turn = self.turn.opponent(),
            GameStatus::Won(winner) => log::info!("{} wins after {} rounds", winner, self.board.round()),
            GameStatus::Drawn => log::info!("board filled without a winner"),
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &HyperBoard<S> {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.board.winner()
    }

    pub fn winning_line(&self) -> Option<&Line> {
        self.board.winning_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::FlatBoardState;

    type Engine = GameEngine<FlatBoardState>;

    #[test]
    fn test_turns_alternate() {
        let mut engine = Engine::with_seed(2, 1).unwrap();
        assert_eq!(engine.current_player(), PlayerId::First);
        engine.play("1.1").unwrap();
        assert_eq!(engine.current_player(), PlayerId::Second);
        engine.play("0.0").unwrap();
        assert_eq!(engine.current_player(), PlayerId::First);
        assert_eq!(engine.player(PlayerId::First).moves(), &[Coordinate::new(vec![1, 1])]);
    }

    #[test]
    fn test_rejection_keeps_turn() {
        let mut engine = Engine::with_seed(2, 1).unwrap();
        engine.play("1.1").unwrap();
        assert!(engine.play("1.1").is_err());
        assert_eq!(engine.current_player(), PlayerId::Second);
        assert_eq!(engine.board().round(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut engine = Engine::with_seed(2, 1).unwrap();
        for raw in ["0.0", "1.0", "0.1", "1.1", "0.2"] {
            engine.play(raw).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Won(PlayerId::First));
        assert_eq!(engine.winner(), Some(PlayerId::First));
        assert_eq!(engine.current_player(), PlayerId::First);
        assert_eq!(engine.play("2.2"), Err(PlacementError::GameOver));
        assert_eq!(engine.play_random(), Err(PlacementError::GameOver));
        assert_eq!(engine.board().round(), 5);
    }

    #[test]
    fn test_draw_ends_game() {
        let mut engine = Engine::with_seed(2, 1).unwrap();
        // O X O / O X X / X O O, alternating from O
        for raw in ["0.0", "0.1", "0.2", "1.1", "1.0", "1.2", "2.1", "2.0", "2.2"] {
            engine.play(raw).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Drawn);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.play_random(), Err(PlacementError::GameOver));
    }

    #[test]
    fn test_lock_center() {
        let mut engine = Engine::with_seed(4, 1).unwrap();
        let center = engine.lock_center().unwrap();
        assert_eq!(center, Coordinate::new(vec![2, 2, 2, 2]));
        assert_eq!(engine.board().round(), 1);
        assert_eq!(engine.current_player(), PlayerId::First);
        assert!(matches!(
            engine.play("2.2.2.2"),
            Err(PlacementError::AlreadyOccupied(_))
        ));
    }

    #[test]
    fn test_lock_center_rules() {
        let mut odd = Engine::with_seed(3, 1).unwrap();
        assert_eq!(odd.lock_center(), Err(BoardError::NoCenter(3)));

        let mut started = Engine::with_seed(4, 1).unwrap();
        started.play("0.0.0.0").unwrap();
        assert_eq!(started.lock_center(), Err(BoardError::AlreadyStarted));
    }

    #[test]
    fn test_random_play_fills_board() {
        let mut engine = Engine::with_seed(2, 99).unwrap();
        let mut moves = 0;
        while !engine.status().is_terminal() {
            engine.play_random().unwrap();
            moves += 1;
        }
        assert_eq!(engine.board().round(), moves);
        assert!(moves <= 9);
        if engine.status() == GameStatus::Drawn {
            assert!(engine.board().is_full());
        }
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = Engine::with_seed(3, 5).unwrap();
        let mut b = Engine::with_seed(3, 5).unwrap();
        for _ in 0..10 {
            assert_eq!(a.play_random().unwrap(), b.play_random().unwrap());
        }
    }
}
