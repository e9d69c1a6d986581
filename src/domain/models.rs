use std::fmt::{self, Debug};

use crate::domain::coordinate::Coordinate;
use crate::error::{BoardError, PlacementError};

/// The mark left in a claimed space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    O,
    X,
    /// Non-competing occupant used to neutralize the center space.
    Blocker,
}

impl Token {
    pub fn glyph(self) -> char {
        match self {
            Token::O => 'O',
            Token::X => 'X',
            Token::Blocker => '-',
        }
    }

    /// The real player owning this token, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Token::O => Some(PlayerId::First),
            Token::X => Some(PlayerId::Second),
            Token::Blocker => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Zero-based identity: 0 for the first player, 1 for the second.
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub fn token(self) -> Token {
        match self {
            PlayerId::First => Token::O,
            PlayerId::Second => Token::X,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A competitor and the coordinates it has claimed, in move order.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    moves: Vec<Coordinate>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            moves: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn token(&self) -> Token {
        self.id.token()
    }

    pub fn record_move(&mut self, coord: Coordinate) {
        self.moves.push(coord);
    }

    pub fn moves(&self) -> &[Coordinate] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Coordinate> {
        self.moves.last()
    }
}

/// A single space of the board. Claimed at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    owner: Option<Token>,
}

impl Cell {
    /// Claims the cell for `token`. Returns `false` if it was already claimed.
    pub fn claim(&mut self, token: Token) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(token);
        true
    }

    pub fn owner(&self) -> Option<Token> {
        self.owner
    }

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Storage and addressing of the cells of a hypercube board.
/// Keeps the layout (flat, nested, packed) out of the game rules.
pub trait BoardState: Debug + Clone {
    fn new(dimension: usize) -> Result<Self, BoardError>
    where
        Self: Sized;
    fn dimension(&self) -> usize;
    fn side(&self) -> usize {
        self.dimension() + 1
    }
    fn total_cells(&self) -> usize;
    fn cell(&self, coord: &Coordinate) -> Result<&Cell, PlacementError>;
    fn cell_mut(&mut self, coord: &Coordinate) -> Result<&mut Cell, PlacementError>;
    /// Cell at a storage offset, `None` past the end.
    fn cell_at(&self, index: usize) -> Option<&Cell>;
    /// Coordinate of a storage offset.
    fn coordinate_of(&self, index: usize) -> Coordinate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_claims_once() {
        let mut cell = Cell::default();
        assert!(!cell.is_claimed());
        assert!(cell.claim(Token::X));
        assert!(!cell.claim(Token::O));
        assert_eq!(cell.owner(), Some(Token::X));
    }

    #[test]
    fn test_tokens_map_to_players() {
        assert_eq!(PlayerId::First.token(), Token::O);
        assert_eq!(PlayerId::Second.token(), Token::X);
        assert_eq!(Token::O.player(), Some(PlayerId::First));
        assert_eq!(Token::Blocker.player(), None);
    }

    #[test]
    fn test_player_history_keeps_move_order() {
        let mut player = Player::new(PlayerId::Second);
        player.record_move(Coordinate::new(vec![0, 0]));
        player.record_move(Coordinate::new(vec![2, 1]));
        assert_eq!(player.moves().len(), 2);
        assert_eq!(player.last_move(), Some(&Coordinate::new(vec![2, 1])));
        assert_eq!(player.id().to_string(), "Player 2");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert!(GameStatus::Won(PlayerId::First).is_terminal());
    }
}
