use crate::domain::coordinate::Coordinate;
use crate::domain::lines::{Line, LineEnumerator};
use crate::domain::models::{BoardState, Player, PlayerId, Token};

/// A completed line and the player who owns all of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Win {
    pub player: PlayerId,
    pub line: Line,
}

pub struct WinDetector;

impl WinDetector {
    /// Checks whether the placement at `last_move` completed a line for `player`.
    ///
    /// Only lines through `last_move` are examined, so this must run after
    /// every successful placement for earlier wins to be noticed.
    pub fn detect<S: BoardState>(state: &S, last_move: &Coordinate, player: &Player) -> Option<Win> {
        let token = player.token();
        LineEnumerator::new(state.dimension())
            .lines_through(last_move)
            .into_iter()
            .find(|line| Self::owns_line(state, line, token))
            .map(|line| Win {
                player: player.id(),
                line,
            })
    }

    fn owns_line<S: BoardState>(state: &S, line: &Line, token: Token) -> bool {
        if token == Token::Blocker {
            return false;
        }
        line.iter().all(|coord| {
            state
                .cell(coord)
                .map_or(false, |cell| cell.owner() == Some(token))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::FlatBoardState;

    fn claim(state: &mut FlatBoardState, values: &[usize], token: Token) {
        assert!(state
            .cell_mut(&Coordinate::new(values.to_vec()))
            .unwrap()
            .claim(token));
    }

    #[test]
    fn test_detects_row() {
        let mut state = FlatBoardState::new(2).unwrap();
        let player = Player::new(PlayerId::First);
        for col in 0..3 {
            claim(&mut state, &[0, col], Token::O);
        }
        let win = WinDetector::detect(&state, &Coordinate::new(vec![0, 2]), &player).unwrap();
        assert_eq!(win.player, PlayerId::First);
        assert_eq!(win.line.coordinates()[0], Coordinate::new(vec![0, 2]));
        assert_eq!(win.line.len(), 3);
    }

    #[test]
    fn test_foreign_cell_breaks_line() {
        let mut state = FlatBoardState::new(2).unwrap();
        let player = Player::new(PlayerId::First);
        claim(&mut state, &[0, 0], Token::O);
        claim(&mut state, &[0, 1], Token::X);
        claim(&mut state, &[0, 2], Token::O);
        assert!(WinDetector::detect(&state, &Coordinate::new(vec![0, 2]), &player).is_none());
    }

    #[test]
    fn test_blocker_breaks_line() {
        let mut state = FlatBoardState::new(2).unwrap();
        let player = Player::new(PlayerId::Second);
        claim(&mut state, &[0, 0], Token::X);
        claim(&mut state, &[1, 1], Token::Blocker);
        claim(&mut state, &[2, 2], Token::X);
        assert!(WinDetector::detect(&state, &Coordinate::new(vec![2, 2]), &player).is_none());
    }

    #[test]
    fn test_space_diagonal_in_3d() {
        let mut state = FlatBoardState::new(3).unwrap();
        let player = Player::new(PlayerId::Second);
        for i in 0..4 {
            claim(&mut state, &[i, 3 - i, i], Token::X);
        }
        let win = WinDetector::detect(&state, &Coordinate::new(vec![1, 2, 1]), &player).unwrap();
        let mut expected: Vec<Coordinate> = (0..4)
            .map(|i| Coordinate::new(vec![i, 3 - i, i]))
            .collect();
        expected.sort();
        assert_eq!(win.line.canonical(), expected);
    }
}
