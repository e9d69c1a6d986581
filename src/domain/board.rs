use rand::Rng;

use crate::domain::coordinate::Coordinate;
use crate::domain::lines::Line;
use crate::domain::models::{BoardState, Cell, Player, PlayerId, Token};
use crate::domain::win::WinDetector;
use crate::error::{BoardError, PlacementError};

/// A successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub coordinate: Coordinate,
    /// The line this placement completed, if it won.
    pub winning_line: Option<Line>,
}

impl Placement {
    pub fn is_win(&self) -> bool {
        self.winning_line.is_some()
    }
}

/// The Domain Entity representing the hypercube board.
///
/// Tracks how many cells are claimed and remembers the first winner. It does
/// not enforce turn order; that belongs to [`crate::domain::game::GameEngine`].
#[derive(Clone, Debug)]
pub struct HyperBoard<S: BoardState> {
    state: S,
    round: usize,
    winner: Option<PlayerId>,
    winning_line: Option<Line>,
}

impl<S: BoardState> HyperBoard<S> {
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        Ok(Self {
            state: S::new(dimension)?,
            round: 0,
            winner: None,
            winning_line: None,
        })
    }

    pub fn dimension(&self) -> usize {
        self.state.dimension()
    }

    pub fn side(&self) -> usize {
        self.state.side()
    }

    pub fn total_cells(&self) -> usize {
        self.state.total_cells()
    }

    /// Number of claimed cells.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn cell(&self, coord: &Coordinate) -> Result<&Cell, PlacementError> {
        self.state.cell(coord)
    }

    pub fn owner_at(&self, coord: &Coordinate) -> Option<Token> {
        self.state.cell(coord).ok().and_then(Cell::owner)
    }

    /// Parses `raw` and claims the addressed cell for `player`.
    pub fn place(&mut self, raw: &str, player: &mut Player) -> Result<Placement, PlacementError> {
        let coord = Coordinate::parse(raw, self.dimension()).map_err(|err| {
            log::debug!("rejected {:?} from {}: {}", raw, player.id(), err);
            PlacementError::from(err)
        })?;
        self.place_coordinate(coord, player)
    }

    pub fn place_coordinate(
        &mut self,
        coord: Coordinate,
        player: &mut Player,
    ) -> Result<Placement, PlacementError> {
        self.claim(&coord, player.token())?;
        player.record_move(coord.clone());
        log::debug!("{} claimed {} (round {})", player.id(), coord, self.round);

        let winning_line = WinDetector::detect(&self.state, &coord, player).map(|win| {
            if self.winner.is_none() {
                log::info!("{} completed {}", win.player, win.line);
                self.winner = Some(win.player);
                self.winning_line = Some(win.line.clone());
            }
            win.line
        });

        Ok(Placement {
            coordinate: coord,
            winning_line,
        })
    }

    /// Tries one uniformly random in-range coordinate. Fails with
    /// `AlreadyOccupied` when it lands on a claimed cell.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        player: &mut Player,
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        let coord = Coordinate::random(self.dimension(), rng);
        self.place_coordinate(coord, player)
    }

    /// Claims `coord` with the non-competing blocker token.
    pub fn place_blocker(&mut self, coord: &Coordinate) -> Result<(), PlacementError> {
        self.claim(coord, Token::Blocker)?;
        log::debug!("blocked {} (round {})", coord, self.round);
        Ok(())
    }

    fn claim(&mut self, coord: &Coordinate, token: Token) -> Result<(), PlacementError> {
        let cell = self.state.cell_mut(coord)?;
        if !cell.claim(token) {
            log::debug!("rejected {}: already claimed", coord);
            return Err(PlacementError::AlreadyOccupied(coord.clone()));
        }
        self.round += 1;
        Ok(())
    }

    pub fn center_coordinate(&self) -> Option<Coordinate> {
        Coordinate::center(self.dimension())
    }

    pub fn is_full(&self) -> bool {
        self.round == self.total_cells()
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    /// Unclaimed coordinates in storage order.
    pub fn free_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.total_cells()).filter_map(move |index| {
            let cell = self.state.cell_at(index)?;
            (!cell.is_claimed()).then(|| self.state.coordinate_of(index))
        })
    }
}
