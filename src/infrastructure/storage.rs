use crate::config::MAX_DIMENSION;
use crate::domain::coordinate::Coordinate;
use crate::domain::models::{BoardState, Cell};
use crate::error::{BoardError, PlacementError};

/// Every cell of the hypercube in one contiguous block, addressed by a
/// mixed-radix offset with the first coordinate component most significant.
#[derive(Clone, Debug)]
pub struct FlatBoardState {
    dimension: usize,
    side: usize,
    cells: Vec<Cell>,
}

impl BoardState for FlatBoardState {
    fn new(dimension: usize) -> Result<Self, BoardError> {
        if dimension < 2 {
            return Err(BoardError::DimensionTooSmall(dimension));
        }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::DimensionTooLarge(dimension));
        }
        let side = dimension + 1;
        let total_cells = u32::try_from(dimension)
            .ok()
            .and_then(|exp| side.checked_pow(exp))
            .ok_or(BoardError::DimensionTooLarge(dimension))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total_cells)
            .map_err(|_| BoardError::DimensionTooLarge(dimension))?;
        cells.resize(total_cells, Cell::default());

        Ok(FlatBoardState {
            dimension,
            side,
            cells,
        })
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn side(&self) -> usize {
        self.side
    }

    fn total_cells(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, coord: &Coordinate) -> Result<&Cell, PlacementError> {
        let index = self.index_of(coord)?;
        Ok(&self.cells[index])
    }

    fn cell_mut(&mut self, coord: &Coordinate) -> Result<&mut Cell, PlacementError> {
        let index = self.index_of(coord)?;
        Ok(&mut self.cells[index])
    }

    fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    fn coordinate_of(&self, index: usize) -> Coordinate {
        Coordinate::new(index_to_coords(index, self.dimension, self.side))
    }
}

impl FlatBoardState {
    fn index_of(&self, coord: &Coordinate) -> Result<usize, PlacementError> {
        if coord.dim() != self.dimension {
            return Err(PlacementError::ImpossibleCoordinate(coord.clone()));
        }
        coords_to_index(coord.values(), self.side)
            .ok_or_else(|| PlacementError::ImpossibleCoordinate(coord.clone()))
    }
}

pub fn index_to_coords(index: usize, dimension: usize, side: usize) -> Vec<usize> {
    let mut coords = vec![0; dimension];
    let mut temp = index;
    for slot in coords.iter_mut().rev() {
        *slot = temp % side;
        temp /= side;
    }
    coords
}

pub fn coords_to_index(coords: &[usize], side: usize) -> Option<usize> {
    let mut index = 0;
    for &c in coords {
        if c >= side {
            return None;
        }
        index = index * side + c;
    }
    Some(index)
}
