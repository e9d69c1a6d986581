use std::fmt;

use rand::Rng;

use crate::error::CoordinateError;

/// Separator between the per-axis indexes of a coordinate string.
pub const DELIMITER: char = '.';

/// A position on the board, most-significant axis first.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    values: Vec<usize>,
}

impl Coordinate {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values }
    }

    /// Parses a `.`-separated coordinate string for a board of `dimension` axes.
    ///
    /// Every component is checked for being a non-negative integer before the
    /// component count is compared with `dimension`. Range checking is left
    /// to the board.
    pub fn parse(raw: &str, dimension: usize) -> Result<Self, CoordinateError> {
        let components: Vec<&str> = raw.split(DELIMITER).collect();

        let mut values = Vec::with_capacity(components.len());
        for component in &components {
            let value = parse_component(component).ok_or_else(|| {
                CoordinateError::NonNumericInput {
                    component: component.to_string(),
                }
            })?;
            values.push(value);
        }

        if values.len() != dimension {
            return Err(CoordinateError::DimensionMismatch {
                expected: dimension,
                found: values.len(),
            });
        }

        Ok(Self { values })
    }

    /// The exact center of an even-dimensional board, every axis at `D / 2`.
    pub fn center(dimension: usize) -> Option<Self> {
        if dimension % 2 != 0 {
            return None;
        }
        Some(Self {
            values: vec![dimension / 2; dimension],
        })
    }

    /// A uniformly random in-range coordinate for a board of `dimension` axes.
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Self {
        let side = dimension + 1;
        Self {
            values: (0..dimension).map(|_| rng.gen_range(0..side)).collect(),
        }
    }

    pub fn dim(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }
}

fn parse_component(component: &str) -> Option<usize> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

impl From<Vec<usize>> for Coordinate {
    fn from(values: Vec<usize>) -> Self {
        Self::new(values)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
