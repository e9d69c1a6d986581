use rayon::prelude::*;

use crate::domain::game::GameEngine;
use crate::domain::models::{BoardState, GameStatus, PlayerId};
use crate::error::{BoardError, PlacementError};

#[derive(Clone, Debug)]
pub struct SimulationSettings {
    pub dimension: usize,
    pub games: u64,
    pub lock_center: bool,
    pub seed: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub games: u64,
    pub first_wins: u64,
    pub second_wins: u64,
    pub draws: u64,
    pub total_moves: u64,
}

impl SimulationSummary {
    fn record(status: GameStatus, moves: u64) -> Self {
        let mut summary = SimulationSummary {
            games: 1,
            total_moves: moves,
            ..Default::default()
        };
        match status {
            GameStatus::Won(PlayerId::First) => summary.first_wins = 1,
            GameStatus::Won(PlayerId::Second) => summary.second_wins = 1,
            GameStatus::Drawn | GameStatus::InProgress => summary.draws = 1,
        }
        summary
    }

    fn merge(self, other: Self) -> Self {
        SimulationSummary {
            games: self.games + other.games,
            first_wins: self.first_wins + other.first_wins,
            second_wins: self.second_wins + other.second_wins,
            draws: self.draws + other.draws,
            total_moves: self.total_moves + other.total_moves,
        }
    }

    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Plays `games` random-vs-random games across the rayon pool. Game `i` is
/// seeded with `seed + i`, so the totals do not depend on scheduling.
pub fn simulate<S: BoardState>(
    settings: &SimulationSettings,
) -> Result<SimulationSummary, SimulationError> {
    // Reject bad dimensions once instead of once per game.
    S::new(settings.dimension)?;
    log::info!(
        "simulating {} games on a {}-dimensional board",
        settings.games,
        settings.dimension
    );

    let summary = (0..settings.games)
        .into_par_iter()
        .map(|i| play_random_game::<S>(settings, settings.seed.wrapping_add(i)))
        .try_reduce(SimulationSummary::default, |a, b| Ok(a.merge(b)))?;

    log::info!(
        "simulation finished: {} first / {} second / {} drawn",
        summary.first_wins,
        summary.second_wins,
        summary.draws
    );
    Ok(summary)
}

fn play_random_game<S: BoardState>(
    settings: &SimulationSettings,
    seed: u64,
) -> Result<SimulationSummary, SimulationError> {
    let mut engine = GameEngine::<S>::with_seed(settings.dimension, seed)?;
    if settings.lock_center {
        engine.lock_center()?;
    }

    let mut moves = 0;
    while !engine.status().is_terminal() {
        engine.play_random()?;
        moves += 1;
    }
    Ok(SimulationSummary::record(engine.status(), moves))
}
