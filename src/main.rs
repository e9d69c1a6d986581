use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hypertictactoe::application::game_service::GameService;
use hypertictactoe::application::simulation::{simulate, SimulationSettings};
use hypertictactoe::config::{validate_dimension, AppConfig};
use hypertictactoe::domain::services::MoveSource;
use hypertictactoe::infrastructure::console::HumanConsolePlayer;
use hypertictactoe::infrastructure::console_runner::ConsoleRunner;
use hypertictactoe::infrastructure::display::RenderStyle;
use hypertictactoe::infrastructure::random::RandomPlayer;
use hypertictactoe::interface::setup::{
    prompt_center_lock, prompt_dimension, settled_center_lock, WELCOME,
};
use hypertictactoe::{Engine, FlatBoardState};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// TOML configuration file; defaults are used when it does not exist.
    #[arg(long, global = true, value_name = "PATH", default_value = "hypertoe.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play an interactive game (the default).
    Play(PlayArgs),
    /// Play many random games in parallel and print the results.
    Simulate(SimulateArgs),
}

/// Who controls each seat: h = human, c = computer. First letter is Player 1 (O).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Mode {
    #[default]
    Hh,
    Hc,
    Ch,
    Cc,
}

#[derive(Debug, Default, Args)]
struct PlayArgs {
    #[arg(short, long, value_name = "D")]
    dimension: Option<usize>,

    /// Make the center space unplayable (even dimensions above 2).
    #[arg(long, conflicts_with = "open_center")]
    lock_center: bool,

    /// Keep the center space playable.
    #[arg(long)]
    open_center: bool,

    #[arg(short, long, value_enum, default_value_t = Mode::Hh)]
    mode: Mode,

    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    #[arg(long)]
    no_color: bool,
}

impl PlayArgs {
    fn center_choice(&self) -> Option<bool> {
        match (self.lock_center, self.open_center) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
struct SimulateArgs {
    #[arg(short, long, value_name = "D")]
    dimension: Option<usize>,

    #[arg(short, long, value_name = "N", default_value_t = 1000)]
    games: u64,

    #[arg(long)]
    lock_center: bool,

    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Some(Command::Simulate(args)) => run_simulation(args, &config),
        Some(Command::Play(args)) => run_game(args, &config),
        None => run_game(PlayArgs::default(), &config),
    }
}

fn run_game(args: PlayArgs, config: &AppConfig) -> anyhow::Result<()> {
    let max_attempts = config.input.max_attempts;
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", WELCOME)?;

    let dimension = match args.dimension.or(config.game.dimension) {
        Some(dimension) => {
            validate_dimension(dimension)?;
            dimension
        }
        None => prompt_dimension(&mut io::stdin().lock(), &mut stdout, max_attempts)?,
    };

    let requested = args.center_choice().or(config.game.lock_center);
    let lock_center = match settled_center_lock(dimension, requested) {
        Some(lock) => lock,
        None => prompt_center_lock(&mut io::stdin().lock(), &mut stdout, max_attempts)?,
    };

    let seed = args.seed.or(config.game.seed);
    let mut engine = match seed {
        Some(seed) => Engine::with_seed(dimension, seed)?,
        None => Engine::new(dimension)?,
    };
    if lock_center {
        let center = engine.lock_center()?;
        writeln!(stdout, "The center space {} is unplayable.", center)?;
    }

    let (first, second) = seats(args.mode, seed);
    let mut service = GameService::new(engine, first, second, max_attempts);
    let style = RenderStyle {
        color: config.display.color && !args.no_color,
    };
    ConsoleRunner::run(&mut service, style, &mut stdout)?;
    Ok(())
}

fn seats(
    mode: Mode,
    seed: Option<u64>,
) -> (
    Box<dyn MoveSource<FlatBoardState>>,
    Box<dyn MoveSource<FlatBoardState>>,
) {
    let human = || -> Box<dyn MoveSource<FlatBoardState>> { Box::new(HumanConsolePlayer::stdio()) };
    let computer = |offset: u64| -> Box<dyn MoveSource<FlatBoardState>> {
        match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(seed.wrapping_add(offset))),
            None => Box::new(RandomPlayer::new()),
        }
    };

    match mode {
        Mode::Hh => (human(), human()),
        Mode::Hc => (human(), computer(2)),
        Mode::Ch => (computer(1), human()),
        Mode::Cc => (computer(1), computer(2)),
    }
}

fn run_simulation(args: SimulateArgs, config: &AppConfig) -> anyhow::Result<()> {
    let dimension = args
        .dimension
        .or(config.game.dimension)
        .context("simulate needs --dimension or game.dimension in the config")?;
    validate_dimension(dimension)?;

    let requested = args.lock_center || config.game.lock_center.unwrap_or(false);
    let lock_center = settled_center_lock(dimension, Some(requested)).unwrap_or(false);

    let settings = SimulationSettings {
        dimension,
        games: args.games,
        lock_center,
        seed: args.seed.or(config.game.seed).unwrap_or(0),
    };
    let summary = simulate::<FlatBoardState>(&settings)?;

    println!("Games played:    {}", summary.games);
    println!("Player 1 (O):    {}", summary.first_wins);
    println!("Player 2 (X):    {}", summary.second_wins);
    println!("Draws:           {}", summary.draws);
    println!("Average moves:   {:.2}", summary.average_moves());
    Ok(())
}
