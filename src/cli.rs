use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::report::{RenderStyle, render_no_solution, render_report};
use countdown::solver::constants::DEFAULT_MAX_POOL_SIZE;
use countdown::utils::{parse_numbers, validate_pool, validate_target};
use countdown::{Number, Solver, SolverConfig};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the Countdown numbers round
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every way to reach a target by combining numbers with + - * /")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    pub target: Number,

    /// Numbers in the pool, separated by spaces or commas
    #[arg(required = true, num_args = 1..)]
    pub numbers: Vec<String>,

    /// Largest pool to accept
    #[arg(long = "max-pool", default_value_t = DEFAULT_MAX_POOL_SIZE)]
    pub max_pool: usize,

    /// Print operators as - * / instead of − × ÷
    #[arg(long)]
    pub ascii: bool,

    /// Only list golden path solutions
    #[arg(long)]
    pub golden_only: bool,

    /// Print search counters to stderr
    #[arg(long)]
    pub stats: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<Number>,
    pub target: Number,
    pub solver: SolverConfig,
    pub style: RenderStyle,
    pub golden_only: bool,
    pub stats: bool,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Validate parsed arguments into a configuration
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let numbers = parse_numbers(args.numbers.as_slice()).context("Invalid numbers")?;
        validate_target(args.target).context("Invalid target")?;
        validate_pool(&numbers, args.max_pool).context("Invalid numbers")?;

        Ok(Self {
            numbers,
            target: args.target,
            solver: SolverConfig {
                max_pool_size: args.max_pool,
            },
            style: if args.ascii {
                RenderStyle::Ascii
            } else {
                RenderStyle::Symbols
            },
            golden_only: args.golden_only,
            stats: args.stats,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level);

    let solver = Solver::new(config.solver);

    info!(
        "Searching for ways to reach {} from {:?}",
        config.target, config.numbers
    );

    let (solutions, stats) = solver.search_with_stats(&config.numbers, config.target);

    if config.stats {
        eprintln!(
            "Explored {} pools, generated {} steps, found {} raw solutions ({} duplicates removed)",
            stats.pools_explored,
            stats.steps_generated,
            stats.raw_solutions,
            stats.duplicates_removed
        );
    }

    match solutions {
        Some(set) => {
            print!("{}", render_report(&set, config.style, config.golden_only));
        }
        None => {
            warn!("No solution found");
            println!("{}", render_no_solution(config.target));
        }
    }
    Ok(())
}
