//! Parallel Gaussian elimination driver
//!
//! Initializes a dense system, eliminates it with a fixed number of worker
//! threads and reports the elapsed time.
//!
//! Usage:
//!   cargo run --release --bin gaussian -- -n 2048 -t 8
//!   cargo run --release --bin gaussian -- -n 4 -I fast -P 1
//!   cargo run --release --bin gaussian -- --config run.json -t 2

use anyhow::Context;
use clap::{Parser, ValueEnum};
use math_gauss::{EliminationEngine, GaussConfig, InitMode};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "gaussian")]
#[command(about = "Parallel Gaussian elimination of a dense linear system", long_about = None)]
struct Args {
    /// Problem size N (default: 2048)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Number of worker threads, coordinator included (0 = all cores, default: 4)
    #[arg(short = 't', long)]
    workers: Option<usize>,

    /// Matrix initialization (default: rand)
    #[arg(short = 'I', long, value_enum)]
    init: Option<InitChoice>,

    /// Upper bound of the random integers in rand mode (default: 15)
    #[arg(short = 'm', long)]
    maxnum: Option<u32>,

    /// Print the system before and after elimination (0/1)
    #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(0..=1))]
    print: Option<u8>,

    /// Seed for rand initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Warn about pivots whose magnitude is below this value
    #[arg(long)]
    pivot_tolerance: Option<f64>,

    /// Path to a JSON configuration file; explicit flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show default values and exit
    #[arg(short = 'D', long)]
    defaults: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InitChoice {
    Rand,
    Fast,
}

impl From<InitChoice> for InitMode {
    fn from(choice: InitChoice) -> Self {
        match choice {
            InitChoice::Rand => InitMode::Rand,
            InitChoice::Fast => InitMode::Fast,
        }
    }
}

fn resolve_config(args: &Args) -> anyhow::Result<GaussConfig> {
    let mut config = match &args.config {
        Some(path) => GaussConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GaussConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(init) = args.init {
        config.init = init.into();
    }
    if let Some(maxnum) = args.maxnum {
        config.maxnum = maxnum;
    }
    if let Some(print) = args.print {
        config.print = print == 1;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.pivot_tolerance.is_some() {
        config.pivot_tolerance = args.pivot_tolerance;
    }

    config.validate()?;
    Ok(config)
}

fn print_defaults() {
    let defaults = GaussConfig::default();
    println!("\nDefault:  n         = {}", defaults.size);
    println!("          t         = {}", defaults.workers);
    println!("          Init      = {}", defaults.init);
    println!("          maxnum    = {}", defaults.maxnum);
    println!("          P         = {}\n", u8::from(defaults.print));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.defaults {
        print_defaults();
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let engine = EliminationEngine::new(config.engine_config())?;

    println!("\nsize      = {}x{} ", config.size, config.size);
    println!("maxnum    = {} ", config.maxnum);
    println!("Init      = {} ", config.init);
    print!("Initializing matrix...");
    let system = config.build_system()?;
    println!("done \n");
    if config.print {
        println!("{system}");
    }

    println!("threads   = {} \n", engine.config().workers);
    let start = Instant::now();
    let result = engine.run(system).context("elimination failed")?;
    let elapsed = start.elapsed();

    if config.print {
        println!("{}", result.system);
    }

    log::debug!("{:?}", result.report);
    println!("Time taken: {} ms", elapsed.as_millis());
    Ok(())
}
