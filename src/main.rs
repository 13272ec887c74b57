//! `sortkit` command line: demonstrations and a timing run.
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `info`).

use std::collections::VecDeque;
use std::process::ExitCode;
use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use clap::Subcommand;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortkit::MergeSort;
use sortkit::Precedes;
use sortkit::RandomAccess;
use sortkit::Strategy;
use sortkit::ordering::Ascending;
use sortkit::verify;

#[derive(Parser)]
#[command(name = "sortkit", version, about = "Stable merge sort over random-access sequences")]
struct Cli {
    /// Emit logs as JSON lines instead of text.
    #[arg(long, global = true, env = "SORTKIT_LOG_JSON")]
    log_json: bool,

    /// Traversal used by the engine.
    #[arg(long, global = true, default_value_t = Strategy::Recursive, env = "SORTKIT_STRATEGY")]
    strategy: Strategy,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort small inputs with a function pointer, a closure and a functor.
    Demo,
    /// Time the engine on a vector and a deque holding the same random values.
    Bench(BenchArgs),
}

#[derive(clap::Args)]
struct BenchArgs {
    /// Number of elements.
    #[arg(long, default_value_t = 100_000, env = "SORTKIT_SIZE")]
    size: usize,

    /// RNG seed; random when omitted.
    #[arg(long, env = "SORTKIT_SEED")]
    seed: Option<u64>,

    /// Smallest generated value.
    #[arg(long, default_value_t = 1, env = "SORTKIT_MIN")]
    min: i32,

    /// Largest generated value.
    #[arg(long, default_value_t = 1000, env = "SORTKIT_MAX")]
    max: i32,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Empty value range: min ({min}) is greater than max ({max})")]
    EmptyValueRange { min: i32, max: i32 },

    #[error("{container} is out of order at position {position}")]
    NotSorted { container: &'static str, position: usize },

    #[error("{container} lost or gained elements while sorting")]
    NotPermutation { container: &'static str },
}

/// Even numbers before odd ones; order within each class is kept.
struct EvensFirst;

impl Precedes<i32> for EvensFirst {
    fn precedes(&self, a: &i32, b: &i32) -> bool {
        return a.rem_euclid(2) < b.rem_euclid(2);
    }
}

fn ascending(a: &i32, b: &i32) -> bool {
    return a < b;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let engine = MergeSort::with_strategy(cli.strategy);
    let result = match cli.command {
        Command::Demo => {
            demo(&engine);
            Ok(())
        }
        Command::Bench(args) => bench(&engine, &args),
    };

    return match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sortkit failed");
            ExitCode::FAILURE
        }
    };
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn render<S>(seq: &S) -> String
where
    S: RandomAccess<Item = i32> + ?Sized,
{
    let parts: Vec<String> = (0..seq.len()).map(|i| seq.get(i).to_string()).collect();
    return parts.join(" ");
}

fn demo(engine: &MergeSort) {
    let mut vec = vec![5, 3, 1, 4, 2];
    let by_pointer: fn(&i32, &i32) -> bool = ascending;
    engine.sort(&mut vec, by_pointer);
    println!("Sorted vector: {}", render(&vec));

    let mut deque: VecDeque<i32> = VecDeque::from(vec![5, 3, 1, 4, 2]);
    engine.sort(&mut deque, |a: &i32, b: &i32| a > b);
    println!("Sorted deque (descending): {}", render(&deque));

    let mut parity = vec![1, 2, 3, 4, 5, 6];
    engine.sort(&mut parity, EvensFirst);
    println!("Sorted with functor: {}", render(&parity));

    debug!(strategy = %engine.strategy(), "demo finished");
}

fn bench(engine: &MergeSort, args: &BenchArgs) -> Result<(), CliError> {
    if args.min > args.max {
        return Err(CliError::EmptyValueRange { min: args.min, max: args.max });
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut vec: Vec<i32> = (0..args.size).map(|_| rng.gen_range(args.min..=args.max)).collect();
    let mut deque: VecDeque<i32> = vec.iter().copied().collect();
    let original = vec.clone();
    info!(size = args.size, seed = ?args.seed, strategy = %engine.strategy(), "generated input");

    let vec_time = time(|| engine.sort(&mut vec, Ascending));
    check("vector", &original, &vec)?;
    println!("Vector sort time: {} ms", vec_time.as_millis());

    let deque_time = time(|| engine.sort(&mut deque, Ascending));
    check("deque", &original, &deque)?;
    println!("Deque sort time: {} ms", deque_time.as_millis());

    info!(vector = ?vec_time, deque = ?deque_time, "bench finished");
    return Ok(());
}

fn time(f: impl FnOnce()) -> Duration {
    let start = Instant::now();
    f();
    return start.elapsed();
}

fn check<S>(container: &'static str, original: &[i32], sorted: &S) -> Result<(), CliError>
where
    S: RandomAccess<Item = i32> + ?Sized,
{
    if let Some(position) = verify::first_inversion(sorted, &Ascending) {
        return Err(CliError::NotSorted { container, position });
    }
    if !verify::is_permutation(original, sorted) {
        return Err(CliError::NotPermutation { container });
    }
    return Ok(());
}
