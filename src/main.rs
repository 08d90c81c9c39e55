use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use superstring::{instance, solve, Algorithm, Fragment, OverlapGraph, SolveError, Superstring};

/// Shortest common superstring heuristics over synthetic instances.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for instance generation (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the instance overlap graph as a JSON node/edge list
    #[arg(long)]
    export_graph_json: Option<PathBuf>,

    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v', alias = "info")]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "snake_case")]
enum Command {
    /// Sliding windows over a given string, with random elimination
    FromDna {
        /// Source string the instance is sampled from
        #[arg(long)]
        input: String,
        /// Size of a single string
        #[arg(long)]
        len: usize,
        /// Probability of eliminating a window
        #[arg(long)]
        prob: f64,
    },
    /// Sliding windows over a random string, with random elimination
    FromRandomDna {
        /// Alphabet for the source string
        #[arg(long, default_value = "AGCT")]
        alphabet: String,
        /// Size of the source string
        #[arg(long)]
        input_len: usize,
        /// Size of a single string
        #[arg(long)]
        len: usize,
        /// Probability of eliminating a window
        #[arg(long)]
        prob: f64,
    },
    /// Independent uniform random strings
    FromRandom {
        /// Alphabet for the generated strings
        #[arg(long, default_value = "AGCT")]
        alphabet: String,
        /// Amount of strings in the instance
        #[arg(long)]
        amount: usize,
        /// Size of a single string
        #[arg(long)]
        len: usize,
    },
    /// Consecutive random-length slices of a given string
    SliceDna {
        /// Source string the instance is sliced from
        #[arg(long)]
        input: String,
        /// Amount of slicing passes
        #[arg(long)]
        repetitions: usize,
        /// Min size of a single string
        #[arg(long)]
        min_len: usize,
        /// Max size of a single string
        #[arg(long)]
        max_len: usize,
    },
    /// Consecutive random-length slices of a random string
    SliceRandom {
        /// Alphabet for the source string
        #[arg(long, default_value = "01")]
        alphabet: String,
        /// Size of the source string
        #[arg(long)]
        input_len: usize,
        /// Amount of slicing passes
        #[arg(long)]
        repetitions: usize,
        /// Min size of a single string
        #[arg(long)]
        min_len: usize,
        /// Max size of a single string
        #[arg(long)]
        max_len: usize,
    },
}

fn main() {
    let args = Args::parse();
    // Set log level based on CLI flags
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "error"
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(error) = run(&args) {
        eprintln!("Superstring run failed: {error:?}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    check_generator_input(&args.command)?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("seeding instance generation with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let strings = build_instance(&args.command, &mut rng);
    if strings.is_empty() {
        bail!("Generated instance is empty; relax the elimination or size parameters");
    }
    info!("instance holds {} fragments", strings.len());
    println!("Instance: {strings:?}");

    if let Some(path) = &args.export_graph_json {
        export_graph(&strings, path)
            .with_context(|| format!("Failed to write overlap graph to {}", path.display()))?;
    }

    let greedy = solve(&strings, Algorithm::Greedy).context("GREEDY failed")?;
    report("GREEDY", &greedy);
    let tie_break = solve(&strings, Algorithm::TieBreakGreedy).context("TGREEDY failed")?;
    report("TGREEDY", &tie_break);
    let hierarchical = solve(&strings, Algorithm::Hierarchical).context("GHA failed")?;
    report("GHA", &hierarchical);

    match solve(&strings, Algorithm::Chain) {
        Ok(compressed) => report("CA", &compressed),
        Err(SolveError::NotAChain) => {
            info!("instance is not a single chain; CA falls back to the hierarchical result");
            report("CA", &hierarchical);
        }
        Err(error) => return Err(error).context("CA failed"),
    }

    Ok(())
}

/// Window and slice offsets index bytes, so source text and alphabets are
/// restricted to ASCII at the CLI boundary.
fn check_generator_input(command: &Command) -> Result<()> {
    let (flag, text) = match command {
        Command::FromDna { input, .. } | Command::SliceDna { input, .. } => ("--input", input),
        Command::FromRandomDna { alphabet, .. }
        | Command::FromRandom { alphabet, .. }
        | Command::SliceRandom { alphabet, .. } => ("--alphabet", alphabet),
    };
    if text.is_empty() {
        bail!("{flag} must not be empty");
    }
    if !text.is_ascii() {
        bail!("{flag} must be ASCII; multi-byte characters are not supported");
    }
    Ok(())
}

fn build_instance(command: &Command, rng: &mut StdRng) -> Vec<String> {
    match command {
        Command::FromDna { input, len, prob } => instance::window_sample(input, *len, *prob, rng),
        Command::FromRandomDna {
            alphabet,
            input_len,
            len,
            prob,
        } => {
            let text = instance::random_text(alphabet, *input_len, rng);
            debug!("source text: {text}");
            instance::window_sample(&text, *len, *prob, rng)
        }
        Command::FromRandom {
            alphabet,
            amount,
            len,
        } => instance::random_strings(alphabet, *amount, *len, rng),
        Command::SliceDna {
            input,
            repetitions,
            min_len,
            max_len,
        } => instance::slice_sample(input, *repetitions, *min_len, *max_len, rng),
        Command::SliceRandom {
            alphabet,
            input_len,
            repetitions,
            min_len,
            max_len,
        } => {
            let text = instance::random_text(alphabet, *input_len, rng);
            debug!("source text: {text}");
            instance::slice_sample(&text, *repetitions, *min_len, *max_len, rng)
        }
    }
}

fn report(label: &str, superstring: &Superstring) {
    println!(
        "{label} (length {}): {}",
        superstring.len(),
        superstring.sequence
    );
    debug!("{label} merge order: {:?}", superstring.merge_order);
}

#[derive(Serialize)]
struct GraphNode<'a> {
    id: usize,
    sequence: &'a str,
}

#[derive(Serialize)]
struct GraphEdge {
    source: usize,
    target: usize,
    overlap: usize,
}

fn export_graph(strings: &[String], path: &Path) -> Result<()> {
    let fragments = Fragment::from_strings(strings);
    let graph = OverlapGraph::build(&fragments);
    let nodes: Vec<GraphNode> = strings
        .iter()
        .enumerate()
        .map(|(id, sequence)| GraphNode { id, sequence })
        .collect();
    let edges: Vec<GraphEdge> = graph
        .entries()
        .into_iter()
        .map(|entry| GraphEdge {
            source: entry.from,
            target: entry.to,
            overlap: entry.overlap,
        })
        .collect();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let graph_json = json!({"nodes": nodes, "edges": edges});
    let mut file = File::create(path)?;
    writeln!(file, "{}", serde_json::to_string_pretty(&graph_json)?)?;
    info!("overlap graph written to {}", path.display());
    Ok(())
}
