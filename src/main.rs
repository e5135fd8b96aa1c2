// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The `knapwidth` command line front end. It solves instances of the
//! knapsack problem with width (with or without conflicts), checks the
//! certificates produced by any solver and generates random instances.

use std::{path::{Path, PathBuf}, time::Duration};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use knapwidth::*;

/// The largest instance written by the generator
const MAX_GENERATED_ITEMS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Exact dynamic program (conflict free instances only)
    DynamicProgramming,
    /// Single greedy descent of the search tree
    Greedy,
    /// Exact best-first search of the search tree
    BestFirstSearch,
    /// Anytime iterative beam search of the search tree
    IterativeBeamSearch,
    /// Evaluates the certificate of an instance
    Checker,
    /// Writes random instances with conflicts
    Generator,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// What should be done
    #[clap(short, long, value_enum)]
    algorithm: Algorithm,
    /// The path to the instance file
    #[clap(short, long)]
    instance: Option<PathBuf>,
    /// The certificate file: written by the solvers, read by the checker
    #[clap(short, long)]
    certificate: Option<PathBuf>,
    /// The maximum amount of time (in seconds) you would like the search to run
    #[clap(short, long)]
    time_limit: Option<u64>,
    /// The seed of the instance generator
    #[clap(long, default_value = "0")]
    seed: u64,
    /// The directory where the generated instances are written
    #[clap(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Log the progress of the search
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.algorithm {
        Algorithm::Generator => generate_instances(&args.output_dir, args.seed),
        Algorithm::Checker => check(&args),
        _ => solve(&args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_instance(args: &Args) -> Result<Instance, anyhow::Error> {
    let fname = args.instance.as_ref().context("an instance file is required (--instance)")?;
    Instance::from_file(fname).with_context(|| format!("cannot read instance {}", fname.display()))
}

fn solve(args: &Args) -> Result<(), anyhow::Error> {
    let instance = load_instance(args)?;
    info!(nb_items = instance.nb_items(), capacity = instance.capacity(), conflicts = instance.nb_conflicts(), "instance loaded");

    let mut builder = SearchParametersBuilder::default();
    if let Some(seconds) = args.time_limit {
        builder.time_limit(Duration::from_secs(seconds));
    }
    let parameters = builder.build()?;

    let scheme = KnapsackWithWidthBranching::new(&instance);
    let selection = match args.algorithm {
        Algorithm::DynamicProgramming => dynamic_programming(&instance)?,
        Algorithm::Greedy => report(&scheme, greedy(&scheme, &parameters)),
        Algorithm::BestFirstSearch => report(&scheme, best_first_search(&scheme, &parameters)),
        Algorithm::IterativeBeamSearch => report(&scheme, iterative_beam_search(&scheme, &parameters)),
        Algorithm::Checker | Algorithm::Generator => anyhow::bail!("{:?} does not solve instances", args.algorithm),
    };

    if let Some(fname) = args.certificate.as_ref() {
        Certificate::new(selection.clone())
            .write(fname)
            .with_context(|| format!("cannot write certificate {}", fname.display()))?;
    }
    println!("{}", instance.evaluate(&selection)?);
    Ok(())
}

fn report(scheme: &KnapsackWithWidthBranching, output: SearchOutput<Node>) -> Selection {
    info!(
        explored = output.nb_explored,
        exact = output.is_exact,
        reason = ?output.reason,
        duration = ?output.duration,
        "search over"
    );
    scheme.to_solution(output.solution_pool.best())
}

fn check(args: &Args) -> Result<(), anyhow::Error> {
    let instance = load_instance(args)?;
    let fname = args.certificate.as_ref().context("a certificate file is required (--certificate)")?;
    let certificate = Certificate::from_file(fname)
        .with_context(|| format!("cannot read certificate {}", fname.display()))?;

    println!("{}", instance.evaluate(&certificate.items)?);
    Ok(())
}

fn generate_instances(output_dir: &Path, seed: u64) -> Result<(), anyhow::Error> {
    std::fs::create_dir_all(output_dir)?;
    let mut rng = StdRng::seed_from_u64(seed);
    for nb_items in 0..=MAX_GENERATED_ITEMS {
        let instance = generate(nb_items, &mut rng)?;
        let fname = output_dir.join(format!("instance_{nb_items}.json"));
        instance.write(&fname)
            .with_context(|| format!("cannot write instance {}", fname.display()))?;
    }
    info!(count = MAX_GENERATED_ITEMS + 1, dir = %output_dir.display(), "instances generated");
    Ok(())
}
