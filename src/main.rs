use std::process;

use balanced_bst::sample::{self, SampleConfig};
use balanced_bst::{Order, Tree};
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Builds a tree from random values, skews it with inserts and rebalances it, printing the tree
/// at each step.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How many random values to build the tree from
    #[arg(short = 'n', long, default_value_t = SampleConfig::default().count)]
    count: usize,

    /// Exclusive upper bound of the random values
    #[arg(long, default_value_t = SampleConfig::default().max)]
    max: u32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// How many values above the sample range to insert before rebalancing
    #[arg(long, default_value_t = 5)]
    skew: u32,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

impl Cli {
    fn sample_config(&self) -> SampleConfig {
        SampleConfig {
            count: self.count,
            max: self.max,
            seed: self.seed,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    let values = match sample::generate(&cli.sample_config()) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut tree: Tree<u32> = values.into_iter().collect();
    report(&tree);

    for x in (1..=cli.skew).map(|i| cli.max.saturating_add(i)) {
        tree.insert(x);
    }
    info!(skew = cli.skew, "inserted values above the sample range");
    report(&tree);

    tree.rebalance();
    report(&tree);
}

fn report(tree: &Tree<u32>) {
    print!("{tree}");
    println!(
        "balanced: {}, height: {}, size: {}",
        tree.is_balanced(),
        tree.height(),
        tree.len()
    );
    for order in Order::ALL {
        let mut values = Vec::with_capacity(tree.len());
        let mut visit = |n: &balanced_bst::Node<u32>| values.push(n.value().to_string());
        if let Err(e) = tree.traverse(order, Some(&mut visit)) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        println!("{order}: {}", values.join(" "));
    }
    println!();
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
