use clap::Parser;
use superautomata::{fixtures, prelude::*};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Eliminates the epsilon transitions of an example automaton and determinizes the result.
#[derive(Debug, Clone, clap::Parser)]
struct Cli {
    /// Which of the built-in example automata to process.
    #[clap(
        short = 'f',
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u8).range(1..=fixtures::COUNT as i64)
    )]
    fixture: u8,
    /// Process a random automaton with this many states instead of a fixture.
    #[cfg(feature = "random")]
    #[clap(short = 'r', long)]
    random: Option<usize>,
    /// Number of letters of the random automaton.
    #[cfg(feature = "random")]
    #[clap(
        short = 's',
        long,
        default_value = "2",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=superautomata::random::MAX_LETTERS as u64)
    )]
    symbols: usize,
    /// Print transition tables in addition to the listings.
    #[clap(short = 't', long)]
    table: bool,
    /// Stop after epsilon elimination.
    #[clap(long)]
    skip_determinize: bool,
    /// Increase the log level, can be given multiple times.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn automaton(&self) -> Result<Automaton, AutomatonError> {
        #[cfg(feature = "random")]
        if let Some(states) = self.random {
            return superautomata::random::random_automaton(states, self.symbols, 0.3, 0.15);
        }
        fixtures::by_index(self.fixture as usize)
    }
}

fn print<S: Show>(title: &str, shown: &S, table: Option<String>) {
    println!("{title}");
    print!("{}", shown.show());
    if let Some(table) = table {
        println!("{table}");
    }
    println!();
}

fn main() -> Result<(), AutomatonError> {
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(cli.level()),
        )
        .init();

    let mut automaton = cli.automaton()?;
    print(
        "input",
        &automaton,
        cli.table.then(|| automaton.transition_table()),
    );

    automaton.eliminate_epsilons()?;
    info!(
        "epsilon free automaton has {} transitions",
        automaton.transitions().count()
    );
    print(
        "without epsilon transitions",
        &automaton,
        cli.table.then(|| automaton.transition_table()),
    );

    if cli.skip_determinize {
        return Ok(());
    }

    let det = determinize(&automaton)?;
    info!("determinized automaton has {} superstates", det.size());
    print(
        "determinized",
        &det,
        cli.table.then(|| det.transition_table()),
    );
    Ok(())
}
