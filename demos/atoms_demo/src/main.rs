use atoms::GrowthStrategy;
use atoms_demo::{run, DemoConfig, DemoError};
use clap::{Parser, ValueEnum};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Double on overflow, halve when less than half used
    Amortized,
    /// Keep capacity equal to length
    ExactFit,
}

impl From<Strategy> for GrowthStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Amortized => GrowthStrategy::Amortized,
            Strategy::ExactFit => GrowthStrategy::ExactFit,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "atoms_demo")]
#[command(about = "Walk through every Atoms operation on sample atoms", long_about = None)]
struct Args {
    /// Text printed in place of absent elements
    #[arg(short, long, default_value = "null")]
    placeholder: String,

    /// Growth strategy of the demo sequence
    #[arg(short, long, value_enum, default_value_t = Strategy::Amortized)]
    strategy: Strategy,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "atoms=trace")
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_filter: &str) {
    // Forward `log` records from the atoms crates into tracing
    tracing_log::LogTracer::init().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .try_init()
        .ok();
}

fn main() -> Result<(), DemoError> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = DemoConfig {
        placeholder: args.placeholder,
        strategy: args.strategy.into(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, &config)
}
