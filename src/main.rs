//! Ohmic - equivalent resistance of resistor networks
//!
//! # Usage
//!
//! ```bash
//! ohmic bridge.net --source A --target D --steps
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use ohmic_core::{
    dsl,
    error::{OhmicError, Result},
    network::{resolve_terminal, Network},
    report::{render, RenderOptions, DEFAULT_PRECISION},
    GraphReducer,
};
use tracing_subscriber::EnvFilter;

/// Equivalent resistance of a series-parallel resistor network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file, or '-' to read standard input
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Source terminal (overrides the netlist's .source directive)
    #[arg(short, long)]
    source: Option<String>,

    /// Target terminal (overrides the netlist's .target directive)
    #[arg(short, long)]
    target: Option<String>,

    /// Print every reduction step
    #[arg(long)]
    steps: bool,

    /// Decimal places in printed values
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_netlist(path: &Path) -> Result<dsl::Netlist> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| OhmicError::FileReadError {
                path: "<stdin>".to_string(),
                source: e,
            })?;
        dsl::parse(&content)
    } else {
        dsl::parse_file(path)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Parse the netlist
    let netlist = read_netlist(&args.netlist)?;

    // Build the network
    let network = Network::from_netlist(&netlist);

    // Resolve terminals, command line first
    let source = args
        .source
        .or(netlist.source)
        .ok_or(OhmicError::MissingSource)?;
    let target = args
        .target
        .or(netlist.target)
        .ok_or(OhmicError::MissingTarget)?;
    let source = resolve_terminal(&network, &source)?;
    let target = resolve_terminal(&network, &target)?;

    // Reduce
    let reduction = GraphReducer::new(&network, source, target)?.reduce()?;

    let options = RenderOptions {
        precision: args.precision,
        show_steps: args.steps,
    };
    print!("{}", render(&reduction, &options));

    Ok(())
}
