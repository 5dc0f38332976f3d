use std::path::PathBuf;
use std::process::exit;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use speller::speller::{run, RunConfig};
use speller::{InvalidBytePolicy, LoadOptions};

/// Spell-check a text file against a dictionary of one word per line.
#[derive(StructOpt)]
struct Cli {
    /// The dictionary to load
    #[structopt(short, long, parse(from_os_str), default_value = "dictionaries/large")]
    dictionary: PathBuf,
    /// What to do with dictionary bytes outside the alphabet: reject, skip or split
    #[structopt(long, default_value = "reject")]
    invalid_bytes: InvalidBytePolicy,
    /// Stop growing the dictionary after this many trie nodes
    #[structopt(long)]
    node_limit: Option<usize>,
    /// Print the report as JSON
    #[structopt(long)]
    json: bool,
    /// The text to check
    #[structopt(parse(from_os_str))]
    text: PathBuf,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions { invalid_bytes: self.invalid_bytes, node_limit: self.node_limit }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();
    let config = RunConfig::builder()
        .dictionary(args.dictionary.clone())
        .text(args.text.clone())
        .load_options(args.load_options())
        .build();

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("could not serialize report: {}", e);
                exit(1);
            }
        }
    } else {
        print!("{}", report);
    }
}
