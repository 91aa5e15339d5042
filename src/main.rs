use std::path::PathBuf;

use clap::{ArgAction, Parser};
use exam_master::Browser;
use exam_master::logging::{self, LogConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Browse study questions by subject and unit", long_about = None)]
struct Args {
    /// Directory holding <subject>/<unit>/{Short,Long}.json
    #[arg(short, long, default_value = exam_master::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Append diagnostic logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let config = LogConfig::from_verbosity(args.verbose).with_log_file(args.log_file);
    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = Browser::open(args.data_dir).run() {
        eprintln!("Error running browser: {}", e);
        std::process::exit(1);
    }
}
