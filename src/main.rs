//! Debug demo binary - squares with a running total, then a Fibonacci
//! sequence, printing every intermediate value so each loop iteration is a
//! natural breakpoint target.

use clap::Parser;
use debug_demo::common::config::Config;
use debug_demo::{common, driver};

#[derive(Parser)]
#[command(name = "debug-demo", about = "Numeric demo program for practicing breakpoint debugging")]
#[command(version, long_about = None)]
struct Cli {}

fn main() {
    // Initialize logging
    common::logging::init();

    Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> common::Result<()> {
    let config = Config::load()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver::run(&config, &mut out)
}
