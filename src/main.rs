//! bbox: bounding box of lon/lat points as GeoJSON
//!
//! Usage: bbox < points.txt

use clap::Parser;
use std::io;
use std::process;

use geobbox::commands::BboxCommand;
use geobbox::BboxError;

#[derive(Parser)]
#[command(name = "bbox")]
#[command(version)]
#[command(about = "Read `LON LAT` lines from stdin and print their bounding box as a GeoJSON feature", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    env_logger::init();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match BboxCommand::new().run_stdin(&mut handle) {
        Ok(_) => {}
        Err(BboxError::Serialize(e)) => panic!("failed to serialize bounding box: {}", e),
        Err(e @ BboxError::Write(_)) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
