use std::{path::PathBuf, time::Instant};

use city_paths::{utility::init_logger, RoadNetwork};
use clap::Parser;

/// Converts a network to `.bincode`, after checking that it forms a valid graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network in `.json` format, the bundled Nigerian network if omitted
    #[arg(short, long)]
    network: Option<PathBuf>,
    /// Outfile in `.bincode` format
    #[arg(short, long)]
    out_network: PathBuf,
}

fn main() {
    init_logger();
    let args = Args::parse();

    let start = Instant::now();
    let result = RoadNetwork::from_optional_file(args.network.as_deref()).and_then(|network| {
        network.to_graph()?;
        network.write_bincode(&args.out_network)
    });

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }

    log::info!(
        "Writing {} took {:?}",
        args.out_network.display(),
        start.elapsed()
    );
}
