use std::path::PathBuf;

use city_paths::{find_route, utility::init_logger, RoadGraph, RoadNetwork};
use clap::Parser;
use itertools::Itertools;

/// Finds the shortest road route between two cities.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network in `.json` or `.bincode` format, the bundled Nigerian network if omitted
    #[arg(short, long)]
    network: Option<PathBuf>,
    /// City to start from, matched ignoring case
    #[arg(short, long)]
    from: String,
    /// City to go to, matched ignoring case
    #[arg(short, long)]
    to: String,
    /// Print the route as json
    #[arg(short, long)]
    json: bool,
}

fn main() {
    init_logger();
    let args = Args::parse();

    let graph = match RoadNetwork::from_optional_file(args.network.as_deref())
        .and_then(|network| RoadGraph::from_network(&network))
    {
        Ok(graph) => graph,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let route = match find_route(&graph, &args.from, &args.to) {
        Ok(route) => route,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&route) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                log::error!("could not serialize route: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "{} -> {}: {:.2} {} over {} cities",
        route.source,
        route.target,
        route.distance,
        route.distance_unit,
        route.number_of_cities()
    );
    println!("{}", route.path.iter().join(" -> "));
    for leg in route.legs(&graph) {
        println!("  {:<15} {:<15} {:>8.2} km", leg.from, leg.to, leg.distance);
    }
}
