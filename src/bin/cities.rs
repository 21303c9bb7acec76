use std::path::PathBuf;

use city_paths::{utility::init_logger, RoadGraph, RoadNetwork};
use clap::Parser;
use itertools::Itertools;

/// Lists the cities of a network together with their direct neighbours.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network in `.json` or `.bincode` format, the bundled Nigerian network if omitted
    #[arg(short, long)]
    network: Option<PathBuf>,
    /// Only list cities whose name or state contains this text, ignoring case
    #[arg(short, long)]
    search: Option<String>,
    /// Print the city list and statistics as json
    #[arg(short, long)]
    json: bool,
}

fn main() {
    init_logger();
    let args = Args::parse();

    let network = match RoadNetwork::from_optional_file(args.network.as_deref()) {
        Ok(network) => network,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };
    let statistics = network.statistics();

    let graph = match RoadGraph::from_network(&network) {
        Ok(graph) => graph,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    if let Some(query) = args.search.as_deref() {
        let found = graph.search(query);
        if args.json {
            let listing = serde_json::json!({
                "cities": found,
                "count": found.len(),
                "query": query.trim(),
            });
            println!("{}", listing);
        } else {
            for city in found.iter() {
                println!("{}, {}", city.name, city.state.as_deref().unwrap_or("-"));
            }
            println!("{} cities match \"{}\"", found.len(), query.trim());
        }
        return;
    }

    if args.json {
        let listing = serde_json::json!({
            "cities": network.cities,
            "count": network.cities.len(),
            "statistics": statistics,
        });
        println!("{}", listing);
        return;
    }

    for city in graph.cities().sorted_by(|a, b| a.name.cmp(&b.name)) {
        let neighbors = graph
            .neighbors(&city.name)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, distance)| format!("{} ({} km)", name, distance))
            .join(", ");
        println!(
            "{}{}, {}: {}",
            city.name,
            if city.is_capital { " *" } else { "" },
            city.state.as_deref().unwrap_or("-"),
            neighbors
        );
    }

    println!(
        "{} cities, {} state capitals, {} other cities in {} states",
        statistics.total_cities,
        statistics.state_capitals,
        statistics.major_cities,
        statistics.total_states
    );
}
