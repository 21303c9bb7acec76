use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::{
    graphs::{Graph, Vertex},
    search::path::ShortestPathRequest,
};

/// Initialises `env_logger`, reading the filter from `RUST_LOG` and falling
/// back to `info`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Every ordered pair of distinct vertices.
pub fn all_pairs(graph: &dyn Graph) -> Vec<ShortestPathRequest> {
    (0..graph.number_of_vertices())
        .cartesian_product(0..graph.number_of_vertices())
        .filter(|(source, target)| source != target)
        .map(|(source, target)| ShortestPathRequest::new(source, target))
        .collect()
}

/// `number_of_requests` random requests, sources and targets may coincide.
pub fn gen_requests(
    graph: &dyn Graph,
    number_of_requests: u32,
    rng: &mut impl Rng,
) -> Vec<ShortestPathRequest> {
    let vertices: Vec<Vertex> = (0..graph.number_of_vertices()).collect();
    if vertices.is_empty() {
        return Vec::new();
    }

    (0..number_of_requests)
        .filter_map(|_| {
            let source = *vertices.choose(&mut *rng)?;
            let target = *vertices.choose(&mut *rng)?;
            Some(ShortestPathRequest::new(source, target))
        })
        .collect()
}
