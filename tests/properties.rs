use approx::assert_abs_diff_eq;
use city_paths::{
    graphs::graph_functions::{path_distance, validate_path},
    search::{dijkstra::Dijkstra, path::ShortestPathTestCase, PathFinding},
    shortest_path,
    utility::{all_pairs, gen_requests},
    City, Distance, Graph, RoadGraph, RouteError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random graph with integral weights, so sums of weights are exact.
fn random_graph(rng: &mut StdRng, number_of_cities: u32, number_of_roads: u32) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for city in 0..number_of_cities {
        graph.add_city(City::named(format!("city{}", city))).unwrap();
    }

    for _ in 0..number_of_roads {
        let from = rng.gen_range(0..number_of_cities);
        let to = rng.gen_range(0..number_of_cities);
        let distance = rng.gen_range(0..500) as Distance;
        graph
            .add_road(
                &format!("city{}", from),
                &format!("city{}", to),
                distance,
                true,
            )
            .unwrap();
    }

    graph
}

/// All pairs distances by Floyd-Warshall.
fn floyd_warshall(graph: &dyn Graph) -> Vec<Vec<Distance>> {
    let n = graph.number_of_vertices() as usize;
    let mut distances = vec![vec![Distance::INFINITY; n]; n];

    for (vertex, row) in distances.iter_mut().enumerate() {
        row[vertex] = 0.0;
        for edge in graph.edges(vertex as u32) {
            if edge.weight < row[edge.head as usize] {
                row[edge.head as usize] = edge.weight;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via_k = distances[i][k] + distances[k][j];
                if via_k < distances[i][j] {
                    distances[i][j] = via_k;
                }
            }
        }
    }

    distances
}

fn name(vertex: u32) -> String {
    format!("city{}", vertex)
}

#[test]
fn agrees_with_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let graph = random_graph(&mut rng, 25, 40);
        let expected = floyd_warshall(&graph);
        let dijkstra = Dijkstra::new(&graph);

        for request in all_pairs(&graph) {
            let distance = expected[request.source as usize][request.target as usize];
            let test_case = ShortestPathTestCase {
                request,
                distance: distance.is_finite().then_some(distance),
            };
            let path = dijkstra.shortest_path(request.source, request.target);

            validate_path(&graph, &test_case, &path).unwrap();
        }
    }
}

#[test]
fn self_pairs() {
    let mut rng = StdRng::seed_from_u64(1);
    let graph = random_graph(&mut rng, 30, 20);

    for vertex in 0..graph.number_of_vertices() {
        let route = shortest_path(&graph, &name(vertex), &name(vertex)).unwrap();
        assert_eq!(route.distance, 0.0);
        assert_eq!(route.path, vec![name(vertex)]);
    }
}

#[test]
fn symmetry() {
    let mut rng = StdRng::seed_from_u64(2);
    let graph = random_graph(&mut rng, 30, 60);

    for request in gen_requests(&graph, 200, &mut rng) {
        let forward = shortest_path(&graph, &name(request.source), &name(request.target));
        let backward = shortest_path(&graph, &name(request.target), &name(request.source));

        match (forward, backward) {
            (Ok(forward), Ok(backward)) => assert_eq!(forward.distance, backward.distance),
            (Err(RouteError::NoRoute { .. }), Err(RouteError::NoRoute { .. })) => {}
            (forward, backward) => panic!("asymmetric result {:?} and {:?}", forward, backward),
        }
    }
}

#[test]
fn triangle_inequality() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_graph(&mut rng, 20, 50);
    let dijkstra = Dijkstra::new(&graph);
    let distances: Vec<Vec<Distance>> = (0..graph.number_of_vertices())
        .map(|source| dijkstra.single_source(source).distances)
        .collect();

    let n = graph.number_of_vertices() as usize;
    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                if distances[a][b].is_finite() && distances[b][c].is_finite() {
                    assert!(distances[a][c] <= distances[a][b] + distances[b][c]);
                }
            }
        }
    }
}

#[test]
fn paths_are_contiguous() {
    let mut rng = StdRng::seed_from_u64(4);
    let graph = random_graph(&mut rng, 40, 80);

    for request in gen_requests(&graph, 300, &mut rng) {
        let Ok(route) = shortest_path(&graph, &name(request.source), &name(request.target))
        else {
            continue;
        };

        let vertices: Vec<u32> = route
            .path
            .iter()
            .map(|city| graph.vertex(city).unwrap())
            .collect();
        assert_abs_diff_eq!(path_distance(&graph, &vertices).unwrap(), route.distance);
        assert_abs_diff_eq!(
            route.legs(&graph).iter().map(|leg| leg.distance).sum::<Distance>(),
            route.distance
        );
    }
}

#[test]
fn disconnected_halves_never_meet() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut graph = RoadGraph::new();
    for city in 0..20 {
        graph.add_city(City::named(name(city))).unwrap();
    }
    // Even cities only connect to even cities, odd to odd.
    for _ in 0..60 {
        let from = rng.gen_range(0..20u32);
        let to = (rng.gen_range(0..10u32) * 2) + from % 2;
        graph
            .add_road(&name(from), &name(to), rng.gen_range(1..100) as Distance, true)
            .unwrap();
    }

    for from in 0..20u32 {
        for to in 0..20u32 {
            let result = shortest_path(&graph, &name(from), &name(to));
            if from % 2 != to % 2 {
                assert!(matches!(result, Err(RouteError::NoRoute { .. })));
            } else if let Ok(route) = result {
                assert!(route.distance.is_finite());
            }
        }
    }
}

#[test]
fn unknown_source_regardless_of_target() {
    let mut rng = StdRng::seed_from_u64(6);
    let graph = random_graph(&mut rng, 10, 15);

    for target in 0..graph.number_of_vertices() {
        assert_eq!(
            shortest_path(&graph, "nowhere", &name(target)),
            Err(RouteError::UnknownCity("nowhere".to_string()))
        );
    }
}
