use city_paths::{
    graphs::graph_functions::{path_distance, validate_path},
    search::{
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataVec},
            vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
            vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
        },
        dijkstra::{dijkstra_one_to_one, Dijkstra},
        path::{ShortestPathRequest, ShortestPathTestCase},
        PathFinding,
    },
    City, Graph, RoadGraph,
};

fn get_small_graph() -> RoadGraph {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let mut graph = RoadGraph::new();
    for vertex in 0..=10 {
        graph.add_city(City::named(vertex.to_string())).unwrap();
    }

    let roads = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ];
    for (tail, head, weight) in roads {
        graph
            .add_road(&tail.to_string(), &head.to_string(), weight as f64, true)
            .unwrap();
    }

    graph
}

#[test]
fn single_source_distances() {
    let graph = get_small_graph();
    let data = Dijkstra::new(&graph).single_source(0);

    let expected = [0.0, 3.0, 5.0, 7.0, 9.0, 10.0, 11.0, 8.0, 9.0, 6.0, 3.0];
    assert_eq!(data.distances, expected);
}

#[test]
fn unique_shortest_paths() {
    let graph = get_small_graph();
    let dijkstra = Dijkstra::new(&graph);

    let path = dijkstra.shortest_path(0, 6).unwrap();
    assert_eq!(path.vertices, vec![0, 10, 9, 7, 6]);
    assert_eq!(path.distance, 11.0);

    let path = dijkstra.shortest_path(0, 8).unwrap();
    assert_eq!(path.vertices, vec![0, 10, 8]);
    assert_eq!(path.distance, 9.0);
}

#[test]
fn trivial_path() {
    let graph = get_small_graph();
    let path = Dijkstra::new(&graph).shortest_path(4, 4).unwrap();

    assert_eq!(path.vertices, vec![4]);
    assert_eq!(path.distance, 0.0);
}

#[test]
fn vertex_outside_graph() {
    let graph = get_small_graph();
    let dijkstra = Dijkstra::new(&graph);

    assert!(dijkstra.shortest_path(0, 11).is_none());
    assert!(dijkstra.shortest_path(11, 0).is_none());
    assert!(dijkstra.shortest_path(11, 11).is_none());
}

#[test]
fn early_exit_leaves_far_vertices_unexpanded() {
    let graph = get_small_graph();
    let mut data = DijkstraDataVec::new(&graph);
    let mut expanded = VertexExpandedDataVec::new(&graph);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    dijkstra_one_to_one(&graph, &mut data, &mut expanded, &mut queue, 0, 1);

    assert!(expanded.is_expanded(1));
    assert_eq!(data.get_distance(1), 3.0);
    // Vertex 6 is 11 away, it can not be settled before vertex 1.
    assert!(!expanded.is_expanded(6));
    assert_eq!(expanded.number_of_expanded(), 2);
}

#[test]
fn search_state_can_be_reused_after_clear() {
    let graph = get_small_graph();
    let mut data = DijkstraDataVec::new(&graph);
    let mut expanded = VertexExpandedDataVec::new(&graph);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    dijkstra_one_to_one(&graph, &mut data, &mut expanded, &mut queue, 0, 6);
    assert_eq!(data.get_path(6).unwrap().distance, 11.0);

    data.clear();
    expanded.clear();
    queue.clear();
    assert!(queue.is_empty());

    dijkstra_one_to_one(&graph, &mut data, &mut expanded, &mut queue, 6, 3);
    let path = data.get_path(3).unwrap();
    assert_eq!(path.distance, 9.0);
    assert_eq!(path.vertices.first(), Some(&6));
    assert_eq!(path.vertices.last(), Some(&3));
}

#[test]
fn queue_pops_smallest_distance_first() {
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    queue.insert(3, 7.5);
    queue.insert(1, 2.0);
    queue.insert(2, 2.0);
    queue.insert(0, 0.25);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.pop(), Some(0));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), None);
}

#[test]
fn all_paths_are_valid() {
    let graph = get_small_graph();
    let dijkstra = Dijkstra::new(&graph);

    for source in 0..graph.number_of_vertices() {
        let data = dijkstra.single_source(source);
        for target in 0..graph.number_of_vertices() {
            let test_case = ShortestPathTestCase {
                request: ShortestPathRequest::new(source, target),
                distance: Some(data.distances[target as usize]),
            };
            let path = dijkstra.shortest_path(source, target);

            validate_path(&graph, &test_case, &path).unwrap();
        }
    }
}

#[test]
fn validation_rejects_broken_paths() {
    let graph = get_small_graph();
    let test_case = ShortestPathTestCase {
        request: ShortestPathRequest::new(0, 6),
        distance: Some(11.0),
    };

    let mut path = Dijkstra::new(&graph).shortest_path(0, 6);
    assert!(validate_path(&graph, &test_case, &path).is_ok());

    // 10 and 7 are not adjacent.
    path.as_mut().unwrap().vertices = vec![0, 10, 7, 6];
    assert!(validate_path(&graph, &test_case, &path).is_err());
    assert!(path_distance(&graph, &[0, 10, 7, 6]).is_err());

    assert!(validate_path(&graph, &test_case, &None).is_err());
}
