use combopt::knapsack::{self, Item, Selection};
use combopt::tsp::{DistanceMatrix, MultiStartNearestNeighbor, NearestNeighbor, TourConstruction};
use combopt::{
    Boruvka, Dijkstra, Error, Graph, Kruskal, MinSpanningTree, Prim, RawEdge, ShortestPath,
    SimpleEdge, SpanningTree,
};
use pretty_assertions::assert_eq;

fn example() -> Graph<u32, u32> {
    let edges = [
        (1, 2, 3),
        (1, 3, 2),
        (2, 4, 6),
        (2, 5, 5),
        (3, 4, 1),
        (3, 6, 4),
        (4, 5, 2),
        (5, 7, 3),
        (6, 7, 4),
        (4, 6, 3),
    ]
    .into_iter()
    .map(|(source, target, weight)| {
        SimpleEdge::try_from(RawEdge {
            source,
            target,
            weight,
        })
    })
    .collect::<Result<Vec<_>, _>>()
    .unwrap();
    Graph::new(1..=7, edges).unwrap()
}

type Builder = fn(&Graph<u32, u32>) -> Result<SpanningTree<u32, u32>, Error>;

fn builders() -> [(&'static str, Builder); 3] {
    [
        ("kruskal", |g| Kruskal.min_spanning_tree(g)),
        ("prim", |g| Prim.min_spanning_tree(g)),
        ("boruvka", |g| Boruvka.min_spanning_tree(g)),
    ]
}

#[test]
fn example_spanning_tree_weighs_14() {
    let graph = example();
    for (name, build) in builders() {
        let tree = build(&graph).unwrap();
        assert_eq!((name, tree.len(), tree.total_weight()), (name, 6, 14));
        assert_eq!(tree.check(&graph), Ok(()));
    }
}

#[test]
fn example_shortest_path() {
    let graph = example();
    let path = Dijkstra.shortest_path(&graph, &1, &7).unwrap();
    assert_eq!(path.nodes(), &[1, 3, 4, 5, 7]);
    assert_eq!(path.distance(), 8);
    assert_eq!(path.check(&graph), Ok(()));

    let tree = Dijkstra.shortest_path_tree(&graph, &1).unwrap();
    for &node in graph.nodes() {
        let path = tree.path_to(&node).unwrap();
        assert_eq!(Some(path.distance()), tree.distance(&node));
        assert_eq!(path.check(&graph), Ok(()));
    }
}

#[test]
fn disconnected_graph_has_no_spanning_tree() {
    let graph = Graph::new(
        [1, 2, 3, 4],
        [
            SimpleEdge::new(1, 2, 1).unwrap(),
            SimpleEdge::new(3, 4, 1).unwrap(),
        ],
    )
    .unwrap();

    for (name, build) in builders() {
        let result = build(&graph);
        assert!(
            matches!(result, Err(Error::Disconnected { expected: 3, .. })),
            "{name}: {result:?}"
        );
    }

    assert_eq!(
        Dijkstra.shortest_path(&graph, &1, &4),
        Err(Error::Unreachable("4".into()))
    );
}

#[test]
fn invalid_input_fails_fast() {
    assert_eq!(SimpleEdge::new(1, 2, -1), Err(Error::NegativeWeight));
    assert_eq!(SimpleEdge::new(1, 1, 1), Err(Error::SelfLoop));
    assert_eq!(
        Graph::new([1, 2], [SimpleEdge::new(1, 9, 1).unwrap()]).unwrap_err(),
        Error::UnknownNode("9".into())
    );
    assert_eq!(
        Dijkstra.shortest_path(&example(), &1, &8),
        Err(Error::UnknownNode("8".into()))
    );
    assert_eq!(
        Error::Disconnected {
            found: 2,
            expected: 3
        }
        .to_string(),
        "Graph is disconnected: found 2 of 3 spanning tree edges"
    );
}

#[test]
fn tsp_tours() {
    let matrix = DistanceMatrix::new([
        [0.0, 10.0, 15.0, 20.0],
        [10.0, 0.0, 35.0, 25.0],
        [15.0, 35.0, 0.0, 30.0],
        [20.0, 25.0, 30.0, 0.0],
    ])
    .unwrap();

    let tour = NearestNeighbor { start: 0 }.construct(&matrix).unwrap();
    assert_eq!(tour.cities(), &[0, 1, 3, 2, 0]);
    assert_eq!(tour.length(), 80.0);

    let best = MultiStartNearestNeighbor.construct(&matrix).unwrap();
    assert_eq!(best.length(), 80.0);

    assert_eq!(
        NearestNeighbor { start: 4 }.construct(&matrix).unwrap_err(),
        Error::UnknownNode("4".into())
    );
}

#[test]
fn knapsack_selections() {
    let items: Vec<Item<u32>> = [(60, 10), (100, 20), (120, 30)]
        .into_iter()
        .map(|(value, weight)| Item::new(value, weight).unwrap())
        .collect();

    assert_eq!(
        knapsack::greedy(&items, 50).unwrap(),
        Selection {
            items: vec![0, 1],
            total_value: 160,
            total_weight: 30,
        }
    );

    let fractional = knapsack::fractional_greedy(&items, 50).unwrap();
    assert_eq!(fractional.items, [(0, 1.0), (1, 1.0), (2, 2.0 / 3.0)]);
    assert_eq!(fractional.total_value, 240.0);
}

#[test]
fn sums_past_the_weight_type_are_errors() {
    let graph = Graph::from_edges([
        SimpleEdge::new(1, 2, u32::MAX).unwrap(),
        SimpleEdge::new(2, 3, 5).unwrap(),
    ])
    .unwrap();

    for (name, build) in builders() {
        assert_eq!(build(&graph), Err(Error::ArithmeticOverflow), "{name}");
    }
    assert_eq!(
        Dijkstra.shortest_path(&graph, &1, &3),
        Err(Error::ArithmeticOverflow)
    );
    assert_eq!(Dijkstra.shortest_path(&graph, &2, &3).unwrap().distance(), 5);
}
