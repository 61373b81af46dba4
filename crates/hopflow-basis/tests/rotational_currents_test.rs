use hopflow_basis::graph::alg::cycle_rank;
use hopflow_basis::graph::{Error as GraphError, HoppingGraph, RawEdges};
use hopflow_basis::{
    Error, NullSpaceOptions, Tolerance, is_divergence_free, net_outflow, numerical_rank,
    rotational_currents, rotational_currents_with,
};

/// Four sites with every pair hopped except `0 - 3`.
fn four_site_graph() -> HoppingGraph {
    HoppingGraph::from_hoppings(4, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]).expect("graph")
}

fn square_lattice(w: usize, l: usize) -> HoppingGraph {
    let idx = |x: usize, y: usize| x * w + y;
    let mut pairs = Vec::new();
    for x in 0..l {
        for y in 0..w {
            if x + 1 < l {
                pairs.push((idx(x, y), idx(x + 1, y)));
            }
            if y + 1 < w {
                pairs.push((idx(x, y), idx(x, y + 1)));
            }
        }
    }
    HoppingGraph::from_hoppings(w * l, pairs).expect("graph")
}

#[test]
fn four_site_graph_has_two_independent_loops() {
    let g = four_site_graph();
    let basis = rotational_currents(&g).expect("basis");

    assert_eq!(basis.len(), 2);
    assert_eq!(basis.num_edges(), g.num_edges());
    assert_eq!(basis.incidence_rank(), 3);
    assert_eq!(
        numerical_rank(basis.as_matrix(), Tolerance::Auto).expect("rank"),
        2
    );

    for row in basis.rows() {
        let outflow = net_outflow(&g, &row).expect("outflow");
        assert!(
            outflow.iter().all(|v| v.abs() < 1e-8),
            "non-zero net flow: {outflow:?}"
        );
    }
}

#[test]
fn reverse_edges_carry_the_negated_current() {
    let g = four_site_graph();
    let reverse = g.reverse_indices().expect("paired");
    let basis = rotational_currents(&g).expect("basis");

    for row in basis.rows() {
        for (k, &r) in reverse.iter().enumerate() {
            assert_eq!(row[k], -row[r]);
        }
        // Unit vectors over hoppings, so every hopping contributes twice.
        let norm2: f64 = row.iter().map(|v| v * v).sum();
        assert!((norm2 - 2.0).abs() < 1e-10, "norm2 = {norm2}");
    }
}

#[test]
fn triangle_current_circulates_around_the_loop() {
    let g = HoppingGraph::from_hoppings(3, [(0, 1), (1, 2), (2, 0)]).expect("graph");
    let basis = rotational_currents(&g).expect("basis");
    assert_eq!(basis.len(), 1);

    let row = basis.row(0).expect("row");
    let magnitude = 1.0 / 3.0_f64.sqrt();
    for v in &row {
        assert!((v.abs() - magnitude).abs() < 1e-12, "{row:?}");
    }
    // Edges are (0,1), (0,2), (1,0), (1,2), (2,0), (2,1): a loop 0 -> 1 -> 2 -> 0 puts the same
    // sign on (0,1), (1,2) and (2,0).
    assert!(row[0] * row[3] > 0.0);
    assert!(row[0] * row[4] > 0.0);
    assert!(row[0] * row[1] < 0.0);
    assert!(basis.row(1).is_none());
}

#[test]
fn trees_have_an_empty_basis() {
    let g = HoppingGraph::from_hoppings(5, [(0, 1), (1, 2), (1, 3), (3, 4)]).expect("graph");
    let basis = rotational_currents(&g).expect("basis");
    assert!(basis.is_empty());
    assert_eq!(basis.as_matrix().shape(), (0, g.num_edges()));
    assert_eq!(basis.incidence_rank(), 4);
}

#[test]
fn edgeless_graphs_have_an_empty_basis() {
    let g = HoppingGraph::from_edges(3, []);
    let basis = rotational_currents(&g).expect("basis");
    assert!(basis.is_empty());
    assert_eq!(basis.num_edges(), 0);
}

#[test]
fn square_lattice_basis_matches_cycle_rank() {
    let g = square_lattice(3, 6);
    let basis = rotational_currents(&g).expect("basis");
    // One independent loop per plaquette.
    assert_eq!(basis.len(), 2 * 5);
    assert_eq!(basis.len(), cycle_rank(&g));
    assert_eq!(
        numerical_rank(basis.as_matrix(), Tolerance::Auto).expect("rank"),
        basis.len()
    );
}

#[test]
fn combined_currents_stay_divergence_free() {
    let g = square_lattice(3, 4);
    let basis = rotational_currents(&g).expect("basis");
    let coefficients: Vec<f64> = (0..basis.len()).map(|i| 0.3 + 0.1 * i as f64).collect();
    let current = basis.combine(&coefficients).expect("combine");
    assert_eq!(current.len(), g.num_edges());
    assert!(is_divergence_free(&g, &current, 1e-8).expect("outflow"));

    assert_eq!(
        basis.combine(&[1.0]),
        Err(Error::CoefficientCount {
            expected: basis.len(),
            got: 1
        })
    );
}

#[test]
fn borrowed_edge_lists_work_without_a_graph() {
    let edges = [(0, 1), (1, 2), (2, 0), (1, 0), (2, 1), (0, 2)];
    let basis = rotational_currents(&RawEdges::new(3, &edges)).expect("basis");
    assert_eq!(basis.len(), 1);
}

#[test]
fn absolute_tolerance_can_discard_every_singular_value() {
    let g = HoppingGraph::from_hoppings(3, [(0, 1), (1, 2), (2, 0)]).expect("graph");
    let options = NullSpaceOptions {
        tolerance: Tolerance::Absolute(10.0),
    };
    let basis = rotational_currents_with(&g, &options).expect("basis");
    assert_eq!(basis.incidence_rank(), 0);
    assert_eq!(basis.len(), 3);
    assert_eq!(basis.tolerance(), 10.0);
}

#[test]
fn automatic_tolerance_follows_the_singular_values() {
    let g = four_site_graph();
    let basis = rotational_currents(&g).expect("basis");
    // max(shape) = 5 hoppings; the largest singular value of this incidence matrix is 2.
    let expected = 2.0 * 5.0 * f64::EPSILON;
    assert!((basis.tolerance() - expected).abs() < 1e-3 * expected);
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: NullSpaceOptions = serde_json::from_str("{}").expect("json");
    assert_eq!(opts.tolerance, Tolerance::Auto);

    let opts: NullSpaceOptions =
        serde_json::from_str(r#"{"tolerance": {"absolute": 1e-9}}"#).expect("json");
    assert_eq!(opts.tolerance, Tolerance::Absolute(1e-9));
}

#[test]
fn malformed_graphs_are_rejected() {
    let odd = HoppingGraph::from_edges(2, [(0, 1), (1, 0), (0, 1)]);
    assert_eq!(
        rotational_currents(&odd).unwrap_err(),
        Error::Graph(GraphError::OddEdgeCount { num_edges: 3 })
    );

    let out_of_range = HoppingGraph::from_edges(2, [(0, 2), (2, 0)]);
    assert_eq!(
        rotational_currents(&out_of_range).unwrap_err(),
        Error::Graph(GraphError::NodeOutOfRange {
            edge: 0,
            node: 2,
            num_nodes: 2
        })
    );

    let unpaired = HoppingGraph::from_edges(3, [(0, 1), (1, 2)]);
    assert_eq!(
        rotational_currents(&unpaired).unwrap_err(),
        Error::Graph(GraphError::UnpairedEdge {
            edge: 0,
            from: 0,
            to: 1
        })
    );

    let duplicate = HoppingGraph::from_edges(2, [(0, 1), (0, 1)]);
    assert_eq!(
        rotational_currents(&duplicate).unwrap_err(),
        Error::Graph(GraphError::DuplicateEdge {
            edge: 1,
            from: 0,
            to: 1
        })
    );
}

#[test]
fn net_outflow_checks_the_current_length() {
    let g = four_site_graph();
    assert_eq!(
        net_outflow(&g, &[0.0; 3]),
        Err(Error::CurrentLength {
            expected: 10,
            got: 3
        })
    );
}

#[test]
fn net_outflow_of_a_path_current() {
    // A current 0 -> 1 -> 2 leaves node 0 and enters node 2.
    let g = HoppingGraph::from_hoppings(3, [(0, 1), (1, 2)]).expect("graph");
    // Edges: (0,1), (1,0), (1,2), (2,1); edge (b, a) carries the flow from a into b.
    let current = [-1.0, 1.0, -1.0, 1.0];
    assert_eq!(net_outflow(&g, &current).expect("outflow"), vec![1.0, 0.0, -1.0]);
    assert!(!is_divergence_free(&g, &current, 1e-8).expect("outflow"));
}
