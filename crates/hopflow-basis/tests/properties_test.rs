use hopflow_basis::graph::HoppingGraph;
use hopflow_basis::graph::alg::cycle_rank;
use hopflow_basis::{Tolerance, net_outflow, numerical_rank, rotational_currents};
use proptest::prelude::*;

fn hopping_graph() -> impl Strategy<Value = HoppingGraph> {
    (1usize..9, prop::collection::vec((0usize..64, 0usize..64), 0..24)).prop_map(|(n, raw)| {
        let pairs: Vec<(usize, usize)> = raw
            .into_iter()
            .map(|(a, b)| (a % n, b % n))
            .filter(|(a, b)| a != b)
            .collect();
        HoppingGraph::from_hoppings(n, pairs).expect("valid hoppings")
    })
}

proptest! {
    #[test]
    fn basis_size_is_the_cycle_rank(g in hopping_graph()) {
        let basis = rotational_currents(&g).expect("basis");
        prop_assert_eq!(basis.len(), cycle_rank(&g));
        prop_assert_eq!(basis.num_edges(), g.num_edges());
    }

    #[test]
    fn basis_rows_conserve_current_at_every_node(g in hopping_graph()) {
        let basis = rotational_currents(&g).expect("basis");
        for row in basis.rows() {
            let outflow = net_outflow(&g, &row).expect("outflow");
            for v in outflow {
                prop_assert!(v.abs() < 1e-8, "net flow {}", v);
            }
        }
    }

    #[test]
    fn basis_rows_are_linearly_independent(g in hopping_graph()) {
        let basis = rotational_currents(&g).expect("basis");
        let rank = numerical_rank(basis.as_matrix(), Tolerance::Auto).expect("rank");
        prop_assert_eq!(rank, basis.len());
    }
}
