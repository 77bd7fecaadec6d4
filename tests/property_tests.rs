// tests/property_tests.rs
use linkrank_core::rank::{iterate_rank, normalize, transition, Distribution, Sampler, SinkPolicy};
use linkrank_core::LinkGraph;
use proptest::prelude::*;

/// Random graph on up to 8 pages named `p0..p7`; edges are clamped into range.
fn graph_strategy() -> impl Strategy<Value = LinkGraph> {
    (1usize..8, prop::collection::vec(prop::collection::vec(0usize..8, 0..6), 1..8)).prop_map(
        |(n, adj)| {
            let pages: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
            let mut edges = Vec::new();
            for (i, nbrs) in adj.into_iter().take(n).enumerate() {
                for j in nbrs {
                    edges.push((pages[i].clone(), pages[j % n].clone()));
                }
            }
            LinkGraph::from_edges(pages, edges)
        },
    )
}

fn sinks_strategy() -> impl Strategy<Value = SinkPolicy> {
    prop_oneof![Just(SinkPolicy::Redistribute), Just(SinkPolicy::Leak)]
}

proptest! {
    #[test]
    fn prop_normalize_sums_to_one_and_keeps_keys(
        weights in prop::collection::btree_map("[a-z]{1,6}", 0.0f64..1e6, 1..20),
    ) {
        prop_assume!(weights.values().any(|w| *w > 0.0));
        let d: Distribution = weights;
        let out = normalize(&d).unwrap();
        prop_assert_eq!(out.keys().collect::<Vec<_>>(), d.keys().collect::<Vec<_>>());
        let total: f64 = out.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_transition_has_entry_per_page(
        g in graph_strategy(),
        damping in 0.0f64..=1.0,
        sinks in sinks_strategy(),
    ) {
        for page in g.pages() {
            let d = transition(&g, page, damping, sinks).unwrap();
            prop_assert_eq!(d.len(), g.len());
            prop_assert!(d.values().all(|w| *w >= 0.0));
        }
    }

    #[test]
    fn prop_iterate_is_deterministic_distribution(
        g in graph_strategy(),
        damping in 0.0f64..0.95,
        sinks in sinks_strategy(),
    ) {
        let a = iterate_rank(&g, damping, 0.001, sinks).unwrap();
        let b = iterate_rank(&g, damping, 0.001, sinks).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), g.len());
        let total: f64 = a.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
        prop_assert!(a.values().all(|r| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn prop_seeded_sampler_is_reproducible(
        g in graph_strategy(),
        seed in any::<u64>(),
    ) {
        let s = Sampler::new().with_samples(200);
        let a = s.run_seeded(&g, seed).unwrap();
        let b = s.run_seeded(&g, seed).unwrap();
        prop_assert_eq!(&a, &b);
        let total: f64 = a.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }
}
