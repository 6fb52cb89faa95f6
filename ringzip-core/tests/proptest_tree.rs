use proptest::prelude::*;
use ringzip_core::{PartitionTree, Predictor};
use ringzip_math::to_angle;

fn build(values: &[u8]) -> PartitionTree {
    let mut tree = PartitionTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

// Property 1: same insertion sequence -> structurally identical trees
proptest! {
    #[test]
    fn prop_insertion_determinism(values in prop::collection::vec(any::<u8>(), 0..200)) {
        let a = build(&values);
        let b = build(&values);
        prop_assert_eq!(a, b, "Non-deterministic tree construction");
    }
}

// Property 2: one node per insert, values kept in insertion order
proptest! {
    #[test]
    fn prop_one_node_per_insert(values in prop::collection::vec(any::<u8>(), 0..200)) {
        let tree = build(&values);
        prop_assert_eq!(tree.len(), values.len());
        let stored: Vec<u8> = tree.nodes().map(|(_, n)| n.value).collect();
        prop_assert_eq!(stored, values);
    }
}

// Property 3: each node's byte lies inside its interval, children split the parent at its midpoint
proptest! {
    #[test]
    fn prop_intervals_nest(values in prop::collection::vec(any::<u8>(), 1..200)) {
        let tree = build(&values);
        for (id, node) in tree.nodes() {
            let angle = node.angle();
            prop_assert!(
                node.angle_start <= angle && angle < node.angle_end,
                "node {:?} value {} at {} outside [{}, {})",
                id, node.value, angle, node.angle_start, node.angle_end
            );
            if let Some(left) = node.left().and_then(|c| tree.node(c)) {
                prop_assert_eq!(left.angle_start, node.angle_start);
                prop_assert_eq!(left.angle_end, node.mid_angle());
            }
            if let Some(right) = node.right().and_then(|c| tree.node(c)) {
                prop_assert_eq!(right.angle_start, node.mid_angle());
                prop_assert_eq!(right.angle_end, node.angle_end);
            }
        }
    }
}

// Property 4: greedy search never does worse than the root and only returns stored bytes
proptest! {
    #[test]
    fn prop_closest_is_stored_and_beats_root(
        values in prop::collection::vec(any::<u8>(), 1..100),
        probe in any::<u8>()
    ) {
        let tree = build(&values);
        let angle = to_angle(probe);
        let found = tree.find_closest(angle).unwrap();
        let root = tree.root().unwrap();

        prop_assert!(values.contains(&found.value));
        prop_assert!(found.distance_to(angle) <= root.distance_to(angle));
    }
}

// Property 5: a constant stream is predicted from its second byte on
proptest! {
    #[test]
    fn prop_constant_stream_always_predicted(value in any::<u8>(), steps in 2usize..50) {
        let mut tree = PartitionTree::new();
        tree.update(value);
        for _ in 1..steps {
            prop_assert_eq!(tree.predict(Some(value)), Some(value));
            tree.update(value);
        }
    }
}

// Property 6: reset returns to the initial state
proptest! {
    #[test]
    fn prop_reset(values in prop::collection::vec(any::<u8>(), 1..50)) {
        let mut tree = build(&values);
        tree.reset();
        prop_assert_eq!(tree, PartitionTree::new());
    }
}
