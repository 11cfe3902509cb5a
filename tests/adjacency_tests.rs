mod support;

use nalgebra::Vector3;
use pvsgen::{
    BspTree, SuperLeaf,
    adjacency::{build_adjacency, neighbour_count},
    float_types::ROUND_EPSILON,
    geometry::Side,
    superleaf::{DepthAreaCondition, build_super_leaves},
};
use support::{approx_eq, chain_tree, connect_x, corridor, l_shape, rect_x, room, two_rooms};

fn graph(tree: &BspTree) -> Vec<SuperLeaf> {
    let mut sls = build_super_leaves(tree, &DepthAreaCondition::default());
    build_adjacency(&mut sls);
    sls
}

fn targets(sl: &SuperLeaf) -> Vec<usize> {
    sl.neighbours.iter().map(|n| n.super_leaf).collect()
}

#[test]
fn open_doorway_connects_both_ways() {
    let sls = graph(&two_rooms(true));
    assert_eq!(targets(&sls[0]), vec![1]);
    assert_eq!(targets(&sls[1]), vec![0]);
    assert_eq!(neighbour_count(&sls), 2);

    // Sub-portals face in the direction of travel.
    let a_to_b = &sls[0].neighbours[0].sub_portal;
    let b_to_a = &sls[1].neighbours[0].sub_portal;
    assert!(approx_eq(a_to_b.plane.normal.dot(&Vector3::x()), 1.0, 1e-9));
    assert!(approx_eq(b_to_a.plane.normal.dot(&Vector3::x()), -1.0, 1e-9));
    assert!(approx_eq(a_to_b.area(), 500.0 * 800.0, 1e-6));
    assert_eq!(b_to_a.what_side(&a_to_b.plane, ROUND_EPSILON), Side::InMirrored);

    let bounds = sls[0].portal_bounds().unwrap();
    assert_eq!(bounds.mins.x, 1000.0);
    assert_eq!(bounds.maxs.z, 800.0);
}

#[test]
fn sealed_doorway_has_no_edge() {
    let sls = graph(&two_rooms(false));
    assert_eq!(neighbour_count(&sls), 0);
    assert!(sls.iter().all(|sl| sl.portal_bounds().is_none()));
}

#[test]
fn neighbours_only_across_shared_portals() {
    let sls = graph(&corridor());
    assert_eq!(targets(&sls[0]), vec![1]);
    assert_eq!(targets(&sls[1]), vec![0, 2]);
    assert_eq!(targets(&sls[2]), vec![1]);

    let sls = graph(&l_shape());
    assert_eq!(targets(&sls[0]), vec![1]);
    assert_eq!(targets(&sls[1]), vec![0, 2]);
    assert_eq!(targets(&sls[2]), vec![1, 3]);
    assert_eq!(targets(&sls[3]), vec![2]);
}

#[test]
fn sub_portal_is_clipped_to_the_smaller_portal() {
    let mut leaves = vec![
        room([0.0, 0.0, 0.0], [1000.0, 1000.0, 1000.0]),
        room([1000.0, 0.0, 0.0], [2000.0, 1000.0, 1000.0]),
    ];
    // A sees the whole wall as a portal, B only a window in it.
    leaves[0].portals.push(rect_x(1000.0, [0.0, 1000.0], [0.0, 1000.0], -Vector3::x()));
    leaves[1].portals.push(rect_x(1000.0, [200.0, 600.0], [300.0, 700.0], Vector3::x()));
    let sls = graph(&chain_tree(leaves));

    let a_to_b = &sls[0].neighbours[0].sub_portal;
    let b_to_a = &sls[1].neighbours[0].sub_portal;
    assert!(approx_eq(a_to_b.area(), 400.0 * 400.0, 1e-6));
    assert!(approx_eq(b_to_a.area(), 400.0 * 400.0, 1e-6));
    assert!(sls[1].portals[0].encloses(b_to_a, true, ROUND_EPSILON));
    assert!(sls[0].portals[0].encloses(a_to_b, true, ROUND_EPSILON));
    // Independent fragments of different portals, with opposite orientation.
    assert_eq!(b_to_a.plane, a_to_b.plane.mirrored());
}

#[test]
fn touching_or_distant_portals_are_not_neighbours() {
    let mut leaves = vec![
        room([0.0, 0.0, 0.0], [1000.0, 1000.0, 1000.0]),
        room([1000.0, 0.0, 0.0], [2000.0, 1000.0, 1000.0]),
        room([1000.0, 5000.0, 0.0], [2000.0, 6000.0, 1000.0]),
    ];
    // Only share the edge y = 500.
    leaves[0].portals.push(rect_x(1000.0, [0.0, 500.0], [0.0, 1000.0], -Vector3::x()));
    leaves[1].portals.push(rect_x(1000.0, [500.0, 1000.0], [0.0, 1000.0], Vector3::x()));
    // Coplanar with the others, but far away.
    leaves[2].portals.push(rect_x(1000.0, [5000.0, 6000.0], [0.0, 1000.0], Vector3::x()));
    let sls = graph(&chain_tree(leaves));
    assert_eq!(neighbour_count(&sls), 0);
}

#[test]
fn portals_inside_a_super_leaf_are_ignored() {
    let mut leaves = vec![
        room([0.0, 0.0, 0.0], [1000.0, 1000.0, 1000.0]),
        room([1000.0, 0.0, 0.0], [2000.0, 1000.0, 1000.0]),
        room([2000.0, 0.0, 0.0], [3000.0, 1000.0, 1000.0]),
    ];
    connect_x(&mut leaves, 0, 1, 1000.0, [0.0, 1000.0], [0.0, 1000.0]);
    connect_x(&mut leaves, 1, 2, 2000.0, [0.0, 1000.0], [0.0, 1000.0]);
    let tree = chain_tree(leaves);

    let condition = DepthAreaCondition {
        max_recursion_depth: 0,
        ..Default::default()
    };
    let mut sls = build_super_leaves(&tree, &condition);
    build_adjacency(&mut sls);
    assert_eq!(sls.len(), 2);
    assert_eq!(targets(&sls[0]), vec![1]);
    assert_eq!(targets(&sls[1]), vec![0]);
}
