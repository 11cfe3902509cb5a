//! Test support library
//! Provides scene builders made of axis-aligned box rooms connected by
//! rectangular portals, plus small helpers for the tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use pvsgen::{
    BitMatrix, BspTree, Child, Leaf, Node, Polygon, PvsConfig, PvsOutcome, aabb::Aabb,
    float_types::Real, pipeline,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Rectangle in the plane `x = x`, spanning `ys` and `zs`, facing `facing`.
pub fn rect_x(x: Real, ys: [Real; 2], zs: [Real; 2], facing: Vector3<Real>) -> Polygon {
    Polygon::from_points_facing(
        vec![
            Point3::new(x, ys[0], zs[0]),
            Point3::new(x, ys[1], zs[0]),
            Point3::new(x, ys[1], zs[1]),
            Point3::new(x, ys[0], zs[1]),
        ],
        &facing,
    )
    .unwrap()
}

/// Rectangle in the plane `y = y`, spanning `xs` and `zs`, facing `facing`.
pub fn rect_y(y: Real, xs: [Real; 2], zs: [Real; 2], facing: Vector3<Real>) -> Polygon {
    Polygon::from_points_facing(
        vec![
            Point3::new(xs[0], y, zs[0]),
            Point3::new(xs[1], y, zs[0]),
            Point3::new(xs[1], y, zs[1]),
            Point3::new(xs[0], y, zs[1]),
        ],
        &facing,
    )
    .unwrap()
}

/// An inner box leaf without portals.
pub fn room(min: [Real; 3], max: [Real; 3]) -> Leaf {
    Leaf::new(
        Aabb::new(Point3::from(min), Point3::from(max)),
        Vec::new(),
        true,
    )
}

/// Adds a doorway in the plane `x = x` between `low` (the room with smaller x)
/// and `high`. Each room gets its own copy, facing into it.
pub fn connect_x(leaves: &mut [Leaf], low: usize, high: usize, x: Real, ys: [Real; 2], zs: [Real; 2]) {
    leaves[low].portals.push(rect_x(x, ys, zs, -Vector3::x()));
    leaves[high].portals.push(rect_x(x, ys, zs, Vector3::x()));
}

/// Like [`connect_x`], in the plane `y = y`.
pub fn connect_y(leaves: &mut [Leaf], low: usize, high: usize, y: Real, xs: [Real; 2], zs: [Real; 2]) {
    leaves[low].portals.push(rect_y(y, xs, zs, -Vector3::y()));
    leaves[high].portals.push(rect_y(y, xs, zs, Vector3::y()));
}

/// A degenerate but valid tree over `leaves`: node `i` has leaf `i` in front
/// and node `i + 1` behind, the last node has the last leaf behind.
///
/// Every leaf gets its floor as its only face.
pub fn chain_tree(mut leaves: Vec<Leaf>) -> BspTree {
    let count = leaves.len();
    let nodes = (0..count.saturating_sub(1))
        .map(|i| {
            let back = if i + 2 == count {
                Child::Leaf(i + 1)
            } else {
                Child::Node(i + 1)
            };
            Node::new(Child::Leaf(i), back)
        })
        .collect();

    let faces = leaves
        .iter_mut()
        .enumerate()
        .map(|(i, leaf)| {
            leaf.face_set = vec![i];
            let b = leaf.bounds;
            Polygon::from_points_facing(
                vec![
                    Point3::new(b.mins.x, b.mins.y, b.mins.z),
                    Point3::new(b.maxs.x, b.mins.y, b.mins.z),
                    Point3::new(b.maxs.x, b.maxs.y, b.mins.z),
                    Point3::new(b.mins.x, b.maxs.y, b.mins.z),
                ],
                &Vector3::z(),
            )
            .unwrap()
        })
        .collect();

    BspTree::new(nodes, leaves, faces)
}

/// Two 1000³ rooms along x with a doorway at x = 1000 (unless `open` is false).
pub fn two_rooms(open: bool) -> BspTree {
    let mut leaves = vec![
        room([0.0, 0.0, 0.0], [1000.0, 1000.0, 1000.0]),
        room([1000.0, 0.0, 0.0], [2000.0, 1000.0, 1000.0]),
    ];
    if open {
        connect_x(&mut leaves, 0, 1, 1000.0, [250.0, 750.0], [0.0, 800.0]);
    }
    chain_tree(leaves)
}

/// Three rooms A, B, C in a row along x, with full-wall portals at x = 1000
/// and x = 2000.
pub fn corridor() -> BspTree {
    let mut leaves = vec![
        room([0.0, 0.0, 0.0], [1000.0, 1000.0, 1000.0]),
        room([1000.0, 0.0, 0.0], [2000.0, 1000.0, 1000.0]),
        room([2000.0, 0.0, 0.0], [3000.0, 1000.0, 1000.0]),
    ];
    connect_x(&mut leaves, 0, 1, 1000.0, [0.0, 1000.0], [0.0, 1000.0]);
    connect_x(&mut leaves, 1, 2, 2000.0, [0.0, 1000.0], [0.0, 1000.0]);
    chain_tree(leaves)
}

/// Four rooms A, B, C, D in a row along x with doorways alternating between
/// the low and the high end of y, so that no line passes all three.
pub fn zigzag() -> BspTree {
    let mut leaves = (0..4)
        .map(|i| {
            let x = i as Real * 1000.0;
            room([x, 0.0, 0.0], [x + 1000.0, 1000.0, 1000.0])
        })
        .collect::<Vec<_>>();
    connect_x(&mut leaves, 0, 1, 1000.0, [0.0, 100.0], [0.0, 1000.0]);
    connect_x(&mut leaves, 1, 2, 2000.0, [900.0, 1000.0], [0.0, 1000.0]);
    connect_x(&mut leaves, 2, 3, 3000.0, [0.0, 100.0], [0.0, 1000.0]);
    chain_tree(leaves)
}

/// Room A, then a corridor bending by 90° made of the convex leaves B1 and B2,
/// then room C:
///
/// ```text
///   y
/// 4000        +----+
///             | C  |
/// 3000        +----+
///             | B2 |
/// 1000 +----+-+----+
///      | A  |  B1  |
///    0 +----+------+  x
///      0   1000  2000 3000
/// ```
pub fn l_shape() -> BspTree {
    let mut leaves = vec![
        room([0.0, 0.0, 0.0], [1000.0, 1000.0, 1000.0]),
        room([1000.0, 0.0, 0.0], [3000.0, 1000.0, 1000.0]),
        room([2000.0, 1000.0, 0.0], [3000.0, 3000.0, 1000.0]),
        room([2000.0, 3000.0, 0.0], [3000.0, 4000.0, 1000.0]),
    ];
    connect_x(&mut leaves, 0, 1, 1000.0, [0.0, 1000.0], [0.0, 1000.0]);
    connect_y(&mut leaves, 1, 2, 1000.0, [2000.0, 3000.0], [0.0, 1000.0]);
    connect_y(&mut leaves, 2, 3, 3000.0, [2000.0, 3000.0], [0.0, 1000.0]);
    chain_tree(leaves)
}

/// A grid of 1000³ rooms in the xy plane; the portal graph has cycles.
pub struct Grid {
    pub tree: BspTree,
    n: usize,
    cells: Vec<Option<usize>>,
}

impl Grid {
    /// Leaf index of the room in column `i`, row `j`.
    pub fn leaf(&self, i: usize, j: usize) -> usize {
        self.cells[j * self.n + i].expect("solid cell has no leaf")
    }
}

/// `n × n` cells, leaving out the `solid` ones. Every pair of neighbouring
/// rooms is joined by a doorway spanning `door` along the shared wall
/// (measured from the wall's low end) and the full height.
pub fn grid(n: usize, solid: &[(usize, usize)], door: [Real; 2]) -> Grid {
    let mut cells = vec![None; n * n];
    let mut leaves = Vec::new();
    for j in 0..n {
        for i in 0..n {
            if solid.contains(&(i, j)) {
                continue;
            }
            let (x, y) = (i as Real * 1000.0, j as Real * 1000.0);
            cells[j * n + i] = Some(leaves.len());
            leaves.push(room([x, y, 0.0], [x + 1000.0, y + 1000.0, 1000.0]));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let Some(here) = cells[j * n + i] else {
                continue;
            };
            let (x, y) = (i as Real * 1000.0, j as Real * 1000.0);
            if let Some(east) = (i + 1 < n).then(|| cells[j * n + i + 1]).flatten() {
                connect_x(&mut leaves, here, east, x + 1000.0, [y + door[0], y + door[1]], [0.0, 1000.0]);
            }
            if let Some(north) = (j + 1 < n).then(|| cells[(j + 1) * n + i]).flatten() {
                connect_y(&mut leaves, here, north, y + 1000.0, [x + door[0], x + door[1]], [0.0, 1000.0]);
            }
        }
    }

    Grid {
        tree: chain_tree(leaves),
        n,
        cells,
    }
}

/// `n × n` rooms whose shared walls are open entirely.
pub fn open_grid(n: usize) -> Grid {
    grid(n, &[], [0.0, 1000.0])
}

/// Eight rooms around a solid pillar in the middle of a 3 × 3 grid, with
/// 500 wide doorways in the middle of each shared wall:
///
/// ```text
/// (0,2) (1,2) (2,2)
/// (0,1) ##### (2,1)
/// (0,0) (1,0) (2,0)
/// ```
pub fn ring() -> Grid {
    grid(3, &[(1, 1)], [250.0, 750.0])
}

/// Runs the whole computation and returns the leaf PVS.
pub fn leaf_pvs(tree: &BspTree, config: &PvsConfig) -> BitMatrix {
    match pipeline::run(tree, config).unwrap() {
        PvsOutcome::Computed { pvs, .. } => pvs,
        PvsOutcome::SuperLeavesOnly { .. } => panic!("expected a computed PVS"),
    }
}

/// Pairs visible in `a` but not in `b`.
pub fn missing_from(a: &BitMatrix, b: &BitMatrix) -> Vec<(usize, usize)> {
    let n = a.size();
    (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| a.get(i, j) && !b.get(i, j))
        .collect()
}
