//! Reference graphs shared by the integration tests.
//!
//! Nodes are always inserted `1..=n` before any edge so that enumeration
//! order is the same for every build.

#![allow(dead_code)]

use socnet_graph::SocialGraph;

pub fn build(directed: bool, nodes: u32, edges: &[(u32, u32)]) -> SocialGraph<u32> {
    let mut g = SocialGraph::new(directed, false);
    for node in 1..=nodes {
        g.add_node(node);
    }
    for &(a, b) in edges {
        g.add_edge(a, b).expect("fixture edge");
    }
    g
}

pub fn directed_empty() -> SocialGraph<u32> {
    build(true, 3, &[])
}

pub fn undirected_empty() -> SocialGraph<u32> {
    build(false, 3, &[])
}

pub fn directed_complete() -> SocialGraph<u32> {
    let edges: Vec<(u32, u32)> = (1..=4)
        .flat_map(|a| (1..=4).filter(move |&b| b != a).map(move |b| (a, b)))
        .collect();
    build(true, 4, &edges)
}

pub fn undirected_complete() -> SocialGraph<u32> {
    build(false, 4, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)])
}

pub fn directed_strongly_connected() -> SocialGraph<u32> {
    build(
        true,
        7,
        &[
            (1, 2),
            (1, 3),
            (2, 4),
            (3, 4),
            (3, 5),
            (3, 6),
            (4, 6),
            (5, 6),
            (6, 1),
            (6, 7),
            (7, 2),
        ],
    )
}

pub fn directed_weakly_connected() -> SocialGraph<u32> {
    build(
        true,
        7,
        &[
            (1, 2),
            (1, 3),
            (2, 4),
            (3, 4),
            (3, 5),
            (4, 6),
            (5, 6),
            (7, 2),
        ],
    )
}

pub fn directed_not_connected() -> SocialGraph<u32> {
    build(true, 6, &[(1, 2), (3, 1), (3, 2), (4, 5), (5, 6), (6, 4)])
}

pub fn undirected_connected() -> SocialGraph<u32> {
    build(
        false,
        6,
        &[
            (1, 2),
            (1, 4),
            (1, 6),
            (2, 3),
            (3, 4),
            (4, 5),
            (4, 6),
            (5, 6),
        ],
    )
}

pub fn undirected_not_connected() -> SocialGraph<u32> {
    build(false, 6, &[(1, 2), (1, 3), (2, 3), (4, 5), (4, 6), (5, 6)])
}

/// Every fixture with a short label, for table-driven tests.
pub fn all() -> Vec<(&'static str, SocialGraph<u32>)> {
    vec![
        ("directed_empty", directed_empty()),
        ("undirected_empty", undirected_empty()),
        ("directed_complete", directed_complete()),
        ("undirected_complete", undirected_complete()),
        ("directed_strongly_connected", directed_strongly_connected()),
        ("directed_weakly_connected", directed_weakly_connected()),
        ("directed_not_connected", directed_not_connected()),
        ("undirected_connected", undirected_connected()),
        ("undirected_not_connected", undirected_not_connected()),
    ]
}
