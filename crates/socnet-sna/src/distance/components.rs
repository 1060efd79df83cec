//! Strongly connected components of a [`Projection`].
//!
//! Undirected graphs project every edge as two arcs, so the same routine
//! yields connected components for them.

use petgraph::algo::tarjan_scc;

use super::projection::Projection;

/// Component membership over dense slots.
#[derive(Debug, Clone, Default)]
pub struct Components {
    component_of: Vec<usize>,
    members: Vec<Vec<usize>>,
}

impl Components {
    /// Run Tarjan's algorithm and number components by their smallest slot.
    pub fn of(projection: &Projection) -> Self {
        let g = projection.to_petgraph();
        let mut members: Vec<Vec<usize>> = tarjan_scc(&g)
            .into_iter()
            .map(|scc| {
                let mut slots: Vec<usize> = scc.into_iter().map(|ix| ix.index()).collect();
                slots.sort_unstable();
                slots
            })
            .collect();
        members.sort_unstable_by_key(|slots| slots.first().copied().unwrap_or(usize::MAX));

        let mut component_of = vec![0; projection.node_count()];
        for (id, slots) in members.iter().enumerate() {
            for &slot in slots {
                component_of[slot] = id;
            }
        }

        Self {
            component_of,
            members,
        }
    }

    pub fn component_of(&self, slot: usize) -> usize {
        self.component_of[slot]
    }

    pub fn members(&self, component: usize) -> &[usize] {
        &self.members[component]
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.members.iter().map(Vec::as_slice)
    }
}
