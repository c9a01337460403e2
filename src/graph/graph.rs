use ahash::{AHashMap, AHashSet};

use crate::{error::GeoError, types::DistrictId};

/// District adjacency (dual graph) in compressed sparse row format.
/// Undirected: every edge is stored once in each direction, without duplicates.
#[derive(Debug, Default, Clone)]
pub struct DistrictGraph {
    districts: Vec<DistrictId>,
    index: AHashMap<DistrictId, u32>,
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl DistrictGraph {
    /// Construct a graph from district labels and per-node adjacency lists.
    /// Adjacency lists are taken as-is; use [`DistrictGraph::from_edge_list`]
    /// to normalize raw edge pairs.
    pub fn new(districts: Vec<DistrictId>, edges: &[Vec<u32>]) -> Self {
        assert!(edges.len() == districts.len(), "edges.len() must equal districts.len()");
        edges.iter().enumerate().for_each(|(i, neighbors)| {
            neighbors.iter().for_each(|&n| {
                assert!((n as usize) < districts.len(), "edges[{i}] references node {n} out of range");
            });
        });

        let index = districts.iter().enumerate()
            .map(|(i, district)| (district.clone(), i as u32))
            .collect();

        Self {
            districts,
            index,
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
        }
    }

    /// Build the graph from the known districts and a raw list of edge pairs.
    ///
    /// The edge list is closed under symmetry and deduplicated. A district's
    /// neighbors are ordered by their first appearance: forward pairs `(d, x)`
    /// in input order, then reversed pairs `(x, d)` in input order.
    /// Self-loops are dropped.
    pub fn from_edge_list<I>(districts: Vec<DistrictId>, pairs: I) -> Result<Self, GeoError>
    where
        I: IntoIterator<Item = (DistrictId, DistrictId)>,
    {
        let mut index: AHashMap<&str, u32> = AHashMap::with_capacity(districts.len());
        for (i, district) in districts.iter().enumerate() {
            if index.insert(district.as_str(), i as u32).is_some() {
                return Err(GeoError::InputShape(format!("district '{district}' is listed more than once")));
            }
        }

        let lookup = |district: &DistrictId| {
            index.get(district.as_str()).copied().ok_or_else(|| {
                GeoError::InputShape(format!("edge references district '{district}' absent from the election table"))
            })
        };

        let pairs = pairs.into_iter()
            .map(|(a, b)| Ok((lookup(&a)?, lookup(&b)?)))
            .collect::<Result<Vec<_>, GeoError>>()?;

        let mut seen = AHashSet::with_capacity(pairs.len() * 2);
        let mut adjacency = vec![Vec::new(); districts.len()];
        let forward = pairs.iter().copied();
        let reverse = pairs.iter().map(|&(a, b)| (b, a));
        for (a, b) in forward.chain(reverse) {
            if a != b && seen.insert((a, b)) {
                adjacency[a as usize].push(b);
            }
        }

        Ok(Self::new(districts, &adjacency))
    }

    /// Get the number of districts in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.districts.len() }

    /// Get the number of directed adjacency entries (twice the undirected edge count).
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Get the district labels in input order.
    #[inline] pub fn districts(&self) -> &[DistrictId] { &self.districts }

    /// Get the label of a given node.
    #[inline] pub fn district(&self, node: usize) -> &DistrictId { &self.districts[node] }

    /// Look up the node index of a district label.
    #[inline]
    pub fn index_of(&self, district: &str) -> Option<usize> {
        self.index.get(district).map(|&i| i as usize)
    }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(labels: &[&str]) -> Vec<DistrictId> {
        labels.iter().map(|&l| DistrictId::from(l)).collect()
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(DistrictId, DistrictId)> {
        list.iter().map(|&(a, b)| (a.into(), b.into())).collect()
    }

    fn make_test_graph() -> DistrictGraph {
        DistrictGraph::new(
            ids(&["a", "b", "c", "d"]),
            &[
                vec![1, 2],       // a
                vec![0, 2],       // b
                vec![0, 1, 3],    // c
                vec![2],          // d
            ],
        )
    }

    #[test]
    fn csr_graph_construction() {
        let graph = make_test_graph();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 8);

        // Offsets are cumulative neighbor counts, len = nodes + 1
        assert_eq!(graph.offsets, vec![0, 2, 4, 7, 8]);
        assert_eq!(graph.edges, vec![1, 2, 0, 2, 0, 1, 3, 2]);
        assert_eq!(*graph.offsets.last().unwrap() as usize, graph.edges.len());
        for window in graph.offsets.windows(2) { assert!(window[0] <= window[1]) }
    }

    #[test]
    fn degree_and_neighbors() {
        let graph = make_test_graph();

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.degree(3), 1);
        assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn index_lookup_by_label() {
        let graph = make_test_graph();
        assert_eq!(graph.index_of("c"), Some(2));
        assert_eq!(graph.index_of("z"), None);
        assert_eq!(graph.district(3).as_str(), "d");
    }

    #[test]
    fn edge_list_is_closed_under_symmetry() {
        let graph = DistrictGraph::from_edge_list(
            ids(&["A", "B", "C"]),
            pairs(&[("A", "B"), ("B", "C")]),
        ).unwrap();

        assert_eq!(graph.edges(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.edges(1).collect::<Vec<_>>(), vec![2, 0]);
        assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn duplicate_and_reversed_edges_collapse() {
        let graph = DistrictGraph::from_edge_list(
            ids(&["1", "2", "3"]),
            pairs(&[("1", "2"), ("2", "1"), ("1", "2"), ("3", "1")]),
        ).unwrap();

        assert_eq!(graph.edges(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.edges(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn self_loops_are_dropped() {
        let graph = DistrictGraph::from_edge_list(
            ids(&["x", "y"]),
            pairs(&[("x", "x"), ("x", "y")]),
        ).unwrap();

        assert_eq!(graph.edges(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn isolated_districts_have_no_neighbors() {
        let graph = DistrictGraph::from_edge_list(ids(&["a", "b", "c"]), pairs(&[("a", "b")])).unwrap();

        assert_eq!(graph.degree(2), 0);
        assert!(graph.edges(2).next().is_none());
    }

    #[test]
    fn unknown_district_in_edges_is_rejected() {
        let err = DistrictGraph::from_edge_list(ids(&["a", "b"]), pairs(&[("a", "q")])).unwrap_err();
        assert!(matches!(err, GeoError::InputShape(ref msg) if msg.contains("'q'")));
    }

    #[test]
    fn duplicate_district_labels_are_rejected() {
        let err = DistrictGraph::from_edge_list(ids(&["a", "b", "a"]), Vec::new()).unwrap_err();
        assert!(matches!(err, GeoError::InputShape(_)));
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = DistrictGraph::new(Vec::new(), &[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.offsets, vec![0]);
    }

    #[test]
    #[should_panic(expected = "edges.len() must equal districts.len()")]
    fn new_panics_when_edges_len_mismatch() {
        DistrictGraph::new(ids(&["a"]), &[]);
    }

    #[test]
    #[should_panic]
    fn degree_panics_for_out_of_bounds_node() {
        let graph = make_test_graph();
        graph.degree(graph.node_count());
    }
}
