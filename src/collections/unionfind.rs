// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Union-Find (disjoint set) data structure.

use std::collections::HashMap;
use std::hash::Hash;

/// State of a single element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Component {
    /// The root element with the rank of its tree.
    Root(usize),
    /// An inner node with the parent node.
    Node(usize),
}

/// Union-Find data structure over arbitrary node keys.
///
/// Uses union by rank and path compression.
///
/// # Example
///
/// ```
/// use rs_orsteps::collections::UnionFind;
///
/// let mut uf = UnionFind::new(vec![1, 2, 3, 4]);
/// assert!(uf.union(1, 2));
/// assert!(uf.union(3, 4));
/// assert!(!uf.union(2, 1));
/// assert_eq!(uf.find(1), uf.find(2));
/// assert_ne!(uf.find(1), uf.find(3));
/// assert_eq!(uf.num_sets(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind<N> {
    /// Index of each node.
    index: HashMap<N, usize>,
    /// The node for each index.
    nodes: Vec<N>,
    comps: Vec<Component>,
    num_sets: usize,
}

impl<N> UnionFind<N>
where
    N: Copy + Eq + Hash,
{
    /// Create a structure where every node is its own set with rank 0.
    ///
    /// Repeated nodes are ignored.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut uf = UnionFind {
            index: HashMap::new(),
            nodes: vec![],
            comps: vec![],
            num_sets: 0,
        };
        for u in nodes {
            if !uf.index.contains_key(&u) {
                uf.index.insert(u, uf.nodes.len());
                uf.nodes.push(u);
                uf.comps.push(Component::Root(0));
                uf.num_sets += 1;
            }
        }
        uf
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, u: N) -> bool {
        self.index.contains_key(&u)
    }

    /// Return the number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Return the representative of the set containing `u`.
    ///
    /// The representative is always its own parent. Returns `None` if `u` is
    /// unknown.
    pub fn find(&mut self, u: N) -> Option<N> {
        let uid = *self.index.get(&u)?;
        let root = self.find_root(uid);
        Some(self.nodes[root])
    }

    /// Return the rank of the tree of `u`.
    pub fn rank(&mut self, u: N) -> Option<usize> {
        let uid = *self.index.get(&u)?;
        let root = self.find_root(uid);
        match self.comps[root] {
            Component::Root(rank) => Some(rank),
            Component::Node(_) => None,
        }
    }

    /// Return `true` if `u` and `v` are in the same set.
    pub fn same(&mut self, u: N, v: N) -> bool {
        match (self.find(u), self.find(v)) {
            (Some(ru), Some(rv)) => ru == rv,
            _ => false,
        }
    }

    /// Join the sets containing `u` and `v`.
    ///
    /// Returns `false` if both are already in the same set (or one of them is
    /// unknown). Nothing is changed in this case.
    pub fn union(&mut self, u: N, v: N) -> bool {
        let (uid, vid) = match (self.index.get(&u), self.index.get(&v)) {
            (Some(&uid), Some(&vid)) => (uid, vid),
            _ => return false,
        };
        let uroot = self.find_root(uid);
        let vroot = self.find_root(vid);
        if uroot == vroot {
            return false;
        }

        let urank = self.rank_of_root(uroot);
        let vrank = self.rank_of_root(vroot);
        if urank < vrank {
            self.comps[uroot] = Component::Node(vroot);
        } else {
            self.comps[vroot] = Component::Node(uroot);
            if urank == vrank {
                self.comps[uroot] = Component::Root(urank + 1);
            }
        }
        self.num_sets -= 1;
        true
    }

    fn rank_of_root(&self, root: usize) -> usize {
        match self.comps[root] {
            Component::Root(rank) => rank,
            Component::Node(_) => 0,
        }
    }

    /// Return the root of the tree containing `u` and compress the path.
    fn find_root(&mut self, u: usize) -> usize {
        let mut root = u;
        while let Component::Node(parent) = self.comps[root] {
            root = parent;
        }

        // path compression
        let mut v = u;
        while let Component::Node(parent) = self.comps[v] {
            self.comps[v] = Component::Node(root);
            v = parent;
        }

        root
    }
}
