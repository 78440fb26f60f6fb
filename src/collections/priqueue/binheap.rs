// Copyright (c) 2016, 2017, 2020 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Binary heap implementation

use crate::collections::PriQueue;

use std::cmp::Ordering;

/// Simple binary min-heap of `(key, value)` pairs.
///
/// Elements are ordered by value, ties are broken by key. Values only need to
/// be `PartialOrd`; incomparable values (NaN) are treated as equal and fall
/// back to the key order.
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<(K, V)>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the elements in heap order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.heap.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> PriQueue<K, V> for BinHeap<K, V>
where
    K: Ord,
    V: PartialOrd,
{
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap, the last element
        // takes its place and is moved down
        let min = self.heap.swap_remove(0);

        let n = self.heap.len();
        let mut cur_pos = 0;
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.less(left_pos, right_pos) {
                left_pos
            } else {
                right_pos
            };

            if !self.less(next_pos, cur_pos) {
                break;
            }

            self.heap.swap(cur_pos, next_pos);
            cur_pos = next_pos;
        }

        Some(min)
    }

    fn peek_min(&self) -> Option<(&K, &V)> {
        self.heap.first().map(|(k, v)| (k, v))
    }
}

impl<K, V> BinHeap<K, V>
where
    K: Ord,
    V: PartialOrd,
{
    /// Return `true` if the element at position `i` must be handled before
    /// the element at position `j`.
    fn less(&self, i: usize, j: usize) -> bool {
        let (ki, vi) = &self.heap[i];
        let (kj, vj) = &self.heap[j];
        match vi.partial_cmp(vj) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => ki < kj,
        }
    }

    /// Move the element at `pos` up in the heap until its parent is not
    /// larger or the root node is reached.
    fn upheap(&mut self, pos: usize) {
        let mut cur_pos = pos;
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            if !self.less(cur_pos, parent_pos) {
                break;
            }
            self.heap.swap(cur_pos, parent_pos);
            cur_pos = parent_pos;
        }
    }
}
