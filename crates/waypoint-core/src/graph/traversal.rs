//! Lazy depth-first and breadth-first traversal iterators
//!
//! Both iterators own their frontier and visited-set and yield one vertex
//! label per `next` call. They are single-pass and not re-entrant; a fresh
//! call to [`Graph::dfs`]/[`Graph::bfs`] is the only way to restart.

use std::collections::{HashSet, VecDeque};

use crate::error::Result;

use super::model::Graph;

/// Pre-order depth-first traversal.
///
/// Uses an explicit stack rather than recursion, so depth is bounded by
/// graph size without risking call-stack exhaustion. Unvisited neighbors
/// are expanded in ascending lexicographic order.
#[derive(Debug)]
pub struct Dfs<'a> {
    graph: &'a Graph,
    stack: Vec<&'a str>,
    visited: HashSet<&'a str>,
}

impl<'a> Iterator for Dfs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(vertex) = self.stack.pop() {
            if !self.visited.insert(vertex) {
                continue;
            }
            // Push in descending order so the smallest label pops first
            for (neighbor, _) in self.graph.neighbors(vertex).rev() {
                if !self.visited.contains(neighbor) {
                    self.stack.push(neighbor);
                }
            }
            return Some(vertex);
        }
        None
    }
}

/// Breadth-first traversal with a FIFO frontier.
///
/// Neighbors are enqueued in ascending lexicographic order. A vertex may be
/// enqueued more than once while undiscovered; the visited check happens at
/// dequeue time, so each vertex is emitted exactly once, in first-reached
/// order.
#[derive(Debug)]
pub struct Bfs<'a> {
    graph: &'a Graph,
    queue: VecDeque<&'a str>,
    visited: HashSet<&'a str>,
}

impl<'a> Iterator for Bfs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(vertex) = self.queue.pop_front() {
            if !self.visited.insert(vertex) {
                continue;
            }
            for (neighbor, _) in self.graph.neighbors(vertex) {
                if !self.visited.contains(neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
            return Some(vertex);
        }
        None
    }
}

impl Graph {
    /// Lazy pre-order depth-first traversal from `start`.
    ///
    /// # Errors
    /// `UnknownVertex` if `start` is absent.
    pub fn dfs(&self, start: &str) -> Result<Dfs<'_>> {
        let start = self
            .key_of(start)
            .ok_or_else(|| crate::error::WaypointError::unknown_vertex(start))?;
        Ok(Dfs {
            graph: self,
            stack: vec![start],
            visited: HashSet::new(),
        })
    }

    /// Lazy breadth-first traversal from `start`.
    ///
    /// # Errors
    /// `UnknownVertex` if `start` is absent.
    pub fn bfs(&self, start: &str) -> Result<Bfs<'_>> {
        let start = self
            .key_of(start)
            .ok_or_else(|| crate::error::WaypointError::unknown_vertex(start))?;
        Ok(Bfs {
            graph: self,
            queue: VecDeque::from(vec![start]),
            visited: HashSet::new(),
        })
    }
}
