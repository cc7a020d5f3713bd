//! Dependency resolution: pushes each task past the end of its
//! prerequisites and assigns a dependency depth (`level`).
//!
//! Tasks are visited depth-first, one root per task in input order, using an
//! explicit frame stack instead of recursion. A dependency that is already on
//! the current branch closes a cycle: it counts as depth 0, is not descended
//! into, and resolution carries on. Ids that match no task are ignored.
//!
//! A task whose whole upstream is acyclic settles on its first visit and is
//! reused afterwards, so acyclic inputs resolve in linear time and the result
//! does not depend on input order. Tasks that reach a cycle are recomputed on
//! every visit, which makes their final dates depend on input order.

use std::collections::HashMap;

use uuid::Uuid;

use super::naive::{shift, Span};
use crate::model::Task;

/// Resolved spans and levels, index-aligned with the input tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub spans: Vec<Span>,
    pub levels: Vec<u32>,
    /// Edges skipped because their target was already on the branch.
    pub cycle_edges: usize,
    /// Dependency ids that matched no task.
    pub dangling: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    /// Settled: the upstream is acyclic, dates and level are final.
    Done,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_dep: usize,
    level: u32,
    acyclic: bool,
}

impl Frame {
    fn new(node: usize) -> Self {
        Self {
            node,
            next_dep: 0,
            level: 0,
            acyclic: true,
        }
    }
}

struct Resolver {
    edges: Vec<Vec<usize>>,
    spans: Vec<Span>,
    levels: Vec<u32>,
    marks: Vec<Mark>,
    buffer_days: i64,
    cycle_edges: usize,
}

/// Resolve `naive` spans (one per task, same order) against the task graph.
pub fn resolve_dependencies(tasks: &[Task], naive: Vec<Span>, buffer_days: u32) -> Resolution {
    debug_assert_eq!(tasks.len(), naive.len());

    let index: HashMap<Uuid, usize> = tasks.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

    let mut dangling = 0;
    let edges: Vec<Vec<usize>> = tasks
        .iter()
        .map(|task| {
            task.dependencies
                .iter()
                .filter_map(|id| match index.get(id) {
                    Some(&i) => Some(i),
                    None => {
                        tracing::debug!(task = %task.title, dependency = %id, "ignoring unknown dependency");
                        dangling += 1;
                        None
                    }
                })
                .collect()
        })
        .collect();
    if dangling > 0 {
        tracing::warn!(edges = dangling, "dependencies on unknown tasks were ignored");
    }

    let n = tasks.len();
    let mut resolver = Resolver {
        edges,
        spans: naive,
        levels: vec![0; n],
        marks: vec![Mark::Unvisited; n],
        buffer_days: i64::from(buffer_days),
        cycle_edges: 0,
    };

    for root in 0..n {
        resolver.run(root);
    }

    if resolver.cycle_edges > 0 {
        tracing::warn!(edges = resolver.cycle_edges, "dependency cycle detected, cyclic edges were cut");
    }

    Resolution {
        spans: resolver.spans,
        levels: resolver.levels,
        cycle_edges: resolver.cycle_edges,
        dangling,
    }
}

impl Resolver {
    fn run(&mut self, root: usize) {
        if self.marks[root] == Mark::Done {
            return;
        }
        self.marks[root] = Mark::InProgress;
        let mut stack = vec![Frame::new(root)];

        while let Some(top) = stack.last_mut() {
            let node = top.node;
            let Some(&dep) = self.edges[node].get(top.next_dep) else {
                let finished = *top;
                stack.pop();
                self.finish(finished, stack.last_mut());
                continue;
            };
            top.next_dep += 1;

            match self.marks[dep] {
                Mark::InProgress => {
                    top.acyclic = false;
                    top.level = top.level.max(1);
                    self.cycle_edges += 1;
                    self.push_after(node, dep);
                }
                Mark::Done => {
                    top.level = top.level.max(self.levels[dep] + 1);
                    self.push_after(node, dep);
                }
                Mark::Unvisited => {
                    self.marks[dep] = Mark::InProgress;
                    stack.push(Frame::new(dep));
                }
            }
        }
    }

    fn finish(&mut self, frame: Frame, parent: Option<&mut Frame>) {
        self.levels[frame.node] = frame.level;
        self.marks[frame.node] = if frame.acyclic {
            Mark::Done
        } else {
            Mark::Unvisited
        };

        if let Some(parent) = parent {
            parent.acyclic &= frame.acyclic;
            parent.level = parent.level.max(frame.level + 1);
            self.push_after(parent.node, frame.node);
        }
    }

    /// Move `node` so it starts no earlier than `dep`'s end plus the buffer.
    fn push_after(&mut self, node: usize, dep: usize) {
        let earliest = shift(self.spans[dep].end, self.buffer_days);
        let span = &mut self.spans[node];
        if span.start < earliest {
            *span = Span::starting(earliest, span.duration_days);
        }
    }
}
