// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use stevedore_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during the execution of the exact solvers.
///
/// The recursive searches fill the node/leaf/pruning/depth counters; the
/// dynamic programming solver fills the table counters. Counters that do not
/// apply to a strategy simply stay zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactSolverStatistics {
    /// Total search-tree nodes visited (recursive strategies).
    pub nodes_explored: u64,
    /// Terminal candidates compared against the incumbent.
    pub leaves_evaluated: u64,
    /// Include branches skipped because the item no longer fit.
    pub prunings_capacity: u64,
    /// Number of times the incumbent selection was replaced.
    pub incumbent_updates: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Table cells filled (dynamic programming).
    pub cells_filled: u64,
    /// Backward-walk steps taken during reconstruction (dynamic programming).
    pub reconstruction_steps: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl Default for ExactSolverStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            leaves_evaluated: 0,
            prunings_capacity: 0,
            incumbent_updates: 0,
            max_depth: 0,
            cells_filled: 0,
            reconstruction_steps: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl ExactSolverStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    #[inline]
    pub fn on_leaf_evaluated(&mut self) {
        self.leaves_evaluated = self.leaves_evaluated.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_capacity(&mut self) {
        self.prunings_capacity = self.prunings_capacity.saturating_add_val(1);
    }

    #[inline]
    pub fn on_incumbent_update(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add_val(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_cell_filled(&mut self) {
        self.cells_filled = self.cells_filled.saturating_add_val(1);
    }

    #[inline]
    pub fn on_reconstruction_step(&mut self) {
        self.reconstruction_steps = self.reconstruction_steps.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ExactSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Exact Solver Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Leaves evaluated:     {}", self.leaves_evaluated)?;
        writeln!(f, "  Prunings (capacity):  {}", self.prunings_capacity)?;
        writeln!(f, "  Incumbent updates:    {}", self.incumbent_updates)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Table cells filled:   {}", self.cells_filled)?;
        writeln!(f, "  Reconstruction steps: {}", self.reconstruction_steps)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
