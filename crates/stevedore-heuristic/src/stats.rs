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

/// Statistics collected during a greedy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicSolverStatistics {
    /// Items examined in ratio order.
    pub candidates_considered: u64,
    /// Items admitted into the selection.
    pub candidates_admitted: u64,
    /// Items skipped because they no longer fit. Skipped items are never
    /// revisited; the fill makes a single pass.
    pub candidates_rejected: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl Default for HeuristicSolverStatistics {
    fn default() -> Self {
        Self {
            candidates_considered: 0,
            candidates_admitted: 0,
            candidates_rejected: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl HeuristicSolverStatistics {
    #[inline]
    pub fn on_candidate_considered(&mut self) {
        self.candidates_considered = self.candidates_considered.saturating_add_val(1);
    }

    #[inline]
    pub fn on_candidate_admitted(&mut self) {
        self.candidates_admitted = self.candidates_admitted.saturating_add_val(1);
    }

    #[inline]
    pub fn on_candidate_rejected(&mut self) {
        self.candidates_rejected = self.candidates_rejected.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for HeuristicSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Heuristic Solver Statistics:")?;
        writeln!(f, "  Candidates considered: {}", self.candidates_considered)?;
        writeln!(f, "  Candidates admitted:   {}", self.candidates_admitted)?;
        writeln!(f, "  Candidates rejected:   {}", self.candidates_rejected)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}
