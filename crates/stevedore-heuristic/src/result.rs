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

use crate::stats::HeuristicSolverStatistics;
use stevedore_model::solution::Solution;

/// Result of the greedy solver after termination.
///
/// The solution is feasible by construction but carries no optimality
/// claim; callers must treat it as an approximation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicSolverOutcome<T> {
    solution: Solution<T>,
    statistics: HeuristicSolverStatistics,
}

impl<T> HeuristicSolverOutcome<T> {
    /// Constructs a new outcome from a solution and its run statistics.
    #[inline]
    pub fn new(solution: Solution<T>, statistics: HeuristicSolverStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// Returns the (approximate) solution.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &HeuristicSolverStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns its parts.
    #[inline]
    pub fn into_parts(self) -> (Solution<T>, HeuristicSolverStatistics) {
        (self.solution, self.statistics)
    }
}
