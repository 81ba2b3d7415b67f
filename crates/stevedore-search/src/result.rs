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

use crate::num::SolverNumeric;
use stevedore_model::solution::Solution;

/// The quality-tagged result of a solver run.
///
/// Every solver in this workspace terminates with a complete solution (there
/// is no failure mode for a valid model), but only the complete searches may
/// claim optimality. The greedy heuristic always reports `Feasible` — its
/// result must never be asserted optimal, which this type makes structural
/// rather than documentary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// The solution is proven optimal (exhaustive, dynamic programming,
    /// branch-and-bound).
    Optimal(Solution<T>),
    /// The solution is feasible but carries no optimality proof (greedy).
    Feasible(Solution<T>),
}

impl<T> SolverResult<T>
where
    T: SolverNumeric,
{
    /// Returns the solution regardless of its quality tag.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => solution,
        }
    }

    /// Consumes the result and returns the solution.
    #[inline]
    pub fn into_solution(self) -> Solution<T> {
        match self {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => solution,
        }
    }

    /// Returns `true` if the solution is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(profit={})", solution.total_profit())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(profit={})", solution.total_profit())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_quality_flags() {
        let optimal = SolverResult::Optimal(Solution::new(70_i64, 10_i64, vec![2, 3]));
        assert!(optimal.is_optimal());
        assert_eq!(optimal.solution().total_profit(), 70);

        let feasible = SolverResult::Feasible(Solution::new(50_i64, 9_i64, vec![1, 3]));
        assert!(!feasible.is_optimal());
        assert_eq!(feasible.solution().total_weight(), 9);
    }

    #[test]
    fn test_into_solution() {
        let result = SolverResult::Optimal(Solution::new(8_i64, 4_i64, vec![2]));
        let solution = result.into_solution();
        assert_eq!(solution.items(), &[2]);
    }

    #[test]
    fn test_display() {
        let optimal = SolverResult::Optimal(Solution::new(70_i64, 10_i64, vec![2, 3]));
        assert_eq!(format!("{}", optimal), "Optimal(profit=70)");

        let feasible = SolverResult::Feasible(Solution::<i64>::empty());
        assert_eq!(format!("{}", feasible), "Feasible(profit=0)");
    }
}
