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

//! Incumbent management for the recursive searches.
//!
//! An `Incumbent<T, P>` holds the best selection found so far together with
//! its metrics, and decides replacement by consulting its `SelectionPolicy`.
//! The accumulator is owned by one solver invocation and passed down the
//! recursion by `&mut`; nothing is shared between calls or solvers.
//!
//! The initial state is the empty selection with zero profit and a weight
//! sentinel of `T::max_value()`. The sentinel only matters to the
//! weight-aware policy: the first terminal candidate (even the empty one,
//! at weight zero) replaces it. A search that never offers a candidate —
//! possible only when the short-circuit paths skip recursion entirely —
//! must not report the sentinel, so `into_solution` normalizes the empty
//! incumbent to the defined zero solution.

use stevedore_model::{index::ItemId, solution::Solution};
use stevedore_search::{
    num::SolverNumeric,
    policy::{CandidateMetrics, SelectionPolicy},
};

/// The best selection found so far during a recursive search, guarded by a
/// tie-breaking policy.
#[derive(Debug, Clone)]
pub struct Incumbent<T, P> {
    policy: P,
    profit: T,
    weight: T,
    items: Vec<ItemId>,
}

impl<T, P> Incumbent<T, P>
where
    T: SolverNumeric,
    P: SelectionPolicy,
{
    /// Creates a fresh incumbent: empty selection, zero profit, and the
    /// weight sentinel at `T::max_value()`.
    #[inline]
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            profit: T::ZERO,
            weight: T::max_value(),
            items: Vec::new(),
        }
    }

    /// Returns the metrics of the current best selection.
    #[inline]
    pub fn metrics(&self) -> CandidateMetrics<T> {
        CandidateMetrics::new(self.profit, self.items.len(), self.weight)
    }

    /// Returns the profit of the current best selection.
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }

    /// Offers a terminal candidate to the incumbent. The candidate replaces
    /// the current best exactly when the policy says it supersedes it.
    /// Returns `true` on replacement.
    pub fn offer(&mut self, challenger: CandidateMetrics<T>, items: &[ItemId]) -> bool {
        if self.policy.supersedes(&challenger, &self.metrics()) {
            self.profit = challenger.profit;
            self.weight = challenger.weight;
            self.items.clear();
            self.items.extend_from_slice(items);
            true
        } else {
            false
        }
    }

    /// Consumes the incumbent and produces the reported solution.
    ///
    /// An incumbent that never left its initial state still carries the
    /// weight sentinel; the empty selection is normalized to zero weight.
    pub fn into_solution(self) -> Solution<T> {
        let weight = if self.items.is_empty() {
            T::ZERO
        } else {
            self.weight
        };

        Solution::new(self.profit, weight, self.items)
    }
}
