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

//! Tie-breaking policies for candidate selections.
//!
//! All complete searches in this workspace maximize profit first; they differ
//! only in how a profit tie between two candidate selections is resolved.
//! This module is the single home of that policy decision: a search offers
//! each terminal candidate to its incumbent, and the incumbent consults a
//! `SelectionPolicy` to decide whether the challenger supersedes the best
//! selection found so far.
//!
//! Two policies exist, and their difference is observable: on instances with
//! several optimal subsets, the exhaustive search (`MinimalCardinality`) and
//! branch-and-bound (`MinimalCardinalityThenWeight`) may legitimately report
//! different subsets of equal profit. The optimal profit value itself never
//! depends on the policy.
//!
//! Policies are pure functions of the candidate metrics; they hold no state
//! and never inspect the selections themselves.

use crate::num::SolverNumeric;

/// The aggregate metrics of a candidate selection, as consulted by a
/// [`SelectionPolicy`]. The item ids themselves are irrelevant to
/// tie-breaking and are deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidateMetrics<T> {
    /// The total profit of the candidate selection.
    pub profit: T,
    /// The number of items in the candidate selection.
    pub cardinality: usize,
    /// The total weight of the candidate selection.
    pub weight: T,
}

impl<T> CandidateMetrics<T>
where
    T: SolverNumeric,
{
    /// Constructs metrics from their three components.
    #[inline]
    pub fn new(profit: T, cardinality: usize, weight: T) -> Self {
        Self {
            profit,
            cardinality,
            weight,
        }
    }
}

/// A tie-breaking rule deciding whether a challenger selection should replace
/// the incumbent selection.
///
/// Implementations must be *strict*: a challenger that is indistinguishable
/// from the incumbent under the policy must NOT supersede it. This keeps
/// search results deterministic (the first-found candidate wins among true
/// equals) and makes repeated runs on the same model byte-identical.
pub trait SelectionPolicy {
    /// A short human-readable name for reporting.
    fn name(&self) -> &'static str;

    /// Returns `true` if `challenger` should replace `incumbent`.
    fn supersedes<T>(&self, challenger: &CandidateMetrics<T>, incumbent: &CandidateMetrics<T>) -> bool
    where
        T: SolverNumeric;
}

/// The two-level policy of the exhaustive baseline search: strictly higher
/// profit wins; at equal profit the selection with fewer items wins. Weight
/// plays no role at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimalCardinality;

impl SelectionPolicy for MinimalCardinality {
    #[inline]
    fn name(&self) -> &'static str {
        "MinimalCardinality"
    }

    #[inline]
    fn supersedes<T>(&self, challenger: &CandidateMetrics<T>, incumbent: &CandidateMetrics<T>) -> bool
    where
        T: SolverNumeric,
    {
        challenger.profit > incumbent.profit
            || (challenger.profit == incumbent.profit
                && challenger.cardinality < incumbent.cardinality)
    }
}

/// The three-level policy of the branch-and-bound search: (1) maximize
/// profit, (2) at equal profit minimize cardinality, (3) at equal profit and
/// cardinality minimize total weight.
///
/// This is strictly finer than [`MinimalCardinality`]; the two policies can
/// therefore disagree on *which* optimal subset is reported, never on the
/// optimal profit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimalCardinalityThenWeight;

impl SelectionPolicy for MinimalCardinalityThenWeight {
    #[inline]
    fn name(&self) -> &'static str {
        "MinimalCardinalityThenWeight"
    }

    #[inline]
    fn supersedes<T>(&self, challenger: &CandidateMetrics<T>, incumbent: &CandidateMetrics<T>) -> bool
    where
        T: SolverNumeric,
    {
        if challenger.profit != incumbent.profit {
            return challenger.profit > incumbent.profit;
        }
        if challenger.cardinality != incumbent.cardinality {
            return challenger.cardinality < incumbent.cardinality;
        }
        challenger.weight < incumbent.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(profit: i64, cardinality: usize, weight: i64) -> CandidateMetrics<i64> {
        CandidateMetrics::new(profit, cardinality, weight)
    }

    #[test]
    fn test_profit_dominates_everything() {
        let better = m(10, 5, 100);
        let worse = m(9, 1, 1);

        let cardinality = MinimalCardinality;
        let full = MinimalCardinalityThenWeight;

        assert!(cardinality.supersedes(&better, &worse));
        assert!(!cardinality.supersedes(&worse, &better));
        assert!(full.supersedes(&better, &worse));
        assert!(!full.supersedes(&worse, &better));
    }

    #[test]
    fn test_equal_profit_prefers_fewer_items() {
        let fewer = m(10, 1, 8);
        let more = m(10, 3, 4);

        let cardinality = MinimalCardinality;
        let full = MinimalCardinalityThenWeight;

        assert!(cardinality.supersedes(&fewer, &more));
        assert!(!cardinality.supersedes(&more, &fewer));
        assert!(full.supersedes(&fewer, &more));
        assert!(!full.supersedes(&more, &fewer));
    }

    #[test]
    fn test_weight_breaks_remaining_ties_only_for_full_policy() {
        let lighter = m(10, 2, 4);
        let heavier = m(10, 2, 6);

        // The baseline policy is blind to weight.
        let cardinality = MinimalCardinality;
        assert!(!cardinality.supersedes(&lighter, &heavier));
        assert!(!cardinality.supersedes(&heavier, &lighter));

        let full = MinimalCardinalityThenWeight;
        assert!(full.supersedes(&lighter, &heavier));
        assert!(!full.supersedes(&heavier, &lighter));
    }

    #[test]
    fn test_policies_are_strict_on_true_equals() {
        let a = m(10, 2, 6);
        let b = m(10, 2, 6);

        assert!(!MinimalCardinality.supersedes(&a, &b));
        assert!(!MinimalCardinalityThenWeight.supersedes(&a, &b));
    }

    #[test]
    fn test_names() {
        assert_eq!(MinimalCardinality.name(), "MinimalCardinality");
        assert_eq!(
            MinimalCardinalityThenWeight.name(),
            "MinimalCardinalityThenWeight"
        );
    }
}
