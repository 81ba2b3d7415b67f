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

//! Exhaustive include/exclude enumeration — the correctness baseline.
//!
//! This solver walks the full binary decision tree over the items in index
//! order: at each item the "exclude" branch is explored first, then the
//! "include" branch if the item still fits the remaining capacity. Every
//! terminal candidate is offered to an incumbent guarded by the
//! `MinimalCardinality` policy: strictly higher profit wins, and at equal
//! profit the selection with fewer items wins. Because the policy is strict,
//! the first-found candidate is kept among policy-equal subsets, which makes
//! the reported selection a pure function of the input order.
//!
//! The cost is `2^n` by construction and deliberately stays that way: this
//! solver exists as the reference the polynomial and pruned strategies are
//! validated against, so no memoization or pruning is applied here. Use it
//! on small instances only.

use crate::{
    incumbent::Incumbent, result::ExactSolverOutcome, stats::ExactSolverStatistics,
};
use stevedore_model::{index::{ItemId, ItemIndex}, model::Model};
use stevedore_search::{
    num::SolverNumeric,
    policy::{CandidateMetrics, MinimalCardinality},
};

/// The exhaustive baseline solver.
///
/// Stateless; every call to [`solve`](Self::solve) owns its recursion stack,
/// trail, and incumbent, so repeated runs on the same model are independent
/// and identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Creates a new `ExhaustiveSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model by complete enumeration.
    ///
    /// Degenerate inputs (capacity 0 or no items) yield the defined zero
    /// solution.
    pub fn solve<T>(&self, model: &Model<T>) -> ExactSolverOutcome<T>
    where
        T: SolverNumeric,
    {
        let start_time = std::time::Instant::now();

        let mut statistics = ExactSolverStatistics::default();
        let mut incumbent = Incumbent::new(MinimalCardinality);
        let mut trail: Vec<ItemId> = Vec::with_capacity(model.num_items());

        self.recurse(
            model,
            0,
            model.capacity(),
            T::zero(),
            T::zero(),
            &mut trail,
            &mut incumbent,
            &mut statistics,
        );

        statistics.set_total_time(start_time.elapsed());
        ExactSolverOutcome::new(incumbent.into_solution(), statistics)
    }

    /// Explores the decision for item `index` and everything below it.
    ///
    /// `remaining` is the capacity left after the decisions recorded in
    /// `trail`; `profit` and `weight` are the matching accumulated totals.
    #[allow(clippy::too_many_arguments)]
    fn recurse<T>(
        &self,
        model: &Model<T>,
        index: usize,
        remaining: T,
        profit: T,
        weight: T,
        trail: &mut Vec<ItemId>,
        incumbent: &mut Incumbent<T, MinimalCardinality>,
        statistics: &mut ExactSolverStatistics,
    ) where
        T: SolverNumeric,
    {
        statistics.on_node_explored();
        statistics.on_depth_update(index as u64);

        if index == model.num_items() {
            statistics.on_leaf_evaluated();
            let challenger = CandidateMetrics::new(profit, trail.len(), weight);
            if incumbent.offer(challenger, trail) {
                statistics.on_incumbent_update();
            }
            return;
        }

        let item = ItemIndex::new(index);

        // Exclude branch first; among policy-equal optima the earliest
        // discovered subset is the one reported.
        self.recurse(
            model,
            index + 1,
            remaining,
            profit,
            weight,
            trail,
            incumbent,
            statistics,
        );

        let item_weight = model.item_weight(item);
        if item_weight <= remaining {
            trail.push(model.item_id(item));
            self.recurse(
                model,
                index + 1,
                remaining - item_weight,
                profit + model.item_profit(item),
                weight + item_weight,
                trail,
                incumbent,
                statistics,
            );
            trail.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stevedore_model::model::ModelBuilder;
    use stevedore_search::validation::validate_solution;

    fn model(capacity: i64, items: &[(u32, i64, i64)]) -> Model<i64> {
        let mut builder = ModelBuilder::new(capacity);
        for &(id, weight, profit) in items {
            builder.add_item(id, weight, profit);
        }
        builder.build().expect("valid instance")
    }

    #[test]
    fn test_reference_scenario() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40), (3, 6, 30)]);
        let outcome = ExhaustiveSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 70);
        assert_eq!(outcome.solution().total_weight(), 10);
        assert_eq!(outcome.solution().items(), &[2, 3]);
        assert_eq!(validate_solution(&model, outcome.solution()), Ok(()));
    }

    #[test]
    fn test_zero_capacity_yields_zero_solution() {
        let model = model(0, &[(1, 5, 10), (2, 4, 40)]);
        let outcome = ExhaustiveSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 0);
        assert!(outcome.solution().is_empty());
    }

    #[test]
    fn test_empty_item_list_yields_zero_solution() {
        let model = model(50, &[]);
        let outcome = ExhaustiveSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 0);
        assert_eq!(outcome.solution().total_weight(), 0);
        assert!(outcome.solution().is_empty());
        // The lone leaf is the empty selection itself.
        assert_eq!(outcome.statistics().leaves_evaluated, 1);
    }

    #[test]
    fn test_equal_profit_prefers_fewer_items() {
        // {1} and {2,3} both reach profit 10 at capacity 5.
        let model = model(5, &[(1, 5, 10), (2, 2, 6), (3, 3, 4)]);
        let outcome = ExhaustiveSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 10);
        assert_eq!(outcome.solution().items(), &[1]);
    }

    #[test]
    fn test_visits_the_whole_tree() {
        let model = model(100, &[(1, 1, 1), (2, 1, 1), (3, 1, 1)]);
        let outcome = ExhaustiveSolver::new().solve(&model);

        // Everything fits, so all 2^3 leaves are evaluated.
        assert_eq!(outcome.statistics().leaves_evaluated, 8);
        assert_eq!(outcome.statistics().max_depth, 3);
        // All three items are taken; ties never arise.
        assert_eq!(outcome.solution().total_profit(), 3);
        assert_eq!(outcome.solution().items(), &[1, 2, 3]);
    }

    #[test]
    fn test_idempotence_on_same_model() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40), (3, 6, 30)]);
        let solver = ExhaustiveSolver::new();

        let first = solver.solve(&model);
        let second = solver.solve(&model);

        assert_eq!(first.solution(), second.solution());
    }
}
