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

//! Branch-and-bound search with the three-level tie-break.
//!
//! The search has the same include/exclude shape as the exhaustive baseline,
//! with two differences. First, the include branch is bounded: whenever the
//! accumulated weight plus the candidate item's weight would exceed the
//! capacity, the branch is pruned *before* recursing into it. No
//! relaxation-based bounding is performed beyond that, so the worst case
//! remains exponential. Second, terminal candidates are compared under the
//! `MinimalCardinalityThenWeight` policy: maximize profit, then minimize the
//! item count, then minimize the total weight. The policy is strictly finer
//! than the baseline's, so on instances with several optimal subsets the two
//! solvers may report different selections of identical profit — an intended,
//! observable property.
//!
//! The incumbent starts with its weight sentinel at `T::max_value()`; the
//! first terminal candidate replaces it. An empty item list short-circuits
//! to the zero solution without entering the recursion at all, which keeps
//! the sentinel from ever reaching a caller.

use crate::{
    incumbent::Incumbent, result::ExactSolverOutcome, stats::ExactSolverStatistics,
};
use stevedore_model::{index::{ItemId, ItemIndex}, model::Model, solution::Solution};
use stevedore_search::{
    num::SolverNumeric,
    policy::{CandidateMetrics, MinimalCardinalityThenWeight},
};

/// The capacity-pruned exact solver.
///
/// Stateless; every call to [`solve`](Self::solve) owns its trail and
/// incumbent, so repeated runs on the same model are independent and
/// identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchAndBoundSolver;

impl BranchAndBoundSolver {
    /// Creates a new `BranchAndBoundSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model by pruned enumeration.
    ///
    /// Produces the same optimal profit as the exhaustive baseline and the
    /// dynamic programming solver; ties among optimal subsets resolve by
    /// (profit, fewest items, lightest weight).
    pub fn solve<T>(&self, model: &Model<T>) -> ExactSolverOutcome<T>
    where
        T: SolverNumeric,
    {
        let start_time = std::time::Instant::now();
        let mut statistics = ExactSolverStatistics::default();

        // Load-bearing short-circuit: without it the recursion would offer
        // nothing and the incumbent's weight sentinel would need special
        // handling here as well.
        if model.is_empty() {
            statistics.set_total_time(start_time.elapsed());
            return ExactSolverOutcome::new(Solution::empty(), statistics);
        }

        let mut incumbent = Incumbent::new(MinimalCardinalityThenWeight);
        let mut trail: Vec<ItemId> = Vec::with_capacity(model.num_items());

        self.recurse(
            model,
            0,
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
    /// `weight` and `profit` are the totals accumulated along the decisions
    /// recorded in `trail`; the include branch is entered only when the item
    /// still fits the capacity.
    #[allow(clippy::too_many_arguments)]
    fn recurse<T>(
        &self,
        model: &Model<T>,
        index: usize,
        weight: T,
        profit: T,
        trail: &mut Vec<ItemId>,
        incumbent: &mut Incumbent<T, MinimalCardinalityThenWeight>,
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
        let item_weight = model.item_weight(item);

        // Bound: prune the include branch before recursing into it.
        if weight.saturating_add_val(item_weight) <= model.capacity() {
            trail.push(model.item_id(item));
            self.recurse(
                model,
                index + 1,
                weight + item_weight,
                profit + model.item_profit(item),
                trail,
                incumbent,
                statistics,
            );
            trail.pop();
        } else {
            statistics.on_pruning_capacity();
        }

        self.recurse(
            model,
            index + 1,
            weight,
            profit,
            trail,
            incumbent,
            statistics,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveSolver;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
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
        let outcome = BranchAndBoundSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 70);
        assert_eq!(outcome.solution().total_weight(), 10);
        assert_eq!(outcome.solution().items(), &[2, 3]);
        assert_eq!(validate_solution(&model, outcome.solution()), Ok(()));
    }

    #[test]
    fn test_empty_item_list_short_circuits() {
        let model = model(50, &[]);
        let outcome = BranchAndBoundSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 0);
        assert_eq!(outcome.solution().total_weight(), 0);
        assert!(outcome.solution().is_empty());
        // The recursion is never entered.
        assert_eq!(outcome.statistics().nodes_explored, 0);
        assert_eq!(outcome.statistics().leaves_evaluated, 0);
    }

    #[test]
    fn test_zero_capacity_prunes_every_include_branch() {
        let model = model(0, &[(1, 5, 10), (2, 4, 40)]);
        let outcome = BranchAndBoundSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 0);
        assert!(outcome.solution().is_empty());
        // One pruning per item along the single all-exclude path.
        assert_eq!(outcome.statistics().prunings_capacity, 2);
        assert_eq!(outcome.statistics().leaves_evaluated, 1);
    }

    #[test]
    fn test_equal_profit_prefers_fewer_items() {
        // {1} and {2,3} both reach profit 10 at capacity 5.
        let model = model(5, &[(1, 5, 10), (2, 2, 6), (3, 3, 4)]);
        let outcome = BranchAndBoundSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 10);
        assert_eq!(outcome.solution().items(), &[1]);
    }

    #[test]
    fn test_equal_profit_and_count_prefers_lighter_subset() {
        // Both single items reach profit 10; the lighter one must win,
        // regardless of input order.
        let model = model(4, &[(1, 4, 10), (2, 2, 10)]);
        let outcome = BranchAndBoundSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 10);
        assert_eq!(outcome.solution().items(), &[2]);
        assert_eq!(outcome.solution().total_weight(), 2);
    }

    #[test]
    fn test_fewer_items_beats_lighter_subset() {
        // {3} carries profit 10 with one item; {1,2} carries profit 10 with
        // two lighter items. Cardinality outranks weight.
        let model = model(8, &[(1, 1, 5), (2, 1, 5), (3, 8, 10)]);
        let outcome = BranchAndBoundSolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 10);
        assert_eq!(outcome.solution().items(), &[3]);
    }

    #[test]
    fn test_matches_exhaustive_profit_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xB0B);
        let exhaustive = ExhaustiveSolver::new();
        let bnb = BranchAndBoundSolver::new();

        for _ in 0..50 {
            let num_items: usize = rng.random_range(0..=11);
            let capacity: i64 = rng.random_range(0..=40);

            let mut builder = ModelBuilder::<i64>::new(capacity);
            for id in 0..num_items {
                let weight: i64 = rng.random_range(1..=15);
                let profit: i64 = rng.random_range(0..=30);
                builder.add_item(id as u32 + 1, weight, profit);
            }
            let model = builder.build().expect("valid instance");

            let reference = exhaustive.solve(&model);
            let pruned = bnb.solve(&model);

            assert_eq!(
                pruned.solution().total_profit(),
                reference.solution().total_profit(),
                "profit diverged on a random instance"
            );
            assert_eq!(validate_solution(&model, pruned.solution()), Ok(()));
        }
    }

    #[test]
    fn test_idempotence_on_same_model() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40), (3, 6, 30)]);
        let solver = BranchAndBoundSolver::new();

        let first = solver.solve(&model);
        let second = solver.solve(&model);

        assert_eq!(first.solution(), second.solution());
    }
}
