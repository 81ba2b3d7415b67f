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

//! Greedy profit/weight-ratio fill.
//!
//! This module provides the fast approximation strategy: items are visited
//! in descending profit/weight-ratio order and admitted whenever they still
//! fit the remaining capacity. Once an item is skipped it is never
//! revisited — the fill makes exactly one pass and does no backtracking.
//! The result is feasible by construction but not necessarily optimal, and
//! nothing in this crate ever claims otherwise.
//!
//! Ratios are compared by exact integer cross-multiplication in widened
//! space (`profit_a * weight_b` vs `profit_b * weight_a`), not by
//! floating-point division, so the ordering is total and free of precision
//! artifacts. The sort is stable: items of equal ratio keep their input
//! order, which makes the selected subset a deterministic function of the
//! input ordering. Model validation guarantees strictly positive weights,
//! so the ratio is defined for every item that reaches this solver.
//!
//! This module is a good fit when you want a fast baseline for large
//! instances where the exact strategies are out of reach, or a starting
//! point to compare the exact solvers against.

use crate::{result::HeuristicSolverOutcome, stats::HeuristicSolverStatistics};
use std::cmp::Ordering;
use stevedore_model::{index::{ItemId, ItemIndex}, model::Model, solution::Solution};
use stevedore_search::num::SolverNumeric;

/// The greedy ratio solver.
///
/// Stateless; repeated runs on the same model produce identical selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySolver;

impl GreedySolver {
    /// Creates a new `GreedySolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model approximately.
    ///
    /// The selection is reported in admission order (descending ratio). If
    /// no item fits individually, the result is the defined zero solution.
    pub fn solve<T>(&self, model: &Model<T>) -> HeuristicSolverOutcome<T>
    where
        T: SolverNumeric,
    {
        let start_time = std::time::Instant::now();
        let mut statistics = HeuristicSolverStatistics::default();

        let mut order: Vec<usize> = (0..model.num_items()).collect();
        // Stable sort, descending ratio: equal ratios keep input order.
        order.sort_by(|&a, &b| compare_ratio(model, b, a));

        let capacity = model.capacity();
        let mut total_profit = T::zero();
        let mut total_weight = T::zero();
        let mut selected: Vec<ItemId> = Vec::new();

        for &position in &order {
            statistics.on_candidate_considered();

            let item = ItemIndex::new(position);
            let item_weight = model.item_weight(item);

            if total_weight.saturating_add_val(item_weight) <= capacity {
                selected.push(model.item_id(item));
                total_weight = total_weight + item_weight;
                total_profit = total_profit + model.item_profit(item);
                statistics.on_candidate_admitted();
            } else {
                statistics.on_candidate_rejected();
            }
        }

        statistics.set_total_time(start_time.elapsed());
        HeuristicSolverOutcome::new(
            Solution::new(total_profit, total_weight, selected),
            statistics,
        )
    }
}

/// Compares two items by profit/weight ratio via exact cross-multiplication.
///
/// `profit_a / weight_a < profit_b / weight_b` iff
/// `profit_a * weight_b < profit_b * weight_a` for positive weights; the
/// products are computed in `i128` so no instance within the `i64` domain
/// can overflow the comparison.
fn compare_ratio<T>(model: &Model<T>, a: usize, b: usize) -> Ordering
where
    T: SolverNumeric,
{
    let item_a = ItemIndex::new(a);
    let item_b = ItemIndex::new(b);

    let profit_a = i128::from(Into::<i64>::into(model.item_profit(item_a)));
    let weight_a = i128::from(Into::<i64>::into(model.item_weight(item_a)));
    let profit_b = i128::from(Into::<i64>::into(model.item_profit(item_b)));
    let weight_b = i128::from(Into::<i64>::into(model.item_weight(item_b)));

    (profit_a * weight_b).cmp(&(profit_b * weight_a))
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
    fn test_reference_scenario_happens_to_be_optimal() {
        // Ratios: item 2 → 10, item 3 → 5, item 1 → 2. The first two fill
        // the truck exactly; greedy reaches the optimum on this instance.
        let model = model(10, &[(1, 5, 10), (2, 4, 40), (3, 6, 30)]);
        let outcome = GreedySolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 70);
        assert_eq!(outcome.solution().total_weight(), 10);
        assert_eq!(outcome.solution().items(), &[2, 3]);
        assert_eq!(validate_solution(&model, outcome.solution()), Ok(()));

        assert_eq!(outcome.statistics().candidates_considered, 3);
        assert_eq!(outcome.statistics().candidates_admitted, 2);
        assert_eq!(outcome.statistics().candidates_rejected, 1);
    }

    #[test]
    fn test_no_backtracking_can_miss_the_optimum() {
        // The best ratio item blocks the truck: greedy takes item 1 (ratio 5)
        // and then nothing else fits, ending at profit 30. The optimum
        // {2, 3} reaches 40. This gap is the documented trade-off.
        let model = model(10, &[(1, 6, 30), (2, 5, 20), (3, 5, 20)]);
        let outcome = GreedySolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 30);
        assert_eq!(outcome.solution().items(), &[1]);
        assert_eq!(validate_solution(&model, outcome.solution()), Ok(()));
    }

    #[test]
    fn test_equal_ratios_keep_input_order() {
        // Both items have ratio 2; the stable sort keeps id 1 first, which
        // then blocks id 2.
        let model = model(4, &[(1, 2, 4), (2, 4, 8)]);
        let outcome = GreedySolver::new().solve(&model);

        assert_eq!(outcome.solution().items(), &[1]);
        assert_eq!(outcome.solution().total_profit(), 4);
        assert!(outcome.solution().total_weight() <= model.capacity());
    }

    #[test]
    fn test_nothing_fits_yields_zero_solution() {
        let model = model(3, &[(1, 5, 10), (2, 4, 40)]);
        let outcome = GreedySolver::new().solve(&model);

        assert_eq!(outcome.solution().total_profit(), 0);
        assert!(outcome.solution().is_empty());
        assert_eq!(outcome.statistics().candidates_rejected, 2);
    }

    #[test]
    fn test_degenerate_inputs_yield_zero_solution() {
        let empty = model(50, &[]);
        let outcome = GreedySolver::new().solve(&empty);
        assert!(outcome.solution().is_empty());

        let no_capacity = model(0, &[(1, 5, 10)]);
        let outcome = GreedySolver::new().solve(&no_capacity);
        assert!(outcome.solution().is_empty());
        assert_eq!(outcome.solution().total_profit(), 0);
    }

    #[test]
    fn test_determinism_on_same_model() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40), (3, 6, 30)]);
        let solver = GreedySolver::new();

        let first = solver.solve(&model);
        let second = solver.solve(&model);

        assert_eq!(first.solution(), second.solution());
    }
}
