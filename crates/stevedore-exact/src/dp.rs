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

//! Bottom-up dynamic programming with reconstruction.
//!
//! The solver fills a profit table over (item count × capacity) with the
//! classic recurrence: the best profit for the first `i` items within weight
//! budget `w` either skips item `i-1` or, if it fits, takes it on top of the
//! best solution for the reduced budget. A parallel count table tracks the
//! minimum number of items attaining each profit cell so that profit ties
//! resolve toward smaller selections, mirroring the tie-break of the
//! exhaustive baseline at the table level (ties in the count itself are
//! taken arbitrarily).
//!
//! Both tables live in single flat row-major allocations of
//! `(n + 1) × (capacity + 1)` cells; `n` and the capacity are known up
//! front, so no resizing ever happens. After the fill, the selection is
//! reconstructed by walking from `(n, capacity)` backwards: a cell that
//! differs from the one above it proves item `i-1` was taken. The recorded
//! ids are reversed at the end so the reported order matches ascending
//! discovery order.
//!
//! Time and memory are `O(n · capacity)`; callers bound the capacity,
//! there is no internal guard against excessive table sizes.

use crate::{result::ExactSolverOutcome, stats::ExactSolverStatistics};
use stevedore_model::{index::{ItemId, ItemIndex}, model::Model};
use stevedore_search::num::SolverNumeric;

/// The polynomial-time exact solver.
///
/// Stateless; each call allocates its own tables and releases them on
/// return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicProgrammingSolver;

impl DynamicProgrammingSolver {
    /// Creates a new `DynamicProgrammingSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model in `O(n · capacity)` time.
    ///
    /// Returns the same optimal profit as the exhaustive baseline for every
    /// instance; the reported subset may differ among equal-profit optima.
    /// An item count or capacity of 0 produces the defined zero solution out
    /// of the all-zero table region.
    pub fn solve<T>(&self, model: &Model<T>) -> ExactSolverOutcome<T>
    where
        T: SolverNumeric,
    {
        let start_time = std::time::Instant::now();
        let mut statistics = ExactSolverStatistics::default();

        let num_items = model.num_items();
        let capacity = model.capacity_units();
        let width = capacity + 1;

        // Row-major (n + 1) × (capacity + 1) tables, row 0 all zero.
        let mut best = vec![T::zero(); (num_items + 1) * width];
        let mut count = vec![0_usize; (num_items + 1) * width];

        for i in 1..=num_items {
            let item = ItemIndex::new(i - 1);
            let item_profit = model.item_profit(item);
            // An item weight beyond the address space can never fit any budget.
            let item_weight = model.item_weight(item).to_usize().unwrap_or(usize::MAX);

            for w in 0..=capacity {
                let cell = i * width + w;
                let above = (i - 1) * width + w;

                if item_weight <= w {
                    let include = item_profit + best[above - item_weight];
                    let exclude = best[above];

                    if include > exclude {
                        best[cell] = include;
                        count[cell] = count[above - item_weight] + 1;
                    } else if include < exclude {
                        best[cell] = exclude;
                        count[cell] = count[above];
                    } else {
                        // Profit tie: keep the alternative using fewer items.
                        let include_count = count[above - item_weight] + 1;
                        let exclude_count = count[above];
                        best[cell] = include;
                        count[cell] = include_count.min(exclude_count);
                    }
                } else {
                    best[cell] = best[above];
                    count[cell] = count[above];
                }

                statistics.on_cell_filled();
            }
        }

        // Reconstruct the selection by walking backwards from (n, capacity).
        let mut selected: Vec<ItemId> = Vec::new();
        let mut total_weight = T::zero();
        let mut w = capacity;
        let mut i = num_items;

        while i > 0 && w > 0 {
            statistics.on_reconstruction_step();

            let cell = i * width + w;
            let above = (i - 1) * width + w;

            if best[cell] != best[above] {
                let item = ItemIndex::new(i - 1);
                selected.push(model.item_id(item));
                total_weight = total_weight + model.item_weight(item);
                // The cell difference proves the item was taken, so its
                // weight fits the current budget.
                w -= model.item_weight(item).to_usize().unwrap_or(usize::MAX);
            }

            i -= 1;
        }

        selected.reverse();

        let total_profit = best[num_items * width + capacity];
        let solution = stevedore_model::solution::Solution::new(total_profit, total_weight, selected);

        statistics.set_total_time(start_time.elapsed());
        ExactSolverOutcome::new(solution, statistics)
    }
}
