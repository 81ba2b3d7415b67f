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

use crate::{index::ItemId, model::Model};
use num_traits::{PrimInt, Signed};

/// The final loading plan produced by a solver.
///
/// A solution records the selected item ids in discovery order together with
/// the aggregate profit and weight of the selection. The totals are carried
/// rather than recomputed so a solution stands alone for reporting; their
/// consistency against a model is checked by the validation routine in
/// `stevedore_search`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    /// The total profit of the selected items.
    total_profit: T,

    /// The total weight of the selected items.
    total_weight: T,

    /// The ids of the selected items, in discovery order. No duplicates.
    items: Vec<ItemId>,
}

impl<T> Solution<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Constructs a new `Solution`.
    #[inline]
    pub fn new(total_profit: T, total_weight: T, items: Vec<ItemId>) -> Self {
        Self {
            total_profit,
            total_weight,
            items,
        }
    }

    /// Constructs the defined zero solution: no items, zero profit, zero
    /// weight. This is the result of every solver on degenerate inputs
    /// (capacity 0 or an empty item list).
    #[inline]
    pub fn empty() -> Self {
        Self {
            total_profit: T::zero(),
            total_weight: T::zero(),
            items: Vec::new(),
        }
    }

    /// Returns the total profit of this solution.
    #[inline]
    pub fn total_profit(&self) -> T {
        self.total_profit
    }

    /// Returns the total weight of this solution.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// Returns the selected item ids, in discovery order.
    #[inline]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns the number of selected items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items were selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a displayable view of this solution that resolves each
    /// selected id against `model` to render per-item profit and weight.
    #[inline]
    pub fn display_with<'a>(&'a self, model: &'a Model<T>) -> SolutionDisplay<'a, T> {
        SolutionDisplay {
            solution: self,
            model,
        }
    }
}

/// A borrowed pairing of a [`Solution`] with its [`Model`], used to render
/// the selection table (`ID | Profit | Weight` per selected item, in subset
/// order) followed by the totals.
#[derive(Clone, Copy, Debug)]
pub struct SolutionDisplay<'a, T> {
    solution: &'a Solution<T>,
    model: &'a Model<T>,
}

impl<'a, T> std::fmt::Display for SolutionDisplay<'a, T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Loading Plan Summary")?;
        writeln!(f, "   Total Profit: {}", self.solution.total_profit())?;
        writeln!(
            f,
            "   Total Weight: {} / Capacity: {}",
            self.solution.total_weight(),
            self.model.capacity()
        )?;
        writeln!(f)?;

        if self.solution.is_empty() {
            writeln!(f, "   (No items selected)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10} | {:<12}", "ID", "Profit", "Weight")?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<12}", "", "", "")?;
        for &id in self.solution.items() {
            debug_assert!(
                self.model.index_of(id).is_some(),
                "called `SolutionDisplay::fmt` with a solution item id {} unknown to the model",
                id
            );

            if let Some(index) = self.model.index_of(id) {
                writeln!(
                    f,
                    "   {:<10} | {:<10} | {:<12}",
                    id,
                    self.model.item_profit(index),
                    self.model.item_weight(index)
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelBuilder;

    fn model() -> Model<i64> {
        let mut builder = ModelBuilder::new(10);
        builder.add_item(1, 5, 10);
        builder.add_item(2, 4, 40);
        builder.add_item(3, 6, 30);
        builder.build().expect("valid instance")
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let sol = Solution::new(70_i64, 10_i64, vec![2, 3]);

        assert_eq!(sol.total_profit(), 70);
        assert_eq!(sol.total_weight(), 10);
        assert_eq!(sol.items(), &[2, 3]);
        assert_eq!(sol.num_items(), 2);
        assert!(!sol.is_empty());
    }

    #[test]
    fn test_empty_solution_is_all_zero() {
        let sol = Solution::<i64>::empty();
        assert_eq!(sol.total_profit(), 0);
        assert_eq!(sol.total_weight(), 0);
        assert_eq!(sol.items(), &[]);
        assert!(sol.is_empty());
    }

    #[test]
    fn test_clone_eq_and_debug() {
        let sol = Solution::new(42_i64, 7_i64, vec![1]);
        let sol2 = sol.clone();
        assert_eq!(sol, sol2);

        // Debug should include field names
        let dbg = format!("{:?}", sol);
        assert!(dbg.contains("Solution"));
        assert!(dbg.contains("total_profit"));
        assert!(dbg.contains("total_weight"));
        assert!(dbg.contains("items"));
    }

    #[test]
    fn test_display_formatting_example() {
        let model = model();
        let sol = Solution::new(70_i64, 10_i64, vec![2, 3]);

        let displayed = format!("{}", sol.display_with(&model));

        let mut expected = String::new();
        expected.push_str("Loading Plan Summary\n");
        expected.push_str("   Total Profit: 70\n");
        expected.push_str("   Total Weight: 10 / Capacity: 10\n");
        expected.push('\n');
        expected.push_str("   ID         | Profit     | Weight      \n");
        expected.push_str("   -----------+------------+-------------\n");
        expected.push_str("   2          | 40         | 4           \n");
        expected.push_str("   3          | 30         | 6           \n");

        assert_eq!(displayed, expected);
    }

    #[test]
    fn test_display_empty_selection() {
        let model = model();
        let sol = Solution::<i64>::empty();

        let displayed = format!("{}", sol.display_with(&model));
        assert!(displayed.contains("(No items selected)"));
    }
}
