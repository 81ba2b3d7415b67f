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

//! The immutable problem model and its validating builder.
//!
//! A [`Model`] is the read-only input shared by every solver: the truck's
//! weight capacity plus the item data in Structure-of-Arrays layout (parallel
//! id/weight/profit vectors addressed by [`ItemIndex`]). Models are built
//! through [`ModelBuilder`], which performs the eager validation the solvers
//! rely on: weights are strictly positive, profits and the capacity are
//! non-negative, and ids are unique. Once built, a model is never mutated;
//! solvers borrow it immutably and own nothing of it.

use crate::{
    index::{ItemId, ItemIndex},
    item::Item,
};
use num_traits::{PrimInt, Signed};

/// Represents the theoretical search space size of the 0/1 selection problem.
///
/// The search space of the include/exclude decision tree over `n` items is
/// `2^n` leaves. Since this exceeds standard integer limits already for
/// moderate `n`, this struct stores the value in **Logarithmic Space**
/// (base 10): for `n = 100`, it stores `log10(2^100) ≈ 30.1`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the number of terminal subsets.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for a given number of items.
    pub fn new(num_items: usize) -> Self {
        Complexity {
            log_val: num_items as f64 * 2.0_f64.log10(),
        }
    }

    /// Returns the percentage of the search space that was actually explored.
    /// Returns `None` if the space is too massive to represent as `f64`.
    pub fn coverage(&self, leaves_evaluated: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((leaves_evaluated as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude).
    /// E.g., for `1.2 × 10^30`, returns 30.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    /// E.g., for `1.2 × 10^30`, returns 1.2.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value. Useful for progress reporting.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(10^{:.3})", self.log_val)
    }
}

/// The immutable problem instance consumed by all solvers.
///
/// This struct uses a Structure of Arrays (SoA) layout: data is indexed
/// directly by [`ItemIndex`] (i.e., index `i` corresponds to item `i` in
/// input order). The capacity is stored both in the numeric domain type `T`
/// and as a pre-converted `usize` for table-indexed algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model<T> {
    /// The maximum total weight the truck can carry.
    capacity: T,

    /// The capacity converted to `usize` (validated at build time).
    capacity_units: usize,

    /// The caller-assigned id of each item. `ids[i]` labels item `i`.
    ids: Vec<ItemId>,

    /// The weight of each item. `weights[i]` is the weight of item `i`.
    weights: Vec<T>,

    /// The profit of each item. `profits[i]` is the profit of item `i`.
    profits: Vec<T>,
}

impl<T> Model<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Returns the number of items in this model.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if this model contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the truck capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the truck capacity as a `usize`.
    ///
    /// The conversion is validated once at build time, so this accessor is
    /// total for every successfully constructed model.
    #[inline]
    pub fn capacity_units(&self) -> usize {
        self.capacity_units
    }

    /// Returns the theoretical search-space size (`2^n`) of this model.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.num_items())
    }

    /// Returns a slice of all item ids, in input order.
    #[inline]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Returns a slice of all item weights, in input order.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns a slice of all item profits, in input order.
    #[inline]
    pub fn profits(&self) -> &[T] {
        &self.profits
    }

    /// Returns the id of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn item_id(&self, item_index: ItemIndex) -> ItemId {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::item_id` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );

        self.ids[item_index.get()]
    }

    /// Returns the weight of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn item_weight(&self, item_index: ItemIndex) -> T {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::item_weight` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );

        self.weights[item_index.get()]
    }

    /// Returns the profit of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn item_profit(&self, item_index: ItemIndex) -> T {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::item_profit` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );

        self.profits[item_index.get()]
    }

    /// Returns the weight of a specific item without bounds checking.
    ///
    /// # Safety
    ///
    /// `item_index` must be in bounds (`item_index.get() < self.num_items()`).
    #[inline]
    pub unsafe fn item_weight_unchecked(&self, item_index: ItemIndex) -> T {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::item_weight_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );

        *self.weights.get_unchecked(item_index.get())
    }

    /// Returns the profit of a specific item without bounds checking.
    ///
    /// # Safety
    ///
    /// `item_index` must be in bounds (`item_index.get() < self.num_items()`).
    #[inline]
    pub unsafe fn item_profit_unchecked(&self, item_index: ItemIndex) -> T {
        debug_assert!(
            item_index.get() < self.num_items(),
            "called `Model::item_profit_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item_index.get()
        );

        *self.profits.get_unchecked(item_index.get())
    }

    /// Returns a per-item view of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn item(&self, item_index: ItemIndex) -> Item<T> {
        Item::new(
            self.item_id(item_index),
            self.item_weight(item_index),
            self.item_profit(item_index),
        )
    }

    /// Returns the position of the item labelled `id`, if present.
    ///
    /// Ids are unique by construction, so at most one position matches.
    /// The lookup is a linear scan; id-based access is a reporting concern,
    /// not a solver hot path.
    pub fn index_of(&self, id: ItemId) -> Option<ItemIndex> {
        self.ids
            .iter()
            .position(|&candidate| candidate == id)
            .map(ItemIndex::new)
    }
}

/// The error type produced by [`ModelBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelBuildError {
    /// The truck capacity is negative.
    NegativeCapacity,
    /// The truck capacity cannot be represented as `usize`
    /// (required for table-indexed algorithms).
    CapacityUnaddressable,
    /// An item has a zero or negative weight. Zero-weight items are rejected
    /// so the profit/weight ratio is total for every admitted item.
    NonPositiveWeight {
        /// The id of the offending item.
        id: ItemId,
    },
    /// An item has a negative profit.
    NegativeProfit {
        /// The id of the offending item.
        id: ItemId,
    },
    /// Two items share the same id.
    DuplicateId {
        /// The id that occurred more than once.
        id: ItemId,
    },
}

impl std::fmt::Display for ModelBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCapacity => write!(f, "Truck capacity must be non-negative"),
            Self::CapacityUnaddressable => {
                write!(f, "Truck capacity is not representable as usize")
            }
            Self::NonPositiveWeight { id } => {
                write!(f, "Item {} has a non-positive weight", id)
            }
            Self::NegativeProfit { id } => write!(f, "Item {} has a negative profit", id),
            Self::DuplicateId { id } => write!(f, "Item id {} occurs more than once", id),
        }
    }
}

impl std::error::Error for ModelBuildError {}

/// A validating builder for problem instances.
///
/// The builder accumulates items in input order and defers all range checks
/// to [`build`](Self::build), so a loader can push everything it parsed and
/// receive one typed error describing the first violation.
///
/// # Examples
///
/// ```rust
/// use stevedore_model::model::ModelBuilder;
///
/// let mut builder = ModelBuilder::<i64>::new(10);
/// builder.add_item(1, 5, 10);
/// builder.add_item(2, 4, 40);
/// let model = builder.build().expect("valid instance");
/// assert_eq!(model.num_items(), 2);
/// assert_eq!(model.capacity(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBuilder<T> {
    capacity: T,
    items: Vec<Item<T>>,
}

impl<T> ModelBuilder<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Creates a new `ModelBuilder` for a truck with the given capacity.
    #[inline]
    pub fn new(capacity: T) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    /// Appends an item. Items keep their insertion order in the built model.
    #[inline]
    pub fn add_item(&mut self, id: ItemId, weight: T, profit: T) -> &mut Self {
        self.items.push(Item::new(id, weight, profit));
        self
    }

    /// Appends an already-constructed item.
    #[inline]
    pub fn push_item(&mut self, item: Item<T>) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Returns the number of items added so far.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Validates the accumulated input and produces the immutable [`Model`].
    ///
    /// Validation rules:
    /// * the capacity is non-negative and representable as `usize`,
    /// * every weight is strictly positive,
    /// * every profit is non-negative,
    /// * ids are unique.
    pub fn build(self) -> Result<Model<T>, ModelBuildError> {
        if self.capacity < T::zero() {
            return Err(ModelBuildError::NegativeCapacity);
        }

        let capacity_units = self
            .capacity
            .to_usize()
            .ok_or(ModelBuildError::CapacityUnaddressable)?;

        let mut ids = Vec::with_capacity(self.items.len());
        let mut weights = Vec::with_capacity(self.items.len());
        let mut profits = Vec::with_capacity(self.items.len());

        for item in &self.items {
            if item.weight() <= T::zero() {
                return Err(ModelBuildError::NonPositiveWeight { id: item.id() });
            }
            if item.profit() < T::zero() {
                return Err(ModelBuildError::NegativeProfit { id: item.id() });
            }
            if ids.contains(&item.id()) {
                return Err(ModelBuildError::DuplicateId { id: item.id() });
            }

            ids.push(item.id());
            weights.push(item.weight());
            profits.push(item.profit());
        }

        Ok(Model {
            capacity: self.capacity,
            capacity_units,
            ids,
            weights,
            profits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn build_small() -> Model<i64> {
        let mut builder = ModelBuilder::new(10);
        builder.add_item(1, 5, 10);
        builder.add_item(2, 4, 40);
        builder.add_item(3, 6, 30);
        builder.build().expect("valid instance")
    }

    #[test]
    fn test_build_and_basic_accessors() {
        let model = build_small();

        assert_eq!(model.num_items(), 3);
        assert!(!model.is_empty());
        assert_eq!(model.capacity(), 10);
        assert_eq!(model.capacity_units(), 10);

        assert_eq!(model.ids(), &[1, 2, 3]);
        assert_eq!(model.weights(), &[5, 4, 6]);
        assert_eq!(model.profits(), &[10, 40, 30]);

        assert_eq!(model.item_id(ii(1)), 2);
        assert_eq!(model.item_weight(ii(1)), 4);
        assert_eq!(model.item_profit(ii(1)), 40);

        let item = model.item(ii(2));
        assert_eq!(item.id(), 3);
        assert_eq!(item.weight(), 6);
        assert_eq!(item.profit(), 30);
    }

    #[test]
    fn test_unchecked_accessors_match_checked() {
        let model = build_small();
        for i in 0..model.num_items() {
            unsafe {
                assert_eq!(model.item_weight_unchecked(ii(i)), model.item_weight(ii(i)));
                assert_eq!(model.item_profit_unchecked(ii(i)), model.item_profit(ii(i)));
            }
        }
    }

    #[test]
    fn test_index_of_finds_by_label_not_position() {
        let mut builder = ModelBuilder::<i32>::new(100);
        builder.add_item(42, 1, 1);
        builder.add_item(7, 2, 2);
        let model = builder.build().unwrap();

        assert_eq!(model.index_of(42), Some(ii(0)));
        assert_eq!(model.index_of(7), Some(ii(1)));
        assert_eq!(model.index_of(1), None);
    }

    #[test]
    fn test_empty_model_is_valid() {
        let model = ModelBuilder::<i64>::new(0).build().unwrap();
        assert!(model.is_empty());
        assert_eq!(model.num_items(), 0);
        assert_eq!(model.capacity(), 0);
        assert_eq!(model.capacity_units(), 0);
    }

    #[test]
    fn test_build_rejects_negative_capacity() {
        let builder = ModelBuilder::<i64>::new(-1);
        assert_eq!(builder.build(), Err(ModelBuildError::NegativeCapacity));
    }

    #[test]
    fn test_build_rejects_zero_weight() {
        let mut builder = ModelBuilder::<i64>::new(10);
        builder.add_item(1, 0, 5);
        assert_eq!(
            builder.build(),
            Err(ModelBuildError::NonPositiveWeight { id: 1 })
        );
    }

    #[test]
    fn test_build_rejects_negative_profit() {
        let mut builder = ModelBuilder::<i64>::new(10);
        builder.add_item(3, 2, -4);
        assert_eq!(
            builder.build(),
            Err(ModelBuildError::NegativeProfit { id: 3 })
        );
    }

    #[test]
    fn test_build_rejects_duplicate_ids() {
        let mut builder = ModelBuilder::<i64>::new(10);
        builder.add_item(5, 2, 4);
        builder.add_item(5, 3, 6);
        assert_eq!(builder.build(), Err(ModelBuildError::DuplicateId { id: 5 }));
    }

    #[test]
    fn test_complexity_is_two_to_the_n() {
        let model = build_small();
        let complexity = model.complexity();

        // 2^3 = 8 leaves
        assert_eq!(complexity.exponent(), 0);
        assert!((complexity.mantissa() - 8.0).abs() < 1e-9);
        let coverage = complexity.coverage(8).expect("coverage representable");
        assert!((coverage - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_complexity_display() {
        let complexity = Complexity::new(10);
        // 2^10 = 1024 = 1.02 × 10^3
        let rendered = format!("{}", complexity);
        assert_eq!(rendered, "1.02 × 10^3");
    }

    #[test]
    fn test_error_display_messages() {
        let err = ModelBuildError::NonPositiveWeight { id: 9 };
        assert_eq!(format!("{}", err), "Item 9 has a non-positive weight");

        let err = ModelBuildError::DuplicateId { id: 2 };
        assert_eq!(format!("{}", err), "Item id 2 occurs more than once");
    }
}
