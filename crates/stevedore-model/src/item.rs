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

use crate::index::ItemId;

/// A single loadable item (pallet): a unique id, a weight, and a profit.
///
/// Items are immutable once constructed and are the fundamental data unit of
/// all loading algorithms. Inside a [`Model`](crate::model::Model) they are
/// stored in SoA layout; this record exists for construction and for callers
/// that want a per-item view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item<T> {
    id: ItemId,
    weight: T,
    profit: T,
}

impl<T> Item<T>
where
    T: Copy,
{
    /// Constructs a new `Item`.
    ///
    /// Range validation (positive weight, non-negative profit) happens at
    /// [`ModelBuilder::build`](crate::model::ModelBuilder::build), not here.
    #[inline]
    pub const fn new(id: ItemId, weight: T, profit: T) -> Self {
        Self { id, weight, profit }
    }

    /// Returns the caller-assigned id of this item.
    #[inline]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the weight of this item.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the profit of this item.
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let item = Item::new(7, 12_i64, 40_i64);
        assert_eq!(item.id(), 7);
        assert_eq!(item.weight(), 12);
        assert_eq!(item.profit(), 40);
    }

    #[test]
    fn test_copy_and_eq() {
        let a = Item::new(1, 3_i32, 9_i32);
        let b = a;
        assert_eq!(a, b);
    }
}
