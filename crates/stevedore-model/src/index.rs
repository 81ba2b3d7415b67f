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

use stevedore_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for item indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ItemIndexTag;

impl TypedIndexTag for ItemIndexTag {
    const NAME: &'static str = "ItemIndex";
}

/// A typed index for the *position* of an item within a model.
///
/// Positions are dense (`0..num_items`) and distinct from the caller-assigned
/// [`ItemId`] labels, which may be arbitrary.
pub type ItemIndex = TypedIndex<ItemIndexTag>;

/// The caller-assigned identifier of an item.
///
/// Ids label items across the system boundary (input files, reported
/// selections); they are unique within a model but carry no positional
/// meaning. Use [`ItemIndex`] to address the model's internal arrays.
pub type ItemId = u32;
