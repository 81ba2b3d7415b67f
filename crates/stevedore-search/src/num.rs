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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for search and solver components. `SolverNumeric`
//! specifies the integer capabilities required by the solvers, including
//! intrinsic traits (`PrimInt`, `Signed`), widening to `i64` for exact
//! ratio comparison, and by-value checked/saturating arithmetic traits from
//! `stevedore_core`.
//!
//! ## Motivation
//!
//! The loading algorithms should remain generic over integer types while
//! retaining predictable arithmetic semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures and
//! ensuring consistent overflow handling and conversions.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed + FromPrimitive` for numeric fundamentals.
//! - Enforces `Into<i64>` so profit/weight ratios can be compared exactly
//!   via widened cross-multiplication instead of floating-point division.
//! - Includes the `Zero` and `PlusOne` constant traits.
//! - Adds by-value arithmetic traits:
//!   - Checked: add/sub/mul returning `Option<T>`.
//!   - Saturating: add/sub clamping to type bounds.
//!
//! Note: `i128` is intentionally excluded (it does not widen into `i64`),
//! and the practical instantiations are `i32` and `i64`.

use std::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Signed};
use stevedore_core::num::{
    constants::{PlusOne, Zero},
    ops::{checked_arithmetic, saturating_arithmetic},
};

/// A trait alias for numeric types that can be used in the solvers.
/// This includes integer types that support various arithmetic operations
/// with both saturating and checked semantics.
/// These are usually the signed integer types `i32` and `i64`.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + Into<i64>
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + checked_arithmetic::CheckedMulVal
    + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + Into<i64>
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + checked_arithmetic::CheckedMulVal
        + Hash
{
}
