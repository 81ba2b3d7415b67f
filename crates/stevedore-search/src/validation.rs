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

//! Consistency checks for reported solutions.
//!
//! Every solver carries its totals alongside the selected ids instead of
//! recomputing them at report time. This module provides the independent
//! recomputation: `validate_solution` resolves each selected id against the
//! model, sums profit and weight with checked arithmetic, and compares the
//! sums against the solution's stored totals and the model's capacity.
//!
//! These routines are intended for diagnostics during development and
//! testing; they do not alter solver state. Use them to catch inconsistent
//! reporting early and to document solution invariants with concrete
//! instances.

use crate::num::SolverNumeric;
use stevedore_model::{index::ItemId, model::Model, solution::Solution};

/// The error type produced by [`validate_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionValidationError<T> {
    /// The solution references an id the model does not contain.
    UnknownItem {
        /// The unknown id.
        id: ItemId,
    },
    /// The solution references the same id more than once.
    DuplicateItem {
        /// The repeated id.
        id: ItemId,
    },
    /// The stored total profit differs from the recomputed sum.
    ProfitMismatch {
        /// The total carried by the solution.
        reported: T,
        /// The sum recomputed from the model.
        computed: T,
    },
    /// The stored total weight differs from the recomputed sum.
    WeightMismatch {
        /// The total carried by the solution.
        reported: T,
        /// The sum recomputed from the model.
        computed: T,
    },
    /// The selection's weight exceeds the truck capacity.
    CapacityExceeded {
        /// The recomputed total weight.
        weight: T,
        /// The model capacity.
        capacity: T,
    },
    /// A profit or weight sum overflowed the numeric type.
    ArithmeticOverflow,
}

impl<T> std::fmt::Display for SolutionValidationError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem { id } => {
                write!(f, "Solution references unknown item id {}", id)
            }
            Self::DuplicateItem { id } => {
                write!(f, "Solution references item id {} more than once", id)
            }
            Self::ProfitMismatch { reported, computed } => write!(
                f,
                "Reported total profit {} does not match computed {}",
                reported, computed
            ),
            Self::WeightMismatch { reported, computed } => write!(
                f,
                "Reported total weight {} does not match computed {}",
                reported, computed
            ),
            Self::CapacityExceeded { weight, capacity } => write!(
                f,
                "Selection weight {} exceeds truck capacity {}",
                weight, capacity
            ),
            Self::ArithmeticOverflow => write!(f, "Profit or weight sum overflowed"),
        }
    }
}

impl<T> std::error::Error for SolutionValidationError<T> where T: std::fmt::Display + std::fmt::Debug {}

/// Checks a reported solution against its model.
///
/// Verified invariants, in order:
/// 1. every selected id exists in the model and occurs at most once,
/// 2. the stored total profit equals the recomputed sum,
/// 3. the stored total weight equals the recomputed sum,
/// 4. the total weight does not exceed the capacity.
///
/// Sums use checked arithmetic so an adversarial solution cannot sneak past
/// the comparison by wrapping.
pub fn validate_solution<T>(
    model: &Model<T>,
    solution: &Solution<T>,
) -> Result<(), SolutionValidationError<T>>
where
    T: SolverNumeric,
{
    let mut computed_profit = T::zero();
    let mut computed_weight = T::zero();

    for (position, &id) in solution.items().iter().enumerate() {
        let index = model
            .index_of(id)
            .ok_or(SolutionValidationError::UnknownItem { id })?;

        if solution.items()[..position].contains(&id) {
            return Err(SolutionValidationError::DuplicateItem { id });
        }

        computed_profit = computed_profit
            .checked_add_val(model.item_profit(index))
            .ok_or(SolutionValidationError::ArithmeticOverflow)?;
        computed_weight = computed_weight
            .checked_add_val(model.item_weight(index))
            .ok_or(SolutionValidationError::ArithmeticOverflow)?;
    }

    if computed_profit != solution.total_profit() {
        return Err(SolutionValidationError::ProfitMismatch {
            reported: solution.total_profit(),
            computed: computed_profit,
        });
    }

    if computed_weight != solution.total_weight() {
        return Err(SolutionValidationError::WeightMismatch {
            reported: solution.total_weight(),
            computed: computed_weight,
        });
    }

    if computed_weight > model.capacity() {
        return Err(SolutionValidationError::CapacityExceeded {
            weight: computed_weight,
            capacity: model.capacity(),
        });
    }

    Ok(())
}
