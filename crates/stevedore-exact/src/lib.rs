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

//! Stevedore-Exact: complete searches for truck loading
//!
//! This crate implements the three strategies that provably find the maximum
//! achievable profit for a loading instance. All three consume the same
//! `stevedore_model::Model<T>` and report through the same solution and
//! statistics types, so they can be cross-checked against each other.
//!
//! Core flow
//! - Provide a `stevedore_model::Model<T>`.
//! - Run one of `exhaustive::ExhaustiveSolver`, `dp::DynamicProgrammingSolver`,
//!   or `bnb::BranchAndBoundSolver`.
//! - Receive an `ExactSolverOutcome<T>` carrying the solution and counters.
//!
//! Design highlights
//! - Best-so-far state is an explicit incumbent accumulator threaded through
//!   the recursion by `&mut`, never shared or global.
//! - Tie-breaking is delegated to the shared `SelectionPolicy` seam: the
//!   exhaustive baseline uses `MinimalCardinality`, branch-and-bound the
//!   finer `MinimalCardinalityThenWeight`. The two may report different
//!   subsets at equal profit; the profit value always agrees.
//! - Deterministic: identical models produce byte-identical outcomes.
//!
//! Assumptions and guarantees
//! - Models are pre-validated (positive weights, non-negative profits);
//!   the solvers do not defend against malformed instances.
//! - The exhaustive search is intentionally memoization-free: it is the
//!   correctness baseline the other strategies are validated against, and
//!   its 2^n cost is a design constraint, not an oversight.
//!
//! Module map
//! - `exhaustive`: the recursive include/exclude baseline.
//! - `dp`: bottom-up dynamic programming with reconstruction.
//! - `bnb`: capacity-pruned branch-and-bound with the three-level tie-break.
//! - `result`: solver outcomes (solution + statistics).
//! - `stats`: lightweight counters/timing.

pub mod bnb;
pub mod dp;
pub mod exhaustive;
mod incumbent;
pub mod result;
pub mod stats;
