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

//! # Stevedore Search
//!
//! Shared vocabulary for the Stevedore solving engines. The strategy crates
//! (`stevedore_exact`, `stevedore_heuristic`) and the facade
//! (`stevedore_solver`) all speak in the types defined here, so results and
//! tie-breaking behave identically no matter which algorithm produced them.
//!
//! ## Modules
//!
//! - `num`: The `SolverNumeric` trait alias collecting the integer bounds
//!   every solver requires.
//! - `policy`: The shared tie-breaking policies (`SelectionPolicy`) applied
//!   when two candidate selections achieve the same profit.
//! - `result`: The `SolverResult` quality enum distinguishing proven-optimal
//!   solutions from heuristic ones.
//! - `stats`: Facade-level solver statistics with a builder.
//! - `validation`: Consistency checks for reported solutions
//!   (totals, capacity, duplicates, id existence).

pub mod num;
pub mod policy;
pub mod result;
pub mod stats;
pub mod validation;
