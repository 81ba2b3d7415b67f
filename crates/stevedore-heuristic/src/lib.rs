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

//! Stevedore-Heuristic: the greedy baseline for truck loading
//!
//! This crate houses the one approximation strategy of the workspace: a
//! profit/weight-ratio greedy fill. It consumes the same
//! `stevedore_model::Model<T>` as the exact solvers and reports through the
//! same solution type, but its result carries no optimality claim — the
//! facade tags it `Feasible`, never `Optimal`.
//!
//! Module map
//! - `greedy`: the ratio-sorted single-pass fill.
//! - `result`: solver outcome (solution + statistics).
//! - `stats`: lightweight counters/timing.

pub mod greedy;
pub mod result;
pub mod stats;
