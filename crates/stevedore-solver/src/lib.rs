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

//! # Stevedore Solver
//!
//! High-level dispatch over the four loading strategies. This crate is the
//! single interface callers program against: pick a `Strategy`, hand over a
//! `Model`, and receive a uniform `SolverOutcome` with a quality-tagged
//! result and timing.
//!
//! ## Modules
//!
//! - `solver`: The `Strategy` enum, the `Solver` facade with its builder,
//!   and unified outcome construction.
//!
//! ## Motivation
//!
//! The four strategies trade time for guarantees in different ways. Keeping
//! them behind one dispatch point lets callers switch strategies without
//! touching any other code, and lets the test suite cross-check the
//! strategies against each other through a single surface. The caller picks
//! the strategy explicitly; no selection heuristics are applied, and
//! exactly one strategy runs per `solve` call.
//!
//! See `solver` for detailed APIs and examples.

pub mod solver;
