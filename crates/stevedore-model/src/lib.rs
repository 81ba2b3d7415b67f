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

//! # Stevedore Model
//!
//! **The Core Domain Model for the Stevedore Truck Loading Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **0/1 knapsack (pallet selection) problem**: a truck with a weight capacity
//! and a set of pallets, each carrying a weight and a profit. It serves as the
//! data interchange layer between the problem definition (user input) and the
//! solving engines (`stevedore_exact`, `stevedore_heuristic`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides the strongly-typed `ItemIndex` wrapper to prevent
//!   logical indexing errors, and the `ItemId` label type.
//! * **`item`**: The `Item` record (id, weight, profit) — the fundamental
//!   data unit of all loading algorithms.
//! * **`model`**: Contains the `Model` (immutable, optimized for solving) and
//!   `ModelBuilder` (mutable, validating, optimized for configuration).
//! * **`solution`**: Defines the output format: the selected item ids and
//!   their aggregate profit and weight.
//! * **`loading`**: Parses the CSV dataset pair (truck file + pallets file)
//!   into a validated `Model`.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Positions (`ItemIndex`) and labels (`ItemId`) are
//!     distinct types; you cannot accidentally index the item arrays with a
//!     pallet id.
//! 2.  **Memory Layout**: Data is stored in **Structure of Arrays (SoA)**
//!     format (parallel vectors) to maximize cache locality during search.
//! 3.  **Fail-Fast**: The builder validates inputs eagerly so the solvers
//!     never encounter an invalid state — in particular, zero or negative
//!     weights never reach the greedy ratio computation.

pub mod index;
pub mod item;
pub mod loading;
pub mod model;
pub mod solution;
