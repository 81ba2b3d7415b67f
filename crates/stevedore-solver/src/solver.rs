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

//! # Strategy-Dispatched Solver
//!
//! A thin orchestrator that runs exactly one of the four loading strategies
//! against a model and wraps the result in a uniform outcome.
//!
//! ## Motivation
//!
//! The strategies live in two crates with strategy-specific outcome types;
//! callers should not need to care. This facade normalizes them: the three
//! exact strategies surface as `SolverResult::Optimal`, the greedy heuristic
//! as `SolverResult::Feasible` (its result is never asserted optimal), and
//! every run is timed with the strategy's own effort counters mapped into
//! the shared statistics type.
//!
//! ## Usage
//!
//! ```rust
//! use stevedore_model::model::ModelBuilder;
//! use stevedore_solver::solver::{Solver, Strategy};
//!
//! let mut builder = ModelBuilder::<i64>::new(10);
//! builder.add_item(1, 5, 10);
//! builder.add_item(2, 4, 40);
//! builder.add_item(3, 6, 30);
//! let model = builder.build().expect("valid instance");
//!
//! let solver = Solver::new(Strategy::DynamicProgramming);
//! let outcome = solver.solve(&model);
//!
//! assert!(outcome.result().is_optimal());
//! assert_eq!(outcome.result().solution().total_profit(), 70);
//! ```

use stevedore_exact::{
    bnb::BranchAndBoundSolver, dp::DynamicProgrammingSolver, exhaustive::ExhaustiveSolver,
};
use stevedore_heuristic::greedy::GreedySolver;
use stevedore_model::model::Model;
use stevedore_search::{
    num::SolverNumeric,
    result::SolverResult,
    stats::{SolverStatistics, SolverStatisticsBuilder},
};

/// The four loading strategies, as chosen explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Complete enumeration; the correctness baseline. Exponential.
    Exhaustive,
    /// Bottom-up dynamic programming; exact in `O(n · capacity)`.
    DynamicProgramming,
    /// Ratio-sorted single-pass fill; fast approximation.
    Greedy,
    /// Capacity-pruned enumeration with the three-level tie-break. Exact,
    /// exponential worst case.
    BranchAndBound,
}

impl Strategy {
    /// All strategies, in menu order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Exhaustive,
        Strategy::DynamicProgramming,
        Strategy::Greedy,
        Strategy::BranchAndBound,
    ];

    /// A short human-readable name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exhaustive => "Brute Force",
            Strategy::DynamicProgramming => "Dynamic Programming",
            Strategy::Greedy => "Greedy Approximation",
            Strategy::BranchAndBound => "Branch and Bound",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error type produced when parsing a strategy name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyParseError {
    /// The string that matched no strategy.
    pub input: String,
}

impl std::fmt::Display for StrategyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown strategy '{}' (expected one of: brute-force, dynamic, greedy, branch-and-bound)",
            self.input
        )
    }
}

impl std::error::Error for StrategyParseError {}

impl std::str::FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" | "brute-force" | "bf" => Ok(Strategy::Exhaustive),
            "dynamic" | "dynamic-programming" | "dp" => Ok(Strategy::DynamicProgramming),
            "greedy" => Ok(Strategy::Greedy),
            "branch-and-bound" | "bnb" => Ok(Strategy::BranchAndBound),
            _ => Err(StrategyParseError {
                input: s.to_owned(),
            }),
        }
    }
}

/// The uniform result of one strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T> {
    strategy: Strategy,
    result: SolverResult<T>,
    statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: SolverNumeric,
{
    /// Returns the strategy that produced this outcome.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the quality-tagged result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Result: {}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}

/// The single-interface solver facade.
///
/// A `Solver` is configured with exactly one strategy and dispatches to it
/// synchronously on every [`solve`](Self::solve) call. No strategy depends
/// on another; all four are independently invokable against the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    strategy: Strategy,
}

impl Solver {
    /// Creates a solver for the given strategy.
    #[inline]
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Runs the configured strategy against `model`.
    ///
    /// The run is timed here so all strategies are measured identically.
    /// Exact strategies report `Optimal`; the greedy heuristic reports
    /// `Feasible`.
    pub fn solve<T>(&self, model: &Model<T>) -> SolverOutcome<T>
    where
        T: SolverNumeric,
    {
        let start_time = std::time::Instant::now();

        let (result, work_units, improvements) = match self.strategy {
            Strategy::Exhaustive => {
                let (solution, statistics) = ExhaustiveSolver::new().solve(model).into_parts();
                (
                    SolverResult::Optimal(solution),
                    statistics.nodes_explored,
                    statistics.incumbent_updates,
                )
            }
            Strategy::DynamicProgramming => {
                let (solution, statistics) =
                    DynamicProgrammingSolver::new().solve(model).into_parts();
                (
                    SolverResult::Optimal(solution),
                    statistics.cells_filled,
                    statistics.incumbent_updates,
                )
            }
            Strategy::Greedy => {
                let (solution, statistics) = GreedySolver::new().solve(model).into_parts();
                (
                    SolverResult::Feasible(solution),
                    statistics.candidates_considered,
                    statistics.candidates_admitted,
                )
            }
            Strategy::BranchAndBound => {
                let (solution, statistics) = BranchAndBoundSolver::new().solve(model).into_parts();
                (
                    SolverResult::Optimal(solution),
                    statistics.nodes_explored,
                    statistics.incumbent_updates,
                )
            }
        };

        let statistics = SolverStatisticsBuilder::new()
            .work_units(work_units)
            .improvements(improvements)
            .solve_duration(start_time.elapsed())
            .build();

        SolverOutcome {
            strategy: self.strategy,
            result,
            statistics,
        }
    }
}

/// Builder for [`Solver`].
///
/// Exists for parity with the other configuration surfaces; today the only
/// knob is the strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverBuilder {
    strategy: Option<Strategy>,
}

impl SolverBuilder {
    /// Creates a new `SolverBuilder` with no strategy chosen.
    #[inline]
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Sets the strategy to dispatch to.
    #[inline]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Builds the solver.
    ///
    /// # Panics
    ///
    /// Panics if no strategy was chosen; the caller picks the strategy
    /// explicitly, there is no default.
    pub fn build(self) -> Solver {
        let strategy = self
            .strategy
            .expect("called `SolverBuilder::build` without choosing a strategy");
        Solver::new(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use stevedore_model::model::ModelBuilder;
    use stevedore_search::validation::validate_solution;

    fn model(capacity: i64, items: &[(u32, i64, i64)]) -> Model<i64> {
        let mut builder = ModelBuilder::new(capacity);
        for &(id, weight, profit) in items {
            builder.add_item(id, weight, profit);
        }
        builder.build().expect("valid instance")
    }

    fn random_model(rng: &mut ChaCha8Rng) -> Model<i64> {
        let num_items: usize = rng.random_range(0..=11);
        let capacity: i64 = rng.random_range(0..=40);

        let mut builder = ModelBuilder::<i64>::new(capacity);
        for id in 0..num_items {
            let weight: i64 = rng.random_range(1..=15);
            let profit: i64 = rng.random_range(0..=30);
            builder.add_item(id as u32 + 1, weight, profit);
        }
        builder.build().expect("valid instance")
    }

    #[test]
    fn test_all_strategies_agree_on_reference_scenario() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40), (3, 6, 30)]);

        for strategy in Strategy::ALL {
            let outcome = Solver::new(strategy).solve(&model);
            assert_eq!(
                outcome.result().solution().total_profit(),
                70,
                "strategy {} missed the reference profit",
                strategy
            );
            assert_eq!(validate_solution(&model, outcome.result().solution()), Ok(()));
        }
    }

    #[test]
    fn test_zero_capacity_yields_zero_solution_everywhere() {
        let model = model(0, &[(1, 5, 10), (2, 4, 40)]);

        for strategy in Strategy::ALL {
            let outcome = Solver::new(strategy).solve(&model);
            assert_eq!(outcome.result().solution().total_profit(), 0);
            assert!(outcome.result().solution().is_empty());
        }
    }

    #[test]
    fn test_empty_item_list_yields_zero_solution_everywhere() {
        let model = model(50, &[]);

        for strategy in Strategy::ALL {
            let outcome = Solver::new(strategy).solve(&model);
            assert_eq!(outcome.result().solution().total_profit(), 0);
            assert!(outcome.result().solution().is_empty());
        }
    }

    #[test]
    fn test_equal_ratio_scenario() {
        // Two items of equal ratio; exactly one optimal subset of profit 8
        // exists for the exact strategies ({2} — one item, weight 4 fits).
        let model = model(4, &[(1, 2, 4), (2, 4, 8)]);

        for strategy in [
            Strategy::Exhaustive,
            Strategy::DynamicProgramming,
            Strategy::BranchAndBound,
        ] {
            let outcome = Solver::new(strategy).solve(&model);
            assert_eq!(outcome.result().solution().total_profit(), 8);
        }

        // Greedy depends on sort stability but must stay within capacity.
        let outcome = Solver::new(Strategy::Greedy).solve(&model);
        assert!(outcome.result().solution().total_weight() <= model.capacity());
    }

    #[test]
    fn test_quality_tags_match_strategies() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40)]);

        assert!(Solver::new(Strategy::Exhaustive).solve(&model).result().is_optimal());
        assert!(Solver::new(Strategy::DynamicProgramming)
            .solve(&model)
            .result()
            .is_optimal());
        assert!(Solver::new(Strategy::BranchAndBound)
            .solve(&model)
            .result()
            .is_optimal());
        // The heuristic never claims optimality, not even when it happens to
        // reach the optimum.
        assert!(!Solver::new(Strategy::Greedy).solve(&model).result().is_optimal());
    }

    #[test]
    fn test_exact_strategies_agree_and_greedy_never_wins_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        for _ in 0..40 {
            let model = random_model(&mut rng);

            let exhaustive = Solver::new(Strategy::Exhaustive).solve(&model);
            let dynamic = Solver::new(Strategy::DynamicProgramming).solve(&model);
            let pruned = Solver::new(Strategy::BranchAndBound).solve(&model);
            let greedy = Solver::new(Strategy::Greedy).solve(&model);

            let optimum = exhaustive.result().solution().total_profit();
            assert_eq!(dynamic.result().solution().total_profit(), optimum);
            assert_eq!(pruned.result().solution().total_profit(), optimum);
            assert!(greedy.result().solution().total_profit() <= optimum);

            for outcome in [&exhaustive, &dynamic, &pruned, &greedy] {
                assert_eq!(
                    validate_solution(&model, outcome.result().solution()),
                    Ok(())
                );
            }
        }
    }

    #[test]
    fn test_tie_break_divergence_is_possible_but_profit_agrees() {
        // {1} (weight 5) and {2} (weight 3) both reach profit 10. The
        // baseline keeps the first-found subset; branch-and-bound must
        // report the lighter one. Divergence in the selection is intended.
        let model = model(5, &[(1, 5, 10), (2, 3, 10)]);

        let baseline = Solver::new(Strategy::Exhaustive).solve(&model);
        let pruned = Solver::new(Strategy::BranchAndBound).solve(&model);

        assert_eq!(
            baseline.result().solution().total_profit(),
            pruned.result().solution().total_profit()
        );
        assert_eq!(pruned.result().solution().items(), &[2]);
        assert_eq!(pruned.result().solution().total_weight(), 3);
    }

    #[test]
    fn test_strategy_parsing_and_names() {
        assert_eq!("brute-force".parse::<Strategy>(), Ok(Strategy::Exhaustive));
        assert_eq!("BF".parse::<Strategy>(), Ok(Strategy::Exhaustive));
        assert_eq!("dp".parse::<Strategy>(), Ok(Strategy::DynamicProgramming));
        assert_eq!("dynamic".parse::<Strategy>(), Ok(Strategy::DynamicProgramming));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("bnb".parse::<Strategy>(), Ok(Strategy::BranchAndBound));

        let err = "annealing".parse::<Strategy>().unwrap_err();
        assert_eq!(err.input, "annealing");

        assert_eq!(Strategy::Greedy.name(), "Greedy Approximation");
        assert_eq!(format!("{}", Strategy::BranchAndBound), "Branch and Bound");
    }

    #[test]
    fn test_builder_roundtrip() {
        let solver = SolverBuilder::new().strategy(Strategy::Greedy).build();
        assert_eq!(solver.strategy(), Strategy::Greedy);
    }

    #[test]
    #[should_panic(expected = "called `SolverBuilder::build` without choosing a strategy")]
    fn test_builder_panics_without_strategy() {
        let _ = SolverBuilder::new().build();
    }

    #[test]
    fn test_outcome_display_mentions_strategy_and_result() {
        let model = model(10, &[(1, 5, 10), (2, 4, 40)]);
        let outcome = Solver::new(Strategy::DynamicProgramming).solve(&model);

        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Strategy: Dynamic Programming"));
        assert!(rendered.contains("Optimal(profit=50)"));
        assert!(rendered.contains("Solver Statistics:"));
    }
}
