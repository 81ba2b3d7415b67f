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

/// Statistics reported by the solver facade for one strategy run.
///
/// `work_units` is the strategy's natural measure of effort: search nodes for
/// the recursive solvers, table cells for dynamic programming, candidates
/// considered for the greedy heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Strategy-specific units of work performed.
    pub work_units: u64,
    /// Number of times the strategy improved its best known selection.
    pub improvements: u64,
    /// Total duration of the solving process.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Work Units: {}", self.work_units)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatisticsBuilder {
    work_units: u64,
    improvements: u64,
    solve_duration: std::time::Duration,
}

impl Default for SolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStatisticsBuilder {
    /// Creates a new `SolverStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            work_units: 0,
            improvements: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the strategy-specific units of work performed.
    #[inline]
    pub fn work_units(mut self, work_units: u64) -> Self {
        self.work_units = work_units;
        self
    }

    /// Sets the number of improvements.
    #[inline]
    pub fn improvements(mut self, improvements: u64) -> Self {
        self.improvements = improvements;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        SolverStatistics {
            work_units: self.work_units,
            improvements: self.improvements,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolverStatistics;
    use super::SolverStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SolverStatisticsBuilder::new()
            .work_units(128)
            .improvements(3)
            .solve_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.work_units, 128);
        assert_eq!(stats.improvements, 3);
        assert_eq!(stats.solve_duration, Duration::from_millis(1234));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatistics {
            work_units: 42,
            improvements: 2,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Solver Statistics:"), "missing header");
        assert!(rendered.contains("Work Units: 42"), "missing work_units");
        assert!(rendered.contains("Improvements: 2"), "missing improvements");
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }

    #[test]
    fn test_display_handles_zero_values() {
        let stats = SolverStatisticsBuilder::new().build();

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Work Units: 0"));
        assert!(rendered.contains("Improvements: 0"));
        assert!(rendered.contains("Solve Duration (secs): 0.000"));
    }
}
