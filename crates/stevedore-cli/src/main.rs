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

//! Command-line harness for the Stevedore truck loading solver.
//!
//! Loads a CSV dataset pair (truck file + pallets file), runs the chosen
//! strategy, and reports the selected pallets, the achieved profit, and the
//! execution time. Datasets can be addressed either by explicit file paths
//! or by number within a data directory using the
//! `TruckAndPallets_NN.csv` / `Pallets_NN.csv` naming convention.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use stevedore_model::{loading::InstanceLoader, model::Model};
use stevedore_solver::solver::{Solver, Strategy};

#[derive(Debug, Parser)]
#[command(
    name = "stevedore",
    about = "Selects the most profitable pallet subset for a capacity-bounded truck",
    version
)]
struct Args {
    /// Path to the truck CSV file (header, then `capacity,numPallets`).
    #[arg(long, requires = "pallets", conflicts_with = "dataset")]
    truck: Option<PathBuf>,

    /// Path to the pallets CSV file (header, then `id,weight,profit` records).
    #[arg(long, requires = "truck", conflicts_with = "dataset")]
    pallets: Option<PathBuf>,

    /// Dataset number resolved inside the data directory
    /// (e.g. `--dataset 1` reads TruckAndPallets_01.csv and Pallets_01.csv).
    #[arg(long)]
    dataset: Option<String>,

    /// Directory holding the numbered dataset pairs.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Solution strategy: brute-force, dynamic, greedy, or branch-and-bound.
    #[arg(long, short, value_parser = parse_strategy)]
    strategy: Strategy,

    /// Skip the declared-count check between the two files.
    #[arg(long)]
    ignore_declared_count: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::from_str(s).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let (truck_path, pallets_path) = resolve_paths(args)?;

    let loader = InstanceLoader::new().enforce_declared_count(!args.ignore_declared_count);
    let model: Model<i64> = loader
        .from_paths(&truck_path, &pallets_path)
        .map_err(|e| {
            format!(
                "loading dataset ({}, {}): {}",
                truck_path.display(),
                pallets_path.display(),
                e
            )
        })?;

    println!(
        "Loaded {} pallets, truck capacity {} (search space {})",
        model.num_items(),
        model.capacity(),
        model.complexity()
    );
    println!();

    let outcome = Solver::new(args.strategy).solve(&model);

    print!("{}", outcome.result().solution().display_with(&model));
    println!();
    println!("Algorithm: {}", outcome.strategy());
    println!("Max profit: {}", outcome.result().solution().total_profit());
    println!(
        "Execution time: {:.3} ms",
        outcome.statistics().solve_duration.as_secs_f64() * 1_000.0
    );

    Ok(())
}

/// Resolves the dataset pair from the arguments: either both explicit paths
/// or a dataset number mapped into the data directory.
fn resolve_paths(args: &Args) -> Result<(PathBuf, PathBuf), String> {
    if let (Some(truck), Some(pallets)) = (&args.truck, &args.pallets) {
        return Ok((truck.clone(), pallets.clone()));
    }

    let Some(dataset) = &args.dataset else {
        return Err("provide either --dataset NN or both --truck and --pallets".to_owned());
    };

    // Single-digit dataset numbers are zero-padded, matching the file
    // naming convention of the shipped datasets.
    let number = if dataset.len() == 1 {
        format!("0{dataset}")
    } else {
        dataset.clone()
    };

    let truck = args.data_dir.join(format!("TruckAndPallets_{number}.csv"));
    let pallets = args.data_dir.join(format!("Pallets_{number}.csv"));
    Ok((truck, pallets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_number_is_zero_padded() {
        let args = Args {
            truck: None,
            pallets: None,
            dataset: Some("1".to_owned()),
            data_dir: PathBuf::from("data"),
            strategy: Strategy::Greedy,
            ignore_declared_count: false,
        };

        let (truck, pallets) = resolve_paths(&args).expect("resolvable");
        assert_eq!(truck, PathBuf::from("data/TruckAndPallets_01.csv"));
        assert_eq!(pallets, PathBuf::from("data/Pallets_01.csv"));
    }

    #[test]
    fn test_explicit_paths_win() {
        let args = Args {
            truck: Some(PathBuf::from("t.csv")),
            pallets: Some(PathBuf::from("p.csv")),
            dataset: None,
            data_dir: PathBuf::from("data"),
            strategy: Strategy::Greedy,
            ignore_declared_count: false,
        };

        let (truck, pallets) = resolve_paths(&args).expect("resolvable");
        assert_eq!(truck, PathBuf::from("t.csv"));
        assert_eq!(pallets, PathBuf::from("p.csv"));
    }

    #[test]
    fn test_missing_selection_is_an_error() {
        let args = Args {
            truck: None,
            pallets: None,
            dataset: None,
            data_dir: PathBuf::from("data"),
            strategy: Strategy::Greedy,
            ignore_declared_count: false,
        };

        assert!(resolve_paths(&args).is_err());
    }
}
