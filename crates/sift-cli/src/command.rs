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

use crate::render::write_dot;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use sift_bnb::{
    bnb::BnbSolver,
    eval::{
        evaluator::CriterionEvaluator,
        sum::{SquaredSumCriterion, SumCriterion},
    },
    monitor::{composite::CompositeTreeSearchMonitor, log::LogTreeSearchMonitor},
};
use sift_core::utils::fmt::join_values;
use sift_model::{model::FeatureModel, parse::parse_feature_list};
use std::{fs::File, io::BufWriter, path::PathBuf};

/// Select the best fixed-size feature subset by branch-and-bound.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about)]
pub struct Args {
    /// Comma-separated feature values, e.g. `1,2,3,4,5`.
    #[arg(short, long, default_value = "1,2,3,4,5")]
    features: String,

    /// Number of features to keep in the selected subset.
    #[arg(short, long, default_value_t = 2)]
    keep: usize,

    /// Criterion function used to score subsets.
    #[arg(short, long, value_enum, default_value_t = CriterionKind::Sum)]
    criterion: CriterionKind,

    /// Disable bound pruning and evaluate every candidate subset.
    #[arg(long)]
    exhaustive: bool,

    /// Write the finished search tree as Graphviz DOT to this path.
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Print a progress table while searching.
    #[arg(long)]
    progress: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum CriterionKind {
    /// Sum of the subset's feature values.
    Sum,
    /// Sum of the subset's squared feature values.
    SquaredSum,
}

impl CriterionKind {
    fn evaluator(&self) -> &'static dyn CriterionEvaluator<f64> {
        match self {
            CriterionKind::Sum => &SumCriterion,
            CriterionKind::SquaredSum => &SquaredSumCriterion,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    run_with(Args::parse())
}

fn run_with(args: Args) -> anyhow::Result<()> {
    let values =
        parse_feature_list::<f64>(&args.features).context("invalid feature list")?;
    let model = FeatureModel::new(values, args.keep).context("invalid configuration")?;

    let solver = if args.exhaustive {
        BnbSolver::without_pruning()
    } else {
        BnbSolver::new()
    };

    let mut monitor = CompositeTreeSearchMonitor::new();
    if args.progress {
        monitor.add_monitor(LogTreeSearchMonitor::default());
    }

    let outcome = solver
        .solve(&model, args.criterion.evaluator(), monitor)
        .context("search rejected")?;

    let selection = outcome
        .selection()
        .context("search finished without a selection")?;

    println!("Selected features:  {}", join_values(selection.features()));
    println!("Criterion value:    {}", selection.score());
    println!("Termination:        {}", outcome.termination_reason());
    if let Some(coverage) = model
        .complexity()
        .coverage(outcome.statistics().leaves_evaluated)
    {
        println!(
            "Subsets evaluated:  {} of {} ({:.1}%)",
            outcome.statistics().leaves_evaluated,
            model.complexity().leaves(),
            coverage
        );
    }
    println!();
    print!("{}", outcome.statistics());

    if let Some(path) = &args.dot {
        let file = File::create(path)
            .with_context(|| format!("could not create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_dot(outcome.tree(), &mut writer)
            .with_context(|| format!("could not write {}", path.display()))?;
        println!();
        println!("Search tree written to {}", path.display());
    }

    Ok(())
}
