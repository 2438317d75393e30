/*!
 * Deadlock Analyzer - Main Entry Point
 *
 * Command-line presentation layer over the analysis engine:
 * - `safety` runs the Banker's safe-state check
 * - `detect` searches the resource-allocation graph for a deadlock cycle
 *
 * Matrices use the text encoding described in the input module: commas
 * within a row, semicolons between rows.
 */

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing::info;

use deadlock_analyzer::{
    analyze_deadlock, evaluate_safety, init_tracing,
    input::{parse_labels, parse_matrix, parse_vector},
    DetectionSnapshot, SafetySnapshot,
};

#[derive(Parser)]
#[command(name = "analyzer", version, about = "Resource-allocation safety and deadlock analysis")]
struct Cli {
    /// Emit the full verdict as JSON (includes the graph for renderers)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a safe completion order exists (Banker's Algorithm)
    Safety {
        /// Process labels, comma-separated
        #[arg(long)]
        processes: String,
        /// Resource labels, comma-separated
        #[arg(long)]
        resources: String,
        /// Free units per resource type, comma-separated
        #[arg(long)]
        available: String,
        /// Max-need rows, one per process, semicolon-separated
        #[arg(long)]
        max_need: String,
        /// Allocation rows, one per process, semicolon-separated
        #[arg(long)]
        allocation: String,
    },
    /// Detect an already-formed deadlock in the allocation graph
    Detect {
        /// Process labels, comma-separated
        #[arg(long)]
        processes: String,
        /// Resource labels, comma-separated
        #[arg(long)]
        resources: String,
        /// Allocation rows, one per process, semicolon-separated
        #[arg(long)]
        allocation: String,
        /// Request rows, one per process, semicolon-separated
        #[arg(long)]
        request: String,
    },
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Safety {
            processes,
            resources,
            available,
            max_need,
            allocation,
        } => {
            let snapshot = SafetySnapshot {
                processes: parse_labels(&processes),
                resources: parse_labels(&resources),
                available: parse_vector("available", &available)?,
                max_need: parse_matrix("max_need", &max_need)?,
                allocation: parse_matrix("allocation", &allocation)?,
            };
            info!(
                processes = snapshot.processes.len(),
                resources = snapshot.resources.len(),
                "Running safety evaluation"
            );
            let verdict = evaluate_safety(&snapshot)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&verdict).into_diagnostic()?);
            } else if verdict.safe {
                println!(
                    "The system is in a safe state. Safe sequence: {}",
                    verdict.order.join(" -> ")
                );
            } else {
                println!("The system is in an unsafe state. Deadlock may occur.");
            }
        }
        Command::Detect {
            processes,
            resources,
            allocation,
            request,
        } => {
            let snapshot = DetectionSnapshot {
                processes: parse_labels(&processes),
                resources: parse_labels(&resources),
                allocation: parse_matrix("allocation", &allocation)?,
                request: parse_matrix("request", &request)?,
            };
            info!(
                processes = snapshot.processes.len(),
                resources = snapshot.resources.len(),
                "Running deadlock detection"
            );
            let verdict = analyze_deadlock(&snapshot)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&verdict).into_diagnostic()?);
            } else if verdict.deadlocked {
                let cycle = verdict
                    .cycle
                    .iter()
                    .map(|(from, to)| format!("({from} -> {to})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Deadlock detected. Cycle: {cycle}");
            } else {
                println!("No deadlock detected.");
            }
        }
    }

    Ok(())
}
