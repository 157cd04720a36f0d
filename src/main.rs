use clap::{Parser, Subcommand};

use crewplan::{Result, model, render, roster, spec};

#[derive(Parser)]
#[command(name = "crewplan")]
#[command(about = "Crew staffing curve planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an HTML crew report (validates inputs while running).
    Report {
        #[arg(long)]
        plan: String,

        /// Optional department roster CSV merged into the plan.
        #[arg(long)]
        roster: Option<String>,

        #[arg(short = 'o', long)]
        out: String,
    },

    /// Export the crew matrix and cost totals as a timeline CSV.
    Export {
        #[arg(long)]
        plan: String,

        #[arg(long)]
        roster: Option<String>,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report { plan, roster, out } => {
            let data = load_report_data(&plan, roster.as_deref())?;
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html)?;
            println!("Wrote {}", out);
        }
        Commands::Export { plan, roster, out } => {
            let data = load_report_data(&plan, roster.as_deref())?;
            let csv = render::render_timeline_csv(&data)?;
            std::fs::write(&out, csv)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}

/// Shared pipeline: parse + validate plan.json, merge the roster if given,
/// then aggregate into report data.
fn load_report_data(plan_path: &str, roster_path: Option<&str>) -> Result<model::ReportData> {
    use anyhow::Context;

    let text = std::fs::read_to_string(plan_path)
        .with_context(|| format!("read plan file {}", plan_path))?;
    let mut plan_spec: spec::PlanSpec =
        serde_json::from_str(&text).with_context(|| format!("parse plan file {}", plan_path))?;

    if let Some(path) = roster_path {
        let rows = roster::parse_roster_file(path)?;
        roster::merge_departments(&mut plan_spec.departments, rows);
    }

    let plan = plan_spec.validate_and_build()?;
    Ok(model::build_report_data(&plan))
}
