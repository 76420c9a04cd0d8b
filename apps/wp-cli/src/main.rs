use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use wp_app::{AppResult, CurveReport, GasQuery, case_service, query, run_service};
use wp_flow::FrictionModel;
use wp_fluids::{ViscosityMethod, ZMethod};

#[derive(Parser)]
#[command(name = "wp-cli")]
#[command(
    about = "Well performance CLI - inflow and outflow performance curves",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and content
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Generate the curves requested by a case
    Run {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Print the JSON report instead of tables
        #[arg(long)]
        json: bool,
        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate z-factor, density and viscosity of a natural gas
    ZFactor {
        /// Gas specific gravity (air = 1)
        #[arg(long)]
        gravity: f64,
        /// Pressure [psia]
        #[arg(long)]
        pressure: f64,
        /// Temperature [°F]
        #[arg(long)]
        temperature: f64,
        /// Correlation code (0-4) or name
        #[arg(long, default_value = "0")]
        method: ZMethod,
        /// Viscosity correlation name
        #[arg(long, default_value = "Lee-Gonzalez-Eakin")]
        viscosity: ViscosityMethod,
    },
    /// Evaluate the Fanning friction factor
    Friction {
        /// Reynolds number
        #[arg(long)]
        reynolds: f64,
        /// Relative roughness ε/D
        #[arg(long, default_value_t = 0.0)]
        roughness: f64,
        /// Correlation name
        #[arg(long, default_value = "Colebrook-White")]
        model: FrictionModel,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run {
            case_path,
            json,
            output,
        } => cmd_run(&case_path, json, output.as_deref()),
        Commands::ZFactor {
            gravity,
            pressure,
            temperature,
            method,
            viscosity,
        } => cmd_z_factor(GasQuery {
            gravity,
            pressure,
            temperature,
            z_method: method,
            viscosity_method: viscosity,
        }),
        Commands::Friction {
            reynolds,
            roughness,
            model,
        } => cmd_friction(reynolds, roughness, model),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    let summary = case_service::summarize_case(&case);
    println!("✓ Case is valid: {} (version {})", summary.name, summary.version);
    if let Some(inflow) = summary.inflow {
        println!("  Inflow:  {}", inflow);
    }
    if let Some(outflow) = summary.outflow {
        println!("  Outflow: {}", outflow);
    }
    Ok(())
}

fn cmd_run(case_path: &Path, json: bool, output: Option<&Path>) -> AppResult<()> {
    let report = run_service::run_case_file(case_path)?;

    if let Some(path) = output {
        report.write_json(path)?;
        println!("✓ Report written to {}", path.display());
    }

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Case: {}", report.name);
    for curve in [&report.inflow, &report.outflow].into_iter().flatten() {
        print_curve(curve);
    }
    debug!(elapsed_s = report.elapsed_s, "run finished");
    Ok(())
}

fn print_curve(curve: &CurveReport) {
    println!();
    println!(
        "{} ({}, {} points)",
        curve.kind,
        curve.spacing.method,
        curve.points.len()
    );
    if let Some(q) = curve.max_rate {
        println!("  Max rate: {:.2}", q);
    }
    println!("  {:>14}  {:>14}", "pwf [psia]", "rate");
    for point in &curve.points {
        println!("  {:>14.2}  {:>14.2}", point.pressure, point.rate);
    }
}

fn cmd_z_factor(gas: GasQuery) -> AppResult<()> {
    let report = query::evaluate_gas(&gas)?;
    println!("Gas state ({}, {})", gas.z_method, gas.viscosity_method);
    println!("  Ppr:       {:.4}", report.ppr);
    println!("  Tpr:       {:.4}", report.tpr);
    if report.converged {
        println!("  z:         {:.5} ({} iterations)", report.z, report.iterations);
    } else {
        println!(
            "  z:         {:.5} (not converged after {} iterations)",
            report.z, report.iterations
        );
    }
    println!("  Density:   {:.4} lbm/ft³", report.density);
    println!("  Viscosity: {:.5} cp", report.viscosity);
    Ok(())
}

fn cmd_friction(reynolds: f64, roughness: f64, model: FrictionModel) -> AppResult<()> {
    let f = query::friction_factor(reynolds, roughness, model)?;
    println!("Fanning friction factor ({}): {:.6}", model.name(), f);
    println!("Darcy friction factor:  {:.6}", 4.0 * f);
    Ok(())
}
