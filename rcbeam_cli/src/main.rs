//! # Rcbeam CLI Application
//!
//! Terminal front end for singly-reinforced concrete beam design.
//!
//! ```text
//! rcbeam design --width 300 --depth 500 --cover 40 --fck 20 --fy 415 --moment 100
//! rcbeam design --moment 150 --json
//! echo '{"moment": "120"}' | rcbeam request
//! rcbeam --settings detailing.toml design
//! rcbeam shear-table
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rcbeam_core::materials::DESIGN_SHEAR_STRENGTH;
use rcbeam_core::request::{
    DEFAULT_COVER_MM, DEFAULT_DEPTH_MM, DEFAULT_FCK_MPA, DEFAULT_FY_MPA, DEFAULT_MOMENT_KNM,
    DEFAULT_WIDTH_MM,
};
use rcbeam_core::{
    calculate, handle_request, load_settings, DesignSettings, RcBeamDesign, RcBeamInput,
};

/// Singly-reinforced concrete beam design
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bar and stirrup detailing settings (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Enable debug logging (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Design one beam from command-line values
    Design(DesignArgs),

    /// Process a JSON design request and print the response envelope
    Request {
        /// Request file; reads stdin when absent or "-"
        path: Option<PathBuf>,
    },

    /// Print the design shear strength table (percent steel vs τc)
    ShearTable {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct DesignArgs {
    /// Section width b (mm)
    #[arg(long, default_value_t = DEFAULT_WIDTH_MM)]
    width: f64,

    /// Overall depth D (mm)
    #[arg(long, default_value_t = DEFAULT_DEPTH_MM)]
    depth: f64,

    /// Cover to tension steel (mm)
    #[arg(long, default_value_t = DEFAULT_COVER_MM)]
    cover: f64,

    /// Concrete grade fck (N/mm²)
    #[arg(long, default_value_t = DEFAULT_FCK_MPA)]
    fck: f64,

    /// Steel yield strength fy (N/mm²)
    #[arg(long, default_value_t = DEFAULT_FY_MPA)]
    fy: f64,

    /// Design moment Mu (kN·m)
    #[arg(long, default_value_t = DEFAULT_MOMENT_KNM)]
    moment: f64,

    /// Beam label shown in the report
    #[arg(long, default_value = "B-1")]
    label: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl DesignArgs {
    fn to_input(&self) -> RcBeamInput {
        RcBeamInput::new(self.width, self.depth, self.cover, self.fck, self.fy, self.moment)
            .with_label(self.label.clone())
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_settings(path: Option<&Path>) -> Result<DesignSettings> {
    match path {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(DesignSettings::default()),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = resolve_settings(cli.settings.as_deref())?;
    tracing::debug!(?settings, "using design settings");

    match cli.command {
        Command::Design(args) => run_design(&args, &settings),
        Command::Request { path } => run_request(path.as_deref(), &settings),
        Command::ShearTable { json } => run_shear_table(json),
    }
}

fn run_design(args: &DesignArgs, settings: &DesignSettings) -> Result<ExitCode> {
    let input = args.to_input();

    match calculate(&input, settings) {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&input, &result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_request(path: Option<&Path>, settings: &DesignSettings) -> Result<ExitCode> {
    let body = match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        _ => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            body
        }
    };

    let response = handle_request(&body, settings);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(if response.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run_shear_table(json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(&*DESIGN_SHEAR_STRENGTH)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Design shear strength of concrete");
    println!("  100·Ast/(b·d)    τc (N/mm²)");
    for point in DESIGN_SHEAR_STRENGTH.points() {
        println!("  {:>10.2}      {:>8.2}", point.x, point.y);
    }
    println!();
    println!(
        "Values interpolate linearly; below {:.2} % and above {:.2} % the edge value applies.",
        DESIGN_SHEAR_STRENGTH.min_x(),
        DESIGN_SHEAR_STRENGTH.max_x()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_report(input: &RcBeamInput, result: &RcBeamDesign) {
    let grade = result
        .steel_grade
        .map(|g| g.to_string())
        .unwrap_or_else(|| "unlisted grade, default R_lim".to_string());

    println!("═══════════════════════════════════════");
    println!("  RC BEAM DESIGN: {}", input.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Section:  {:.0} x {:.0} mm (cover {:.0} mm)",
        input.width_mm, input.depth_mm, input.cover_mm
    );
    println!("  Concrete: fck = {:.0} N/mm²", input.fck_mpa);
    println!("  Steel:    fy = {:.0} N/mm² ({})", input.fy_mpa, grade);
    println!("  Moment:   Mu = {:.1} kN·m", input.moment_knm);
    println!();
    println!("Flexure:");
    println!("  d = {:.0} mm, z = {:.0} mm", result.effective_depth_mm, result.lever_arm_mm);
    println!("  R_lim = {:.3}, Mu_lim = {:.1} kN·m", result.r_lim, result.mu_lim_knm);
    println!("  {} {}", status_icon(result.flexure_check.is_ok()), result.flexure_check);
    println!();
    println!("Tension Steel:");
    println!(
        "  Ast,req = {:.0} mm², Ast,min = {:.0} mm²",
        result.ast_required_mm2, result.ast_min_mm2
    );
    println!(
        "  Provide {} x {:.0} mm bars (Ast = {:.0} mm², pt = {:.3} %)",
        result.num_bars, result.bar_dia_mm, result.ast_provided_mm2, result.percent_steel
    );
    println!();
    println!("Shear:");
    println!(
        "  Vu = {:.2} kN, τv = {:.4} N/mm², τc = {:.3} N/mm²",
        result.shear_vu_kn, result.tau_v_mpa, result.tc_mpa
    );
    println!("  {} {}", status_icon(result.shear_check.is_ok()), result.shear_check);
    println!(
        "  Stirrups: {}-legged {:.0} mm (Asv = {:.1} mm²)",
        result.stirrup_legs, result.stirrup_dia_mm, result.stirrup_area_total_mm2
    );
    match result.spacing_required_mm {
        Some(spacing) => println!("  Required spacing: {:.0} mm", spacing),
        None => println!("  Required spacing: none (concrete carries the shear)"),
    }
    println!("  Maximum spacing:  {:.0} mm", result.max_spacing_mm);
    println!("  Detail at:        {:.0} mm c/c", result.governing_spacing_mm());
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if result.passes() { "PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
