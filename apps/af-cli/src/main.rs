use af_aero::{AngleSweep, compute_aerodynamics};
use af_app::{AnalysisOptions, AppResult, ReportResponse, query};
use af_geometry::{compute_geometry, parse_shape_code};
use af_project::{AnalysisParams, SweepDef};
use af_results::ReportStore;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "af-cli")]
#[command(about = "NACA 4-digit airfoil geometry and coefficient estimates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the shape parameters encoded by a 4-digit code
    Parse {
        /// 4-digit shape code, e.g. 2412
        code: String,
    },
    /// Print surface coordinates, camber line and thickness
    Geometry {
        /// 4-digit shape code
        code: String,
        /// Number of chordwise stations
        #[arg(long, default_value_t = af_geometry::DEFAULT_POINTS)]
        points: usize,
    },
    /// Print lift/drag estimates and polar curves
    Aero {
        /// 4-digit shape code
        code: String,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Analyze one airfoil and store the report
    Analyze {
        /// 4-digit shape code
        code: String,
        /// Number of chordwise stations
        #[arg(long, default_value_t = af_geometry::DEFAULT_POINTS)]
        points: usize,
        #[command(flatten)]
        sweep: SweepArgs,
        #[command(flatten)]
        store: StoreArgs,
        /// Skip cache and force recomputation
        #[arg(long)]
        no_cache: bool,
    },
    /// Validate an analysis file
    Validate {
        /// Path to the analysis YAML/JSON file
        project_path: PathBuf,
    },
    /// Run every analysis in a file, storing reports beside it
    Run {
        /// Path to the analysis YAML/JSON file
        project_path: PathBuf,
        /// Skip cache and force recomputation
        #[arg(long)]
        no_cache: bool,
    },
    /// List stored reports
    Reports {
        /// Only reports for this shape code
        #[arg(long)]
        code: Option<String>,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Show details of a stored report
    ShowReport {
        /// Report ID
        report_id: String,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Export series from a stored report as CSV
    ExportSeries {
        /// Report ID
        report_id: String,
        /// Series names sharing one abscissa (e.g. camber thickness, or polar_cl polar_cd)
        #[arg(required = true)]
        series: Vec<String>,
        #[command(flatten)]
        store: StoreArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SweepArgs {
    /// Lowest angle of attack (degrees)
    #[arg(long, default_value_t = AngleSweep::DEFAULT_MIN_DEG, allow_hyphen_values = true)]
    alpha_min: f64,
    /// Highest angle of attack (degrees)
    #[arg(long, default_value_t = AngleSweep::DEFAULT_MAX_DEG, allow_hyphen_values = true)]
    alpha_max: f64,
    /// Number of angles in the sweep
    #[arg(long, default_value_t = AngleSweep::DEFAULT_COUNT)]
    alphas: usize,
}

impl SweepArgs {
    fn to_def(&self) -> SweepDef {
        SweepDef {
            alpha_min_deg: self.alpha_min,
            alpha_max_deg: self.alpha_max,
            n_alpha: self.alphas,
        }
    }
}

#[derive(Args)]
struct StoreArgs {
    /// Report store directory
    #[arg(long, default_value = ".airfoil/reports")]
    store: PathBuf,
}

impl StoreArgs {
    fn open(&self) -> AppResult<ReportStore> {
        Ok(ReportStore::new(self.store.clone())?)
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { code } => cmd_parse(&code),
        Commands::Geometry { code, points } => cmd_geometry(&code, points),
        Commands::Aero { code, sweep } => cmd_aero(&code, &sweep),
        Commands::Analyze {
            code,
            points,
            sweep,
            store,
            no_cache,
        } => {
            let params = AnalysisParams {
                code,
                n_points: points,
                sweep: sweep.to_def(),
            };
            cmd_analyze(&params, &store.open()?, !no_cache)
        }
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            no_cache,
        } => cmd_run(&project_path, !no_cache),
        Commands::Reports { code, store } => cmd_reports(&store.open()?, code.as_deref()),
        Commands::ShowReport { report_id, store } => cmd_show_report(&store.open()?, &report_id),
        Commands::ExportSeries {
            report_id,
            series,
            store,
            output,
        } => cmd_export_series(&store.open()?, &report_id, &series, output.as_deref()),
    }
}

fn cmd_parse(code: &str) -> AppResult<()> {
    let shape = parse_shape_code(code)?;
    println!("{}", shape);
    println!("  Max camber (m):          {:.2}", shape.m());
    println!("  Max camber location (p): {:.1}", shape.p());
    println!("  Max thickness (t):       {:.2}", shape.t());
    if shape.is_symmetric() {
        println!("  Symmetric section");
    }
    Ok(())
}

fn cmd_geometry(code: &str, points: usize) -> AppResult<()> {
    let shape = parse_shape_code(code)?;
    let geometry = compute_geometry(&shape, points)?;
    let surfaces = geometry.surfaces();

    println!("x,x_upper,y_upper,x_lower,y_lower,y_c,y_t");
    for i in 0..geometry.n_points() {
        let (u, l) = (surfaces.upper()[i], surfaces.lower()[i]);
        println!(
            "{},{},{},{},{},{},{}",
            geometry.grid().stations()[i],
            u.x,
            u.y,
            l.x,
            l.y,
            geometry.camber().y_c()[i],
            geometry.thickness().y_t()[i]
        );
    }
    Ok(())
}

fn cmd_aero(code: &str, sweep: &SweepArgs) -> AppResult<()> {
    let shape = parse_shape_code(code)?;
    let sweep = AngleSweep::linear(sweep.alpha_min, sweep.alpha_max, sweep.alphas)?;
    let estimate = compute_aerodynamics(&shape, &sweep);

    println!("{}", shape);
    println!("  Cl (alpha = 0): {:.4}", estimate.cl());
    println!("  Cd (alpha = 0): {:.4}", estimate.cd());
    println!("  {}", estimate.sweep());
    println!("\nalpha_deg,polar_cl,polar_cd");
    for ((alpha, cl), cd) in sweep
        .angles_deg()
        .iter()
        .zip(estimate.polar_cl())
        .zip(estimate.polar_cd())
    {
        println!("{},{},{}", alpha, cl, cd);
    }
    Ok(())
}

fn cmd_analyze(params: &AnalysisParams, store: &ReportStore, use_cache: bool) -> AppResult<()> {
    let options = AnalysisOptions {
        use_cache,
        ..Default::default()
    };
    let response = af_app::ensure_report(store, params, &options)?;
    print_response(&response)
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating analysis file: {}", project_path.display());
    let project = af_project::load_project(project_path)?;
    println!(
        "✓ '{}' is valid ({} analyses)",
        project.name,
        project.analyses.len()
    );
    Ok(())
}

fn cmd_run(project_path: &Path, use_cache: bool) -> AppResult<()> {
    println!("Running analyses in: {}", project_path.display());
    let options = AnalysisOptions {
        use_cache,
        ..Default::default()
    };
    let items = af_app::run_project(project_path, &options)?;
    for item in &items {
        println!("\n[{}]", item.id);
        print_response(&item.response)?;
    }
    Ok(())
}

fn print_response(response: &ReportResponse) -> AppResult<()> {
    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.report_id);
    } else {
        println!("✓ Analysis completed: {}", response.report_id);
    }
    print_summary(&query::get_report_summary(&response.report)?);
    println!("  Elapsed: {:.3}s", response.elapsed_s);
    Ok(())
}

fn print_summary(summary: &query::ReportSummary) {
    println!("  NACA {}", summary.code);
    println!(
        "  m = {:.2}, p = {:.1}, t = {:.2}",
        summary.m, summary.p, summary.t
    );
    println!("  Cl = {:.4}, Cd = {:.4}", summary.cl, summary.cd);
    println!("  Max camber ordinate: {:.5}", summary.camber_max);
    println!("  Stations: {}", summary.n_points);
    println!("  Angles: {}", summary.n_alpha);
    if summary.has_gaps {
        println!("  Note: some series contain non-finite values");
    }
}

fn cmd_reports(store: &ReportStore, code: Option<&str>) -> AppResult<()> {
    let reports = af_app::list_reports(store, code)?;

    if reports.is_empty() {
        println!("No stored reports in {}", store.root_dir().display());
    } else {
        println!("Stored reports:");
        for manifest in reports {
            println!(
                "  {} NACA {} ({})",
                manifest.report_id, manifest.code, manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_report(store: &ReportStore, report_id: &str) -> AppResult<()> {
    println!("Loading report: {}", report_id);

    let (manifest, report) = af_app::load_report(store, report_id)?;
    println!("\nReport Summary:");
    println!("  Created: {}", manifest.timestamp);
    println!("  Engine: {}", manifest.engine_version);
    print_summary(&query::get_report_summary(&report)?);

    println!("\nSeries:");
    for name in query::list_series_names() {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_export_series(
    store: &ReportStore,
    report_id: &str,
    series: &[String],
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, report) = af_app::load_report(store, report_id)?;
    let names: Vec<&str> = series.iter().map(String::as_str).collect();

    // Write to file or stdout
    if let Some(path) = output {
        let mut file = std::fs::File::create(path)?;
        let rows = af_app::write_series_csv(&mut file, &report, &names)?;
        println!("✓ Exported {} rows to {}", rows, path.display());
    } else {
        print!("{}", af_app::series_csv(&report, &names)?);
    }

    Ok(())
}
