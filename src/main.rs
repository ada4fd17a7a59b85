use agent_portfolio::cli;
use agent_portfolio::error::PortfolioResult;
use agent_portfolio::layout::QuickWinsMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Turn a portfolio of AI agent ideas into a ready-to-use spreadsheet.")]
#[command(long_about = "Agent Portfolio - AI agent idea tracker
39 agents | 9 categories | Excel + Google Sheets

SHEETS:
  Agent Portfolio - Every idea, rating dropdowns, highlights, dashboard
  Quick Wins      - High-impact agents you can build fast
  Build Roadmap   - Three phases, top-rated agents pre-filled

COMMANDS:
  build    - Write the Excel workbook (.xlsx)
  script   - Write a Google Apps Script that builds the sheets
  init     - Dump the built-in portfolio to YAML for editing
  summary  - Count agents by category, impact, complexity, status
  inspect  - Read a generated workbook back

EXAMPLES:
  portfolio build                                 # sheets/Agent_Portfolio.xlsx
  portfolio init -o my-agents.yaml                # Edit, then:
  portfolio build --data my-agents.yaml --quick-wins live
  portfolio script -o agents-sheet.gs             # Paste into Apps Script

Set RUST_LOG=agent_portfolio=debug for detailed logs.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Write the Excel workbook.

Lays out all three sheets and saves them as .xlsx. Formulas (dashboard
counts, top priorities, roadmap ranking) stay live: rate agents in the
Priority column and the dashboard and roadmap update.

QUICK WINS MODE:
  static - Quick-win rows are written as values (default)
  live   - A FILTER formula tracks the Quick Win? checkboxes

Needs Excel 365 / 2021 or newer for FILTER and SORTBY.")]
    /// Write the Excel workbook
    Build {
        /// Portfolio YAML (defaults to the built-in portfolio)
        #[arg(short, long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,

        /// Output .xlsx path
        #[arg(short, long, default_value = "sheets/Agent_Portfolio.xlsx")]
        output: PathBuf,

        /// How the Quick Wins sheet gets its rows
        #[arg(long, value_enum, default_value_t = QuickWinsMode::Static)]
        quick_wins: QuickWinsMode,

        /// Show verbose build steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Write a Google Apps Script that builds the sheets.

USAGE IN GOOGLE SHEETS:
  1. Open a new Google Sheet
  2. Extensions → Apps Script
  3. Paste the generated script and run buildAgentForce()

Existing sheets with the same names are deleted and recreated.")]
    /// Write a Google Apps Script
    Script {
        /// Portfolio YAML (defaults to the built-in portfolio)
        #[arg(short, long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,

        /// Output .gs path
        #[arg(short, long, default_value = "agents-sheet.gs")]
        output: PathBuf,

        /// How the Quick Wins sheet gets its rows
        #[arg(long, value_enum, default_value_t = QuickWinsMode::Live)]
        quick_wins: QuickWinsMode,

        /// Show verbose build steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Dump the built-in portfolio to YAML for editing
    Init {
        /// Output YAML path
        #[arg(short, long, default_value = "portfolio.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Count agents by category, impact, complexity and status
    Summary {
        /// Portfolio YAML (defaults to the built-in portfolio)
        #[arg(short, long, env = "PORTFOLIO_DATA")]
        data: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Read a generated workbook back
    Inspect {
        /// Path to .xlsx file
        file: PathBuf,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        matches!(
            self,
            Commands::Build { verbose: true, .. } | Commands::Script { verbose: true, .. }
        )
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "agent_portfolio=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> PortfolioResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    match cli.command {
        Commands::Build {
            data,
            output,
            quick_wins,
            verbose,
        } => cli::build(data, output, quick_wins, verbose),

        Commands::Script {
            data,
            output,
            quick_wins,
            verbose,
        } => cli::script(data, output, quick_wins, verbose),

        Commands::Init { output, force } => cli::init(output, force),

        Commands::Summary { data, json } => cli::summary(data, json),

        Commands::Inspect { file } => cli::inspect(file),
    }
}
