use crate::catalog;
use crate::error::{PortfolioError, PortfolioResult};
use crate::excel::{ExcelExporter, WorkbookInspector};
use crate::layout::{self, FormulaDialect, LayoutOptions, QuickWinsMode, WorkbookPlan};
use crate::parser;
use crate::script::AppsScriptWriter;
use crate::summary::PortfolioSummary;
use crate::types::Portfolio;
use crate::writer;
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// Human label for where the data came from
fn source_label(data: Option<&Path>) -> String {
    match data {
        Some(path) => path.display().to_string(),
        None => "built-in portfolio".to_string(),
    }
}

fn load_and_lay_out(
    data: Option<&Path>,
    options: LayoutOptions,
    verbose: bool,
) -> PortfolioResult<(Portfolio, WorkbookPlan)> {
    if verbose {
        println!("{}", "📖 Loading portfolio...".cyan());
    }
    let portfolio = parser::load_portfolio(data)?;
    if verbose {
        println!(
            "   Found {} categories, {} agents, {} quick wins\n",
            portfolio.categories.len(),
            portfolio.agent_count(),
            portfolio.quick_wins().count()
        );
        println!("{}", "📐 Laying out sheets...".cyan());
    }

    let plan = layout::build_workbook(&portfolio, &options)?;
    if verbose {
        for sheet in &plan.sheets {
            println!(
                "   📄 {}: {} cells, {} merges",
                sheet.name.bright_blue(),
                sheet.cells.len(),
                sheet.merges.len()
            );
        }
        println!();
    }
    Ok((portfolio, plan))
}

fn print_mode(quick_wins: QuickWinsMode) {
    let mode = match quick_wins {
        QuickWinsMode::Static => "static rows",
        QuickWinsMode::Live => "live FILTER formula",
    };
    println!("   Quick Wins: {}\n", mode);
}

/// Execute the build command - portfolio → .xlsx
pub fn build(
    data: Option<PathBuf>,
    output: PathBuf,
    quick_wins: QuickWinsMode,
    verbose: bool,
) -> PortfolioResult<()> {
    println!("{}", "🤖 Agent Portfolio - Excel Build".bold().green());
    println!("   Input:  {}", source_label(data.as_deref()));
    println!("   Output: {}", output.display());
    print_mode(quick_wins);

    let options = LayoutOptions {
        quick_wins,
        dialect: FormulaDialect::Excel,
    };
    let (portfolio, plan) = load_and_lay_out(data.as_deref(), options, verbose)?;

    if verbose {
        println!("{}", "📊 Writing workbook...".cyan());
    }
    ExcelExporter::new(plan).export(&output)?;

    println!("{}", "✅ Build Complete!".bold().green());
    println!("   Excel file: {}", output.display());
    println!(
        "   {} agents across {} categories, {} quick wins\n",
        portfolio.agent_count(),
        portfolio.categories.len(),
        portfolio.quick_wins().count()
    );
    Ok(())
}

/// Execute the script command - portfolio → Google Apps Script
pub fn script(
    data: Option<PathBuf>,
    output: PathBuf,
    quick_wins: QuickWinsMode,
    verbose: bool,
) -> PortfolioResult<()> {
    println!("{}", "🤖 Agent Portfolio - Apps Script".bold().green());
    println!("   Input:  {}", source_label(data.as_deref()));
    println!("   Output: {}", output.display());
    print_mode(quick_wins);

    let options = LayoutOptions {
        quick_wins,
        dialect: FormulaDialect::Sheets,
    };
    let (_, plan) = load_and_lay_out(data.as_deref(), options, verbose)?;

    if verbose {
        println!("{}", "📝 Writing script...".cyan());
    }
    AppsScriptWriter::new(plan).write(&output)?;

    println!("{}", "✅ Script Complete!".bold().green());
    println!("   Script file: {}\n", output.display());
    println!("{}", "Next steps:".bold());
    println!("   1. Open a Google Sheet → Extensions → Apps Script");
    println!("   2. Paste the script and run {}()", crate::script::FUNCTION_NAME);
    println!("   3. Authorize when prompted\n");
    Ok(())
}

/// Execute the init command - write the built-in data as an editable YAML file
pub fn init(output: PathBuf, force: bool) -> PortfolioResult<()> {
    println!("{}", "🤖 Agent Portfolio - Init".bold().green());
    println!("   Output: {}\n", output.display());

    if output.exists() && !force {
        return Err(PortfolioError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", output.display()),
        )));
    }

    let portfolio = catalog::builtin()?;
    writer::write_portfolio(&output, &portfolio)?;

    println!("{}", "✅ Portfolio data written!".bold().green());
    println!(
        "   {} agents in {} categories",
        portfolio.agent_count(),
        portfolio.categories.len()
    );
    println!(
        "   Edit it, then run: portfolio build --data {}\n",
        output.display()
    );
    Ok(())
}

/// Execute the summary command
pub fn summary(data: Option<PathBuf>, json: bool) -> PortfolioResult<()> {
    let portfolio = parser::load_portfolio(data.as_deref())?;
    let summary = PortfolioSummary::from_portfolio(&portfolio);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "🤖 Agent Portfolio - Summary".bold().green());
    println!("   Input: {}\n", source_label(data.as_deref()));
    println!("{}", summary.title.bold());
    println!(
        "   Total agents: {}   Quick wins: {}",
        summary.total.to_string().bold(),
        summary.quick_wins.to_string().bold()
    );
    println!(
        "   Time saved: {} (quick wins: {})\n",
        summary.total_hours, summary.quick_win_hours
    );

    println!("{}", "📂 By category:".bold().cyan());
    for category in &summary.by_category {
        println!(
            "   {:<45} {:>3} agents  {:>3} quick wins",
            category.label, category.agents, category.quick_wins
        );
    }
    println!();

    for (title, tallies) in [
        ("🎯 By impact:", &summary.by_impact),
        ("🔧 By complexity:", &summary.by_complexity),
        ("📌 By status:", &summary.by_status),
    ] {
        println!("{}", title.bold().cyan());
        for (key, count) in tallies {
            println!("   {:<15} {:>3}", key, count);
        }
        println!();
    }
    Ok(())
}

/// Execute the inspect command - read a generated workbook back
pub fn inspect(file: PathBuf) -> PortfolioResult<()> {
    println!("{}", "🔍 Agent Portfolio - Inspect".bold().green());
    println!("   File: {}\n", file.display());

    let report = WorkbookInspector::new(&file).inspect()?;

    println!("{}", "📄 Sheets:".bold().cyan());
    for sheet in &report.sheets {
        println!(
            "   {:<20} {:>4} rows × {:>2} cols, {} formulas",
            sheet.name.bright_blue(),
            sheet.rows,
            sheet.cols,
            sheet.formulas
        );
    }
    println!();
    println!("   Agents:     {}", report.agents.to_string().bold());
    println!("   Quick wins: {}\n", report.quick_wins.to_string().bold());
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
