use std::io::Read;
use std::process;

use clap::{Parser, ValueEnum};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use edit_diagnostic::{
    evaluate, truncate_words, DiagnosticError, DiagnosticResult, FocusSelection, Result,
    WORD_LIMIT,
};
use tracing::{error, info, Level};

#[derive(Parser)]
#[command(
    name = "edit-diagnostic",
    about = "Score a passage of academic prose and project its post-edit scores",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Categories to check; repeat the flag for several (default: all)
    #[arg(long, value_enum)]
    focus: Vec<Category>,

    /// Score the whole text instead of the first 200 words
    #[arg(long, default_value_t = false)]
    no_truncate: bool,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Log pipeline details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Category {
    Clarity,
    Flow,
    Language,
    Grammar,
    Copyediting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn focus_selection(categories: &[Category]) -> FocusSelection {
    if categories.is_empty() {
        return FocusSelection::all();
    }
    let mut focus = FocusSelection::none();
    for category in categories {
        match category {
            Category::Clarity => focus.clarity = true,
            Category::Flow => focus.flow = true,
            Category::Language => focus.language = true,
            Category::Grammar => focus.grammar = true,
            Category::Copyediting => focus.copyediting = true,
        }
    }
    focus
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| DiagnosticError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(input)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| DiagnosticError::Io {
            path: path.to_string(),
            source,
        }),
    }
}

fn render_text(result: &DiagnosticResult) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Category", "Current", "Potential"]);

    let (c, p) = (&result.current, &result.potential);
    let rows = [
        ("Overall", c.overall, p.overall),
        ("Clarity", c.clarity, p.clarity),
        ("Flow", c.flow, p.flow),
        ("Language", c.language, p.language),
        ("Grammar", c.grammar, p.grammar),
        ("Copyediting", c.copyediting, p.copyediting),
    ];
    for (name, current, potential) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(current).set_alignment(CellAlignment::Right),
            Cell::new(potential).set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = table.to_string();
    out.push_str("\n\nIssues:\n");
    for issue in &result.issues {
        out.push_str(&format!(
            "  [{}] {}\n      why:  {}\n      next: {}\n",
            issue.priority, issue.title, issue.why, issue.next
        ));
    }
    out
}

fn run(cli: &Cli, path: Option<&str>) -> Result<String> {
    let source = path.unwrap_or("<stdin>");
    let raw = read_input(path)?;
    if raw.trim().is_empty() {
        return Err(DiagnosticError::EmptyInput(source.to_string()));
    }

    let text = if cli.no_truncate {
        raw
    } else {
        truncate_words(&raw, WORD_LIMIT)
    };
    info!(source = %source, words = text.split_whitespace().count(), "evaluating");

    let result = evaluate(&text, &focus_selection(&cli.focus));
    match cli.format {
        Format::Json => Ok(serde_json::to_string_pretty(&result)?),
        Format::Text => Ok(render_text(&result)),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<Option<&str>> = if cli.files.is_empty() {
        vec![None]
    } else {
        cli.files.iter().map(|f| Some(f.as_str())).collect()
    };

    for path in paths {
        match run(&cli, path) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        }
    }
}
