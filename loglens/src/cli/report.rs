use anyhow::{Context, Result};
use chrono::NaiveDate;
use loglens_core::conf::{LoglensConfig, SourceConfig};
use loglens_core::error::SummaryError;
use loglens_core::filter::RowFilter;
use loglens_core::logging::OutputMode;
use loglens_core::pipeline::{Pipeline, Selection};
use loglens_core::source::{JsonLinesSource, RowSource};
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::info;

pub struct ReportArgs {
    pub config: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub methods: Vec<String>,
    pub categories: Vec<String>,
    pub mode: OutputMode,
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let cfg = LoglensConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config {}", args.config))?;

    let filter = build_filter(&args);

    for source in &cfg.sources {
        let selection = run_source(source, &filter)
            .with_context(|| format!("source '{}' failed", source.name))?;

        match args.mode {
            OutputMode::Pretty => render_pretty(&source.name, &selection),
            OutputMode::Json => render_json(&source.name, &selection)?,
        }
    }

    Ok(())
}

fn run_source(source: &SourceConfig, filter: &RowFilter) -> Result<Selection> {
    let raw = JsonLinesSource::new(&source.input).read_rows()?;
    info!(source = %source.name, rows = raw.len(), "read raw batch");

    let set = Pipeline::new(source.taxonomy.clone()).build(&raw)?;

    Ok(set.select(filter))
}

fn build_filter(args: &ReportArgs) -> RowFilter {
    // No flags on the command line means unconstrained, never "empty set".
    RowFilter {
        start_date: args.start_date,
        end_date: args.end_date,
        methods: to_selection(&args.methods),
        categories: to_selection(&args.categories),
    }
}

fn to_selection(values: &[String]) -> Option<std::collections::BTreeSet<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().cloned().collect())
    }
}

fn render_pretty(name: &str, selection: &Selection) {
    println!("{} {}", "source".bold(), name.bold());

    match selection.summary() {
        Ok(totals) => {
            let fail_pct = format!("{}%", totals.fail_pct);
            println!(
                "  requests {}  success {}  fail {}  fail% {}",
                totals.total_requests,
                totals.total_success.green(),
                totals.total_fail.red(),
                if totals.total_fail > 0 {
                    fail_pct.red().to_string()
                } else {
                    fail_pct.green().to_string()
                }
            );
        }
        // Zero volume in the selection: state it instead of inventing a 0%.
        Err(SummaryError::DivisionUndefined) => {
            println!(
                "  {}",
                "no requests in selection; fail% undefined".yellow()
            );
        }
    }

    println!("  {:<12} {:<7} {:<10} {:<16} {:>8} {:>6} {:>6} {:>6}",
        "date", "method", "category", "name", "success", "fail", "total", "fail%");

    for p in selection.profiles() {
        println!(
            "  {:<12} {:<7} {:<10} {:<16} {:>8} {:>6} {:>6} {:>6}",
            p.date,
            p.method,
            p.category.as_deref().unwrap_or("-"),
            p.name_extract.as_deref().unwrap_or("-"),
            p.success,
            p.failures,
            p.total,
            fmt_fail_pct(p.fail_pct),
        );
    }

    println!("  daily:");
    for point in selection.daily_series() {
        let pct = if point.fail_pct.is_nan() {
            "n/a".to_string()
        } else {
            format!("{:.1}%", point.fail_pct)
        };

        println!(
            "    {}  success {:>7}  fail {:>7}  total {:>7}  fail% {:>6}",
            point.date, point.success, point.fail, point.total, pct
        );
    }

    println!();
}

fn fmt_fail_pct(pct: i64) -> String {
    // -1 is the "no data" sentinel, not a real percentage.
    if pct < 0 {
        "n/a".to_string()
    } else {
        format!("{pct}%")
    }
}

fn render_json(name: &str, selection: &Selection) -> Result<()> {
    for p in selection.profiles() {
        let mut line = serde_json::to_value(p)?;
        line["kind"] = json!("profile");
        line["source"] = json!(name);
        println!("{line}");
    }

    for point in selection.daily_series() {
        let mut line = serde_json::to_value(&point)?;
        line["kind"] = json!("daily");
        line["source"] = json!(name);
        println!("{line}");
    }

    let summary = match selection.summary() {
        Ok(totals) => {
            let mut line = serde_json::to_value(&totals)?;
            line["kind"] = json!("summary");
            line["source"] = json!(name);
            line
        }
        Err(e) => json!({
            "kind": "summary",
            "source": name,
            "error": e.to_string(),
        }),
    };
    println!("{summary}");

    Ok(())
}
