//! Extract command - run the extraction pipeline over a local file.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use shieldpay_core::{ExtractionPipeline, ExtractionReport, ShieldpayError};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output, same shape as the HTTP response
    Json,
    /// One `field,value` row per candidate
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Extracting text...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let pipeline = ExtractionPipeline::pdf(config.pdf);
    let input = args.input.clone();
    let result = tokio::task::spawn_blocking(move || pipeline.process_path(&input)).await?;
    pb.finish_and_clear();

    let report = result.map_err(|e| match e {
        ShieldpayError::Pdf(e) => {
            anyhow::anyhow!("Failed to parse PDF {}: {}", args.input.display(), e)
        }
        other => other.into(),
    })?;

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    info!(
        "Found {} candidates in {}ms",
        report.fields.len(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn format_report(report: &ExtractionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ExtractionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value"])?;
    for (field, value) in report.fields.iter() {
        wtr.write_record([field, value])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ExtractionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Text: {} chars\n", report.text.chars().count()));

    let sections = [
        ("Emails", &report.fields.emails),
        ("Amounts", &report.fields.amounts),
        ("IBAN-like", &report.fields.ibans),
    ];
    for (title, values) in sections {
        output.push('\n');
        output.push_str(&format!("{} ({}):\n", title, values.len()));
        for value in values {
            output.push_str(&format!("  {}\n", value));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shieldpay_core::CandidateFieldSet;

    fn sample_report() -> ExtractionReport {
        ExtractionReport {
            text: "Pay 1,00 to a@b.com".to_string(),
            fields: CandidateFieldSet {
                emails: vec!["a@b.com".to_string()],
                amounts: vec!["1.00".to_string()],
                ibans: vec![],
            },
        }
    }

    #[test]
    fn test_format_csv() {
        let csv = format_csv(&sample_report()).unwrap();
        assert_eq!(csv, "field,value\nemail,a@b.com\namount,1.00\n");
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&sample_report());
        assert_eq!(
            text,
            "Text: 19 chars\n\nEmails (1):\n  a@b.com\n\nAmounts (1):\n  1.00\n\nIBAN-like (0):\n"
        );
    }

    #[test]
    fn test_format_json_matches_http_body() {
        let json = format_report(&sample_report(), OutputFormat::Json).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Pay 1,00 to a@b.com","emails":["a@b.com"],"amounts":["1.00"],"ibans":[]}"#
        );
    }
}
