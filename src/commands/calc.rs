use crate::OutputFormat;
use crate::calculator::{self, Calculation, Operation};
use crate::config::Config;
use crate::duration::{self, SignedDuration};
use anyhow::{Context, Result};
use serde_json::json;

pub fn calc(
    config: &Config,
    first: &str,
    second: &str,
    op: Operation,
    format: OutputFormat,
) -> Result<()> {
    let calculation = calculator::evaluate(first, second, op)?;
    println!("{}", render(&calculation, config, format)?);
    Ok(())
}

pub fn render(calculation: &Calculation, config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(calculation).context("Failed to serialize result")
        }
        OutputFormat::Text if config.output.show_expression => Ok(calculation.expression()),
        OutputFormat::Text => Ok(calculation.result.clone()),
    }
}

/// Print the total seconds of a single duration string.
pub fn seconds(input: &str, format: OutputFormat) -> Result<()> {
    let parsed = duration::parse(input)?;
    match format {
        OutputFormat::Json => {
            let body = json!({ "input": input, "seconds": parsed.as_secs() });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => println!("{}", parsed.as_secs()),
    }
    Ok(())
}

/// Print a signed second count as a duration string.
pub fn format_secs(secs: i64, format: OutputFormat) -> Result<()> {
    let rendered = SignedDuration::from_secs(secs).to_string();
    match format {
        OutputFormat::Json => {
            let body = json!({ "seconds": secs, "duration": rendered });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => println!("{}", rendered),
    }
    Ok(())
}
