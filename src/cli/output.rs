use crate::SpellingError;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    file: String,
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    word: String,
    suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    total_errors: usize,
    errors: Vec<JsonError>,
}

/// 1-based line and column of a byte offset within `text`. The column is
/// counted in characters, so multi-byte text reports the position a reader
/// sees.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

pub fn print_errors(
    file_path: &Path,
    text: &str,
    errors: &[(SpellingError, Vec<String>)],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_errors(file_path, text, errors, colored_output),
        OutputFormat::Json => print_json_errors(file_path, text, errors),
    }
}

fn print_text_errors(
    file_path: &Path,
    text: &str,
    errors: &[(SpellingError, Vec<String>)],
    colored_output: bool,
) {
    if errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for (error, suggestions) in errors {
        let (line, column) = line_col(text, error.start_location);
        let line_info = format!("{}:{}", line, column);

        if colored_output {
            println!("  {} {}", line_info.blue().bold(), error.word.red().bold());
        } else {
            println!("  {} {}", line_info, error.word);
        }

        if !suggestions.is_empty() {
            let listed = suggestions
                .iter()
                .take(5)
                .map(|s| {
                    if colored_output {
                        s.green().to_string()
                    } else {
                        s.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            println!("    → {}", listed);
        }
    }
}

fn print_json_errors(file_path: &Path, text: &str, errors: &[(SpellingError, Vec<String>)]) {
    let json_errors: Vec<JsonError> = errors
        .iter()
        .map(|(e, suggestions)| {
            let (line, column) = line_col(text, e.start_location);
            JsonError {
                file: file_path.display().to_string(),
                line,
                column,
                start: e.start_location,
                end: e.end_location,
                word: e.word.clone(),
                suggestions: suggestions.clone(),
            }
        })
        .collect();

    let output = JsonOutput {
        total_errors: json_errors.len(),
        errors: json_errors,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_default()
    );
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors,
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}

pub fn print_fix_summary(total_fixed: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_fixed == 0 {
        if colored {
            println!("{}", "No corrections needed!".green().bold());
        } else {
            println!("No corrections needed!");
        }
    } else {
        let fix_word = if total_fixed == 1 {
            "correction"
        } else {
            "corrections"
        };
        if colored {
            println!(
                "{} {} {} applied to {} {}",
                "✓".green().bold(),
                total_fixed.to_string().green().bold(),
                fix_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✓ {} {} applied to {} {}",
                total_fixed,
                fix_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}
