//! Command execution logic for tabalign CLI

use crate::cli::{Commands, OutputFormat};
use crate::engine::align_for_comparison;
use crate::error::{Result, TabalignError};
use crate::output::PrettyPrinter;
use crate::record::Dataset;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Execute a CLI command
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Align {
            control,
            test,
            keys,
            output,
            format,
            quiet,
        } => execute_align(&control, &test, &keys, output.as_deref(), &format, quiet),
        Commands::Fields { input } => execute_fields(&input),
    }
}

fn execute_align(
    control: &str,
    test: &str,
    keys: &[String],
    output: Option<&Path>,
    format: &str,
    quiet: bool,
) -> Result<()> {
    let format = OutputFormat::parse(format).map_err(TabalignError::invalid_input)?;

    if control == "-" && test == "-" {
        return Err(TabalignError::invalid_input(
            "only one dataset can be read from stdin",
        ));
    }
    let control_raw = read_input(control)?;
    let test_raw = read_input(test)?;

    let comparison = align_for_comparison(&control_raw, &test_raw, keys)?;

    match format {
        OutputFormat::Pretty => {
            match output {
                Some(path) => fs::write(path, &comparison.text)?,
                None => println!("{}", comparison.text),
            }
            if !quiet {
                PrettyPrinter::print_align_summary(&comparison, output);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&comparison)?;
            match output {
                Some(path) => fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

fn execute_fields(input: &str) -> Result<()> {
    let raw = read_input(input)?;
    let dataset = Dataset::parse(&raw)?;
    PrettyPrinter::print_field_list(&dataset);
    Ok(())
}

/// Read one raw input blob from a file path, or stdin when the path is "-".
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }

    let path = PathBuf::from(path);
    if !path.is_file() {
        return Err(TabalignError::invalid_input(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(&path)?)
}
