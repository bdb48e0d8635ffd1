use crate::compat::matrix::{self, MatrixRow};
use crate::config::OutputFormat;
use crate::core::{RuntimeApiName, RuntimeVersion};
use crate::error::Result;
use crate::ui as output;
use crate::utils::machine_output;
use colored::Colorize;

pub fn run(api: Option<&str>, format: OutputFormat) -> Result<()> {
    let rows: Vec<MatrixRow> = match api {
        Some(name) => vec![matrix::row(name.parse::<RuntimeApiName>()?)],
        None => matrix::rows(),
    };

    if format.is_machine() {
        return machine_output::emit_v1("matrix", rows, Vec::new(), Vec::new(), format);
    }

    let name_width = rows
        .iter()
        .map(|r| r.api.as_str().len())
        .max()
        .unwrap_or(0)
        .max(3);

    let mut header = format!("{:<width$}", "API", width = name_width);
    for version in RuntimeVersion::ALL {
        header.push_str(&format!("  {:>8}", version.as_str()));
    }
    println!("{}", header.bold());
    output::separator();

    let mut family = None;
    for row in &rows {
        if family != Some(row.family) {
            if family.is_some() {
                println!();
            }
            println!("{}", row.family.to_string().cyan().bold());
            family = Some(row.family);
        }

        let mut line = format!("{:<width$}", row.api.as_str(), width = name_width);
        for version in RuntimeVersion::ALL {
            let cell = if row.versions.get(&version).copied().unwrap_or(false) {
                format!("  {:>8}", "✓").green().to_string()
            } else {
                format!("  {:>8}", "·").bright_black().to_string()
            };
            line.push_str(&cell);
        }
        println!("{}", line);
    }

    Ok(())
}
