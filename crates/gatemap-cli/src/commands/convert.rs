//! Convert command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use gatemap_core::{Report, convert, read_gatemap, read_platform, write_gatemap};

use super::common::print_report;

/// Read the platform description, write the gate map, report.
pub fn execute(input: &Path, output: &Path, verify: bool) -> Result<()> {
    info!("Converting {} -> {}", input.display(), output.display());

    let platform = read_platform(input)?;
    info!(
        "Loaded {} instruction(s) and {} decomposition rule(s)",
        platform.instructions.len(),
        platform.gate_decomposition.len()
    );

    let conversion = convert(&platform);
    write_gatemap(output, &conversion.document)?;
    print_report(&conversion.report);

    if verify {
        verify_output(output, &conversion.report)?;
    }

    Ok(())
}

/// Load the written file back as the simulator would.
fn verify_output(output: &Path, report: &Report) -> Result<()> {
    if !report.is_clean() {
        println!(
            "{} Skipping verification: {} entr{} still need editing",
            style("!").yellow().bold(),
            report.unmapped.len(),
            if report.unmapped.len() == 1 { "y" } else { "ies" }
        );
        return Ok(());
    }

    let map = read_gatemap(output)
        .with_context(|| format!("Verification of {} failed", output.display()))?;
    println!(
        "{} Verified {} entries ({} fixed, {} parameterized)",
        style("✓").green().bold(),
        map.len(),
        map.fixed().len(),
        map.parameterized().len()
    );
    Ok(())
}
