use bundle_finaliser::{render_unit, FinaliserConfig, FinaliserError, UnitDescriptor};
use rayon::prelude::*;
use std::time::Instant;

use crate::logging::Logger;

/// Outcome of finalising one unit
#[derive(Debug)]
pub struct UnitReport {
    pub name: String,
    pub output: Result<String, FinaliserError>,
}

/// Render every unit in parallel; reports keep the input order
pub fn finalise_units(
    units: &[UnitDescriptor],
    config: &FinaliserConfig,
    logger: &dyn Logger,
) -> Vec<UnitReport> {
    let start = Instant::now();
    logger.debug(&format!("Finalising {} units in parallel...", units.len()));

    let reports: Vec<UnitReport> = units
        .par_iter()
        .map(|unit| UnitReport {
            name: unit.name.clone(),
            output: render_unit(unit, config),
        })
        .collect();

    let failed = reports.iter().filter(|r| r.output.is_err()).count();
    logger.info(&format!(
        "Finalised {} units ({} failed) in {:?}",
        reports.len(),
        failed,
        start.elapsed()
    ));
    reports
}
