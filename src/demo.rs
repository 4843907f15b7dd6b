//! Demonstration sweep: solve for 1, 2, ... `max_disks` disks in a row.

use std::io::Write;

use tracing::info;

use crate::core::{DemoConfig, DEMO_SEPARATOR};
use crate::error::HanoiError;
use crate::solver::{solve_with, SolveReport};
use crate::trace::WriterSink;

/// Run every disk count in `config`, writing move lines to `writer` with
/// `DEMO_SEPARATOR` between runs.
///
/// The whole sweep is validated before the first line is written.
pub fn run_demo<W: Write>(
    config: &DemoConfig,
    mut writer: W,
) -> Result<Vec<SolveReport>, HanoiError> {
    config.validate()?;

    let mut reports = Vec::with_capacity(config.max_disks as usize);
    for (i, run) in config.runs().enumerate() {
        if i > 0 {
            writeln!(writer, "{}", DEMO_SEPARATOR)?;
        }
        let mut sink = WriterSink::new(&mut writer);
        let report = solve_with(&run, &mut sink)?;
        info!(disks = report.disks, moves = report.moves, "demo run finished");
        reports.push(report);
    }
    writer.flush()?;

    Ok(reports)
}
