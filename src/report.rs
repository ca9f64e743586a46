//! Console listing and bar chart of the most frequent terms.

use std::io::Write;
use std::path::Path;

use log::debug;
use plotters::prelude::*;

use crate::error::TermError;
use crate::freq::FrequencyTable;

/// Terms listed on stdout.
pub const PRINT_TOP: usize = 20;
/// Bars in the chart.
pub const PLOT_TOP: usize = 30;
/// Chart file name, written to the working directory.
pub const CHART_FILE: &str = "term_distribution.png";

const CHART_SIZE: (u32, u32) = (800, 600);

/// `"<token>: <count>"` for the `n` most frequent terms, one per line.
pub fn format_top(table: &FrequencyTable, n: usize) -> String {
    let mut out = String::new();
    for (tok, count) in table.most_common(n) {
        out.push_str(&format!("{tok}: {count}\n"));
    }
    out
}

pub fn write_top<W: Write>(table: &FrequencyTable, n: usize, mut out: W) -> Result<(), TermError> {
    out.write_all(format_top(table, n).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Draw the counts of the `n` most frequent terms as bars, ranked from 1,
/// and save the chart as PNG at `path` (replacing any existing file).
/// An empty table still produces a chart, just without bars.
pub fn plot_top(table: &FrequencyTable, n: usize, path: &Path) -> Result<(), TermError> {
    let counts: Vec<u64> = table.most_common(n).into_iter().map(|(_, c)| c).collect();
    let ranks = counts.len().max(1) as u32;
    let y_max = counts.first().copied().unwrap_or(0).max(1);
    let y_top = y_max + (y_max / 10).max(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Term Frequencies", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d((1u32..ranks + 1).into_segmented(), 0u64..y_top)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(WHITE.mix(0.3))
        .y_desc("Frequency")
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(4)
                .data(counts.iter().enumerate().map(|(i, &c)| (i as u32 + 1, c))),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    debug!("Wrote chart with {} bars to {}", counts.len(), path.display());
    Ok(())
}

fn plot_err<E: std::fmt::Display>(e: E) -> TermError {
    TermError::Plot(e.to_string())
}
