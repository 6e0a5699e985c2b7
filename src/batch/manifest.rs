use std::path::Path;

use serde::Serialize;

use super::model::FileReport;
use crate::error::BatchError;

/// One manifest row. Flat, because CSV has no nesting.
#[derive(Debug, Serialize)]
struct ManifestRow<'a> {
    file_name: &'a str,
    input_bytes: usize,
    output_bytes: usize,
    input_lines: usize,
    output_lines: usize,
    page_numbers_blanked: usize,
    marker_footers: usize,
    bracketed_footers: usize,
    headings: usize,
    blank_lines: usize,
}

impl<'a> From<&'a FileReport> for ManifestRow<'a> {
    fn from(report: &'a FileReport) -> Self {
        ManifestRow {
            file_name: &report.file_name,
            input_bytes: report.input_bytes,
            output_bytes: report.output_bytes,
            input_lines: report.stats.input_lines,
            output_lines: report.stats.output_lines,
            page_numbers_blanked: report.stats.page_numbers_blanked,
            marker_footers: report.stats.marker_footers,
            bracketed_footers: report.stats.bracketed_footers,
            headings: report.stats.headings,
            blank_lines: report.stats.blank_lines,
        }
    }
}

/// Write one CSV row per report, with a header row.
pub fn write_manifest(path: &Path, reports: &[FileReport]) -> Result<(), BatchError> {
    let manifest_err = |source| BatchError::Manifest {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(manifest_err)?;
    for report in reports {
        writer
            .serialize(ManifestRow::from(report))
            .map_err(manifest_err)?;
    }
    writer
        .flush()
        .map_err(|e| manifest_err(csv::Error::from(e)))?;
    Ok(())
}
