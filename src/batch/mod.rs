/// Batch layer: directory in, directory out.
///
/// Architecture:
/// ```text
///   input_dir/*.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  list files, decode text
///   └──────────┘
///        │  (rayon, one file per task)
///        ▼
///   ┌──────────┐
///   │  clean    │  page numbers → footers → headers
///   └──────────┘
///        │
///        ▼
///   output_dir/*.txt  (+ optional manifest.csv)
/// ```

pub mod loader;
pub mod manifest;
pub mod model;

use std::fs;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

pub use model::{BatchOptions, BatchSummary, FileReport};

use crate::clean::clean_with_stats;
use crate::error::BatchError;

/// Clean every matching file in `opts.input_dir` into `opts.output_dir`.
///
/// Files are processed in parallel with no ordering between them. The first
/// I/O error aborts the run and is returned.
pub fn run(opts: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let started = Instant::now();

    fs::create_dir_all(&opts.output_dir).map_err(|source| BatchError::CreateOutput {
        path: opts.output_dir.clone(),
        source,
    })?;

    let inputs = loader::list_inputs(&opts.input_dir, &opts.extension)?;
    log::info!(
        "Cleaning {} file(s) from {} into {}",
        inputs.len(),
        opts.input_dir.display(),
        opts.output_dir.display()
    );

    let work = || -> Result<Vec<FileReport>, BatchError> {
        inputs
            .par_iter()
            .map(|path| clean_file(path, &opts.output_dir))
            .collect()
    };
    let mut files = match opts.jobs {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n.max(1))
            .build()?
            .install(work)?,
        None => work()?,
    };
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    if let Some(path) = &opts.manifest {
        manifest::write_manifest(path, &files)?;
        log::info!("Wrote manifest to {}", path.display());
    }

    Ok(BatchSummary {
        files,
        elapsed: started.elapsed(),
    })
}

/// Clean one file into `output_dir` under the same name.
pub fn clean_file(input: &Path, output_dir: &Path) -> Result<FileReport, BatchError> {
    let text = loader::read_text(input)?;
    let (cleaned, stats) = clean_with_stats(&text);

    let file_name = input.file_name().unwrap_or(input.as_os_str());
    let output = output_dir.join(file_name);
    fs::write(&output, &cleaned).map_err(|source| BatchError::Write {
        path: output.clone(),
        source,
    })?;

    log::debug!(
        "{}: {} -> {} bytes ({stats:?})",
        input.display(),
        text.len(),
        cleaned.len()
    );

    Ok(FileReport {
        file_name: file_name.to_string_lossy().into_owned(),
        input_bytes: text.len(),
        output_bytes: cleaned.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_directory_and_writes_manifest() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let out_dir = output.path().join("cleaned");
        fs::write(
            input.path().join("acme.txt"),
            "OVERVIEW\nSales rose in every region.\n12\n",
        )
        .unwrap();
        fs::write(input.path().join("skip.csv"), "12\n").unwrap();

        let mut opts = BatchOptions::new(input.path(), &out_dir);
        opts.jobs = Some(2);
        opts.manifest = Some(output.path().join("manifest.csv"));

        let summary = run(&opts).unwrap();

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.files[0].file_name, "acme.txt");
        assert_eq!(summary.lines_removed(), 2);
        assert_eq!(
            fs::read_to_string(out_dir.join("acme.txt")).unwrap(),
            "sales rose in every region."
        );
        assert!(!out_dir.join("skip.csv").exists());
        assert!(output.path().join("manifest.csv").exists());
    }

    #[test]
    fn page_number_counts_as_one_removed_line() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(
            input.path().join("body.txt"),
            "Body one here.\n7\nBody two here.\n",
        )
        .unwrap();

        let summary = run(&BatchOptions::new(input.path(), output.path())).unwrap();

        assert_eq!(summary.files[0].stats.output_lines, 2);
        assert_eq!(summary.lines_removed(), 1);
    }

    #[test]
    fn write_failure_is_reported() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("acme.txt"), "Sales rose.\n").unwrap();
        // A directory in the way of the output file makes the write fail.
        fs::create_dir(output.path().join("acme.txt")).unwrap();

        let err = run(&BatchOptions::new(input.path(), output.path())).unwrap_err();
        assert!(matches!(err, BatchError::Write { .. }));
    }

    #[test]
    fn empty_input_directory_is_fine() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let summary = run(&BatchOptions::new(input.path(), output.path())).unwrap();
        assert!(summary.is_empty());
    }
}
