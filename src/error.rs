use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the batch driver. The cleaning filters themselves cannot fail.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("listing input directory {path}")]
    ListInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("creating output directory {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("building worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("writing manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
