//! Cleans plain-text extractions of financial annual reports.
//!
//! [`clean`] strips page numbers, running footers and boilerplate section
//! headings, then lowercases what is left. [`batch`] runs it over a directory
//! of `.txt` files.

pub mod batch;
pub mod clean;
pub mod error;

pub use clean::{clean, clean_with_stats, CleanStats};
pub use error::BatchError;
