//! Source ingestion using the plan-execute pattern.
//!
//! Ingestion turns raw command-line arguments into source unit names,
//! content and the set of directories the compiler may read from.
//!
//! # Architecture
//!
//! Ingestion is split into two phases:
//! 1. **Planning**: Classifies arguments (stdin, remapping, file), normalizes
//!    paths and applies every check that needs no filesystem access
//! 2. **Execution**: Folds over the plan, checking and reading each file,
//!    registering sandbox directories and collecting warnings
//!
//! The first fatal error stops the fold. Warnings emitted before it are
//! kept so they can be shown ahead of the error.
//!
//! # Examples
//!
//! ```no_run
//! use srcgate::ingest::{FileIngestor, IngestOptions, IngestPlanner};
//! use srcgate::path::WorkingDirectory;
//! use std::io;
//!
//! let cwd = WorkingDirectory::capture().unwrap();
//! let options = IngestOptions::new(vec!["token.sol".to_string(), "lib=vendor/lib/".to_string()])
//!     .with_ignore_missing(true);
//!
//! // Generate plan
//! let plan = IngestPlanner::new(&options, &cwd).build_plan().unwrap();
//!
//! // Execute plan
//! let mut ingestor = FileIngestor::new(&cwd, io::stdin().lock());
//! let result = ingestor.execute(&plan);
//! assert!(result.success);
//! ```

pub mod executor;
pub mod plan;
pub mod result;

pub use executor::FileIngestor;
pub use plan::{IngestAction, IngestOptions, IngestPlan, IngestPlanner, InputMode, STDIN_ARGUMENT};
pub use result::{IngestWarning, IngestionResult, InputOutcome, InputState};
