#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # srcgate
//!
//! Source-file ingestion and sandbox resolution for a compiler front end.
//!
//! Given the raw input arguments of a compiler invocation, this library
//! decides what each source file is called inside the compiler, reads its
//! content, and works out which directories later import resolution may
//! read from.
//!
//! ## Core Types
//!
//! - [`NormalizedPath`] and [`SourceUnitName`]: lexical paths and the names
//!   sources are stored under
//! - [`BasePathResolver`]: strips the base path to produce names
//! - [`RemappingTable`]: `context:prefix=target` import remappings
//! - [`SandboxDirectorySet`]: directories the compiler may read from
//! - [`FileIngestor`] and [`IngestionResult`]: the ingestion pipeline
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use srcgate::{FileIngestor, IngestOptions, WorkingDirectory};
//! use std::io::Cursor;
//!
//! let cwd = WorkingDirectory::capture().unwrap();
//! let options = IngestOptions::new(vec!["-".to_string()]);
//!
//! let mut ingestor = FileIngestor::new(&cwd, Cursor::new(b"contract C {}".to_vec()));
//! let result = ingestor.ingest(&options);
//!
//! assert!(result.success);
//! assert_eq!(result.source("<stdin>"), Some(&b"contract C {}"[..]));
//! assert!(result.allowed_directories.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod path;
pub mod remapping;
pub mod sandbox;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use ingest::{
    FileIngestor, IngestOptions, IngestPlan, IngestPlanner, IngestionResult, InputMode,
    InputOutcome, InputState,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::OutputFormatter;
pub use path::{BasePathResolver, NormalizedPath, SourceUnitName, WorkingDirectory};
pub use remapping::{Remapping, RemappingTable};
pub use sandbox::SandboxDirectorySet;
