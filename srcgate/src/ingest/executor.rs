//! Plan execution.
//!
//! The executor folds over a plan's actions in order. Missing inputs may be
//! downgraded to warnings; every other problem ends the fold at once, and no
//! later input is touched.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::{NameOrigin, NormalizedPath, SourceUnitName, WorkingDirectory};
use crate::remapping::{Remapping, RemappingTable};
use crate::sandbox::SandboxDirectorySet;

use super::plan::{IngestAction, IngestOptions, IngestPlan, IngestPlanner, STDIN_ARGUMENT};
use super::result::{IngestWarning, IngestionResult, InputOutcome, InputState};

/// State threaded through the fold.
#[derive(Debug, Default)]
struct Progress {
    sources: BTreeMap<SourceUnitName, Vec<u8>>,
    sandbox: SandboxDirectorySet,
    warnings: Vec<String>,
    remappings: RemappingTable,
    outcomes: Vec<InputOutcome>,
}

impl Progress {
    fn record(&mut self, input: &str, state: InputState, name: Option<SourceUnitName>) {
        log::debug!("{input}: {state:?}");
        self.outcomes.push(InputOutcome {
            input: input.to_string(),
            state,
            source_unit_name: name,
        });
    }

    fn reached_any(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o.state, InputState::Stdin | InputState::Resolved))
    }
}

/// A fatal error together with everything emitted before it.
struct Interrupted {
    progress: Progress,
    error: Error,
}

/// Reads the inputs described by a plan.
///
/// Standard input is taken from `stdin`, read lazily and at most once.
///
/// # Examples
///
/// ```no_run
/// use srcgate::ingest::{FileIngestor, IngestOptions};
/// use srcgate::path::WorkingDirectory;
/// use std::io;
///
/// let cwd = WorkingDirectory::capture().unwrap();
/// let options = IngestOptions::new(vec!["contract.sol".to_string()]);
///
/// let mut ingestor = FileIngestor::new(&cwd, io::stdin().lock());
/// let result = ingestor.ingest(&options);
/// for line in result.diagnostics() {
///     eprintln!("{line}");
/// }
/// ```
pub struct FileIngestor<'a, R> {
    cwd: &'a WorkingDirectory,
    stdin: R,
    stdin_content: Option<Vec<u8>>,
}

impl<'a, R: Read> FileIngestor<'a, R> {
    /// Creates an ingestor resolving paths against `cwd`.
    #[must_use]
    pub const fn new(cwd: &'a WorkingDirectory, stdin: R) -> Self {
        Self {
            cwd,
            stdin,
            stdin_content: None,
        }
    }

    /// Plan and execute in one step.
    ///
    /// Planning errors produce a failed result without any filesystem
    /// access.
    pub fn ingest(&mut self, options: &IngestOptions) -> IngestionResult {
        let planner = IngestPlanner::new(options, self.cwd);
        match planner.build_plan() {
            Ok(plan) => self.execute(&plan),
            Err(error) => {
                log::debug!("Planning failed: {error}");
                IngestionResult::failure(
                    &error,
                    Vec::new(),
                    Vec::new(),
                    planner.resolver().base_path_str().to_string(),
                )
            }
        }
    }

    /// Execute a plan.
    pub fn execute(&mut self, plan: &IngestPlan) -> IngestionResult {
        log::debug!("{}", plan.description);
        let base_path = plan.base.base_path_str().to_string();

        let folded = plan
            .actions
            .iter()
            .try_fold(Progress::default(), |mut progress, action| {
                match self.apply(plan, &mut progress, action) {
                    Ok(()) => Ok(progress),
                    Err(error) => Err(Interrupted { progress, error }),
                }
            })
            .and_then(|progress| {
                let had_inputs = plan.actions.iter().any(IngestAction::is_input);
                if had_inputs && !progress.reached_any() {
                    Err(Interrupted {
                        progress,
                        error: Error::AllInputsSkipped,
                    })
                } else {
                    Ok(progress)
                }
            });

        match folded {
            Ok(progress) => IngestionResult {
                success: true,
                sources: progress.sources,
                allowed_directories: progress.sandbox,
                warnings: progress.warnings,
                fatal_error: None,
                base_path,
                remappings: progress.remappings,
                outcomes: progress.outcomes,
            },
            Err(Interrupted { progress, error }) => {
                log::debug!("Ingestion failed: {error}");
                IngestionResult::failure(&error, progress.warnings, progress.outcomes, base_path)
            }
        }
    }

    fn apply(&mut self, plan: &IngestPlan, progress: &mut Progress, action: &IngestAction) -> Result<()> {
        match action {
            IngestAction::ReadStdin { .. } => {
                let content = self.read_stdin()?;
                progress.sources.insert(SourceUnitName::stdin(), content);
                progress.record(STDIN_ARGUMENT, InputState::Stdin, Some(SourceUnitName::stdin()));
                Ok(())
            }
            IngestAction::ReadFile { raw, normalized } => {
                self.read_file(plan, progress, raw, normalized)
            }
            IngestAction::AddRemapping(remapping) => self.add_remapping(progress, remapping),
        }
    }

    fn read_stdin(&mut self) -> Result<Vec<u8>> {
        if let Some(content) = &self.stdin_content {
            return Ok(content.clone());
        }
        let mut content = Vec::new();
        self.stdin
            .read_to_end(&mut content)
            .map_err(|source| Error::UnreadableInput {
                path: STDIN_ARGUMENT.to_string(),
                source,
            })?;
        self.stdin_content = Some(content.clone());
        Ok(content)
    }

    fn read_file(
        &self,
        plan: &IngestPlan,
        progress: &mut Progress,
        raw: &str,
        normalized: &NormalizedPath,
    ) -> Result<()> {
        let host = self.cwd.host_join(raw);

        let metadata = match fs::metadata(&host) {
            Ok(metadata) => metadata,
            // a regular file used as a directory component also means absent
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                if plan.ignore_missing {
                    let warning = IngestWarning::Skipped {
                        path: raw.to_string(),
                    };
                    progress.warnings.push(warning.to_string());
                    progress.record(raw, InputState::Skipped, None);
                    return Ok(());
                }
                progress.record(raw, InputState::FatalInvalid, None);
                return Err(Error::InputNotFound {
                    path: raw.to_string(),
                });
            }
            Err(source) => {
                progress.record(raw, InputState::FatalInvalid, None);
                return Err(Error::UnreadableInput {
                    path: raw.to_string(),
                    source,
                });
            }
        };

        if !metadata.is_file() {
            progress.record(raw, InputState::FatalInvalid, None);
            return Err(Error::NotAValidFile {
                path: raw.to_string(),
            });
        }

        // registered in every mode, Standard JSON included
        let resolution = plan.base.resolve(normalized);
        match resolution.origin {
            NameOrigin::BasePath => progress
                .sandbox
                .register_directory(&resolution.directory.to_path_buf())?,
            NameOrigin::WorkingDirectory | NameOrigin::Absolute => {
                progress.sandbox.register(&host)?;
            }
        }

        let content = read_content(&host, raw).inspect_err(|_| {
            progress.record(raw, InputState::FatalInvalid, None);
        })?;

        let name = resolution.source_unit_name;
        if progress.sources.insert(name.clone(), content).is_some() {
            log::debug!("{name} was already read, keeping the later content");
        }
        progress.record(raw, InputState::Resolved, Some(name));
        Ok(())
    }

    fn add_remapping(&self, progress: &mut Progress, remapping: &Remapping) -> Result<()> {
        if let Some(directory) = remapping.target_directory() {
            progress
                .sandbox
                .register_remapping_target(&directory, self.cwd)?;
        }
        progress.remappings.push(remapping.clone());
        Ok(())
    }
}

fn read_content(host: &Path, raw: &str) -> Result<Vec<u8>> {
    fs::read(host).map_err(|source| Error::UnreadableInput {
        path: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::InputMode;
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    struct Fixture {
        dir: TempDir,
        cwd: WorkingDirectory,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            let cwd = WorkingDirectory::new(&dunce::canonicalize(dir.path()).unwrap()).unwrap();
            Self { dir, cwd }
        }

        fn file(&self, relative: &str, content: &str) {
            let path = self.dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn canonical(&self, relative: &str) -> std::path::PathBuf {
            dunce::canonicalize(self.dir.path().join(relative)).unwrap()
        }

        fn run(&self, options: &IngestOptions, stdin: &str) -> IngestionResult {
            FileIngestor::new(&self.cwd, Cursor::new(stdin.as_bytes().to_vec())).ingest(options)
        }
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_relative_files_and_stdin() {
        let fx = Fixture::new();
        fx.file("a.sol", "A");
        fx.file("c/d/b.sol", "B");

        let result = fx.run(&IngestOptions::new(args(&["a.sol", "c/d/b.sol", "-"])), "\n");

        assert!(result.success);
        assert_eq!(result.source("a.sol"), Some(&b"A"[..]));
        assert_eq!(result.source("c/d/b.sol"), Some(&b"B"[..]));
        assert_eq!(result.source("<stdin>"), Some(&b"\n"[..]));
        assert!(result.allowed_directories.contains(&fx.canonical(".")));
        assert!(result.allowed_directories.contains(&fx.canonical("c/d")));
        assert_eq!(result.allowed_directories.len(), 2);
        assert_eq!(result.base_path, "");
    }

    #[test]
    fn test_missing_without_ignore_is_fatal() {
        let fx = Fixture::new();
        fx.file("later.sol", "");

        let result = fx.run(&IngestOptions::new(args(&["missing.sol", "later.sol"])), "");

        assert!(!result.success);
        assert_eq!(result.fatal_error.as_deref(), Some("\"missing.sol\" is not found."));
        assert!(result.sources.is_empty());
        assert!(result.allowed_directories.is_empty());
        assert_eq!(result.outcomes.len(), 1);
        assert_eq!(result.outcomes[0].state, InputState::FatalInvalid);
    }

    #[test]
    fn test_ignore_missing_some_exist() {
        let fx = Fixture::new();
        fx.file("input1.sol", "");

        let options = IngestOptions::new(args(&["input1.sol", "input2.sol"])).with_ignore_missing(true);
        let result = fx.run(&options, "");

        assert!(result.success);
        assert_eq!(result.warnings, vec!["\"input2.sol\" is not found. Skipping."]);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.allowed_directories.len(), 1);
        assert_eq!(result.count(InputState::Skipped), 1);
    }

    #[test]
    fn test_ignore_missing_none_exist() {
        let fx = Fixture::new();
        let options = IngestOptions::new(args(&["input1.sol", "input2.sol"])).with_ignore_missing(true);
        let result = fx.run(&options, "");

        assert!(!result.success);
        assert_eq!(
            result.diagnostics().collect::<Vec<_>>(),
            vec![
                "\"input1.sol\" is not found. Skipping.",
                "\"input2.sol\" is not found. Skipping.",
                "All specified input files either do not exist or are not regular files.",
            ]
        );
    }

    #[test]
    fn test_directory_is_not_a_valid_file() {
        let fx = Fixture::new();
        fs::create_dir(fx.dir.path().join("dir")).unwrap();

        for ignore_missing in [false, true] {
            let options = IngestOptions::new(args(&["dir"])).with_ignore_missing(ignore_missing);
            let result = fx.run(&options, "");
            assert!(!result.success);
            assert_eq!(result.fatal_error.as_deref(), Some("\"dir\" is not a valid file."));
            assert!(result.warnings.is_empty());
        }
    }

    #[test]
    fn test_first_fatal_stops_processing() {
        let fx = Fixture::new();
        fx.file("ok.sol", "");
        fs::create_dir(fx.dir.path().join("dir")).unwrap();

        let result = fx.run(&IngestOptions::new(args(&["ok.sol", "dir", "missing.sol"])), "");

        assert!(!result.success);
        let states: Vec<_> = result.outcomes.iter().map(|o| o.state).collect();
        assert_eq!(states, vec![InputState::Resolved, InputState::FatalInvalid]);
    }

    #[test]
    fn test_stdin_read_once() {
        let fx = Fixture::new();
        let result = fx.run(&IngestOptions::new(args(&["-", "-"])), "data");

        assert!(result.success);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.source("<stdin>"), Some(&b"data"[..]));
        assert_eq!(result.count(InputState::Stdin), 2);
        assert!(result.allowed_directories.is_empty());
    }

    #[test]
    fn test_standard_json_defaults_to_stdin() {
        let fx = Fixture::new();
        let options = IngestOptions::new(vec![]).with_mode(InputMode::StandardJson);
        let result = fx.run(&options, "");

        assert!(result.success);
        assert_eq!(result.source("<stdin>"), Some(&b""[..]));
        assert!(result.allowed_directories.is_empty());
    }

    #[test]
    fn test_standard_json_checks_before_io() {
        let fx = Fixture::new();
        let options = IngestOptions::new(args(&["input1.json", "input2.json"]))
            .with_mode(InputMode::StandardJson);
        let result = fx.run(&options, "");

        assert!(!result.success);
        assert!(result.fatal_error.unwrap().starts_with("Too many input files"));
        assert!(result.outcomes.is_empty());
    }

    #[test]
    fn test_base_path_registers_base() {
        let fx = Fixture::new();
        fx.file("base/deep/x.sol", "X");
        fx.file("other/y.sol", "Y");

        let options = IngestOptions::new(args(&["base/deep/x.sol", "other/y.sol"]))
            .with_base_path(Some("base".to_string()));
        let result = fx.run(&options, "");

        assert!(result.success);
        assert_eq!(result.source("deep/x.sol"), Some(&b"X"[..]));
        let full = format!("{}/other/y.sol", fx.cwd.normalized());
        assert_eq!(result.source(&full), Some(&b"Y"[..]));
        assert!(result.allowed_directories.contains(&fx.canonical("base")));
        assert!(result.allowed_directories.contains(&fx.canonical("other")));
        assert_eq!(result.base_path, format!("{}/base", fx.cwd.normalized()));
    }

    #[test]
    fn test_remapping_targets_are_allowed() {
        let fx = Fixture::new();
        fx.file("x.sol", "");
        fs::create_dir_all(fx.dir.path().join("lib/oz")).unwrap();

        let options = IngestOptions::new(args(&["a=b/c/d", "x.sol", "a:b=c/d/e/", "oz=lib/oz/"]));
        let result = fx.run(&options, "");

        assert!(result.success);
        assert_eq!(result.remappings.len(), 3);
        assert!(result.allowed_directories.contains(Path::new("b/c")));
        assert!(result.allowed_directories.contains(Path::new("c/d/e")));
        assert!(result.allowed_directories.contains(&fx.canonical("lib/oz")));
    }

    #[test]
    fn test_collision_last_write_wins() {
        let fx = Fixture::new();
        fx.file("a.sol", "content");

        let absolute = fx.cwd.host().join("a.sol").to_string_lossy().into_owned();
        let result = fx.run(&IngestOptions::new(vec!["a.sol".to_string(), absolute]), "");

        assert!(result.success);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.count(InputState::Resolved), 2);
    }

    #[test]
    fn test_empty_file_and_binary_content() {
        let fx = Fixture::new();
        fs::write(fx.dir.path().join("bin.sol"), [0u8, 159, 146, 150]).unwrap();
        fx.file("empty.sol", "");

        let result = fx.run(&IngestOptions::new(args(&["bin.sol", "empty.sol"])), "");

        assert_eq!(result.source("bin.sol"), Some(&[0u8, 159, 146, 150][..]));
        assert_eq!(result.source("empty.sol"), Some(&b""[..]));
    }
}
