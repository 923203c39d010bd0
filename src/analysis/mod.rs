// src/analysis/mod.rs
//! The validation orchestrator.
//!
//! [`Validator`] owns the only mutable state of a run: the violation list.
//! Each public entry point clears it exactly once and then appends the
//! findings of every file it scans. The per-file routine never touches the
//! list itself, so a directory run keeps the findings of all its files.

pub mod ast;
pub mod checks;
pub mod metrics;
pub mod parser;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};
use tree_sitter::Tree;

use crate::architecture::ArchitectureChecker;
use crate::config::QualityGateConfig;
use crate::discovery;
use crate::error::{QualityError, Result};
use crate::reporting;
use crate::types::{Category, Summary, Violation};

use self::checks::CheckContext;
use self::parser::{ParseError, SourceParser};

/// File-name glob used by directory scans unless the caller picks another.
pub const DEFAULT_PATTERN: &str = "*.py";

const SOURCE_EXTENSION: &str = "py";
const PACKAGE_MARKER: &str = "__init__.py";

pub struct Validator {
    config: QualityGateConfig,
    architecture: ArchitectureChecker,
    violations: Vec<Violation>,
}

impl Validator {
    /// Builds a validator around an already loaded config. The config is
    /// trusted; use [`Validator::load`] to go through validation.
    ///
    /// # Errors
    /// Returns [`QualityError::InvalidConfig`] if the layer patterns do not compile.
    pub fn new(config: QualityGateConfig) -> Result<Self> {
        let architecture = ArchitectureChecker::new(&config.architecture)
            .map_err(|e| QualityError::InvalidConfig(vec![e]))?;
        Ok(Self {
            config,
            architecture,
            violations: Vec::new(),
        })
    }

    /// Loads the config at `path` (defaults when `None`), validates it and
    /// refuses to build if any field is invalid. No source file is read before
    /// validation has passed.
    ///
    /// # Errors
    /// Returns [`QualityError::Config`] if the file cannot be loaded and
    /// [`QualityError::InvalidConfig`] with every problem found otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config, errors) = QualityGateConfig::load_validated(path)?;
        if !errors.is_empty() {
            return Err(QualityError::InvalidConfig(errors));
        }
        Self::new(config)
    }

    /// Shorthand for [`Validator::load`] with an explicit config file.
    ///
    /// # Errors
    /// See [`Validator::load`].
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(Some(path.as_ref()))
    }

    #[must_use]
    pub fn config(&self) -> &QualityGateConfig {
        &self.config
    }

    /// Violations of the latest run.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Validates a single file, replacing the previous run's findings.
    ///
    /// # Errors
    /// Returns error only for a parser engine failure. Missing, unreadable or
    /// non-Python files and syntax errors are reported as violations.
    pub fn validate_file(&mut self, path: impl AsRef<Path>) -> Result<&[Violation]> {
        self.violations.clear();
        let path = path.as_ref();
        let root = self.source_root(path.parent().unwrap_or_else(|| Path::new("")));
        let found = self.check_file(path, &root)?;
        self.violations.extend(found);
        Ok(&self.violations)
    }

    /// Validates every file under `dir` whose name matches `pattern`, replacing
    /// the previous run's findings with those of all scanned files.
    ///
    /// # Errors
    /// Same as [`Validator::validate_file`], plus an invalid `pattern`.
    pub fn validate_directory(
        &mut self,
        dir: impl AsRef<Path>,
        pattern: &str,
        recursive: bool,
    ) -> Result<&[Violation]> {
        self.violations.clear();
        let dir = dir.as_ref();

        if !dir.is_dir() {
            self.violations.push(Violation::error(
                Category::DirNotFound,
                dir,
                None,
                "Directory not found".to_string(),
            ));
            return Ok(&self.violations);
        }

        let files = discovery::find_files(dir, pattern, recursive)?;
        let root = self.source_root(dir);
        info!(dir = %dir.display(), files = files.len(), "validating directory");

        let per_file: Vec<Vec<Violation>> = files
            .par_iter()
            .map(|path| self.check_file(path, &root))
            .collect::<Result<_>>()?;

        for found in per_file {
            self.violations.extend(found);
        }
        Ok(&self.violations)
    }

    /// Counts over the current violation list.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_violations(&self.violations)
    }

    /// True when the latest run recorded no error-severity violation.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.summary().passed()
    }

    #[must_use]
    pub fn render_report(&self) -> String {
        reporting::render_report(&self.violations, &self.summary())
    }

    pub fn print_report(&self) {
        reporting::print_report(&self.violations, &self.summary());
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn render_json(&self) -> Result<String> {
        reporting::render_json(&self.violations, &self.summary())
    }

    /// Directory that module paths are taken from: the configured root, or
    /// the parent of the outermost package containing `start`.
    fn source_root(&self, start: &Path) -> PathBuf {
        if let Some(root) = &self.config.architecture.source_root {
            return root.clone();
        }
        let mut root = start;
        while root.join(PACKAGE_MARKER).is_file() {
            match root.parent() {
                Some(parent) => root = parent,
                None => break,
            }
        }
        root.to_path_buf()
    }

    /// Findings for one file. Does not touch the accumulated list.
    fn check_file(&self, path: &Path, source_root: &Path) -> Result<Vec<Violation>> {
        if !path.exists() {
            return Ok(vec![Violation::error(
                Category::FileNotFound,
                path,
                None,
                "File not found".to_string(),
            )]);
        }
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            return Ok(vec![Violation::error(
                Category::InvalidFile,
                path,
                None,
                "Not a Python file".to_string(),
            )]);
        }

        let source = match read_source(path) {
            Ok(source) => source,
            Err(message) => {
                debug!(path = %path.display(), %message, "unreadable source");
                return Ok(vec![Violation::error(Category::InvalidFile, path, None, message)]);
            }
        };
        let mut parser = SourceParser::new().map_err(|e| QualityError::Parser(e.to_string()))?;

        match parser.parse(&source) {
            Ok(tree) => Ok(self.run_all_checks(path, source_root, &source, &tree)),
            Err(ParseError::Syntax { line, message }) => {
                debug!(path = %path.display(), line, "syntax error, skipping checks");
                Ok(vec![Violation::error(
                    Category::SyntaxError,
                    path,
                    Some(line),
                    format!("Syntax error: {message}"),
                )])
            }
            Err(ParseError::Engine(message)) => Err(QualityError::Parser(message)),
        }
    }

    fn run_all_checks(
        &self,
        path: &Path,
        source_root: &Path,
        source: &str,
        tree: &Tree,
    ) -> Vec<Violation> {
        let ctx = CheckContext {
            root: tree.root_node(),
            source,
            path,
            source_root,
        };
        let config = &self.config;
        let mut out = Vec::new();

        if config.file_size.enabled {
            checks::check_file_size(&ctx, &config.file_size, &mut out);
        }
        if config.complexity.enabled {
            checks::check_complexity(&ctx, &config.complexity, &mut out);
        }
        if config.type_hints.enabled {
            checks::check_type_hints(&ctx, &config.type_hints, &mut out);
        }
        if config.error_handling.enabled {
            checks::check_error_handling(&ctx, &config.error_handling, &mut out);
        }
        if config.architecture.enabled {
            self.architecture.check(&ctx, &mut out);
        }
        if let Some(documentation) = config.documentation.as_ref().filter(|c| c.enabled) {
            checks::check_documentation(&ctx, documentation, &mut out);
        }
        if let Some(security) = config.security.as_ref().filter(|c| c.enabled) {
            checks::check_security(&ctx, security, &mut out);
        }
        if let Some(performance) = config.performance.as_ref().filter(|c| c.enabled) {
            checks::check_performance(&ctx, performance, &mut out);
        }

        debug!(path = %path.display(), violations = out.len(), "checked file");
        out
    }
}

/// Reads a source file as UTF-8. Failures come back as the message of an
/// `invalid_file` violation.
fn read_source(path: &Path) -> std::result::Result<String, String> {
    let bytes = fs::read(path).map_err(|e| format!("Cannot read file: {e}"))?;
    String::from_utf8(bytes).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        format!("File is not valid UTF-8 (invalid byte at offset {offset})")
    })
}
