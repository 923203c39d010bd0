// src/types.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Tag naming the check (or pre-check) that produced a violation. Ordered
/// alphabetically by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FileSize,
    Imports,
    Functions,
    Complexity,
    TypeHints,
    ErrorHandling,
    Architecture,
    Documentation,
    Security,
    Performance,
    SyntaxError,
    FileNotFound,
    InvalidFile,
    DirNotFound,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileSize => "file_size",
            Self::Imports => "imports",
            Self::Functions => "functions",
            Self::Complexity => "complexity",
            Self::TypeHints => "type_hints",
            Self::ErrorHandling => "error_handling",
            Self::Architecture => "architecture",
            Self::Documentation => "documentation",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::SyntaxError => "syntax_error",
            Self::FileNotFound => "file_not_found",
            Self::InvalidFile => "invalid_file",
            Self::DirNotFound => "dir_not_found",
        }
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors fail the gate; warnings are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding. `line` is `None` for file-level findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub category: Category,
    pub path: PathBuf,
    pub line: Option<usize>,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    #[must_use]
    pub fn error(category: Category, path: &Path, line: Option<usize>, message: String) -> Self {
        Self {
            category,
            path: path.to_path_buf(),
            line,
            message,
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn warning(category: Category, path: &Path, line: Option<usize>, message: String) -> Self {
        Self {
            category,
            path: path.to_path_buf(),
            line,
            message,
            severity: Severity::Warning,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Ordering used for display: path, then line (file-level first), then category.
    #[must_use]
    pub fn sort_key(&self) -> (&Path, usize, Category) {
        (self.path.as_path(), self.line.unwrap_or(0), self.category)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.path.display())?,
            None => write!(f, "{}", self.path.display())?,
        }
        write!(
            f,
            " [{}] {}: {}",
            self.severity.as_str().to_uppercase(),
            self.category,
            self.message
        )
    }
}

/// Counts derived from the current violation list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub by_category: BTreeMap<Category, usize>,
}

impl Summary {
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut summary = Self {
            total: violations.len(),
            ..Self::default()
        };
        for v in violations {
            match v.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
            *summary.by_category.entry(v.category).or_default() += 1;
        }
        summary
    }

    /// The gate passes when no error-severity violation was recorded.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
