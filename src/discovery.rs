// src/discovery.rs
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;

/// File-name glob used when scanning a directory: `*` matches any run of
/// characters, `?` matches one, everything else is literal.
#[derive(Debug, Clone)]
pub struct FilePattern {
    re: Regex,
}

impl FilePattern {
    /// Compiles a glob.
    ///
    /// # Errors
    /// Returns error if the translated expression is rejected by the regex engine.
    pub fn new(glob: &str) -> Result<Self> {
        let mut expr = String::with_capacity(glob.len() + 8);
        expr.push('^');
        for c in glob.chars() {
            match c {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                other => expr.push_str(&regex::escape(&other.to_string())),
            }
        }
        expr.push('$');
        Ok(Self {
            re: Regex::new(&expr)?,
        })
    }

    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.re.is_match(file_name)
    }
}

/// Lists regular files under `dir` whose name matches `pattern`, sorted by
/// path. Only the top level is listed unless `recursive` is set.
///
/// # Errors
/// Returns error if the pattern cannot be compiled.
pub fn find_files(dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let pattern = FilePattern::new(pattern)?;
    let mut walker = WalkDir::new(dir).follow_links(false).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let (mut paths, error_count) = accumulate_walker(walker.into_iter(), &pattern);
    if error_count > 0 {
        warn!(dir = %dir.display(), error_count, "skipped unreadable entries during file walk");
    }
    paths.sort();
    Ok(paths)
}

fn accumulate_walker<I>(walker: I, pattern: &FilePattern) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && pattern.matches(&entry.file_name().to_string_lossy())
                {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}
