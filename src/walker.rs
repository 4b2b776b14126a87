//! Input collection and parallel extraction
//!
//! Explicit file arguments are always parsed. Directory arguments are walked
//! with `ignore`, keeping `.scss` files and honouring `.gitignore` unless
//! `show_all` is set. Files are parsed in parallel; results keep the order
//! in which files were collected.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::docblock::DocBlock;
use crate::docs::parse;
use crate::error::{Result, ScssDocError};
use crate::file_utils::{is_scss_path, read_source_file};

/// Configuration for collecting and parsing inputs.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Ignore `.gitignore`, hidden-file and `.ignore` filtering.
    pub show_all: bool,
    /// Number of parallel workers.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}

/// The doc blocks extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDocs {
    pub path: PathBuf,
    pub docs: Vec<DocBlock>,
}

/// Expand the given roots into the list of files to parse.
///
/// Directory contents are sorted by path for stable output.
pub fn collect_files(roots: &[PathBuf], config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            files.push(root.clone());
        } else if root.is_dir() {
            let mut found = walk_dir(root, config);
            found.sort();
            files.extend(found);
        } else {
            return Err(ScssDocError::NotFound { path: root.clone() });
        }
    }

    Ok(files)
}

fn walk_dir(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let filtered = !config.show_all;
    WalkBuilder::new(root)
        .hidden(filtered)
        .ignore(filtered)
        .git_ignore(filtered)
        .git_global(filtered)
        .git_exclude(filtered)
        // .gitignore applies even outside a git repository
        .require_git(false)
        .build()
        .flatten()
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| is_scss_path(path))
        .collect()
}

/// Read and parse one file.
pub fn extract_file(path: &Path) -> Result<FileDocs> {
    let content = read_source_file(path)?;
    let docs = parse(&content);
    debug!(path = %path.display(), count = docs.len(), "extracted doc blocks");
    Ok(FileDocs {
        path: path.to_path_buf(),
        docs,
    })
}

/// Parse every file, in parallel, preserving input order.
pub fn extract_files(paths: &[PathBuf], config: &ScanConfig) -> Vec<Result<FileDocs>> {
    let run = || -> Vec<Result<FileDocs>> {
        paths.par_iter().map(|p| extract_file(p)).collect()
    };

    if config.parallel_workers == 0 {
        return run();
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallel_workers)
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(e) => {
            // Fall back to rayon's global pool if custom pool creation fails
            debug!(error = %e, "thread pool creation failed, using global pool");
            run()
        }
    }
}
