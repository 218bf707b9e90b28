//! Recursive file discovery shared by every rule.
//!
//! Traversal is depth-first and sorted by file name, so the same tree always
//! yields the same sequence. Hidden directories and dependency caches are
//! pruned before descending. Symlinks are not followed.

use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

pub struct FileWalker<'a> {
    skip_dirs: &'a [String],
    verbose: bool,
}

impl<'a> FileWalker<'a> {
    pub fn new(skip_dirs: &'a [String], verbose: bool) -> Self {
        Self { skip_dirs, verbose }
    }

    /// Lazily yield every file under `root` accepted by `include`.
    ///
    /// A missing `root` yields nothing.
    pub fn walk<P>(&self, root: &Path, include: P) -> impl Iterator<Item = PathBuf> + use<'a, P>
    where
        P: Fn(&Path) -> bool,
    {
        let skip_dirs = self.skip_dirs;
        let verbose = self.verbose;
        let exists = root.exists();

        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || !is_skipped_dir(entry, skip_dirs))
            .take_while(move |_| exists)
            .filter_map(move |entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
            .filter(move |path| include(path.as_path()))
    }
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || skip_dirs.iter().any(|d| d == name.as_ref())
}
