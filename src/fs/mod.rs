use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::error::{GenerateError, Result};

/// Options controlling the directory walk
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkConfig<'a> {
    pub ignore_patterns: &'a [String],
    pub include_hidden: bool,
    pub follow_links: bool,
    pub respect_ignore_files: bool,
}

/// Recursively lists every non-directory entry below `root`, at all depths.
///
/// The order of the returned paths is whatever the walk produced; callers
/// sort. Symbolic links that are not followed are returned as entries of
/// their own, without checking their target. Entries below the root that
/// cannot be read (e.g. a directory without permissions) are skipped with a
/// warning; only a missing or unreadable root is an error.
pub fn walk_directory(root: &Path, config: WalkConfig<'_>) -> Result<Vec<PathBuf>> {
    // Surface a missing or unreadable root as a discovery failure up front,
    // the walker would otherwise report it as just another entry error.
    std::fs::read_dir(root).map_err(|source| GenerateError::Discover {
        path: root.to_path_buf(),
        source,
    })?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!config.include_hidden)
        .follow_links(config.follow_links);

    if config.respect_ignore_files {
        builder
            .ignore(true)
            .git_ignore(true)
            .git_exclude(true)
            .require_git(false);
    }

    if !config.ignore_patterns.is_empty() {
        // "glob" whitelists, "!glob" ignores
        let mut overrides = OverrideBuilder::new(root);
        for pattern in config.ignore_patterns {
            overrides
                .add(&format!("!{}", pattern))
                .map_err(GenerateError::Pattern)?;
        }
        builder.overrides(overrides.build().map_err(GenerateError::Pattern)?);
    }

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|ft| !ft.is_dir()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Replaces `path` with `contents` via a sibling temporary file and a rename.
///
/// Readers see either the previous file or the complete new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let persist_err = |source: std::io::Error| GenerateError::persist(path, source);

    let mut tmp = tempfile::Builder::new()
        .prefix(".gen-sources")
        .tempfile_in(dir)
        .map_err(persist_err)?;
    tmp.write_all(contents).map_err(persist_err)?;
    tmp.as_file().sync_all().map_err(persist_err)?;

    // Temp files are created 0600; keep the manifest readable like a plain create would.
    let permissions = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(perms) = permissions {
        tmp.as_file().set_permissions(perms).map_err(persist_err)?;
    }

    tmp.persist(path).map_err(|e| persist_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
