//! Source scanner: walks the root and keeps files with a recognized suffix
//!
//! Entries are rendered relative to the base directory with forward slashes,
//! then sorted as plain strings.

use std::path::{Component, Path};

use crate::config::SourcesConfig;
use crate::core::DiscoveryResult;
use crate::error::Result;
use crate::fs::{WalkConfig, walk_directory};

/// Discover source files according to configuration.
///
/// The returned order is the walk order. A file whose name ends with more
/// than one configured suffix is listed once per matching suffix.
pub fn discover_sources(config: &SourcesConfig) -> Result<DiscoveryResult> {
    let scan_root = config.scan_root();
    log::debug!(
        "scanning {} for {}",
        scan_root.display(),
        config.suffixes.join(", ")
    );

    let walk_config = WalkConfig {
        ignore_patterns: &config.ignore_patterns,
        include_hidden: config.include_hidden,
        follow_links: config.follow_links,
        respect_ignore_files: config.respect_ignore_files,
    };
    let paths = walk_directory(&scan_root, walk_config)?;

    let mut result = DiscoveryResult::default();
    for path in &paths {
        let matches = matching_suffixes(path, &config.suffixes);
        if matches == 0 {
            result.skipped += 1;
            continue;
        }
        let relative = path.strip_prefix(&config.base_dir).unwrap_or(path);
        let entry = to_manifest_string(relative);
        result.sources.extend(std::iter::repeat_n(entry, matches));
    }

    log::debug!(
        "found {} sources, skipped {} other files",
        result.source_count(),
        result.skipped
    );
    Ok(result)
}

/// Number of configured suffixes the file name ends with
fn matching_suffixes(path: &Path, suffixes: &[String]) -> usize {
    let Some(name) = path.file_name() else {
        return 0;
    };
    let name = name.to_string_lossy();
    suffixes
        .iter()
        .filter(|suffix| name.ends_with(suffix.as_str()))
        .count()
}

/// Sorts entries by byte-wise string order, optionally dropping duplicates.
///
/// This is string order, not `Path` order: `a-b/x.c` sorts before `a/x.c`.
pub fn normalize(sources: &mut Vec<String>, dedup: bool) {
    sources.sort();
    if dedup {
        sources.dedup();
    }
}

/// Renders a path with '/' separators regardless of host platform.
pub fn to_manifest_string(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
