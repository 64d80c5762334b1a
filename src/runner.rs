use std::io::ErrorKind;

use crate::config::SourcesConfig;
use crate::core::{CheckOutcome, RunSummary, discover_sources, normalize};
use crate::error::{GenerateError, Result};
use crate::format::render_manifest;
use crate::fs::write_atomic;

/// Main entry point: discover, normalize, render and persist the manifest.
///
/// Discovery runs to completion before the output is touched, so a missing
/// root leaves any previous manifest in place.
pub fn run(config: &SourcesConfig) -> Result<RunSummary> {
    let (manifest, source_count) = render_with_count(config)?;

    let output = config.output_path();
    write_atomic(&output, manifest.as_bytes())?;
    log::debug!("wrote {} sources to {}", source_count, output.display());

    Ok(RunSummary {
        output,
        source_count,
    })
}

/// Renders the manifest without writing it anywhere.
pub fn render(config: &SourcesConfig) -> Result<String> {
    render_with_count(config).map(|(manifest, _)| manifest)
}

/// Compares a fresh rendering with the manifest currently on disk.
pub fn check(config: &SourcesConfig) -> Result<CheckOutcome> {
    let manifest = render(config)?;
    let output = config.output_path();

    let outcome = match std::fs::read(&output) {
        Ok(existing) if existing == manifest.as_bytes() => CheckOutcome::UpToDate,
        Ok(_) => CheckOutcome::Stale,
        Err(e) if e.kind() == ErrorKind::NotFound => CheckOutcome::Missing,
        Err(source) => {
            return Err(GenerateError::ReadManifest {
                path: output,
                source,
            });
        }
    };
    log::debug!("{} is {}", output.display(), outcome);
    Ok(outcome)
}

fn render_with_count(config: &SourcesConfig) -> Result<(String, usize)> {
    config.validate()?;

    let mut discovered = discover_sources(config)?;
    normalize(&mut discovered.sources, config.dedup);

    let manifest = render_manifest(
        &config.variable,
        &discovered.sources,
        config.escape_quotes,
    );
    Ok((manifest, discovered.source_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(files: &[&str]) -> anyhow::Result<(TempDir, SourcesConfig)> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("src"))?;
        for f in files {
            let path = temp.path().join(f);
            fs::create_dir_all(path.parent().unwrap())?;
            fs::write(path, "")?;
        }
        let config = SourcesConfig {
            base_dir: temp.path().to_path_buf(),
            ..Default::default()
        };
        Ok((temp, config))
    }

    #[test]
    fn test_run_writes_summary() -> anyhow::Result<()> {
        let (temp, config) = setup(&["src/foo.cpp", "src/bar.c"])?;

        let summary = run(&config)?;
        assert_eq!(summary.source_count, 2);
        assert_eq!(summary.output, temp.path().join("src").join("meson.build"));
        assert_eq!(
            fs::read_to_string(&summary.output)?,
            "sources += [\n  'src/bar.c',\n  'src/foo.cpp',\n]\n"
        );
        Ok(())
    }

    #[test]
    fn test_check_states() -> anyhow::Result<()> {
        let (temp, config) = setup(&["src/foo.cpp"])?;

        assert_eq!(check(&config)?, CheckOutcome::Missing);

        run(&config)?;
        assert_eq!(check(&config)?, CheckOutcome::UpToDate);

        fs::write(temp.path().join("src/new.cc"), "")?;
        assert_eq!(check(&config)?, CheckOutcome::Stale);
        Ok(())
    }

    #[test]
    fn test_render_does_not_write() -> anyhow::Result<()> {
        let (_temp, config) = setup(&["src/foo.cpp"])?;

        assert_eq!(render(&config)?, "sources += [\n  'src/foo.cpp',\n]\n");
        assert!(!config.output_path().exists());
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected_before_walk() -> anyhow::Result<()> {
        let (_temp, mut config) = setup(&[])?;
        config.suffixes.clear();

        assert!(matches!(run(&config), Err(GenerateError::Config(_))));
        assert!(!config.output_path().exists());
        Ok(())
    }
}
