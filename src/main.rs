use anyhow::{Context, Result};
use clap::Parser;
use gen_sources::{SourcesConfig, check, render, run};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Write a Meson `sources += [...]` fragment listing the C/C++ files under a source root",
    long_about = None
)]
struct Args {
    /// Directory to scan, relative to the base directory [default: src]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Manifest path, relative to the base directory [default: src/meson.build]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory manifest entries are written relative to [default: .]
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Recognized suffix (repeatable, replaces the default .cpp/.c/.cc set)
    #[arg(long = "suffix")]
    suffixes: Vec<String>,

    /// Add ignore pattern (glob)
    #[arg(long)]
    ignore: Vec<String>,

    /// Name of the Meson list to append to [default: sources]
    #[arg(long)]
    variable: Option<String>,

    /// Include hidden files and directories
    #[arg(long)]
    hidden: bool,

    /// Follow symbolic links
    #[arg(long)]
    follow_links: bool,

    /// Honor .gitignore and .ignore files
    #[arg(long)]
    respect_ignore_files: bool,

    /// Remove duplicate entries
    #[arg(long)]
    dedup: bool,

    /// Backslash-escape quotes and backslashes inside manifest entries
    #[arg(long)]
    escape_quotes: bool,

    /// Exit with status 1 if the manifest is missing or out of date, without writing it
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the manifest instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long, conflicts_with_all = ["check", "stdout"])]
    print_config: bool,

    /// Read configuration from this file instead of ./gen-sources.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layers command-line flags over a loaded configuration.
    fn apply(&self, config: &mut SourcesConfig) {
        if let Some(r) = &self.root {
            config.root = r.clone();
        }
        if let Some(o) = &self.output {
            config.output = o.clone();
        }
        if let Some(b) = &self.base_dir {
            config.base_dir = b.clone();
        }
        if !self.suffixes.is_empty() {
            config.suffixes = self.suffixes.clone();
        }
        // CLI ignores ADD to config ignores
        config.ignore_patterns.extend(self.ignore.iter().cloned());
        if let Some(v) = &self.variable {
            config.variable = v.clone();
        }
        config.include_hidden |= self.hidden;
        config.follow_links |= self.follow_links;
        config.respect_ignore_files |= self.respect_ignore_files;
        config.dedup |= self.dedup;
        config.escape_quotes |= self.escape_quotes;
        config.verbose |= self.verbose;
    }

    fn load_config(&self) -> Result<SourcesConfig> {
        let mut config = match &self.config {
            Some(path) => SourcesConfig::load_from_file(path)?,
            None => SourcesConfig::load_default_file()?.unwrap_or_default(),
        };
        self.apply(&mut config);
        Ok(config)
    }
}

/// Runs the selected mode and returns the process exit status.
fn execute(args: &Args, config: &SourcesConfig) -> Result<u8> {
    if args.print_config {
        print!("{}", config.to_toml()?);
    } else if args.check {
        let outcome = check(config)?;
        if !outcome.is_up_to_date() {
            eprintln!(
                "{} is {}; rerun gen-sources to regenerate it",
                config.output_path().display(),
                outcome
            );
            return Ok(1);
        }
    } else if args.stdout {
        let manifest = render(config)?;
        std::io::stdout()
            .lock()
            .write_all(manifest.as_bytes())
            .context("Failed to write manifest to stdout")?;
    } else {
        run(config)?;
    }
    Ok(0)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = args.load_config()?;

    let level = if config.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    Ok(ExitCode::from(execute(&args, &config)?))
}
