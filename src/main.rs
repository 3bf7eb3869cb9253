use std::cmp::Ordering;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use latest_tag::config::Config;
use latest_tag::logging;
use latest_tag::version::sources::{FixedTagSource, GitTagSource};
use latest_tag::version::{LatestSelector, TagSource, Version, compare, select_latest};

#[derive(Parser)]
#[command(name = "latest-tag")]
#[command(version, about = "Find the latest version tagged in a Git repository")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/latest-tag/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the latest version tagged in a remote repository
    Remote {
        /// Repository URL
        url: String,

        /// Tag prefix preceding the version (a regex fragment)
        #[arg(long)]
        prefix: Option<String>,

        /// git executable
        #[arg(long)]
        git: Option<PathBuf>,

        /// Read `git ls-remote` output from a file (`-` for stdin) instead of running git
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the greatest of the given versions
    Select {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Compare two versions
    Compare { a: String, b: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if cli.log_json {
        config.log.json = true;
    }
    if cli.log_file.is_some() {
        config.log.file = cli.log_file;
    }
    let _guard = logging::init(&config.log)?;

    match cli.command {
        Command::Remote {
            url,
            prefix,
            git,
            input,
        } => {
            if let Some(git) = git {
                config.git.binary = git;
            }
            let prefix = prefix.unwrap_or(config.prefix);

            let source: Box<dyn TagSource> = match input {
                Some(path) if path.as_os_str() == "-" => {
                    Box::new(FixedTagSource::from_reader(std::io::stdin().lock())?)
                }
                Some(path) => Box::new(FixedTagSource::from_file(&path)?),
                None => Box::new(GitTagSource::new(config.git)),
            };

            let latest = LatestSelector::new(source, &prefix).latest(&url)?;
            println!("{}", latest.unwrap_or_default());
        }
        Command::Select { versions } => {
            println!("{}", select_latest(&versions)?.unwrap_or_default());
        }
        Command::Compare { a, b } => {
            let a = Version::parse(&a)?;
            let b = Version::parse(&b)?;
            let result = match compare(&a, &b) {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            };
            println!("{result}");
        }
    }

    Ok(())
}
