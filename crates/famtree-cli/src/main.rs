//! `famtree` — render and edit the preset family trees from a terminal.
//!
//! # Usage
//!
//! ```
//! famtree families
//! famtree show Ndao --format dot | dot -Tsvg > ndao.svg
//! famtree rename Ndao "Serigne Ndao" "Serigne Moussa Ndao"
//! famtree interactive
//! ```

mod interactive;
mod output;

use std::{
  collections::HashMap,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use famtree_app::{Page, Session};
use famtree_graph::RenderOptions;
use output::Format;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "famtree", version, about = "Family tree viewer and editor")]
struct Args {
  /// Path to a TOML file with render options (rank_dir, size, edge_color,
  /// border_color). Missing files are ignored.
  #[arg(short, long, value_name = "FILE", default_value = "famtree.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List the available families.
  Families {
    /// Print every family with its members as JSON instead of names.
    #[arg(long)]
    json: bool,
  },

  /// Print a page for one family.
  Show {
    /// Family to show; defaults to the first one.
    family: Option<String>,

    #[arg(long, default_value = "Family Tree")]
    page: Page,

    #[arg(short, long, value_enum, default_value_t = Format::Dot)]
    format: Format,
  },

  /// Rename a member in a fresh session and print the updated tree.
  Rename {
    family: String,

    /// Current display name or identity of the member.
    member: String,

    new_name: String,

    #[arg(short, long, value_enum, default_value_t = Format::Dot)]
    format: Format,
  },

  /// Read commands from stdin against one long-lived session.
  Interactive,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so rendered output on stdout can be piped.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let options = load_options(&args.config)?;
  let mut session = Session::new(options).context("starting session")?;

  match args.command {
    Command::Families { json } => {
      if json {
        let families = session.registry().families();
        println!("{}", serde_json::to_string_pretty(families)?);
      } else {
        for name in session.family_names() {
          println!("{name}");
        }
      }
    }
    Command::Show {
      family,
      page,
      format,
    } => {
      if let Some(name) = family {
        session.select_family(&name)?;
      }
      session.select_page(page);
      print!("{}", output::render_view(&session.view()?, format)?);
    }
    Command::Rename {
      family,
      member,
      new_name,
      format,
    } => {
      session.select_family(&family)?;
      let identity = session.find_member(&member)?;
      let note = session.submit_rename(identity, &new_name);
      eprintln!("{note}");
      if !note.is_success() {
        anyhow::bail!("{}", note.message());
      }
      print!("{}", output::render_view(&session.view()?, format)?);
    }
    Command::Interactive => {
      let stdin = std::io::stdin();
      let stdout = std::io::stdout();
      interactive::run(&mut session, stdin.lock(), stdout.lock())?;
    }
  }

  Ok(())
}

/// Layer the optional config file and `FAMTREE_*` environment variables over
/// the built-in render defaults.
fn load_options(path: &Path) -> Result<RenderOptions> {
  build_options(path, None)
}

/// `env` replaces the process environment when given.
fn build_options(
  path: &Path,
  env: Option<HashMap<String, String>>,
) -> Result<RenderOptions> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FAMTREE").source(env))
    .build()
    .context("failed to read config file")?;

  let options: RenderOptions = settings
    .try_deserialize()
    .context("failed to deserialise render options")?;
  tracing::debug!(?options, "loaded render options");
  Ok(options)
}

#[cfg(test)]
mod tests {
  use famtree_graph::RankDir;

  use super::*;

  fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
      pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    )
  }

  /// A TOML file unique to this test process, removed on drop.
  struct TempConfig(PathBuf);

  impl TempConfig {
    fn new(name: &str, body: &str) -> Self {
      let path = std::env::temp_dir()
        .join(format!("famtree-{name}-{}.toml", std::process::id()));
      std::fs::write(&path, body).unwrap();
      Self(path)
    }
  }

  impl Drop for TempConfig {
    fn drop(&mut self) { std::fs::remove_file(&self.0).ok(); }
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("famtree-does-not-exist.toml");
    let options = build_options(&path, env(&[])).unwrap();
    assert_eq!(options, RenderOptions::default());
  }

  #[test]
  fn file_overrides_defaults() {
    let file = TempConfig::new("file", "rank_dir = \"LR\"\nsize = \"12,10\"\n");
    let options = build_options(&file.0, env(&[])).unwrap();
    assert_eq!(options.rank_dir, RankDir::Lr);
    assert_eq!(options.size, "12,10");
    assert_eq!(options.edge_color.as_str(), "black");
  }

  #[test]
  fn environment_wins_over_file() {
    let file = TempConfig::new("env", "rank_dir = \"LR\"\nsize = \"12,10\"\n");
    let options = build_options(
      &file.0,
      env(&[("FAMTREE_RANK_DIR", "BT"), ("FAMTREE_EDGE_COLOR", "grey40")]),
    )
    .unwrap();
    assert_eq!(options.rank_dir, RankDir::Bt);
    assert_eq!(options.size, "12,10");
    assert_eq!(options.edge_color.as_str(), "grey40");
  }
}
