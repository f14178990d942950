//! Line-oriented session: one command per line, results on the writer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use famtree_app::{Page, Session};

use crate::output::{self, Format};

const HELP: &str = "\
commands:
  families                 list families
  family NAME              select a family
  page NAME                select a page (Family Tree | Empty Family Tree)
  members                  list members of the selected family
  rename N NEW NAME        rename member number N
  rename \"NAME\" NEW NAME   rename by current name (quoted) or identity
  show                     print the current page as DOT
  json                     print the current page as JSON
  help                     show this text
  quit                     leave
";

/// Drive `session` from `input` until EOF or `quit`.
pub fn run(session: &mut Session, input: impl BufRead, mut out: impl Write) -> Result<()> {
  write!(out, "{HELP}")?;
  for line in input.lines() {
    let line = line.context("reading command")?;
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
      "quit" | "exit" => break,
      "help" => write!(out, "{HELP}")?,
      other => {
        if let Err(e) = dispatch(session, other, rest, &mut out) {
          tracing::debug!(command = other, error = %e, "command failed");
          writeln!(out, "error: {e}")?;
        }
      }
    }
    out.flush()?;
  }
  Ok(())
}

fn dispatch(
  session: &mut Session,
  command: &str,
  rest: &str,
  out: &mut impl Write,
) -> Result<()> {
  match command {
    "families" => {
      for name in session.family_names() {
        let marker = if name == session.selected_family() { '*' } else { ' ' };
        writeln!(out, "{marker} {name}")?;
      }
    }
    "family" => {
      session.select_family(rest)?;
      writeln!(out, "selected {rest}")?;
    }
    "page" => {
      let page: Page = rest
        .parse()
        .with_context(|| format!("unknown page {rest:?}"))?;
      session.select_page(page);
      writeln!(out, "page {page}")?;
    }
    "members" => {
      for (i, m) in session.members()?.iter().enumerate() {
        writeln!(out, "{i:>3}  {}", m.name)?;
      }
    }
    "rename" => {
      let (target, new_name) = split_target(rest)?;
      let identity = match target.parse::<usize>() {
        Ok(index) => session
          .members()?
          .get(index)
          .map(|m| m.identity)
          .with_context(|| format!("no member number {index}"))?,
        Err(_) => session.find_member(target)?,
      };
      let note = session.submit_rename(identity, new_name.trim());
      writeln!(out, "{note}")?;
    }
    "show" => write!(out, "{}", output::render_view(&session.view()?, Format::Dot)?)?,
    "json" => write!(out, "{}", output::render_view(&session.view()?, Format::Json)?)?,
    other => anyhow::bail!("unknown command {other:?}, try `help`"),
  }
  Ok(())
}

/// Split `rename` arguments into the target and the new name. A target with
/// spaces must be double-quoted.
fn split_target(rest: &str) -> Result<(&str, &str)> {
  if let Some(quoted) = rest.strip_prefix('"') {
    let (target, new_name) = quoted
      .split_once('"')
      .context("unterminated quote in member name")?;
    return Ok((target, new_name));
  }
  Ok(rest.split_once(' ').unwrap_or((rest, "")))
}
