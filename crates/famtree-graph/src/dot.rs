//! Graphviz DOT serializer.
//!
//! Node labels use Graphviz HTML-like markup; everything else is a quoted
//! DOT string.

use std::fmt::Write as _;

use crate::graph::{Edge, GraphDescription, Node};

// ─── Escaping ─────────────────────────────────────────────────────────────────

/// Escape a DOT double-quoted string: `\` and `"`.
fn quote(s: &str) -> String {
  format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Escape text placed inside HTML-like label markup.
fn escape_html(s: &str) -> String {
  s
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

// ─── Statements ───────────────────────────────────────────────────────────────

fn html_label(node: &Node) -> String {
  let label = &node.label;
  format!(
    concat!(
      r#"<<TABLE BORDER="0" CELLBORDER="1" CELLSPACING="0" CELLPADDING="5">"#,
      r#"<TR><TD PORT="img" BGCOLOR="{bg}">{glyph}</TD></TR>"#,
      r#"<TR><TD>{name}<BR/><I>{role}</I></TD></TR>"#,
      r#"</TABLE>>"#,
    ),
    bg    = escape_html(label.background.as_str()),
    glyph = label.glyph.symbol(),
    name  = escape_html(&label.name),
    role  = escape_html(&label.role),
  )
}

fn node_stmt(node: &Node) -> String {
  format!(
    "\t{} [label={} color={} fillcolor={} shape={} style={}]\n",
    quote(&node.id.to_string()),
    html_label(node),
    quote(node.border_color.as_str()),
    quote(node.fill_color.as_str()),
    quote(node.shape),
    quote(node.style),
  )
}

fn edge_stmt(edge: &Edge) -> String {
  format!(
    "\t{} -> {} [color={} dir={}]\n",
    quote(&edge.from.to_string()),
    quote(&edge.to.to_string()),
    quote(edge.color.as_str()),
    quote(edge.dir),
  )
}

// ─── Graph ────────────────────────────────────────────────────────────────────

pub(crate) fn serialize(graph: &GraphDescription) -> String {
  let mut out = String::from("digraph {\n");
  // Writing to a String cannot fail.
  let _ = writeln!(
    out,
    "\tgraph [rankdir={} size={}]",
    graph.rank_dir,
    quote(&graph.size)
  );
  for node in &graph.nodes {
    out.push_str(&node_stmt(node));
  }
  for edge in &graph.edges {
    out.push_str(&edge_stmt(edge));
  }
  out.push_str("}\n");
  out
}
