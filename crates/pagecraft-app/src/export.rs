//! HTML export
//!
//! Renders the section sequence to a standalone HTML document styled for
//! browser print-to-PDF. Editor chrome carries the `no-print` class and
//! is hidden by the print stylesheet; the terminal cannot print, so the
//! user opens the exported file in a browser and prints from there.

use std::path::{Path, PathBuf};

use pagecraft_core::prelude::*;
use pagecraft_core::{ProjectInfo, Section, SectionType};

/// Render the page and write it into the project directory.
///
/// Returns the path of the written file.
pub fn export_page(
    project_dir: &Path,
    filename: &str,
    info: &ProjectInfo,
    sections: &[Section],
) -> Result<PathBuf> {
    let path = project_dir.join(filename);
    let html = render_html(info, sections);
    std::fs::write(&path, html)
        .map_err(|e| Error::export(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Exported {} section(s) to {:?}", sections.len(), path);
    Ok(path)
}

/// Render the full standalone HTML document.
pub fn render_html(info: &ProjectInfo, sections: &[Section]) -> String {
    let mut body = String::new();
    for section in sections {
        body.push_str(&render_section(section));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{STYLESHEET}
</style>
</head>
<body>
<div class="no-print hint">Print this page (Ctrl+P) to save it as a PDF.</div>
{body}</body>
</html>
"#,
        title = escape(&info.product_name),
        body = body,
    )
}

fn render_section(section: &Section) -> String {
    let style = format!(
        "background-color:{};color:{}",
        sanitize_color(&section.background_color),
        sanitize_color(&section.text_color),
    );
    let inner = match section.section_type {
        SectionType::Hero => render_hero(section),
        SectionType::Features => render_features(section),
        SectionType::Spec => render_spec(section),
        _ => render_generic(section),
    };
    format!(
        "<section class=\"sec sec-{kind}\" style=\"{style}\">\n{inner}</section>\n",
        kind = section.section_type.name(),
        style = style,
        inner = inner,
    )
}

fn render_hero(section: &Section) -> String {
    let image = section
        .image
        .as_ref()
        .map(|img| format!("<img src=\"{}\" alt=\"\">\n", escape(img.as_src())))
        .unwrap_or_default();
    format!(
        "<div class=\"hero\">\n<div>\n<h1>{}</h1>\n<p>{}</p>\n</div>\n<div>\n{}</div>\n</div>\n",
        escape(&section.title),
        escape_multiline(&section.content),
        image,
    )
}

fn render_features(section: &Section) -> String {
    let cards: String = section
        .content_lines()
        .map(|line| format!("<div class=\"card\">{}</div>\n", escape(line)))
        .collect();
    format!(
        "<h2>{}</h2>\n<div class=\"grid\">\n{}</div>\n",
        escape(&section.title),
        cards,
    )
}

fn render_spec(section: &Section) -> String {
    format!(
        "<h2>{}</h2>\n<pre>{}</pre>\n",
        escape(&section.title),
        escape(&section.content),
    )
}

fn render_generic(section: &Section) -> String {
    let image = section
        .image
        .as_ref()
        .map(|img| format!("<img src=\"{}\" alt=\"\">\n", escape(img.as_src())))
        .unwrap_or_default();
    format!(
        "<div class=\"center\">\n<h2>{}</h2>\n<p>{}</p>\n{}</div>\n",
        escape(&section.title),
        escape_multiline(&section.content),
        image,
    )
}

/// Minimal HTML escaping for text nodes and attribute values
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escaped text with newlines kept as line breaks
fn escape_multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>\n")
}

/// Only pass through colors that look like hex codes; anything else would
/// break out of the inline style attribute.
fn sanitize_color(color: &str) -> &str {
    let valid = color.starts_with('#')
        && (color.len() == 4 || color.len() == 7)
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        color
    } else {
        "#ffffff"
    }
}

const STYLESHEET: &str = r#"* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; }
.sec { padding: 48px 32px; }
.hero { display: flex; gap: 32px; align-items: center; }
.hero > div { flex: 1; }
.hero h1 { font-size: 2.4em; margin: 0 0 12px; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.card { border: 1px solid rgba(0,0,0,0.15); border-radius: 8px; padding: 16px; }
.center { text-align: center; max-width: 720px; margin: 0 auto; }
img { max-width: 100%; border-radius: 8px; }
pre { white-space: pre-wrap; font-family: inherit; }
.hint { padding: 8px 32px; background: #fef3c7; font-size: 0.9em; }
@media print {
  .no-print { display: none; }
  .sec { break-inside: avoid; }
}"#;
