//! Server-rendered HTML pages.

use journal_core::Entry;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 44rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
header { display: flex; justify-content: space-between; align-items: baseline; }
.error { background: #fde8e8; color: #9b1c1c; padding: .6rem .8rem; border-radius: 4px; margin-bottom: 1rem; }
form label { display: block; margin-top: .8rem; }
input[type=text], input[type=password], textarea { width: 100%; padding: .5rem; box-sizing: border-box; }
textarea { min-height: 12rem; }
button { margin-top: 1rem; padding: .5rem 1.2rem; }
article { border-bottom: 1px solid #ddd; padding: 1rem 0; }
article h2 { margin: 0 0 .3rem; }
.meta { color: #777; font-size: .85rem; }
.content { white-space: pre-wrap; }
"#;

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn error_block(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<div class="error">{}</div>"#, escape(e)))
        .unwrap_or_default()
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head><body>
{body}
</body></html>"#
    )
}

pub fn render_login(error: Option<&str>) -> String {
    let error_html = error_block(error);
    page(
        "Journal - Login",
        &format!(
            r#"<h1>Journal</h1>
{error_html}
<form method="POST" action="/login">
  <label for="password">Password</label>
  <input type="password" id="password" name="password" required autofocus autocomplete="current-password">
  <button type="submit">Log in</button>
</form>"#
        ),
    )
}

pub fn render_index(user: Option<&str>, entries: &[Entry]) -> String {
    let greeting = user
        .map(|name| format!("Hello, {}", escape(name)))
        .unwrap_or_default();

    let list = if entries.is_empty() {
        r#"<p class="meta">No entries yet.</p>"#.to_string()
    } else {
        entries
            .iter()
            .map(render_entry)
            .collect::<Vec<_>>()
            .join("\n")
    };

    page(
        "Journal",
        &format!(
            r#"<header>
  <h1>Journal</h1>
  <span>{greeting} &middot; <a href="/logout">Log out</a></span>
</header>
<p><a href="/new">New entry</a></p>
<section id="entries">
{list}
</section>"#
        ),
    )
}

fn render_entry(entry: &Entry) -> String {
    format!(
        r#"<article id="entry-{id}">
  <h2>{title}</h2>
  <div class="meta">{created_at} &middot; <a href="/delete/{id}">Delete</a></div>
  <div class="content">{content}</div>
</article>"#,
        id = entry.id,
        title = escape(&entry.title),
        created_at = entry.created_at_display(),
        content = escape(&entry.content),
    )
}

pub fn render_new(error: Option<&str>) -> String {
    let error_html = error_block(error);
    page(
        "Journal - New entry",
        &format!(
            r#"<h1>New entry</h1>
{error_html}
<form method="POST" action="/new">
  <label for="title">Title</label>
  <input type="text" id="title" name="title">
  <label for="content">Content</label>
  <textarea id="content" name="content"></textarea>
  <button type="submit">Save</button>
</form>
<p><a href="/">Back to entries</a></p>"#
        ),
    )
}
