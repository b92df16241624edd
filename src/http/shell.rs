//! Static HTML shell served for unmatched routes.
//!
//! The browser client does its own routing; the gateway hands out one
//! document for every path it does not recognize.

use std::fs;
use std::io;

/// Built-in shell used when no `ui.index_path` is configured.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Helpdesk</title>
</head>
<body>
  <div id="app"></div>
</body>
</html>
"#;

/// Load the shell document once at startup.
///
/// A configured path that cannot be read is a startup failure, not a
/// per-request fallback.
pub fn load(index_path: Option<&str>) -> io::Result<String> {
    match index_path {
        Some(path) => fs::read_to_string(path),
        None => Ok(DEFAULT_SHELL.to_string()),
    }
}
