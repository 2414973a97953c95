//! Message-body corpus loading
//!
//! The corpus is a headerless, line-oriented CSV: one candidate body per
//! record, first field taken, remaining fields ignored. A leading quoted
//! field may contain commas and doubled quotes.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Load all candidate message bodies from `path`.
///
/// # Errors
///
/// Fails if the file cannot be read or yields no usable records.
pub async fn load(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .await
        .with_context(|| format!("failed to open corpus {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let mut bodies = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if let Some(body) = first_field(&line) {
            bodies.push(body);
        }
    }

    if bodies.is_empty() {
        bail!("corpus {} is empty", path.display());
    }
    Ok(bodies)
}

/// Extract the first CSV field of a record, or None for blank records.
fn first_field(line: &str) -> Option<String> {
    let line = line.trim_end_matches(['\r']);
    if line.trim().is_empty() {
        return None;
    }

    let field = match line.strip_prefix('"') {
        Some(rest) => {
            // Quoted field: read to the closing quote, "" unescapes to "
            let mut out = String::new();
            let mut chars = rest.chars().peekable();
            while let Some(c) = chars.next() {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        out.push('"');
                    } else {
                        break;
                    }
                } else {
                    out.push(c);
                }
            }
            out
        }
        None => line.split(',').next().unwrap_or_default().to_string(),
    };

    if field.trim().is_empty() {
        None
    } else {
        Some(field)
    }
}
