use std::path::Path;

use anyhow::{Context, Result};
use scardoc::{reader, DocContainer};

/// Every entry in input order, one block per entry, followed by the count.
pub fn render_model(doc: &DocContainer) -> String {
    let mut out = String::new();
    for entry in doc.entries() {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out.push_str(&doc.len().to_string());
    out.push('\n');
    out
}

pub fn inspect_file(input: &str) -> Result<()> {
    let doc = reader::read_file(Path::new(input))
        .with_context(|| format!("cannot load API description: {input}"))?;
    print!("{}", render_model(&doc));
    Ok(())
}
