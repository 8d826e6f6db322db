use std::path::Path;

use anyhow::{Context, Result};
use scardoc::{export_container, reader, WriteMode};

pub fn generate_file(input: &str, output: &str, direct: bool) -> Result<()> {
    let doc = reader::read_file(Path::new(input))
        .with_context(|| format!("cannot load API description: {input}"))?;
    eprintln!("read {} entries from {}", doc.len(), input);

    let mode = if direct {
        WriteMode::Direct
    } else {
        WriteMode::Atomic
    };

    match export_container(&doc, Path::new(output), mode)
        .with_context(|| format!("cannot write {output}"))?
    {
        Some(summary) => eprintln!(
            "wrote {} ({} entries, {} bytes)",
            output, summary.entries, summary.bytes,
        ),
        None => eprintln!("nothing to write"),
    }
    Ok(())
}
