/// Binary export in the scardoc format read by the external documentation
/// viewer.
///
/// Layout (all integers are 4-byte signed little-endian, strings are ASCII
/// with a length prefix and no terminator):
///
/// ```text
/// count
/// per entry, sorted by name:
///   function: len result | len name | argc | argc * (len "type name") | len description
///   constant: len name | 0
/// ```
///
/// Records carry no kind tag. The viewer tells functions and constants apart
/// by convention, so the layout must stay exactly as is.

use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use tempfile::{Builder, NamedTempFile};

use crate::error::ExportError;
use crate::model::{Constant, DocContainer, Entry, Function};
use crate::wrap::wrap_description;

/// How the output file is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write to a temporary file next to the target, rename on success.
    #[default]
    Atomic,
    /// Stream straight into the target. A failure can leave it truncated.
    Direct,
}

/// What a successful export wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub entries: usize,
    pub bytes: u64,
}

// ============================================================================
// Helpers
// ============================================================================

fn write_len<W: Write>(w: &mut W, what: &'static str, len: usize) -> Result<(), ExportError> {
    let n = i32::try_from(len).map_err(|_| ExportError::TooLarge { what, len })?;
    w.write_i32::<LittleEndian>(n)?;
    Ok(())
}

fn write_field<W: Write>(w: &mut W, field: &'static str, value: &str) -> Result<(), ExportError> {
    if !value.is_ascii() {
        return Err(ExportError::NonAscii {
            field,
            value: value.to_string(),
        });
    }
    write_len(w, field, value.len())?;
    w.write_all(value.as_bytes())?;
    Ok(())
}

fn write_function<W: Write>(w: &mut W, func: &Function) -> Result<(), ExportError> {
    write_field(w, "result type", &func.result)?;
    write_field(w, "function name", &func.name)?;
    write_len(w, "argument count", func.args.len())?;
    for arg in &func.args {
        write_field(w, "argument", &arg.signature())?;
    }
    let description = wrap_description(&func.short_desc, &func.ext_desc);
    write_field(w, "description", &description)
}

fn write_constant<W: Write>(w: &mut W, konst: &Constant) -> Result<(), ExportError> {
    write_field(w, "constant name", &konst.name)?;
    w.write_i32::<LittleEndian>(0)?;
    Ok(())
}

fn write_entry<W: Write>(w: &mut W, entry: &Entry) -> Result<(), ExportError> {
    match entry {
        Entry::Function(func) => write_function(w, func),
        Entry::Constant(konst) => write_constant(w, konst),
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Write `entries` in the given order: the count, then one record each.
///
/// Callers normally pass the output of [`DocContainer::finalize`].
pub fn write_scardoc<W: Write>(w: &mut W, entries: &[Entry]) -> Result<(), ExportError> {
    write_len(w, "entry count", entries.len())?;
    for entry in entries {
        write_entry(w, entry)?;
    }
    Ok(())
}

/// Serialize `entries` into memory. `None` when there is nothing to write.
pub fn encode_entries(entries: &[Entry]) -> Result<Option<Vec<u8>>, ExportError> {
    if entries.is_empty() {
        return Ok(None);
    }
    let mut buf = Vec::new();
    write_scardoc(&mut buf, entries)?;
    Ok(Some(buf))
}

/// Finalize `doc` and serialize it into memory.
pub fn encode(doc: &DocContainer) -> Result<Option<Vec<u8>>, ExportError> {
    encode_entries(&doc.finalize())
}

// ============================================================================
// File output
// ============================================================================

/// Temporary file in `dir` that ends up with the permissions `File::create`
/// would give `target`: those of an existing target, otherwise 0o666 less
/// the process umask.
fn staging_file(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // applied through open(2), so the umask still takes effect
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

/// Write `entries` to `path`.
///
/// An empty list is not an error: nothing is created and `None` is returned.
pub fn export_entries(
    entries: &[Entry],
    path: &Path,
    mode: WriteMode,
) -> Result<Option<ExportSummary>, ExportError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let bytes = match mode {
        WriteMode::Direct => {
            let mut out = BufWriter::new(File::create(path)?);
            write_scardoc(&mut out, entries)?;
            out.flush()?;
            out.get_mut().stream_position()?
        }
        WriteMode::Atomic => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let mut out = BufWriter::new(staging_file(dir, path)?);
            write_scardoc(&mut out, entries)?;
            let mut tmp = out.into_inner().map_err(|e| e.into_error())?;
            let bytes = tmp.as_file_mut().stream_position()?;
            tmp.as_file().sync_all()?;
            tmp.persist(path).map_err(|e| e.error)?;
            bytes
        }
    };

    Ok(Some(ExportSummary {
        entries: entries.len(),
        bytes,
    }))
}

/// Finalize `doc` (built-ins added, sorted by name) and write it to `path`.
pub fn export_container(
    doc: &DocContainer,
    path: &Path,
    mode: WriteMode,
) -> Result<Option<ExportSummary>, ExportError> {
    export_entries(&doc.finalize(), path, mode)
}
