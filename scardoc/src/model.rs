/// In-memory documentation model.
///
/// A `DocContainer` is filled by an input front end (see `reader`) through
/// append-only calls and handed to the exporter once complete. Finalizing
/// derives the sorted entry list that is actually written; the container
/// itself is never touched by export.

use std::fmt;

/// Result type assumed when the source omits one.
pub const DEFAULT_RESULT: &str = "Void";

/// Short description shared by both built-in entries.
const BUILTIN_SHORT_DESC: &str = "Loads data:scar/fileName and executes it.";

/// A single function argument: `(type, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub ty: String,
    /// May be empty (e.g. a lone `Void` argument).
    pub name: String,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// `type name`, or just `type` when the argument is unnamed.
    pub fn signature(&self) -> String {
        if self.name.is_empty() {
            self.ty.clone()
        } else {
            format!("{} {}", self.ty, self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub result: String,
    pub args: Vec<Argument>,
    pub short_desc: String,
    pub ext_desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    /// Informational only, never exported.
    pub value: String,
    pub short_desc: String,
}

/// One documented API item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Function(Function),
    Constant(Constant),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Function(f) => &f.name,
            Entry::Constant(c) => &c.name,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Function(func) => {
                let args: Vec<String> = func.args.iter().map(Argument::signature).collect();
                writeln!(f, "Function name: {}", func.name)?;
                writeln!(f, "  Returns: {}", func.result)?;
                writeln!(f, "  Arguments: {}", args.join(", "))?;
                write!(f, "  Description: {}\n\n{}", func.short_desc, func.ext_desc)
            }
            Entry::Constant(c) => {
                writeln!(f, "Constant name: {}", c.name)?;
                writeln!(f, "  Value: {}", c.value)?;
                write!(f, "  Description: {}", c.short_desc)
            }
        }
    }
}

/// The two functions every exported blob carries: `import` and `print`.
pub fn builtin_functions() -> [Function; 2] {
    [
        Function {
            name: "print".to_string(),
            result: DEFAULT_RESULT.to_string(),
            args: vec![
                Argument::new("Any", "s1"),
                Argument::new("Any", "s2"),
                Argument::new("Any", "s3"),
                Argument::new("Any", "..."),
            ],
            short_desc: BUILTIN_SHORT_DESC.to_string(),
            ext_desc: String::new(),
        },
        Function {
            name: "import".to_string(),
            result: DEFAULT_RESULT.to_string(),
            args: vec![Argument::new("String", "fileName")],
            short_desc: BUILTIN_SHORT_DESC.to_string(),
            ext_desc: String::new(),
        },
    ]
}

/// Ordered, append-only collection of entries. Duplicate names are allowed.
#[derive(Debug, Clone, Default)]
pub struct DocContainer {
    entries: Vec<Entry>,
}

impl DocContainer {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        result: impl Into<String>,
        args: Vec<Argument>,
        short_desc: impl Into<String>,
        ext_desc: impl Into<String>,
    ) {
        self.entries.push(Entry::Function(Function {
            name: name.into(),
            result: result.into(),
            args,
            short_desc: short_desc.into(),
            ext_desc: ext_desc.into(),
        }));
    }

    pub fn add_constant(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        short_desc: impl Into<String>,
    ) {
        self.entries.push(Entry::Constant(Constant {
            name: name.into(),
            value: value.into(),
            short_desc: short_desc.into(),
        }));
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the export list: every entry plus the built-ins, stable-sorted
    /// by name using byte-wise comparison.
    ///
    /// Built-ins are appended after the container's own entries, so a
    /// user-supplied `print` sorts ahead of the built-in one.
    pub fn finalize(&self) -> Vec<Entry> {
        let mut items = self.entries.clone();
        items.extend(builtin_functions().into_iter().map(Entry::Function));
        // `sort_by` is stable
        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }
}
