/// XML front end: builds a `DocContainer` from an API description.
///
/// Expected shape (tag names are case-sensitive):
///
/// ```text
/// <ROOT>
///   <GROUP>
///     <FUNCTION name="...">
///       <RESULT type="..."/>            optional, defaults to Void
///       <ARGS><ARG type="..." name="..."/>...</ARGS>   optional
///       <SHORTDESC>...</SHORTDESC>      optional
///       <EXTDESC>...</EXTDESC>          optional
///     </FUNCTION>
///     <CONST name="..." value="..."><SHORTDESC>...</SHORTDESC></CONST>
///   </GROUP>
/// </ROOT>
/// ```
///
/// Group and root tag names are not checked. Unknown item tags are skipped.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::ReadError;
use crate::model::{Argument, DocContainer, DEFAULT_RESULT};

/// Indentation inserted for a `<TAB/>` marker.
const TAB: &str = "    ";

/// Read and parse the XML file at `path`.
pub fn read_file(path: &Path) -> Result<DocContainer, ReadError> {
    let source = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&source)
}

/// Parse an XML API description held in memory.
pub fn parse_str(xml: &str) -> Result<DocContainer, ReadError> {
    let doc = Document::parse(xml)?;
    let mut container = DocContainer::new();

    for group in doc.root_element().children().filter(Node::is_element) {
        for item in group.children().filter(Node::is_element) {
            match item.tag_name().name() {
                "FUNCTION" => read_function(item, &mut container)?,
                "CONST" => read_constant(item, &mut container)?,
                _ => {}
            }
        }
    }

    Ok(container)
}

fn read_function(node: Node, container: &mut DocContainer) -> Result<(), ReadError> {
    let name = required(node, "name")?;

    let result = match child(node, "RESULT") {
        Some(res) => required(res, "type")?,
        None => DEFAULT_RESULT,
    };

    let mut args = Vec::new();
    if let Some(list) = child(node, "ARGS") {
        for arg in list.children().filter(|n| n.has_tag_name("ARG")) {
            args.push(Argument::new(required(arg, "type")?, required(arg, "name")?));
        }
    }

    container.add_function(
        name,
        result,
        args,
        description(child(node, "SHORTDESC")),
        description(child(node, "EXTDESC")),
    );
    Ok(())
}

fn read_constant(node: Node, container: &mut DocContainer) -> Result<(), ReadError> {
    let name = required(node, "name")?;
    let value = required(node, "value")?;
    container.add_constant(name, value, description(child(node, "SHORTDESC")));
    Ok(())
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn required<'a, 'input>(
    node: Node<'a, 'input>,
    attribute: &'static str,
) -> Result<&'a str, ReadError> {
    node.attribute(attribute)
        .ok_or_else(|| ReadError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute,
            position: node.document().text_pos_at(node.range().start).to_string(),
        })
}

/// Flatten a description element.
///
/// `<BR/>` becomes a newline and `<TAB/>` four spaces, each followed by the
/// text after the marker. Other markup is dropped along with its trailing
/// text. A description that opens with markup instead of text is empty.
/// Comments and processing instructions are invisible: the text on either
/// side of them is joined.
fn description(node: Option<Node>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let Some(mut out) = text_run(node.first_child()) else {
        return String::new();
    };

    for marker in node.children().filter(Node::is_element) {
        let prefix = match marker.tag_name().name() {
            "BR" => "\n",
            "TAB" => TAB,
            _ => continue,
        };
        out.push_str(prefix);
        out.push_str(&text_run(marker.next_sibling()).unwrap_or_default());
    }
    out
}

/// Concatenated text of `first` and its following siblings up to the next
/// element. `None` when that stretch holds no text node at all.
fn text_run(first: Option<Node>) -> Option<String> {
    let mut run: Option<String> = None;
    let siblings = std::iter::successors(first, |n| n.next_sibling());
    for node in siblings.take_while(|n| !n.is_element()) {
        if let Some(text) = node.text().filter(|_| node.is_text()) {
            run.get_or_insert_with(String::new).push_str(text);
        }
    }
    run
}
