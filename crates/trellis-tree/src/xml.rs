use crate::Node;

#[derive(Debug, PartialEq, thiserror::Error, Clone)]
pub enum WriteError {
    #[error("`{0}` is not a valid XML element name")]
    InvalidName(String),
    #[error("`{0}` is not a valid XML attribute name")]
    InvalidAttributeName(String),
}

impl Node {
    /// Serializes the subtree rooted at this node as XML on one line.
    pub fn to_xml(&self) -> Result<String, WriteError> {
        let mut out = String::new();
        write_node(self, &mut out, None)?;
        Ok(out)
    }

    /// Serializes the subtree with two-space indentation, one element per line.
    pub fn to_xml_pretty(&self) -> Result<String, WriteError> {
        let mut out = String::new();
        write_node(self, &mut out, Some(0))?;
        Ok(out)
    }
}

fn write_node(node: &Node, out: &mut String, indent: Option<usize>) -> Result<(), WriteError> {
    let name = node.name();
    if !is_valid_name(&name) {
        return Err(WriteError::InvalidName(name));
    }

    if let Some(level) = indent {
        out.push_str(&"  ".repeat(level));
    }
    out.push('<');
    out.push_str(&name);
    let attributes = node.attributes();
    for (key, value) in attributes.iter() {
        if !is_valid_name(key) {
            return Err(WriteError::InvalidAttributeName(key.clone()));
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        push_escaped(out, value);
        out.push('"');
    }

    let text = node.text();
    let children = node.children();
    if text.is_none() && children.is_empty() {
        out.push_str("/>");
        if indent.is_some() {
            out.push('\n');
        }
        return Ok(());
    }

    out.push('>');
    if let Some(text) = &text {
        push_escaped(out, &text.to_string());
    }
    if children.is_empty() {
        // Text-only elements keep their closing tag on the same line.
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
        if indent.is_some() {
            out.push('\n');
        }
        return Ok(());
    }

    if indent.is_some() {
        out.push('\n');
    }
    for child in &children {
        write_node(child, out, indent.map(|level| level + 1))?;
    }
    if let Some(level) = indent {
        out.push_str(&"  ".repeat(level));
    }
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
    if indent.is_some() {
        out.push('\n');
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}
