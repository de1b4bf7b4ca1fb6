use roxmltree::{Document, Node};

use crate::error::{Error, Result};

/// Where Control Center keeps its accessories
pub const ACCESSORY_QUERY: &str = "/AppSettings/Application/Accessories/Accessory";

/// An absolute element path such as `/a/b/c`.
///
/// Only plain, unprefixed element names are supported; each step matches the
/// child elements of that name which are not in any namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryQuery {
    steps: Vec<String>,
}

impl AccessoryQuery {
    pub fn compile(expr: &str) -> Result<AccessoryQuery> {
        let rest = if let Some(rest) = expr.strip_prefix('/') {
            rest
        } else {
            return Err(Error::Query(format!("'{}' is not an absolute path", expr)));
        };

        let steps = rest
            .split('/')
            .map(|step| {
                if is_name(step) {
                    Ok(step.to_string())
                } else {
                    Err(Error::Query(format!("bad step '{}' in '{}'", step, expr)))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AccessoryQuery { steps })
    }

    /// Matching elements in document order
    pub fn select<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        let mut nodes = vec![doc.root()];
        for step in &self.steps {
            nodes = nodes
                .iter()
                .flat_map(|node| node.children())
                .filter(|child| {
                    child.is_element()
                        && child.tag_name().namespace().is_none()
                        && child.tag_name().name() == step
                })
                .collect();
        }
        nodes
    }
}

fn is_name(step: &str) -> bool {
    let mut chars = step.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}
