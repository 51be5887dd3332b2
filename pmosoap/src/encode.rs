//! Encodage [`Value`] → XML, guidé par la forme de la valeur.

use crate::{
    soap::{ITEM_ELEMENT, NAMESPACES},
    value::Value,
};
use thiserror::Error;
use xmltree::{Element, XMLNode};

/// Erreur d'encodage : la valeur ne peut pas être écrite en XML
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("'{0}' is not a valid XML element name")]
    InvalidName(String),
}

/// Nom de l'attribut nil, préfixé par l'alias du namespace XML Schema instance
pub fn nil_attribute() -> String {
    format!("{}:nil", NAMESPACES.xsi_prefix)
}

/// Nom d'élément XML non préfixé (NCName simplifié)
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn new_child(name: &str, prefix: Option<&str>) -> Result<Element, EncodeError> {
    if !is_valid_name(name) {
        return Err(EncodeError::InvalidName(name.to_string()));
    }
    let mut child = Element::new(name);
    child.prefix = prefix.map(str::to_string);
    Ok(child)
}

/// Encode `value` dans `parent`, modifié sur place, et le retourne.
///
/// `prefix` qualifie les éléments créés ; il doit être déclaré sur un
/// ancêtre du document produit. Le nom local reste la clé de la map.
///
/// Une clé qui n'est pas un nom d'élément XML valide (`"a b"`, `"1x"`,
/// `"a:b"`) est refusée avec [`EncodeError::InvalidName`].
///
/// # Example
///
/// ```
/// use pmosoap::{Value, encode};
/// use xmltree::Element;
///
/// let mut root = Element::new("user");
/// let value: Value = [("name", Value::text("bob")), ("boss", Value::Absent)]
///     .into_iter()
///     .collect();
/// encode(&mut root, &value, None)?;
///
/// assert_eq!(root.get_child("name").unwrap().get_text().unwrap(), "bob");
/// assert!(root.get_child("boss").unwrap().attributes.contains_key("xsi:nil"));
/// # Ok::<(), pmosoap::EncodeError>(())
/// ```
pub fn encode<'a>(
    parent: &'a mut Element,
    value: &Value,
    prefix: Option<&str>,
) -> Result<&'a mut Element, EncodeError> {
    match value {
        Value::List(items) => {
            for item in items {
                let mut child = new_child(ITEM_ELEMENT, prefix)?;
                encode(&mut child, item, prefix)?;
                parent.children.push(XMLNode::Element(child));
            }
        }
        Value::Map(entries) => {
            for (name, item) in entries {
                let mut child = new_child(name, prefix)?;
                encode(&mut child, item, prefix)?;
                parent.children.push(XMLNode::Element(child));
            }
        }
        Value::Text(text) => {
            if !text.is_empty() {
                parent.children.push(XMLNode::Text(text.clone()));
            }
        }
        Value::Absent => {
            parent
                .attributes
                .insert(nil_attribute(), "true".to_string());
        }
    }
    Ok(parent)
}
