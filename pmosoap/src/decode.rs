//! Décodage XML → [`Value`] guidé par un [`SchemaNode`].

use crate::{
    naming::resolve_name,
    schema::SchemaNode,
    value::{Value, ValueMap},
};
use indexmap::map::Entry;
use std::collections::HashMap;
use thiserror::Error;
use xmltree::Element;

/// Erreur de décodage : le document ne correspond pas au schéma
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Element '{element}' has no field named '{field}'")]
    UnknownField { element: String, field: String },

    #[error("Couldn't decode children of '{0}' against a scalar schema")]
    UnexpectedChildren(String),
}

/// Itère sur les enfants de type élément (texte et commentaires ignorés)
pub(crate) fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|n| n.as_element())
}

/// Décode un élément selon le schéma attendu.
///
/// - sans enfant élément : [`Value::Absent`] si le texte est vide ou
///   manquant, [`Value::Text`] sinon (espaces compris), quel que soit le
///   schéma ;
/// - [`SchemaNode::Sequence`] : chaque enfant est décodé avec le type des
///   éléments, dans l'ordre du document, sans regarder son nom ;
/// - [`SchemaNode::Record`] : chaque enfant est décodé avec le type du champ
///   portant son nom local. Les noms répétés sont regroupés en liste (voir
///   `accumulate_repeated`).
pub fn decode(element: &Element, schema: &SchemaNode) -> Result<Value, DecodeError> {
    let children: Vec<&Element> = child_elements(element).collect();

    if children.is_empty() {
        return Ok(match element.get_text() {
            Some(text) if !text.is_empty() => Value::Text(text.into_owned()),
            _ => Value::Absent,
        });
    }

    match schema {
        SchemaNode::Sequence(item) => children
            .into_iter()
            .map(|child| decode(child, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        SchemaNode::Record(fields) => {
            let lookup: HashMap<&str, &SchemaNode> = fields
                .iter()
                .map(|f| (f.name.as_str(), &f.schema))
                .collect();

            let mut result = ValueMap::new();
            for child in children {
                let name = resolve_name(child).local;
                let field = lookup
                    .get(name.as_str())
                    .ok_or_else(|| DecodeError::UnknownField {
                        element: resolve_name(element).local,
                        field: name.clone(),
                    })?;
                let value = decode(child, field)?;
                accumulate_repeated(&mut result, name, value);
            }
            Ok(Value::Map(result))
        }
        SchemaNode::Scalar => Err(DecodeError::UnexpectedChildren(resolve_name(element).local)),
    }
}

/// Insère `value` sous `name`, en regroupant les occurrences répétées.
///
/// Shim de compatibilité : la deuxième occurrence d'un nom transforme
/// l'entrée en liste, quel que soit le type déclaré du champ. Une entrée
/// déjà décodée en liste reçoit directement les occurrences suivantes.
/// Ce n'est pas un support général des séquences.
fn accumulate_repeated(map: &mut ValueMap, name: String, value: Value) {
    match map.entry(name) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(mut entry) => {
            let slot = entry.get_mut();
            if let Value::List(items) = slot {
                items.push(value);
            } else {
                let first = std::mem::take(slot);
                *slot = Value::List(vec![first, value]);
            }
        }
    }
}
