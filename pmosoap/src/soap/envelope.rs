//! Structures de l'enveloppe SOAP et vérifications structurelles.

use super::{NAMESPACES, SoapError};
use crate::{decode::child_elements, naming::resolve_name};
use xmltree::Element;

/// Enveloppe SOAP parsée
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    /// En-tête SOAP optionnel, transporté sans être interprété
    pub header: Option<SoapHeader>,

    /// Corps SOAP contenant l'opération
    pub body: SoapBody,
}

/// En-tête SOAP
#[derive(Debug, Clone)]
pub struct SoapHeader {
    pub content: Element,
}

/// Corps SOAP
#[derive(Debug, Clone)]
pub struct SoapBody {
    pub content: Element,
}

fn is_soap_element(element: &Element, local: &str) -> bool {
    let name = resolve_name(element);
    name.is_in(NAMESPACES.soap_env) && name.local == local
}

impl SoapEnvelope {
    /// Valide la racine d'un document et en extrait Header et Body.
    ///
    /// La racine doit être `Envelope` dans le namespace SOAP exact, et
    /// contenir un et un seul `Body`.
    pub fn from_root(root: Element) -> Result<Self, SoapError> {
        if !is_soap_element(&root, "Envelope") {
            return Err(SoapError::MissingEnvelope);
        }

        let mut header = None;
        let mut bodies = Vec::new();
        for child in child_elements(&root) {
            if is_soap_element(child, "Body") {
                bodies.push(child);
            } else if header.is_none() && is_soap_element(child, "Header") {
                header = Some(SoapHeader {
                    content: child.clone(),
                });
            }
        }

        let body = match bodies.as_slice() {
            [] => return Err(SoapError::MissingBody),
            [body] => SoapBody {
                content: (*body).clone(),
            },
            _ => return Err(SoapError::MultipleBodies),
        };

        Ok(Self { header, body })
    }
}

impl SoapBody {
    /// Élément d'invocation : l'unique enfant élément du Body
    pub fn operation_element(&self) -> Result<&Element, SoapError> {
        let mut children = child_elements(&self.content);
        match (children.next(), children.next()) {
            (None, _) => Err(SoapError::EmptyBody),
            (Some(element), None) => Ok(element),
            (Some(_), Some(_)) => Err(SoapError::MultipleOperations),
        }
    }
}
