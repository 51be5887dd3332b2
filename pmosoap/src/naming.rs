//! Résolution des noms qualifiés d'éléments XML.
//!
//! Un nom qualifié est la paire `(namespace, local)`. Il est lu soit depuis
//! les champs de l'élément (documents parsés), soit depuis la notation
//! `{namespace}local` portée par le nom lui-même.

use std::fmt;
use xmltree::Element;

/// Nom qualifié d'un élément
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// URI du namespace, `None` si l'élément n'est pas qualifié
    pub namespace: Option<String>,

    /// Nom local de l'élément
    pub local: String,
}

impl QualifiedName {
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local: local.into(),
        }
    }

    /// Découpe un tag en notation `{namespace}local`.
    ///
    /// Sans accolades, le tag entier devient le nom local.
    pub fn parse(tag: &str) -> Self {
        if let Some(open) = tag.find('{') {
            if let Some(close) = tag[open + 1..].find('}') {
                let close = open + 1 + close;
                return Self {
                    namespace: Some(tag[open + 1..close].to_string()),
                    local: tag[close + 1..].to_string(),
                };
            }
        }
        Self {
            namespace: None,
            local: tag.to_string(),
        }
    }

    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Résout le nom qualifié d'un élément. Ne peut pas échouer.
pub fn resolve_name(element: &Element) -> QualifiedName {
    match &element.namespace {
        Some(ns) => QualifiedName::new(Some(ns.as_str()), element.name.clone()),
        None => QualifiedName::parse(&element.name),
    }
}
