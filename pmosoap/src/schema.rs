//! Descripteurs de types utilisés pour décoder les arguments.
//!
//! Le modèle est fourni par la couche de déclaration des opérations ; ce
//! crate ne fait que le lire. Il est immuable et peut être partagé entre
//! requêtes concurrentes.

/// Noeud de schéma
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Valeur feuille (texte ou absente)
    Scalar,

    /// Liste ordonnée dont tous les membres partagent le même type
    Sequence(Box<SchemaNode>),

    /// Structure à champs nommés, dans l'ordre de déclaration
    Record(Vec<Field>),
}

/// Champ nommé d'un [`SchemaNode::Record`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub schema: SchemaNode,
}

impl Field {
    pub fn new(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

impl SchemaNode {
    pub fn scalar() -> Self {
        SchemaNode::Scalar
    }

    pub fn sequence(element: SchemaNode) -> Self {
        SchemaNode::Sequence(Box::new(element))
    }

    /// Construit un record depuis des paires `(nom, type)`.
    ///
    /// ```
    /// use pmosoap::SchemaNode;
    ///
    /// let user = SchemaNode::record([
    ///     ("name", SchemaNode::scalar()),
    ///     ("tags", SchemaNode::sequence(SchemaNode::scalar())),
    /// ]);
    /// assert!(user.field("tags").is_some());
    /// ```
    pub fn record<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        SchemaNode::Record(
            fields
                .into_iter()
                .map(|(name, schema)| Field::new(name, schema))
                .collect(),
        )
    }

    /// Type déclaré d'un champ, `None` hors record ou si le champ n'existe pas
    pub fn field(&self, name: &str) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Record(fields) => fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| &f.schema),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self, SchemaNode::Scalar)
    }
}
