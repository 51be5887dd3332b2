//! Valeurs échangées avec la logique métier.
//!
//! [`Value`] est à la fois le résultat du décodeur et l'entrée de
//! l'encodeur. Les quatre formes sont exhaustives : l'encodeur n'a pas à
//! deviner la nature d'une valeur.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Map ordonnée nom → valeur
pub type ValueMap = IndexMap<String, Value>;

/// Valeur structurée non typée.
///
/// Sérialisée sans étiquette (`null`, chaîne, tableau, objet). La
/// désérialisation passe par [`serde_json::Value`] : nombres et booléens
/// deviennent du texte, comme avec `From<serde_json::Value>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Valeur explicitement absente (nil)
    #[default]
    Absent,

    /// Scalaire, toujours sous forme textuelle
    Text(String),

    /// Séquence ordonnée
    List(Vec<Value>),

    /// Structure à clés, dans l'ordre d'insertion
    Map(ValueMap),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Accès à une entrée d'une map, `None` pour les autres formes
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

macro_rules! impl_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Text(v.to_string())
                }
            }
        )*
    };
}

impl_from_display!(bool, i32, i64, u32, u64, usize, f64);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Absent,
            Json::Bool(b) => b.into(),
            Json::Number(n) => Value::Text(n.to_string()),
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => map.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_shapes() {
        let value = Value::from(json!({
            "name": "bob",
            "age": 42,
            "admin": false,
            "tags": ["a", "b"],
            "manager": null,
        }));

        assert_eq!(value.get("name"), Some(&Value::text("bob")));
        assert_eq!(value.get("age"), Some(&Value::text("42")));
        assert_eq!(value.get("admin"), Some(&Value::text("false")));
        assert_eq!(
            value.get("tags").and_then(Value::as_list).map(|l| l.len()),
            Some(2)
        );
        assert!(value.get("manager").unwrap().is_absent());
    }

    #[test]
    fn test_option_and_vec_conversions() {
        assert_eq!(Value::from(None::<i32>), Value::Absent);
        assert_eq!(Value::from(Some(3)), Value::text("3"));
        assert_eq!(
            Value::from(vec!["x", "y"]),
            Value::List(vec![Value::text("x"), Value::text("y")])
        );
    }

    #[test]
    fn test_serde_is_untagged() {
        let value: Value = [("a", Value::text("1")), ("b", Value::Absent)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"a":"1","b":null}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_deserialize_scalars_as_text() {
        let value: Value =
            serde_json::from_str(r#"{"age": 42, "ratio": 1.5, "admin": true, "tags": [1, "b"]}"#)
                .unwrap();

        assert_eq!(value.get("age"), Some(&Value::text("42")));
        assert_eq!(value.get("ratio"), Some(&Value::text("1.5")));
        assert_eq!(value.get("admin"), Some(&Value::text("true")));
        assert_eq!(
            value.get("tags"),
            Some(&Value::List(vec![Value::text("1"), Value::text("b")]))
        );
    }

    #[test]
    fn test_deserialize_keeps_key_order() {
        let value: Value = serde_json::from_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let keys: Vec<&str> = value
            .as_map()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let value: Value = serde_yaml::from_str("name: bob\nage: 3\nboss: ~\n").unwrap();

        assert_eq!(value.get("name"), Some(&Value::text("bob")));
        assert_eq!(value.get("age"), Some(&Value::text("3")));
        assert_eq!(value.get("boss"), Some(&Value::Absent));
    }
}
