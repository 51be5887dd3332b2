//! SOAP Faults

use super::{NAMESPACES, SoapError, builder::build_soap_envelope_with_body, soap_env_name};
use crate::{
    encode::encode,
    value::{Value, ValueMap},
};
use xmltree::{Element, XMLNode};

/// Description d'une erreur rendue dans un Fault.
///
/// `error_type` devient le `faultcode`, `message` le `faultstring`. La
/// description complète, champs additionnels compris, est encodée dans
/// `detail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescription {
    /// Catégorie de l'erreur (ex: "BadRequest", "InvalidInput")
    pub error_type: String,

    /// Message lisible
    pub message: String,

    /// Champs additionnels, dans l'ordre d'insertion
    pub details: ValueMap,
}

impl ErrorDescription {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: ValueMap::new(),
        }
    }

    /// Ajoute un champ de détail
    pub fn with_detail(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(name.into(), value.into());
        self
    }

    /// Forme encodable : `type`, `message` puis les détails
    pub fn to_value(&self) -> Value {
        let mut map = ValueMap::new();
        map.insert("type".to_string(), Value::text(&self.error_type));
        map.insert("message".to_string(), Value::text(&self.message));
        for (name, value) in &self.details {
            map.entry(name.clone()).or_insert_with(|| value.clone());
        }
        Value::Map(map)
    }
}

impl From<&SoapError> for ErrorDescription {
    fn from(error: &SoapError) -> Self {
        ErrorDescription::new(error.fault_type(), error.to_string())
    }
}

impl From<SoapError> for ErrorDescription {
    fn from(error: SoapError) -> Self {
        ErrorDescription::from(&error)
    }
}

fn text_element(name: &str, text: String) -> Element {
    let mut element = Element::new(name);
    element.children.push(XMLNode::Text(text));
    element
}

/// Construit un SOAP Fault XML
///
/// # Returns
///
/// Le document `Envelope/Body/Fault/{faultcode, faultstring, detail}`
/// sérialisé, avec déclaration XML.
pub fn build_soap_fault(error: &ErrorDescription, pretty_print: bool) -> Result<String, SoapError> {
    let mut fault = Element::new(&soap_env_name("Fault"));

    fault.children.push(XMLNode::Element(text_element(
        "faultcode",
        format!("{}:{}", NAMESPACES.soap_env_prefix, error.error_type),
    )));
    fault.children.push(XMLNode::Element(text_element(
        "faultstring",
        error.message.clone(),
    )));

    let mut detail = Element::new("detail");
    encode(&mut detail, &error.to_value(), None)?;
    fault.children.push(XMLNode::Element(detail));

    build_soap_envelope_with_body(fault, pretty_print)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple_fault() {
        let error = ErrorDescription::new("BadRequest", "No Body element.");
        let xml = build_soap_fault(&error, true).unwrap();

        assert!(xml.contains("<se:Fault>"));
        assert!(xml.contains("<faultcode>se:BadRequest</faultcode>"));
        assert!(xml.contains("<faultstring>No Body element.</faultstring>"));
        assert!(xml.contains("<type>BadRequest</type>"));
    }

    #[test]
    fn test_detail_carries_extra_fields() {
        let error = ErrorDescription::new("InvalidInput", "bad value")
            .with_detail("field", "age")
            .with_detail("allowed", vec!["1", "2"]);
        let xml = build_soap_fault(&error, false).unwrap();

        assert!(xml.contains(
            "<detail><type>InvalidInput</type><message>bad value</message>\
             <field>age</field><allowed><item>1</item><item>2</item></allowed></detail>"
        ));
    }

    #[test]
    fn test_details_cannot_shadow_type_and_message() {
        let error = ErrorDescription::new("A", "m").with_detail("type", "B");
        assert_eq!(error.to_value().get("type"), Some(&Value::text("A")));
    }

    #[test]
    fn test_message_is_escaped() {
        let error = ErrorDescription::new("BadRequest", "a < b & c");
        let xml = build_soap_fault(&error, false).unwrap();
        assert!(xml.contains("<faultstring>a &lt; b &amp; c</faultstring>"));
    }

    #[test]
    fn test_from_soap_error() {
        let error = ErrorDescription::from(SoapError::MultipleBodies);
        assert_eq!(error.error_type, "BadRequest");
        assert!(error.message.contains("only one"));
    }
}
