//! Parser SOAP : du document brut à l'opération invoquée

use super::{REQUEST_SUFFIX, SoapEnvelope, SoapError};
use crate::naming::resolve_name;
use std::io::BufReader;
use tracing::debug;
use xmltree::{Element, ParserConfig};

/// Opération extraite d'une enveloppe SOAP
#[derive(Debug, Clone)]
pub struct SoapCall {
    /// Nom de l'opération, suffixe `_request` retiré (ex: "getUser")
    pub name: String,

    /// Namespace de l'élément d'invocation
    pub namespace: Option<String>,

    /// Élément d'invocation, conservé pour le décodage des arguments
    pub element: Element,
}

/// Clé de dispatch : nom local sans le suffixe `_request`
pub fn operation_name(local: &str) -> &str {
    local.strip_suffix(REQUEST_SUFFIX).unwrap_or(local)
}

/// Parse un document XML en conservant le texte fait uniquement d'espaces.
///
/// `<a>   </a>` garde son texte `"   "`. Les espaces entre éléments
/// deviennent des nœuds texte, ignorés par le parcours des enfants.
pub fn parse_xml(xml: &[u8]) -> Result<Element, SoapError> {
    let reader = BufReader::new(xml);
    let config = ParserConfig::new().whitespace_to_characters(true);
    Ok(Element::parse_with_config(reader, config)?)
}

/// Parse une enveloppe SOAP complète
pub fn parse_soap_envelope(xml: &[u8]) -> Result<SoapEnvelope, SoapError> {
    SoapEnvelope::from_root(parse_xml(xml)?)
}

/// Parse une enveloppe et en extrait l'opération invoquée
pub fn parse_soap_call(xml: &[u8]) -> Result<SoapCall, SoapError> {
    let envelope = parse_soap_envelope(xml)?;
    SoapCall::from_envelope(&envelope)
}

impl SoapCall {
    pub fn from_envelope(envelope: &SoapEnvelope) -> Result<Self, SoapError> {
        let element = envelope.body.operation_element()?;
        let qname = resolve_name(element);
        let name = operation_name(&qname.local).to_string();

        debug!(operation = %name, element = %qname, "SOAP operation found");

        Ok(Self {
            name,
            namespace: qname.namespace,
            element: element.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode::decode, schema::SchemaNode, value::Value};

    fn envelope(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<se:Envelope xmlns:se="http://schemas.xmlsoap.org/soap/envelope/">{}</se:Envelope>"#,
            body
        )
    }

    #[test]
    fn test_parse_call_strips_request_suffix() {
        let xml = envelope(
            r#"<se:Body><getUser_request><id>1</id></getUser_request></se:Body>"#,
        );
        let call = parse_soap_call(xml.as_bytes()).unwrap();

        assert_eq!(call.name, "getUser");
        assert_eq!(call.element.get_child("id").unwrap().get_text().unwrap(), "1");
    }

    #[test]
    fn test_whitespace_only_argument_is_kept() {
        let xml = envelope(
            r#"<se:Body>
  <getUser_request>
    <id>   </id>
    <name></name>
  </getUser_request>
</se:Body>"#,
        );
        let call = parse_soap_call(xml.as_bytes()).unwrap();
        let schema = SchemaNode::record([
            ("id", SchemaNode::scalar()),
            ("name", SchemaNode::scalar()),
        ]);

        let value = decode(&call.element, &schema).unwrap();
        assert_eq!(value.get("id"), Some(&Value::text("   ")));
        assert_eq!(value.get("name"), Some(&Value::Absent));
    }

    #[test]
    fn test_parse_call_without_suffix() {
        let xml = envelope(r#"<se:Body><getUser/></se:Body>"#);
        assert_eq!(parse_soap_call(xml.as_bytes()).unwrap().name, "getUser");
    }

    #[test]
    fn test_operation_namespace_is_kept() {
        let xml = envelope(
            r#"<se:Body><tns:ping_request xmlns:tns="http://example.com/"/></se:Body>"#,
        );
        let call = parse_soap_call(xml.as_bytes()).unwrap();

        assert_eq!(call.name, "ping");
        assert_eq!(call.namespace.as_deref(), Some("http://example.com/"));
    }

    #[test]
    fn test_header_is_carried() {
        let xml = envelope(
            r#"<se:Header><token>abc</token></se:Header><se:Body><ping/></se:Body>"#,
        );
        let parsed = parse_soap_envelope(xml.as_bytes()).unwrap();

        let header = parsed.header.unwrap();
        assert_eq!(header.content.get_child("token").unwrap().get_text().unwrap(), "abc");
    }

    #[test]
    fn test_missing_envelope() {
        let xml = r#"<?xml version="1.0"?><Envelope><Body><ping/></Body></Envelope>"#;
        assert!(matches!(
            parse_soap_call(xml.as_bytes()),
            Err(SoapError::MissingEnvelope)
        ));
    }

    #[test]
    fn test_envelope_in_wrong_namespace() {
        let xml = r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope"><s:Body><ping/></s:Body></s:Envelope>"#;
        assert!(matches!(
            parse_soap_call(xml.as_bytes()),
            Err(SoapError::MissingEnvelope)
        ));
    }

    #[test]
    fn test_missing_body() {
        let xml = envelope(r#"<se:Header/>"#);
        assert!(matches!(
            parse_soap_call(xml.as_bytes()),
            Err(SoapError::MissingBody)
        ));
    }

    #[test]
    fn test_multiple_bodies() {
        let xml = envelope(r#"<se:Body><a/></se:Body><se:Body><b/></se:Body>"#);
        assert!(matches!(
            parse_soap_call(xml.as_bytes()),
            Err(SoapError::MultipleBodies)
        ));
    }

    #[test]
    fn test_empty_body() {
        let xml = envelope(r#"<se:Body>   </se:Body>"#);
        assert!(matches!(
            parse_soap_call(xml.as_bytes()),
            Err(SoapError::EmptyBody)
        ));
    }

    #[test]
    fn test_body_child_count_is_checked_not_envelope() {
        // un seul Body dans l'enveloppe, mais deux opérations dans le Body
        let xml = envelope(r#"<se:Body><a/><b/></se:Body>"#);
        assert!(matches!(
            parse_soap_call(xml.as_bytes()),
            Err(SoapError::MultipleOperations)
        ));

        // plusieurs enfants dans l'enveloppe, une seule opération dans le Body
        let xml = envelope(r#"<se:Header/><se:Body><a/></se:Body>"#);
        assert_eq!(parse_soap_call(xml.as_bytes()).unwrap().name, "a");
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            parse_soap_call(b"<se:Envelope"),
            Err(SoapError::XmlError(_))
        ));
    }
}
