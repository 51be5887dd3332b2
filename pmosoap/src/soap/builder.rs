//! Construction d'enveloppes SOAP

use super::{NAMESPACES, REQUEST_SUFFIX, RESPONSE_SUFFIX, SoapError, soap_env_name};
use crate::{encode::encode, value::Value};
use xmltree::{Element, XMLNode};

/// Clé sous laquelle le résultat d'une opération est encodé
const RESULT_KEY: &str = "result";

/// Enveloppe `child` dans Body puis Envelope et sérialise le document.
pub(crate) fn build_soap_envelope_with_body(
    body_child: Element,
    pretty_print: bool,
) -> Result<String, SoapError> {
    // Body
    let mut body = Element::new(&soap_env_name("Body"));
    body.children.push(XMLNode::Element(body_child));

    // Envelope
    let mut envelope = Element::new(&soap_env_name("Envelope"));
    envelope.attributes.insert(
        format!("xmlns:{}", NAMESPACES.soap_env_prefix),
        NAMESPACES.soap_env.to_string(),
    );
    envelope.attributes.insert(
        format!("xmlns:{}", NAMESPACES.xsi_prefix),
        NAMESPACES.xsi.to_string(),
    );
    envelope.children.push(XMLNode::Element(body));

    let mut buf = Vec::new();
    let config = xmltree::EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(pretty_print)
        .indent_string("  ");
    envelope.write_with_config(&mut buf, config)?;

    Ok(String::from_utf8(buf)?)
}

/// Élément `tns:<name>` déclarant le namespace cible
fn operation_element(target_namespace: &str, name: &str) -> Element {
    let mut element = Element::new(&format!("{}:{}", NAMESPACES.tns_prefix, name));
    element.attributes.insert(
        format!("xmlns:{}", NAMESPACES.tns_prefix),
        target_namespace.to_string(),
    );
    element
}

/// Construit la réponse SOAP d'une opération
///
/// # Arguments
///
/// * `target_namespace` - Namespace cible du service (ex: "http://example.com/")
/// * `operation` - Nom de l'opération (ex: "getUser")
/// * `result` - Valeur retournée par la logique métier
///
/// # Returns
///
/// Le document `Envelope/Body/<operation>_response/result/...` sérialisé,
/// avec déclaration XML.
pub fn build_soap_response(
    target_namespace: &str,
    operation: &str,
    result: &Value,
    pretty_print: bool,
) -> Result<String, SoapError> {
    let mut response = operation_element(
        target_namespace,
        &format!("{}{}", operation, RESPONSE_SUFFIX),
    );

    let wrapped: Value = [(RESULT_KEY, result.clone())].into_iter().collect();
    encode(&mut response, &wrapped, None)?;

    build_soap_envelope_with_body(response, pretty_print)
}

/// Construit une requête SOAP `<operation>_request` portant `arguments`.
///
/// Pendant client de [`build_soap_response`], utile pour interroger un
/// service exposé par ce crate.
pub fn build_soap_request(
    target_namespace: &str,
    operation: &str,
    arguments: &Value,
) -> Result<String, SoapError> {
    let mut request = operation_element(
        target_namespace,
        &format!("{}{}", operation, REQUEST_SUFFIX),
    );
    encode(&mut request, arguments, None)?;

    build_soap_envelope_with_body(request, false)
}
