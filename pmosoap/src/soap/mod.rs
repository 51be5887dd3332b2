//! # Module SOAP - Simple Object Access Protocol
//!
//! Ce module implémente le protocole d'enveloppe SOAP au-dessus du
//! décodeur et de l'encodeur : extraction de l'opération invoquée,
//! construction des réponses et des faults.
//!
//! ## Fonctionnalités
//!
//! - ✅ Parsing d'enveloppes SOAP (Envelope / Body / opération unique)
//! - ✅ Décodage des arguments selon le schéma de l'opération
//! - ✅ Construction de réponses `<operation>_response`
//! - ✅ Gestion des SOAP Faults avec détail structuré
//! - ✅ Délégation WSDL
//!
//! ## Architecture
//!
//! - [`SoapEnvelope`] : Enveloppe SOAP parsée
//! - [`SoapCall`] : Opération extraite du Body
//! - [`ErrorDescription`] : Erreur rendue dans un Fault
//! - [`SoapProtocol`] : Orchestration d'une requête complète
//!
//! ## Example
//!
//! ```
//! use pmosoap::soap::parse_soap_call;
//!
//! let body = r#"<?xml version="1.0"?>
//! <se:Envelope xmlns:se="http://schemas.xmlsoap.org/soap/envelope/">
//!   <se:Body>
//!     <tns:getUser_request xmlns:tns="http://example.com/">
//!       <id>42</id>
//!     </tns:getUser_request>
//!   </se:Body>
//! </se:Envelope>"#;
//!
//! let call = parse_soap_call(body.as_bytes()).unwrap();
//! assert_eq!(call.name, "getUser");
//! ```

mod builder;
mod envelope;
mod errors;
mod fault;
mod parser;
mod protocol;

pub use builder::{build_soap_request, build_soap_response};
pub use envelope::{SoapBody, SoapEnvelope, SoapHeader};
pub use errors::SoapError;
pub use fault::{ErrorDescription, build_soap_fault};
pub use parser::{SoapCall, operation_name, parse_soap_call, parse_soap_envelope, parse_xml};
pub use protocol::{
    CONTENT_TYPE, Dispatch, SoapProtocol, SoapRequest, SoapResponse, SoapService, WSDL_TAIL,
};

/// Table des namespaces utilisés sur le fil.
///
/// Valeur immuable, partagée par tout le processus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceTable {
    /// Namespace de l'enveloppe SOAP 1.1
    pub soap_env: &'static str,

    /// Alias utilisé pour `soap_env` dans les documents produits
    pub soap_env_prefix: &'static str,

    /// Namespace XML Schema instance (attribut nil)
    pub xsi: &'static str,

    /// Alias utilisé pour `xsi`
    pub xsi_prefix: &'static str,

    /// Alias utilisé pour le namespace cible du service
    pub tns_prefix: &'static str,
}

pub const NAMESPACES: NamespaceTable = NamespaceTable {
    soap_env: "http://schemas.xmlsoap.org/soap/envelope/",
    soap_env_prefix: "se",
    xsi: "http://www.w3.org/2001/XMLSchema-instance",
    xsi_prefix: "xsi",
    tns_prefix: "tns",
};

/// Encodage des documents lus et produits
pub const ENCODING: &str = "utf-8";

/// Suffixe des éléments de requête : `<operation>_request`
pub const REQUEST_SUFFIX: &str = "_request";

/// Suffixe des éléments de réponse : `<operation>_response`
pub const RESPONSE_SUFFIX: &str = "_response";

/// Nom des éléments produits pour chaque membre d'une liste
pub const ITEM_ELEMENT: &str = "item";

/// Nom qualifié par l'alias SOAP (`se:Body`, ...)
pub(crate) fn soap_env_name(local: &str) -> String {
    format!("{}:{}", NAMESPACES.soap_env_prefix, local)
}
