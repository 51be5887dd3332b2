use crate::{decode::DecodeError, encode::EncodeError};
use thiserror::Error;

/// Erreur du protocole SOAP.
///
/// Les erreurs structurelles sont des fautes du client : elles arrêtent le
/// traitement de la requête et sont rendues dans un Fault.
#[derive(Debug, Error)]
pub enum SoapError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] xmltree::ParseError),

    #[error("No {{{}}}Envelope element.", super::NAMESPACES.soap_env)]
    MissingEnvelope,

    #[error("No {{{}}}Body element.", super::NAMESPACES.soap_env)]
    MissingBody,

    #[error("There must be only one {{{}}}Body element.", super::NAMESPACES.soap_env)]
    MultipleBodies,

    #[error("{{{}}}Body element has no child elements.", super::NAMESPACES.soap_env)]
    EmptyBody,

    #[error("{{{}}}Body element has more than one child element.", super::NAMESPACES.soap_env)]
    MultipleOperations,

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("No WSDL generator is available for this service")]
    NoWsdl,

    #[error("WSDL generation failed: {0}")]
    Wsdl(anyhow::Error),

    #[error("{0}")]
    Encode(#[from] EncodeError),

    #[error("XML write error: {0}")]
    WriteError(#[from] xmltree::Error),

    #[error("Serialized document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl SoapError {
    /// Catégorie de fault, reprise dans `faultcode`
    pub fn fault_type(&self) -> &'static str {
        match self {
            SoapError::UnknownFunction(_) => "FunctionNotFound",
            SoapError::Wsdl(_)
            | SoapError::Encode(_)
            | SoapError::WriteError(_)
            | SoapError::Utf8(_) => "InternalError",
            _ => "BadRequest",
        }
    }

    /// Vrai pour les erreurs imputables au document reçu
    pub fn is_client_fault(&self) -> bool {
        self.fault_type() != "InternalError"
    }
}
