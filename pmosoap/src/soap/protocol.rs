//! Orchestration d'une requête SOAP.
//!
//! [`SoapProtocol`] enchaîne les étapes d'une requête : dispatch,
//! décodage des arguments, appel du service, construction de la réponse
//! ou du Fault. Il ne porte aucun état mutable et peut être partagé entre
//! threads.

use super::{
    ENCODING, ErrorDescription, SoapCall, SoapError, build_soap_fault, build_soap_response,
    parse_soap_call,
};
use crate::{decode::decode, schema::SchemaNode, value::Value, wsdl::WsdlGenerator};
use tracing::{debug, info, warn};

/// Queue de routage déclenchant la description WSDL
pub const WSDL_TAIL: &str = "wsdl";

/// Content-Type des documents produits
pub const CONTENT_TYPE: &str = "text/xml; charset=\"utf-8\"";

/// Requête reçue par la couche transport
#[derive(Debug, Clone, Default)]
pub struct SoapRequest {
    /// Fin du chemin de routage (ex: "wsdl")
    pub tail: String,

    /// Corps de la requête
    pub text: String,
}

impl SoapRequest {
    pub fn new(tail: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tail: tail.into(),
            text: text.into(),
        }
    }
}

/// Document à renvoyer par la couche transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapResponse {
    pub body: String,

    /// Vrai si `body` est un SOAP Fault
    pub is_fault: bool,
}

impl SoapResponse {
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}

/// Résultat du dispatch d'une requête
#[derive(Debug, Clone)]
pub enum Dispatch {
    /// Demande de description, aucun XML n'a été lu
    Wsdl,

    /// Opération à invoquer
    Operation(SoapCall),
}

/// Service exposé : schémas d'arguments et logique métier.
pub trait SoapService {
    /// Schéma des arguments de `operation`, `None` si elle n'existe pas
    fn arguments(&self, operation: &str) -> Option<&SchemaNode>;

    /// Exécute `operation`
    fn call(&self, operation: &str, arguments: Value) -> Result<Value, ErrorDescription>;

    /// Générateur de la description WSDL du service
    fn wsdl_generator(&self) -> Option<&dyn WsdlGenerator> {
        None
    }
}

/// Protocole SOAP d'un service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapProtocol {
    service_name: String,
    target_namespace: String,
    pretty_print: bool,
}

impl SoapProtocol {
    pub fn new(service_name: impl Into<String>, target_namespace: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            target_namespace: target_namespace.into(),
            pretty_print: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Identifie ce que demande la requête.
    ///
    /// La queue `wsdl` court-circuite tout parsing. Sinon le corps est
    /// parsé et doit contenir une Envelope avec un unique Body portant une
    /// unique opération.
    pub fn get_function(&self, request: &SoapRequest) -> Result<Dispatch, SoapError> {
        if request.tail == WSDL_TAIL {
            debug!(service = %self.service_name, "WSDL requested");
            return Ok(Dispatch::Wsdl);
        }

        parse_soap_call(request.text.as_bytes()).map(Dispatch::Operation)
    }

    /// Décode les arguments de l'appel selon le schéma de l'opération
    pub fn get_arguments(&self, call: &SoapCall, arguments: &SchemaNode) -> Result<Value, SoapError> {
        Ok(decode(&call.element, arguments)?)
    }

    /// Construit la réponse de succès d'une opération
    pub fn get_response(&self, operation: &str, result: &Value) -> Result<SoapResponse, SoapError> {
        let body = build_soap_response(&self.target_namespace, operation, result, self.pretty_print)?;
        Ok(SoapResponse {
            body,
            is_fault: false,
        })
    }

    /// Construit le Fault correspondant à `error`
    pub fn get_error_response(&self, error: &ErrorDescription) -> Result<SoapResponse, SoapError> {
        let body = build_soap_fault(error, self.pretty_print)?;
        Ok(SoapResponse {
            body,
            is_fault: true,
        })
    }

    /// Renvoie tel quel le document produit par le générateur WSDL
    pub fn get_wsdl(&self, generator: &dyn WsdlGenerator) -> Result<SoapResponse, SoapError> {
        let body = generator
            .generate(&self.service_name, &self.target_namespace, ENCODING)
            .map_err(SoapError::Wsdl)?;
        Ok(SoapResponse {
            body,
            is_fault: false,
        })
    }

    /// Traite une requête complète.
    ///
    /// Toute erreur de protocole ou métier est rendue dans un Fault ; seule
    /// l'impossibilité de sérialiser ce Fault remonte en `Err`.
    pub fn handle(
        &self,
        request: &SoapRequest,
        service: &dyn SoapService,
    ) -> Result<SoapResponse, SoapError> {
        match self.process(request, service) {
            Ok(response) => Ok(response),
            Err(error) => {
                warn!(
                    service = %self.service_name,
                    fault = %error.error_type,
                    message = %error.message,
                    "SOAP fault"
                );
                self.get_error_response(&error)
            }
        }
    }

    fn process(
        &self,
        request: &SoapRequest,
        service: &dyn SoapService,
    ) -> Result<SoapResponse, ErrorDescription> {
        let call = match self.get_function(request)? {
            Dispatch::Wsdl => {
                let generator = service.wsdl_generator().ok_or(SoapError::NoWsdl)?;
                return Ok(self.get_wsdl(generator)?);
            }
            Dispatch::Operation(call) => call,
        };

        let schema = service
            .arguments(&call.name)
            .ok_or_else(|| SoapError::UnknownFunction(call.name.clone()))?;
        let arguments = self.get_arguments(&call, schema)?;

        info!(service = %self.service_name, operation = %call.name, "SOAP call");
        let result = service.call(&call.name, arguments)?;

        Ok(self.get_response(&call.name, &result)?)
    }
}
