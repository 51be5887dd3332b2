//! Extension pour intégrer la configuration SOAP dans pmoconfig
//!
//! Ce module fournit le trait `SoapConfigExt` qui ajoute à
//! `pmoconfig::Config` les réglages du service SOAP.

use crate::soap::SoapProtocol;
use anyhow::Result;
use pmoconfig::Config;
use serde_yaml::Value;

const DEFAULT_SERVICE_NAME: &str = "Service";
const DEFAULT_TARGET_NAMESPACE: &str = "http://example.com/";
const DEFAULT_PRETTY_PRINT: bool = true;

/// Trait d'extension pour ajouter la configuration SOAP à pmoconfig
///
/// # Exemple
///
/// ```rust,ignore
/// use pmoconfig::get_config;
/// use pmosoap::SoapConfigExt;
///
/// let config = get_config();
/// let protocol = config.soap_protocol()?;
/// ```
pub trait SoapConfigExt {
    /// Nom du service, repris dans la description WSDL (défaut: "Service")
    fn get_soap_service_name(&self) -> Result<String>;

    fn set_soap_service_name(&self, name: String) -> Result<()>;

    /// Namespace cible des réponses (défaut: "http://example.com/")
    fn get_soap_target_namespace(&self) -> Result<String>;

    fn set_soap_target_namespace(&self, namespace: String) -> Result<()>;

    /// Indentation des documents produits (défaut: true)
    fn get_soap_pretty_print(&self) -> Result<bool>;

    fn set_soap_pretty_print(&self, pretty: bool) -> Result<()>;

    /// Construit le protocole décrit par la configuration
    fn soap_protocol(&self) -> Result<SoapProtocol> {
        Ok(
            SoapProtocol::new(self.get_soap_service_name()?, self.get_soap_target_namespace()?)
                .with_pretty_print(self.get_soap_pretty_print()?),
        )
    }
}

impl SoapConfigExt for Config {
    fn get_soap_service_name(&self) -> Result<String> {
        Ok(self.get_string_or(&["soap", "service_name"], DEFAULT_SERVICE_NAME))
    }

    fn set_soap_service_name(&self, name: String) -> Result<()> {
        self.set_value(&["soap", "service_name"], Value::String(name))
    }

    fn get_soap_target_namespace(&self) -> Result<String> {
        Ok(self.get_string_or(&["soap", "target_namespace"], DEFAULT_TARGET_NAMESPACE))
    }

    fn set_soap_target_namespace(&self, namespace: String) -> Result<()> {
        self.set_value(&["soap", "target_namespace"], Value::String(namespace))
    }

    fn get_soap_pretty_print(&self) -> Result<bool> {
        match self.get_value(&["soap", "pretty_print"]) {
            Ok(Value::Bool(b)) => Ok(b),
            _ => Ok(DEFAULT_PRETTY_PRINT),
        }
    }

    fn set_soap_pretty_print(&self, pretty: bool) -> Result<()> {
        self.set_value(&["soap", "pretty_print"], Value::Bool(pretty))
    }
}

impl SoapProtocol {
    /// Raccourci pour [`SoapConfigExt::soap_protocol`]
    pub fn from_config(config: &Config) -> Result<Self> {
        config.soap_protocol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &tempfile::TempDir) -> Config {
        Config::load_config_with_overrides(dir.path().to_str().unwrap(), Vec::new()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let protocol = SoapProtocol::from_config(&config(&dir)).unwrap();

        assert_eq!(protocol, SoapProtocol::new("Service", "http://example.com/"));
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        config.set_soap_service_name("Users".to_string()).unwrap();
        config
            .set_soap_target_namespace("urn:users".to_string())
            .unwrap();
        config.set_soap_pretty_print(false).unwrap();

        let protocol = config.soap_protocol().unwrap();
        assert_eq!(
            protocol,
            SoapProtocol::new("Users", "urn:users").with_pretty_print(false)
        );
    }

    #[test]
    fn test_empty_service_name_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        config.set_soap_service_name(String::new()).unwrap();

        assert_eq!(config.get_soap_service_name().unwrap(), "Service");
    }
}
