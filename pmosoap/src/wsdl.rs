//! Pont vers le générateur WSDL.
//!
//! La génération du document de description est externe ; le protocole
//! lui transmet seulement ses paramètres et renvoie son résultat tel quel.

/// Générateur de document WSDL
pub trait WsdlGenerator {
    fn generate(
        &self,
        service_name: &str,
        target_namespace: &str,
        encoding: &str,
    ) -> anyhow::Result<String>;
}

impl<F> WsdlGenerator for F
where
    F: Fn(&str, &str, &str) -> anyhow::Result<String>,
{
    fn generate(
        &self,
        service_name: &str,
        target_namespace: &str,
        encoding: &str,
    ) -> anyhow::Result<String> {
        self(service_name, target_namespace, encoding)
    }
}
