//! # pmosoap - Services SOAP
//!
//! Correspondance entre fragments XML et valeurs structurées, et protocole
//! d'enveloppe SOAP construit par-dessus.
//!
//! - le décodage ([`decode`]) est guidé par un [`SchemaNode`] connu à l'avance ;
//! - l'encodage ([`encode`]) est guidé par la forme de la [`Value`] à produire ;
//! - [`soap::SoapProtocol`] orchestre une requête : opération invoquée,
//!   arguments, réponse ou Fault.
//!
//! Tout est synchrone et propre à chaque requête : rien n'est partagé entre
//! deux appels hormis le schéma et la configuration, en lecture seule.
//!
//! ```
//! use pmosoap::{SchemaNode, soap::{SoapProtocol, SoapRequest, Dispatch}};
//!
//! let protocol = SoapProtocol::new("Users", "http://example.com/");
//! let request = SoapRequest::new("", r#"<se:Envelope xmlns:se="http://schemas.xmlsoap.org/soap/envelope/">
//!   <se:Body><getUser_request><id>42</id></getUser_request></se:Body>
//! </se:Envelope>"#);
//!
//! let Dispatch::Operation(call) = protocol.get_function(&request).unwrap() else {
//!     panic!("expected an operation");
//! };
//! let schema = SchemaNode::record([("id", SchemaNode::scalar())]);
//! let args = protocol.get_arguments(&call, &schema).unwrap();
//! assert_eq!(args.get("id").and_then(|v| v.as_text()), Some("42"));
//! ```

pub mod config_ext;
pub mod decode;
pub mod encode;
pub mod logs;
pub mod naming;
pub mod schema;
pub mod soap;
pub mod value;
pub mod wsdl;

pub use crate::config_ext::SoapConfigExt;
pub use crate::decode::{DecodeError, decode};
pub use crate::encode::{EncodeError, encode};
pub use crate::naming::{QualifiedName, resolve_name};
pub use crate::schema::{Field, SchemaNode};
pub use crate::value::{Value, ValueMap};
pub use crate::wsdl::WsdlGenerator;
