//! Structured URI building and rendering.
//!
//! Models a URI as scheme, subdomain / registrable domain / top-level
//! domain, port, path segments, query parameters, fragment, and
//! basic-authentication credentials. The model renders back to its string
//! form on demand, and [`Factory`] assembles a model from a raw URL string.

pub mod domain;
pub mod error;
pub mod factory;
pub mod query;
pub mod uri;

pub use domain::{DomainParts, DomainSplitter, PslSplitter};
pub use error::Error;
pub use factory::Factory;
pub use query::Parameter;
pub use uri::{BasicAuthentication, PathSegment, Uri};
