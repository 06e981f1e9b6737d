use serde::{Deserialize, Serialize};

/// A client record as known to the surrounding back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRef {
    pub client_id: String,
    pub tax_id: String,
    pub display_name: String,
}

/// Read-only lookup contract consumed by callers that match an extracted
/// policy to an existing client. The matching business rules live in the
/// surrounding application; this crate only declares the boundary.
pub trait ClientDirectory: Send + Sync {
    /// Find a client by RFC and/or printed name. Either argument may be
    /// absent when the extraction could not recover it.
    fn find_client(&self, tax_id: Option<&str>, name: Option<&str>) -> Option<ClientRef>;
}
