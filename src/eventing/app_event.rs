//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Lead accepted by the endpoint
    LeadAccepted { request_id: String },

    /// Lead submission failed (transport error, bad status, or an
    /// explicit `ok: false` acknowledgement)
    LeadFailed { request_id: String, reason: String },
}
