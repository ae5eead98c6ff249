//! Contact Controller
//!
//! Validates the lead form and hands accepted payloads to the LeadHub.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::lead::{LeadPayload, LeadRequest};
use crate::services::lead_hub::LeadHub;
use crate::state::lead_state::LeadOutcome;

/// Contact page controller
pub struct ContactController {
    entities: AppEntities,
}

impl ContactController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Validate and queue a submission. Does nothing while a previous
    /// submission is still in flight.
    pub fn submit(&self, payload: LeadPayload, cx: &mut App) {
        if self.entities.lead.read(cx).is_sending() {
            return;
        }

        if let Err(error) = payload.validate() {
            tracing::debug!(%error, "Lead rejected before submission");
            self.entities.lead.update(cx, |lead, cx| {
                lead.finish("local-validation", LeadOutcome::Failed, Some(error.to_string()));
                cx.notify();
            });
            return;
        }

        let request = LeadRequest::new(payload);
        let request_id = request.request_id.clone();
        self.entities.lead.update(cx, |lead, cx| {
            lead.begin(request_id.clone());
            cx.notify();
        });

        match cx.try_global::<LeadHub>() {
            Some(hub) => hub.submit(request),
            None => {
                self.entities.lead.update(cx, |lead, cx| {
                    lead.finish(
                        &request_id,
                        LeadOutcome::Failed,
                        Some("lead service unavailable".to_string()),
                    );
                    cx.notify();
                });
            }
        }
    }
}
