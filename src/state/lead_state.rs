//! LeadState - Contact Form Submission State

use chrono::{DateTime, Local};

/// Result of one lead submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadOutcome {
    Accepted,
    Failed,
}

/// A finished submission attempt
#[derive(Debug, Clone)]
pub struct LeadAttempt {
    pub request_id: String,
    pub finished_at: DateTime<Local>,
    pub outcome: LeadOutcome,
    pub detail: Option<String>,
}

/// State for the contact form: at most one submission in flight plus
/// the attempts finished during this session.
#[derive(Debug, Default)]
pub struct LeadState {
    in_flight: Option<String>,
    attempts: Vec<LeadAttempt>,
}

impl LeadState {
    /// Mark a submission as in flight
    pub fn begin(&mut self, request_id: impl Into<String>) {
        self.in_flight = Some(request_id.into());
    }

    /// Whether a submission is awaiting its response
    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Record the outcome for a request. Clears the in-flight marker
    /// only when the id matches the request that set it.
    pub fn finish(&mut self, request_id: &str, outcome: LeadOutcome, detail: Option<String>) {
        if self.in_flight.as_deref() == Some(request_id) {
            self.in_flight = None;
        }
        self.attempts.push(LeadAttempt {
            request_id: request_id.to_string(),
            finished_at: Local::now(),
            outcome,
            detail,
        });
    }

    /// Most recent finished attempt
    pub fn last_attempt(&self) -> Option<&LeadAttempt> {
        self.attempts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_clears_only_the_matching_request() {
        let mut state = LeadState::default();
        state.begin("a");
        assert!(state.is_sending());

        state.finish("b", LeadOutcome::Failed, None);
        assert!(state.is_sending(), "unrelated response keeps the guard");

        state.finish("a", LeadOutcome::Accepted, None);
        assert!(!state.is_sending());
        let last = state.last_attempt().expect("attempt recorded");
        assert_eq!(last.outcome, LeadOutcome::Accepted);
        assert_eq!(last.request_id, "a");
    }
}
