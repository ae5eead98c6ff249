//! LeadHub - Lead Submission Service
//!
//! Owns the background thread that posts contact-form leads to the
//! external endpoint and reports outcomes back to the UI.

use gpui::Global;
use serde::Deserialize;

use crate::domain::lead::{LeadPayload, LeadRequest};
use crate::domain::settings::AppSettings;
use crate::error::Error;
use crate::eventing::app_event::AppEvent;

/// Commands handled by the background service
#[derive(Debug, Clone)]
pub enum LeadCommand {
    /// Post a lead to the endpoint
    Submit(LeadRequest),
}

/// Optional acknowledgement body returned by the endpoint
#[derive(Debug, Deserialize)]
struct LeadAck {
    ok: Option<bool>,
}

/// LeadHub bridges the UI to the submission thread
pub struct LeadHub {
    /// Channel to send commands to the service thread
    command_tx: flume::Sender<LeadCommand>,
}

impl Global for LeadHub {}

impl LeadHub {
    /// Create a new hub and start its background thread
    pub fn new(event_tx: flume::Sender<AppEvent>, settings: AppSettings) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<LeadCommand>();
        Self::start_command_handler(command_rx, settings, event_tx);
        Self { command_tx }
    }

    /// Start the command handler task
    fn start_command_handler(
        command_rx: flume::Receiver<LeadCommand>,
        settings: AppSettings,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create Tokio runtime");

            rt.block_on(async move {
                let endpoint = settings.lead_endpoint();
                let client = reqwest::Client::new();
                tracing::info!(%endpoint, "Lead service ready");

                while let Ok(cmd) = command_rx.recv_async().await {
                    match cmd {
                        LeadCommand::Submit(request) => {
                            tracing::info!(request_id = %request.request_id, "Submitting lead");

                            match deliver(&client, &endpoint, &request.payload).await {
                                Ok(()) => {
                                    let _ = event_tx.send(AppEvent::LeadAccepted {
                                        request_id: request.request_id,
                                    });
                                }
                                Err(error) => {
                                    tracing::warn!(%error, "Lead submission failed");
                                    let _ = event_tx.send(AppEvent::LeadFailed {
                                        request_id: request.request_id,
                                        reason: error.to_string(),
                                    });
                                }
                            }
                        }
                    }
                }
            });
        });
    }

    /// Queue a lead for submission
    pub fn submit(&self, request: LeadRequest) {
        let _ = self.command_tx.send(LeadCommand::Submit(request));
    }
}

/// POST the payload. A non-2xx status or an explicit `ok: false`
/// acknowledgement counts as a rejection; a missing or unparseable
/// body does not.
async fn deliver(
    client: &reqwest::Client,
    endpoint: &str,
    payload: &LeadPayload,
) -> Result<(), Error> {
    let response = client.post(endpoint).json(payload).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Rejected {
            message: format!("endpoint returned status {status}"),
        });
    }

    if let Ok(ack) = response.json::<LeadAck>().await {
        if ack.ok == Some(false) {
            return Err(Error::Rejected {
                message: "endpoint returned ok=false".to_string(),
            });
        }
    }

    Ok(())
}
