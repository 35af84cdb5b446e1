use log::{debug, info, warn};

use crate::error::RequestError;
use crate::summarize::SummaryClient;
use crate::{SubmissionState, SummaryResult, extract_video_id};

/// What the last resolved submission left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    None,
    Summary(SummaryResult),
    Error(RequestError),
}

/// Everything the UI renders. Replaced as a whole at each transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    input: String,
    loading: bool,
    outcome: Outcome,
}

impl ControllerState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        match &self.outcome {
            Outcome::Summary(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match &self.outcome {
            Outcome::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        match (self.loading, &self.outcome) {
            (true, _) => SubmissionState::Loading,
            (false, Outcome::None) => SubmissionState::Idle,
            (false, Outcome::Summary(_)) => SubmissionState::Succeeded,
            (false, Outcome::Error(_)) => SubmissionState::Failed,
        }
    }
}

/// Handle for a request in flight. Only the newest ticket may update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    video_id: String,
}

impl Ticket {
    pub fn video_id(&self) -> &str {
        &self.video_id
    }
}

/// Drives submissions through Idle -> Loading -> Succeeded | Failed
#[derive(Debug, Default)]
pub struct Controller {
    state: ControllerState,
    seq: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Start a submission.
    ///
    /// Returns a ticket when a request should be issued, or `None` when the
    /// input held no video ID (state is then already `Failed`).
    pub fn begin(&mut self, raw: &str) -> Option<Ticket> {
        self.seq += 1;
        self.state = ControllerState {
            input: raw.to_string(),
            loading: true,
            outcome: Outcome::None,
        };
        debug!("Submission #{} started: {raw:?}", self.seq);

        match extract_video_id(raw) {
            Some(video_id) => Some(Ticket {
                seq: self.seq,
                video_id,
            }),
            None => {
                info!("Submission #{} rejected: no video ID in {raw:?}", self.seq);
                self.state = ControllerState {
                    input: raw.to_string(),
                    loading: false,
                    outcome: Outcome::Error(RequestError::InvalidUrl),
                };
                None
            }
        }
    }

    /// Apply the response for `ticket`. Returns `false` if a newer submission
    /// has started since, in which case state is left untouched.
    pub fn resolve(&mut self, ticket: Ticket, response: Result<SummaryResult, RequestError>) -> bool {
        if ticket.seq != self.seq {
            warn!(
                "Dropping stale response for submission #{} ({}); current is #{}",
                ticket.seq, ticket.video_id, self.seq
            );
            return false;
        }

        let outcome = match response {
            Ok(result) => {
                info!("Summary received for {}: {:?}", ticket.video_id, result.title);
                Outcome::Summary(result)
            }
            Err(err) => {
                warn!("Summary request for {} failed: {err:?}", ticket.video_id);
                Outcome::Error(err)
            }
        };

        self.state = ControllerState {
            input: std::mem::take(&mut self.state.input),
            loading: false,
            outcome,
        };
        true
    }

    /// Run one submission end to end against `client`
    pub async fn submit(&mut self, client: &SummaryClient, raw: &str) -> SubmissionState {
        if let Some(ticket) = self.begin(raw) {
            let response = client.fetch(ticket.video_id()).await;
            self.resolve(ticket, response);
        }
        self.state.state()
    }
}
