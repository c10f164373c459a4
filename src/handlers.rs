use crate::api::ActivityApi;
use crate::errors::ClientError;
use crate::state::{MessageKind, ViewState};
use tracing::{error, info, warn};

pub const LOAD_FAILED: &str = "Could not load activities. Try refreshing the page.";
pub const SIGNUP_MISSING_FIELDS: &str = "Please enter your email and select an activity.";
pub const SIGNUP_REJECTED: &str = "Signup failed";
pub const SIGNUP_FAILED: &str = "An error occurred during signup.";
pub const REMOVE_MISSING_FIELDS: &str = "Please provide both an activity and an email to remove.";
pub const REMOVE_REJECTED: &str = "Failed to remove participant";
pub const REMOVE_FAILED: &str = "An error occurred while removing the participant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server confirmed the request.
    Applied,
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The server answered with a non-2xx status.
    Rejected,
    /// Transport or decoding failed.
    Failed,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Keeps the rendered view in step with what the server has confirmed.
///
/// Every operation reports failures through the view's message slot and its
/// returned [`Outcome`], never as an error.
pub struct ViewSynchronizer<A> {
    api: A,
    view: ViewState,
}

impl<A: ActivityApi> ViewSynchronizer<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: ViewState::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load_activities(&mut self) -> Outcome {
        match self.api.fetch_activities().await {
            Ok(snapshot) => {
                if snapshot.is_empty() {
                    warn!("server reported no activities");
                }
                info!("loaded {} activities", snapshot.len());
                self.view.replace_with(&snapshot);
                self.view.clear_message();
                Outcome::Applied
            }
            Err(err) => {
                error!("failed to load activities: {err}");
                self.view.show_message(LOAD_FAILED, MessageKind::Error);
                Outcome::Failed
            }
        }
    }

    pub async fn signup(&mut self, activity: &str, email: &str) -> Outcome {
        self.view.clear_message();

        let email = email.trim();
        if email.is_empty() || activity.is_empty() {
            self.view.show_message(SIGNUP_MISSING_FIELDS, MessageKind::Error);
            return Outcome::Invalid;
        }

        if let Err(err) = self.api.signup(activity, email).await {
            return self.report(err, SIGNUP_REJECTED, SIGNUP_FAILED);
        }

        info!("signed up {email} for {activity}");
        if self.load_activities().await.is_applied() {
            self.view.show_message(
                format!("Signed up {email} for {activity}"),
                MessageKind::Success,
            );
        }
        Outcome::Applied
    }

    pub async fn remove_participant(&mut self, activity: &str, email: &str) -> Outcome {
        self.view.clear_message();

        let email = email.trim();
        if email.is_empty() || activity.is_empty() {
            self.view.show_message(REMOVE_MISSING_FIELDS, MessageKind::Error);
            return Outcome::Invalid;
        }

        if let Err(err) = self.api.remove_participant(activity, email).await {
            return self.report(err, REMOVE_REJECTED, REMOVE_FAILED);
        }

        info!("removed {email} from {activity}");
        let patched = self
            .view
            .card_mut(activity)
            .is_some_and(|card| card.remove_participant(email));
        if !patched {
            warn!("no rendered row for {email} in {activity}");
        }

        // A failed load keeps the patched rows and the load error message.
        if self.load_activities().await.is_applied() {
            self.view.show_message(
                format!("Removed {email} from {activity}"),
                MessageKind::Success,
            );
        }
        Outcome::Applied
    }

    fn report(&mut self, err: ClientError, rejected: &str, failed: &str) -> Outcome {
        match err {
            ClientError::Rejected { status, detail } => {
                warn!("request rejected with status {status}: {detail:?}");
                let text = detail.unwrap_or_else(|| rejected.to_string());
                self.view.show_message(text, MessageKind::Error);
                Outcome::Rejected
            }
            err => {
                error!("request failed: {err}");
                self.view.show_message(failed, MessageKind::Error);
                Outcome::Failed
            }
        }
    }
}
