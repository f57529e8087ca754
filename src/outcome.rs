//! What happens after a signup or removal request settles.

use crate::error::ApiError;
use crate::status::StatusMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Removal,
}

impl Mutation {
    fn rejected_fallback(self) -> &'static str {
        match self {
            Self::Signup => "An error occurred",
            Self::Removal => "Failed to remove participant",
        }
    }

    fn transport_message(self) -> &'static str {
        match self {
            Self::Signup => "Failed to sign up. Please try again.",
            Self::Removal => "Failed to remove participant. Please try again.",
        }
    }

    pub fn log_label(self) -> &'static str {
        match self {
            Self::Signup => "Error signing up:",
            Self::Removal => "Error removing participant:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followup {
    pub status: StatusMessage,
    /// Re-fetch the whole catalog.
    pub refresh: bool,
    /// Clear the signup form.
    pub reset_form: bool,
}

pub fn followup(mutation: Mutation, result: &Result<String, ApiError>) -> Followup {
    match result {
        Ok(message) => Followup {
            status: StatusMessage::success(message.clone()),
            // Signup leaves the list as is; only removal re-fetches.
            refresh: mutation == Mutation::Removal,
            reset_form: mutation == Mutation::Signup,
        },
        Err(err @ ApiError::Rejected { .. }) => Followup {
            status: StatusMessage::error(err.detail().unwrap_or(mutation.rejected_fallback())),
            refresh: false,
            reset_form: false,
        },
        Err(ApiError::Transport(_)) => Followup {
            status: StatusMessage::error(mutation.transport_message()),
            refresh: false,
            reset_form: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKind;

    fn rejected(status: u16, detail: Option<&str>) -> Result<String, ApiError> {
        Err(ApiError::Rejected { status, detail: detail.map(str::to_string) })
    }

    fn offline() -> Result<String, ApiError> {
        Err(ApiError::Transport(gloo_net::Error::GlooError("offline".into())))
    }

    #[test]
    fn removal_success_refreshes_once() {
        let f = followup(
            Mutation::Removal,
            &Ok("Unregistered a@x.com from Chess Club".into()),
        );
        assert!(f.refresh);
        assert!(!f.reset_form);
        assert_eq!(f.status, StatusMessage::success("Unregistered a@x.com from Chess Club"));
    }

    #[test]
    fn signup_success_resets_form_without_refresh() {
        let f = followup(Mutation::Signup, &Ok("Signed up a@x.com for Chess Club".into()));
        assert!(!f.refresh);
        assert!(f.reset_form);
        assert_eq!(f.status.kind, StatusKind::Success);
    }

    #[test]
    fn rejection_shows_detail_verbatim() {
        let f = followup(Mutation::Signup, &rejected(400, Some("Student already signed up")));
        assert_eq!(f.status, StatusMessage::error("Student already signed up"));
        assert!(!f.refresh);
        assert!(!f.reset_form);

        let f = followup(Mutation::Removal, &rejected(404, Some("Participant not found")));
        assert_eq!(f.status, StatusMessage::error("Participant not found"));
        assert!(!f.refresh);
    }

    #[test]
    fn rejection_without_detail_uses_fallback() {
        let f = followup(Mutation::Signup, &rejected(500, None));
        assert_eq!(f.status, StatusMessage::error("An error occurred"));

        let f = followup(Mutation::Removal, &rejected(422, None));
        assert_eq!(f.status, StatusMessage::error("Failed to remove participant"));
    }

    #[test]
    fn transport_failure_uses_generic_message() {
        let f = followup(Mutation::Signup, &offline());
        assert_eq!(f.status, StatusMessage::error("Failed to sign up. Please try again."));
        assert!(!f.reset_form);

        let f = followup(Mutation::Removal, &offline());
        assert_eq!(
            f.status,
            StatusMessage::error("Failed to remove participant. Please try again.")
        );
        assert!(!f.refresh);
    }
}
