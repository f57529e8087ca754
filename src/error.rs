use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure, aborted request, or a body that did not decode.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-supplied `detail`, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            Self::Transport(_) => None,
        }
    }
}
