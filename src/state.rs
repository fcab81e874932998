use crate::error::FetchError;
use crate::models::User;

/// The three-way presentation state of the user list view.
///
/// Exactly one variant holds at a time. A fetch trigger moves the view to
/// `Loading`; resolution always leaves `Loading`, for `Loaded` on success
/// (including an empty list) or `Error` on any failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(Vec<User>),
    Error(String),
}

impl ViewState {
    /// State after the fetch resolves. Never `Loading`.
    pub fn resolved(result: Result<Vec<User>, FetchError>) -> Self {
        match result {
            Ok(users) => ViewState::Loaded(users),
            Err(err) => ViewState::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
