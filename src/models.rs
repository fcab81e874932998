use serde::Deserialize;

/// One user from the GitHub `/users` listing.
///
/// All three fields are required; a response element missing any of them
/// fails the decode of the whole batch. Extra fields in the payload are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
}
