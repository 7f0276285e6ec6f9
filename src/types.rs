use serde::Deserialize;

/// Postal address as returned by the profile service. Fields are kept
/// verbatim; no formatting or validation is applied locally.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// A single user record from the profile service. Unknown response fields
/// are ignored during decoding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct UserRecord {
    pub name: String,
    pub email: String,
    pub address: Address,
}

/// Lifecycle of the profile card. Starts in `Loading`, moves exactly once to
/// either `Loaded` or `Error`, and never transitions again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ProfileState {
    Loading,
    Error(String),
    Loaded(UserRecord),
}

impl ProfileState {
    /// Whether this state admits no further transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProfileState::Loading)
    }
}
