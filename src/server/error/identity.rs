use thiserror::Error;

/// Failures of the external identity resolver.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The username or id does not correspond to any account.
    #[error("Could not resolve '{0}' to a Roblox account.")]
    Unresolvable(String),

    /// The identity provider answered with an unexpected status.
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure, including timeouts.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
