use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored password hash is not a valid PHC string.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored password hash for user {user_id} is malformed: {reason}")]
    MalformedPasswordHash {
        /// The user whose hash could not be parsed
        user_id: i32,
        /// Parser error message
        reason: String,
    },

    /// Hashing a new password failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
