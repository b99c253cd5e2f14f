use thiserror::Error;

/// Failure taxonomy for the reaction-to-playback pipeline.
///
/// Every platform and storage failure inside a dispatch is mapped onto one of
/// these variants at the gateway boundary, so retry and abort decisions are
/// made by matching on the kind rather than by inspecting SDK error types.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// Transient connectivity failure (transport closed, timeout).
    ///
    /// Retried up to a fixed bound, then reported as a one-line channel notice
    /// and abandoned for the current event.
    #[error("transient connectivity failure: {0}")]
    Transient(String),

    /// The voice session was invalidated by the platform (recognized close code).
    ///
    /// Forces teardown of the stale handle and a longer cooldown before the
    /// next connection attempt.
    #[error("voice session invalidated: {0}")]
    SessionInvalidated(String),

    /// The bot lacks permission for the attempted operation.
    ///
    /// Never retried. Logged and skipped without aborting the larger operation.
    #[error("missing permission: {0}")]
    Forbidden(String),

    /// A message, channel, or thread no longer exists.
    ///
    /// Triggers recreation rather than failure where the board synchronizer
    /// observes it.
    #[error("not found: {0}")]
    NotFound(String),

    /// The bound sound file is absent from storage.
    ///
    /// Aborts the dispatch early, before any voice connection is attempted;
    /// logged at warn rather than error since it is an expected condition.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// Starting or continuing the audio stream failed.
    #[error("playback failed: {0}")]
    Playback(String),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
