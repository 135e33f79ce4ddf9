use async_trait::async_trait;

/// Host-page UI hooks for the embedded check-in frame.
///
/// Implemented by the embedding shell; the orchestration layer calls these
/// and logs (rather than propagates) their failures.
#[async_trait]
pub trait FrameUiPort: Send + Sync {
    /// Clear the loading/error flags shown while the frame spins up.
    async fn clear_frame_loading(&self) -> anyhow::Result<()>;

    /// Take the frame off screen.
    async fn dismiss_check_in_frame(&self) -> anyhow::Result<()>;

    /// Surface the recoverable load-error state (retry / close choices).
    async fn show_frame_load_error(&self) -> anyhow::Result<()>;
}
