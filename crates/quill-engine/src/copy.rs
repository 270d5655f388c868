//! Copy-to-clipboard support for code blocks.
//!
//! The UI looks up a block's raw code through its [`HandleId`], hands it to a
//! [`Clipboard`], and shows a transient "Copied!" label on success. The label
//! reverts on its own after a fixed delay, whatever happens to the text in
//! the meantime.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use crate::render::{HandleId, RenderTree};

/// How long the "Copied!" confirmation stays up.
pub const DEFAULT_CONFIRMATION: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard permission denied")]
    PermissionDenied,
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("No code block for handle {0} in this render")]
    UnknownHandle(HandleId),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// External clipboard capability.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Label shown on a code block's copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyLabel {
    Copy,
    Copied,
}

impl CopyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            CopyLabel::Copy => "Copy",
            CopyLabel::Copied => "Copied!",
        }
    }
}

/// Tracks which copy buttons currently show a confirmation.
///
/// Time is passed in by the caller so the UI's clock (or a test's) drives
/// expiry.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    confirmation: Duration,
    copied_at: HashMap<HandleId, Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION)
    }
}

impl CopyFeedback {
    pub fn new(confirmation: Duration) -> Self {
        Self {
            confirmation,
            copied_at: HashMap::new(),
        }
    }

    pub fn confirmation(&self) -> Duration {
        self.confirmation
    }

    /// Copies the raw code behind `handle` and starts its confirmation.
    ///
    /// A clipboard failure shows no confirmation and is returned to the
    /// caller, which may retry or ignore it.
    pub fn copy(
        &mut self,
        tree: &RenderTree,
        handle: HandleId,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<(), CopyError> {
        let code = tree.code(handle).ok_or(CopyError::UnknownHandle(handle))?;
        if let Err(e) = clipboard.write_text(code) {
            log::warn!("Copy of {handle} failed: {e}");
            return Err(e.into());
        }
        self.copied_at.insert(handle, now);
        Ok(())
    }

    /// Label for `handle` at time `now`.
    pub fn label(&self, handle: HandleId, now: Instant) -> CopyLabel {
        match self.copied_at.get(&handle) {
            Some(&at) if now.saturating_duration_since(at) < self.confirmation => {
                CopyLabel::Copied
            }
            _ => CopyLabel::Copy,
        }
    }

    /// Drops confirmations that have run their course.
    pub fn prune(&mut self, now: Instant) {
        let confirmation = self.confirmation;
        self.copied_at
            .retain(|_, at| now.saturating_duration_since(*at) < confirmation);
    }

    /// Whether any confirmation is still showing at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .values()
            .any(|at| now.saturating_duration_since(*at) < self.confirmation)
    }
}
