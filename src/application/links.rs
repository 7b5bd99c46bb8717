// src/application/links.rs
//
// Handles through which components reach each other. They are wired once by
// the page and never looked up at call time.
use async_trait::async_trait;
use std::sync::{OnceLock, Weak};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::application::ListError;
use crate::domain::NoteDraft;

/// A list that can be told to re-fetch its collection.
#[async_trait]
pub trait RefreshTarget: Send + Sync {
    fn name(&self) -> &'static str;

    async fn refresh(&self) -> Result<(), ListError>;
}

/// The creation entry point the form submits to.
#[async_trait]
pub trait CreateTarget: Send + Sync {
    async fn create(&self, draft: NoteDraft) -> Result<(), ListError>;
}

/// Link from one list to its sibling.
///
/// Holds a weak handle so the two lists can point at each other without a cycle.
#[derive(Default)]
pub struct SiblingLink {
    target: OnceLock<Weak<dyn RefreshTarget>>,
}

impl SiblingLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a sibling was already linked; the first link wins.
    pub fn link(&self, target: Weak<dyn RefreshTarget>) -> bool {
        self.target.set(target).is_ok()
    }

    /// Spawn a refresh of the sibling and hand back its task.
    pub fn start_refresh(&self) -> SiblingRefresh {
        match self.target.get().and_then(Weak::upgrade) {
            Some(target) => {
                debug!(sibling = target.name(), "Starting sibling refresh");
                SiblingRefresh::Started(tokio::spawn(async move { target.refresh().await }))
            }
            None => {
                warn!("No sibling linked, refresh skipped");
                SiblingRefresh::Unlinked
            }
        }
    }
}

/// Outcome of asking a sibling to refresh.
#[derive(Debug)]
pub enum SiblingRefresh {
    Started(JoinHandle<Result<(), ListError>>),
    Unlinked,
}

impl SiblingRefresh {
    pub fn is_started(&self) -> bool {
        matches!(self, SiblingRefresh::Started(_))
    }

    /// Wait for the sibling to finish. `Ok(false)` means there was no sibling.
    pub async fn wait(self) -> Result<bool, ListError> {
        match self {
            SiblingRefresh::Started(task) => {
                task.await
                    .map_err(|e| ListError::TaskFailed(e.to_string()))??;
                Ok(true)
            }
            SiblingRefresh::Unlinked => Ok(false),
        }
    }
}
