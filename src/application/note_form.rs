// src/application/note_form.rs
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::{CreateTarget, ListError};
use crate::domain::{DomainError, NoteDraft};

/// A submission whose creation request may still be running.
#[derive(Debug)]
pub struct PendingSubmission {
    draft: NoteDraft,
    task: JoinHandle<Result<(), ListError>>,
}

impl PendingSubmission {
    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Title and body inputs plus the submit control.
pub struct NoteForm {
    title: String,
    body: String,
    target: Arc<dyn CreateTarget>,
}

impl NoteForm {
    pub fn new(target: Arc<dyn CreateTarget>) -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            target,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    /// Submit the current values.
    ///
    /// Blank fields reject the submit and leave the form as it was. Otherwise
    /// the creation is spawned and both fields are cleared right away.
    pub fn submit(&mut self) -> Result<PendingSubmission, DomainError> {
        let draft = NoteDraft::new(self.title.as_str(), self.body.as_str())?;
        debug!(title = draft.title(), "Submitting note");

        let target = Arc::clone(&self.target);
        let request = draft.clone();
        let task = tokio::spawn(async move { target.create(request).await });

        self.title.clear();
        self.body.clear();
        Ok(PendingSubmission { draft, task })
    }

    /// Wait for a submission to finish.
    ///
    /// If creation failed and nothing was typed since the submit, the
    /// submitted values are put back so the input is not lost.
    pub async fn settle(&mut self, pending: PendingSubmission) -> Result<(), ListError> {
        let PendingSubmission { draft, task } = pending;
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(e) => Err(ListError::TaskFailed(e.to_string())),
        };
        if outcome.is_err() && self.is_empty() {
            info!(title = draft.title(), "Creation failed, restoring form input");
            self.title = draft.title().to_string();
            self.body = draft.body().to_string();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// Records drafts and answers with a fixed outcome once released.
    struct ScriptedTarget {
        received: Mutex<Vec<NoteDraft>>,
        release: Notify,
        fail: bool,
    }

    impl ScriptedTarget {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                received: Mutex::new(Vec::new()),
                release: Notify::new(),
                fail,
            })
        }
    }

    #[async_trait]
    impl CreateTarget for ScriptedTarget {
        async fn create(&self, draft: NoteDraft) -> Result<(), ListError> {
            self.received.lock().expect("lock").push(draft);
            self.release.notified().await;
            if self.fail {
                Err(ListError::TaskFailed("scripted failure".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn given_filled_form_when_submitting_then_clears_before_creation_completes() {
        // Arrange
        let target = ScriptedTarget::new(false);
        let mut form = NoteForm::new(target.clone());
        form.set_title("Meeting");
        form.set_body("10am standup");

        // Act
        let pending = form.submit().expect("submit should be accepted");

        // Assert
        assert!(form.is_empty());
        assert!(!pending.is_finished());
        target.release.notify_one();
        form.settle(pending).await.expect("creation should succeed");
        assert_eq!(
            *target.received.lock().expect("lock"),
            vec![NoteDraft::new("Meeting", "10am standup").expect("draft")]
        );
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn given_blank_body_when_submitting_then_rejects_and_keeps_fields() {
        let target = ScriptedTarget::new(false);
        let mut form = NoteForm::new(target.clone());
        form.set_title("Meeting");

        let result = form.submit();

        assert_eq!(result.err(), Some(DomainError::MissingField("body")));
        assert_eq!(form.title(), "Meeting");
        assert!(target.received.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn given_creation_fails_when_settling_then_restores_input() {
        let target = ScriptedTarget::new(true);
        let mut form = NoteForm::new(target.clone());
        form.set_title("Meeting");
        form.set_body("10am standup");

        let pending = form.submit().expect("submit should be accepted");
        target.release.notify_one();
        let result = form.settle(pending).await;

        assert!(result.is_err());
        assert_eq!(form.title(), "Meeting");
        assert_eq!(form.body(), "10am standup");
    }

    #[tokio::test]
    async fn given_new_input_typed_when_creation_fails_then_keeps_new_input() {
        let target = ScriptedTarget::new(true);
        let mut form = NoteForm::new(target.clone());
        form.set_title("Meeting");
        form.set_body("10am standup");

        let pending = form.submit().expect("submit should be accepted");
        form.set_title("Lunch");
        target.release.notify_one();
        let result = form.settle(pending).await;

        assert!(result.is_err());
        assert_eq!(form.title(), "Lunch");
        assert_eq!(form.body(), "");
    }
}
