//! External collaborators of the content editor.

use crate::wire::ContentBlockSchema;
use avo_types::ContentId;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned errors: {}", .0.join("; "))]
    Server(Vec<String>),

    #[error("Response contained no data")]
    EmptyResponse,
}

/// Query/mutation client for content blocks
///
/// Treated as an opaque fetch: it returns rows or fails.
#[allow(async_fn_in_trait)]
pub trait ContentClient {
    async fn fetch_blocks(&self, content_id: ContentId)
        -> Result<Vec<ContentBlockSchema>, ClientError>;

    /// Replace the page's blocks; returns the stored rows with their ids
    ///
    /// `content_id` is `None` for a page that has not been stored yet.
    async fn save_blocks(
        &self,
        content_id: Option<ContentId>,
        rows: Vec<ContentBlockSchema>,
    ) -> Result<Vec<ContentBlockSchema>, ClientError>;
}

/// Fire-and-forget user notifications
pub trait Notifier {
    fn danger(&self, message: &str);
    fn success(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn danger(&self, message: &str) {
        (**self).danger(message)
    }

    fn success(&self, message: &str) {
        (**self).success(message)
    }
}

/// Notifier that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn danger(&self, message: &str) {
        tracing::error!(toast = "danger", "{}", message);
    }

    fn success(&self, message: &str) {
        tracing::info!(toast = "success", "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Danger,
    Success,
}

/// Notifier that keeps every toast, for headless runs and tests
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    toasts: RefCell<Vec<(ToastKind, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.borrow().clone()
    }

    pub fn last(&self) -> Option<(ToastKind, String)> {
        self.toasts.borrow().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn danger(&self, message: &str) {
        self.toasts
            .borrow_mut()
            .push((ToastKind::Danger, message.to_string()));
    }

    fn success(&self, message: &str) {
        self.toasts
            .borrow_mut()
            .push((ToastKind::Success, message.to_string()));
    }
}
