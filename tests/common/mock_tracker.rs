//! Mock issue tracker for testing
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_batch::config::RepoConfig;
use issue_batch::error::{Error, Result};
use issue_batch::submit::ProgressCallback;
use issue_batch::tracker::IssueTracker;
use issue_batch::types::{ApiResponse, IssueDescriptor, RunSummary, SubmissionResult};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::fixtures::{created_response, test_config};

/// Recording mock tracker
///
/// Features:
/// - Queued responses, consumed in call order
/// - Auto-incrementing `201 Created` replies once the queue is empty
/// - Call tracking for order verification
/// - Transport error injection at a given call index
pub struct MockTracker {
    config: RepoConfig,
    next_number: AtomicU64,
    responses: Mutex<VecDeque<ApiResponse>>,
    calls: Mutex<Vec<IssueDescriptor>>,
    fail_at: Mutex<Option<usize>>,
}

impl MockTracker {
    /// Create a mock that creates every issue
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a mock with the given config
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            next_number: AtomicU64::new(1),
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            fail_at: Mutex::new(None),
        }
    }

    /// Queue a reply for the next unanswered call
    pub fn push_response(&self, response: ApiResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Make the call at `index` (0-based) fail at the transport level
    pub fn fail_transport_at(&self, index: usize) {
        *self.fail_at.lock().unwrap() = Some(index);
    }

    /// Titles of every descriptor sent, in call order
    pub fn call_titles(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.title.clone())
            .collect()
    }

    /// Number of create calls made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn create_issue(&self, descriptor: &IssueDescriptor) -> Result<ApiResponse> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(descriptor.clone());
            calls.len() - 1
        };

        if *self.fail_at.lock().unwrap() == Some(index) {
            return Err(Error::Timeout(self.config.timeout.as_secs()));
        }

        if let Some(response) = self.responses.lock().unwrap().pop_front() {
            return Ok(response);
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(created_response(number))
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}

/// Progress event captured by [`RecordingProgress`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Start(usize),
    Created(String, u64),
    Failed(String),
    Complete(RunSummary),
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    /// All recorded events, in order
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_batch_start(&self, total: usize, _config: &RepoConfig) {
        self.events.lock().unwrap().push(ProgressEvent::Start(total));
    }

    async fn on_issue_created(&self, result: &SubmissionResult) {
        self.events.lock().unwrap().push(ProgressEvent::Created(
            result.descriptor.title.clone(),
            result.assigned_number.unwrap_or_default(),
        ));
    }

    async fn on_issue_failed(&self, result: &SubmissionResult) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Failed(result.descriptor.title.clone()));
    }

    async fn on_batch_complete(&self, summary: &RunSummary) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Complete(*summary));
    }
}
