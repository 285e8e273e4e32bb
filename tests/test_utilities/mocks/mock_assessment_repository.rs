use async_trait::async_trait;
use sentinel_assess::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Mock AssessmentRepository backed by in-memory assessments
///
/// Creation hands out the queued ids in order; fetching an unknown id fails
/// like a 404 from the backend.
#[derive(Default, Clone)]
pub struct MockAssessmentRepository {
    assessments: Arc<Mutex<HashMap<String, Assessment>>>,
    created_ids: Arc<Mutex<VecDeque<String>>>,
    fail_create: bool,
    pub create_requests: Arc<Mutex<Vec<CreateAssessmentRequest>>>,
    pub fetched_ids: Arc<Mutex<Vec<String>>>,
}

impl MockAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assessment(self, assessment: Assessment) -> Self {
        self.assessments
            .lock()
            .unwrap()
            .insert(assessment.id.clone(), assessment);
        self
    }

    pub fn with_created_id(self, id: &str) -> Self {
        self.created_ids.lock().unwrap().push_back(id.to_string());
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn get_create_requests(&self) -> Vec<CreateAssessmentRequest> {
        self.create_requests.lock().unwrap().clone()
    }

    pub fn get_fetched_ids(&self) -> Vec<String> {
        self.fetched_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssessmentRepository for MockAssessmentRepository {
    async fn create_assessment(&self, request: &CreateAssessmentRequest) -> Result<String> {
        self.create_requests.lock().unwrap().push(request.clone());
        if self.fail_create {
            return Err(SentinelError::CreateAssessmentFailed.into());
        }
        self.created_ids
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SentinelError::CreateAssessmentFailed.into())
    }

    async fn get_assessment(&self, id: &str) -> Result<Assessment> {
        self.fetched_ids.lock().unwrap().push(id.to_string());
        self.assessments
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| SentinelError::FetchAssessmentFailed.into())
    }
}
