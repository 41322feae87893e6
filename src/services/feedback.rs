//! Visitor feedback service

use crate::{
    error::{AppError, AppResult},
    models::feedback::{CreateFeedback, Feedback},
    models::visitor::SessionClaims,
    repository::Repository,
};

#[derive(Clone)]
pub struct FeedbackService {
    repository: Repository,
}

impl FeedbackService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Submit feedback. Name and email fall back to the session identity
    /// when the form omits them; an unknown booking reference is rejected
    /// with a specific message and performs no insertion.
    pub async fn submit(
        &self,
        identity: Option<&SessionClaims>,
        feedback: CreateFeedback,
    ) -> AppResult<Feedback> {
        let name = feedback
            .name
            .clone()
            .or_else(|| identity.map(|c| c.name.clone()))
            .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
        let email = feedback
            .email
            .clone()
            .or_else(|| identity.map(|c| c.email.clone()))
            .ok_or_else(|| AppError::Validation("Email is required".to_string()))?;

        self.repository.feedback.create(&name, &email, &feedback).await
    }

    /// All feedback, newest first (admin view)
    pub async fn list(&self) -> AppResult<Vec<Feedback>> {
        self.repository.feedback.list().await
    }
}
