use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::AnalysisHistory,
    profile::entities::User,
    session::{
        entities::SessionSnapshot,
        value_objects::{SelectImageInput, SubmitProfileInput},
    },
};

/// Operations the presentation layer drives the application with.
#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    /// Assesses the profile and logs the resulting user in. Rejected while a
    /// previous submission is still waiting on the inference service.
    fn submit_profile(
        &self,
        input: SubmitProfileInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Analyzes the image and records the result in the history.
    fn select_image(
        &self,
        input: SelectImageInput,
    ) -> impl Future<Output = Result<AnalysisHistory, CoreError>> + Send;

    /// Discards the current image, result and error. An in-flight analysis
    /// is not cancelled.
    fn reset_analysis(&self) -> Result<(), CoreError>;

    /// Returns whether the history view is now shown.
    fn toggle_history(&self) -> Result<bool, CoreError>;

    fn select_history_entry(&self, entry_id: String) -> Result<AnalysisHistory, CoreError>;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Forgets the current user. History is kept.
    fn logout(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn current_user(&self) -> Result<Option<User>, CoreError>;

    fn history(&self) -> Result<Vec<AnalysisHistory>, CoreError>;

    fn snapshot(&self) -> Result<SessionSnapshot, CoreError>;
}
