use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, food_analysis::entities::AnalysisHistory,
    profile::entities::User,
};

/// Device-local persistence of the current user and the analysis history.
///
/// Loads are best-effort: a missing or unreadable record is reported as
/// absent or empty, never as an error.
#[cfg_attr(test, mockall::automock)]
pub trait LocalStore: Send + Sync {
    fn load_user(&self) -> impl Future<Output = Option<User>> + Send;

    fn save_user(&self, user: User) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_user(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Newest first.
    fn load_history(&self) -> impl Future<Output = Vec<AnalysisHistory>> + Send;

    /// Prepends `entry`, keeps the most recent entries up to the history
    /// limit and returns what was persisted.
    fn append_history(
        &self,
        entry: AnalysisHistory,
    ) -> impl Future<Output = Result<Vec<AnalysisHistory>, CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
