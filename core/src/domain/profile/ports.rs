use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::ProfileAnalysis, value_objects::AssessProfileInput},
};

/// Service trait for body-profile assessment
#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn assess_profile(
        &self,
        input: AssessProfileInput,
    ) -> impl Future<Output = Result<ProfileAnalysis, CoreError>> + Send;
}
