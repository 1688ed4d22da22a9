use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::{InFlight, Service},
    },
    food_analysis::{
        entities::AnalysisHistory,
        insights::AnalysisInsights,
        ports::{FoodAnalysisService, LLMClient},
    },
    profile::{
        entities::User,
        ports::ProfileService,
        value_objects::{AssessProfileInput, WeightStatus},
    },
    session::{
        entities::{ANALYSIS_FAILED_MESSAGE, CaptureState, SessionSnapshot},
        ports::SessionService,
        value_objects::{SelectImageInput, SubmitProfileInput},
    },
    storage::{policies::prepend_bounded, ports::LocalStore},
};

impl<LLM, ST> SessionService for Service<LLM, ST>
where
    LLM: LLMClient,
    ST: LocalStore,
{
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn submit_profile(&self, input: SubmitProfileInput) -> Result<User, CoreError> {
        let _in_flight = InFlight::acquire(&self.profile_in_flight).ok_or_else(|| {
            warn!("Profile submission ignored, assessment already in progress");
            CoreError::ProfileAssessmentInProgress
        })?;

        self.write_session()?.profile_error = None;

        let assessment = self
            .assess_profile(AssessProfileInput {
                name: input.name.clone(),
                gender: input.gender,
                age: input.age,
                weight: input.weight,
            })
            .await;

        let analysis = match assessment {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Profile assessment failed: {}", e);
                self.write_session()?.profile_error = Some(e.to_string());
                return Err(e);
            }
        };

        let user = User {
            email: input.email,
            name: input.name,
            gender: input.gender,
            age: input.age,
            weight: input.weight,
            analysis: Some(analysis),
        };

        if let Err(e) = self.local_store.save_user(user.clone()).await {
            error!("Failed to persist user: {}", e);
            self.write_session()?.profile_error = Some(e.to_string());
            return Err(e);
        }

        self.write_session()?.user = Some(user.clone());

        info!("User logged in");

        Ok(user)
    }

    #[instrument(skip(self, input), fields(source = ?input.source))]
    async fn select_image(&self, input: SelectImageInput) -> Result<AnalysisHistory, CoreError> {
        let _in_flight = InFlight::acquire(&self.analysis_in_flight).ok_or_else(|| {
            warn!("Image ignored, analysis already in progress");
            CoreError::AnalysisInProgress
        })?;

        let image_url = input.image.to_data_url();

        {
            let mut session = self.write_session()?;
            if session.user.is_none() {
                return Err(CoreError::Unauthenticated);
            }

            session.show_history = false;
            session.capture = CaptureState {
                image_url: Some(image_url.clone()),
                source: Some(input.source),
                result: None,
                error: None,
            };
        }

        let analysis = match self.analyze_food_image(input.image).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Food image analysis failed: {}", e);
                self.write_session()?.capture.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                return Err(e);
            }
        };

        let entry = AnalysisHistory::new(image_url, analysis.clone());

        let persisted = match self.local_store.append_history(entry.clone()).await {
            Ok(history) => Some(history),
            Err(e) => {
                error!("Failed to persist history entry {}: {}", entry.id, e);
                None
            }
        };

        {
            let mut session = self.write_session()?;
            session.capture.result = Some(analysis);
            session.history = match persisted {
                Some(history) => history,
                None => prepend_bounded(std::mem::take(&mut session.history), entry.clone()),
            };
        }

        info!(entry_id = %entry.id, "Analysis stored in history");

        Ok(entry)
    }

    fn reset_analysis(&self) -> Result<(), CoreError> {
        let mut session = self.write_session()?;
        session.capture = CaptureState::default();
        self.analysis_in_flight.reopen();
        Ok(())
    }

    fn toggle_history(&self) -> Result<bool, CoreError> {
        let mut session = self.write_session()?;
        if session.user.is_none() {
            return Err(CoreError::Unauthenticated);
        }

        session.show_history = !session.show_history;
        Ok(session.show_history)
    }

    fn select_history_entry(&self, entry_id: String) -> Result<AnalysisHistory, CoreError> {
        let mut session = self.write_session()?;
        if session.user.is_none() {
            return Err(CoreError::Unauthenticated);
        }

        let entry = session
            .history
            .iter()
            .find(|h| h.id == entry_id)
            .cloned()
            .ok_or(CoreError::NotFound)?;

        session.show_history = false;
        session.capture = CaptureState {
            image_url: Some(entry.image_url.clone()),
            source: None,
            result: Some(entry.data.clone()),
            error: None,
        };

        Ok(entry)
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<(), CoreError> {
        self.local_store.clear_history().await?;
        self.write_session()?.history.clear();

        info!("History cleared");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<(), CoreError> {
        self.local_store.clear_user().await?;

        {
            let mut session = self.write_session()?;
            session.user = None;
            session.show_history = false;
            session.capture = CaptureState::default();
            session.profile_error = None;
        }
        self.analysis_in_flight.reopen();

        info!("User logged out");

        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>, CoreError> {
        Ok(self.read_session()?.user.clone())
    }

    fn history(&self) -> Result<Vec<AnalysisHistory>, CoreError> {
        Ok(self.read_session()?.history.clone())
    }

    fn snapshot(&self) -> Result<SessionSnapshot, CoreError> {
        let session = self.read_session()?;

        let weight_status = session.user.as_ref().and_then(|user| {
            user.analysis
                .as_ref()
                .map(|a| WeightStatus::compute(user.weight, &a.ideal_weight_range))
        });

        Ok(SessionSnapshot {
            view: session.view(),
            user: session.user.clone(),
            weight_status,
            capture: session.capture.clone(),
            insights: session
                .capture
                .result
                .as_ref()
                .map(AnalysisInsights::from_analysis),
            analyzing: self.analysis_in_flight.is_held(),
            profile_pending: self.profile_in_flight.is_held(),
            profile_error: session.profile_error.clone(),
            history: session.history.clone(),
        })
    }
}
