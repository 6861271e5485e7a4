use log::{debug, error, info};

use crate::{
    Catalog, CatalogRepository, Constraints, GenerateError, PreferencesRepository,
    PlannedWorkout, ProgramRepository, ProgramService, ReadError, RegenerateRequest, UpdateError, UserID,
    UserPreferences, Workout, generate_program,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository + ProgramRepository> Service<R> {
    async fn store_program(
        &self,
        user_id: UserID,
        program: Vec<PlannedWorkout>,
    ) -> Result<Vec<Workout>, GenerateError> {
        let workouts = log_on_error!(
            self.repository.replace_program(user_id, program),
            UpdateError,
            "replace",
            "program"
        )?;
        info!(
            "replaced program of user {user_id} with {} workouts",
            workouts.len()
        );
        Ok(workouts)
    }

    async fn replace_with_generated(
        &self,
        user_id: UserID,
        preferences: &UserPreferences,
        catalog: &Catalog,
        constraints: &Constraints,
    ) -> Result<Vec<Workout>, GenerateError> {
        let program = generate_program(preferences, catalog, constraints)?;
        self.store_program(user_id, program).await
    }
}

impl<R> ProgramService for Service<R>
where
    R: CatalogRepository + PreferencesRepository + ProgramRepository,
{
    async fn get_catalog(&self) -> Result<Catalog, ReadError> {
        log_on_error!(
            self.repository.read_catalog(),
            ReadError,
            "get",
            "catalog"
        )
    }

    async fn get_preferences(&self, user_id: UserID) -> Result<UserPreferences, ReadError> {
        log_on_error!(
            self.repository.read_preferences(user_id),
            ReadError,
            "get",
            "preferences"
        )
    }

    async fn set_preferences(
        &self,
        user_id: UserID,
        preferences: UserPreferences,
    ) -> Result<Vec<Workout>, GenerateError> {
        preferences.validate()?;
        let catalog = self.get_catalog().await?;
        // Nothing is stored unless the new preferences yield a program.
        let program = generate_program(&preferences, &catalog, &Constraints::none())?;
        log_on_error!(
            self.repository.write_preferences(user_id, preferences),
            UpdateError,
            "set",
            "preferences"
        )?;
        self.store_program(user_id, program).await
    }

    async fn get_program(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_program(user_id),
            ReadError,
            "get",
            "program"
        )
    }

    async fn generate_program(&self, user_id: UserID) -> Result<Vec<Workout>, GenerateError> {
        let preferences = self.get_preferences(user_id).await?;
        preferences.validate()?;
        let catalog = self.get_catalog().await?;
        self.replace_with_generated(user_id, &preferences, &catalog, &Constraints::none())
            .await
    }

    async fn regenerate_with_constraints(
        &self,
        user_id: UserID,
        request: RegenerateRequest,
    ) -> Result<Vec<Workout>, GenerateError> {
        let preferences = self.get_preferences(user_id).await?;
        preferences.validate()?;
        let catalog = self.get_catalog().await?;
        let constraints = request.resolve(&catalog)?;
        self.replace_with_generated(user_id, &preferences, &catalog, &constraints)
            .await
    }
}
