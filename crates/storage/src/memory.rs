use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use liftplan_domain::{
    self as domain, Catalog, CatalogRepository, PlannedWorkout, PreferencesRepository,
    ProgramRepository, ReadError, StorageError, UpdateError, UserID, UserPreferences, Workout,
    WorkoutExerciseID, WorkoutID,
};
use log::{debug, info};
use uuid::Uuid;

use crate::wire;

/// Process-local storage of preferences and programs.
///
/// All state sits behind one lock, so replacing a program is atomic for concurrent readers.
/// When a data file is configured, every update is written through to it.
pub struct MemoryStorage {
    catalog: Catalog,
    state: RwLock<State>,
    data_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct State {
    preferences: BTreeMap<UserID, UserPreferences>,
    programs: BTreeMap<UserID, Vec<Workout>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: RwLock::new(State::default()),
            data_file: None,
        }
    }

    /// Loads the state from `path` if it exists and writes every later update back to it.
    pub fn open(catalog: Catalog, path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        let state = if path.exists() {
            let state = State::try_from(read_snapshot(&path)?)?;
            info!(
                "loaded {} users and {} programs from {}",
                state.preferences.len(),
                state.programs.len(),
                path.display()
            );
            state
        } else {
            debug!("data file {} does not exist yet", path.display());
            State::default()
        };
        Ok(Self {
            catalog,
            state: RwLock::new(state),
            data_file: Some(path),
        })
    }

    pub fn snapshot(&self) -> Result<Snapshot, StorageError> {
        let state = self.state.read().map_err(|_| StorageError::Poisoned)?;
        Ok(Snapshot::from(&*state))
    }

    fn persist(&self, state: &State) -> Result<(), StorageError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        write_snapshot(path, &Snapshot::from(state))
            .map_err(|err| StorageError::Other(Box::new(err)))
    }
}

impl CatalogRepository for MemoryStorage {
    async fn read_catalog(&self) -> Result<Catalog, ReadError> {
        Ok(self.catalog.clone())
    }
}

impl PreferencesRepository for MemoryStorage {
    async fn read_preferences(&self, user_id: UserID) -> Result<UserPreferences, ReadError> {
        let state = self.state.read().map_err(|_| StorageError::Poisoned)?;
        state
            .preferences
            .get(&user_id)
            .cloned()
            .ok_or(ReadError::NotFound)
    }

    async fn write_preferences(
        &self,
        user_id: UserID,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, UpdateError> {
        let mut state = self.state.write().map_err(|_| StorageError::Poisoned)?;
        let previous = state.preferences.insert(user_id, preferences.clone());
        if let Err(err) = self.persist(&state) {
            match previous {
                Some(previous) => state.preferences.insert(user_id, previous),
                None => state.preferences.remove(&user_id),
            };
            return Err(err.into());
        }
        Ok(preferences)
    }
}

impl ProgramRepository for MemoryStorage {
    async fn read_program(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError> {
        let state = self.state.read().map_err(|_| StorageError::Poisoned)?;
        Ok(state.programs.get(&user_id).cloned().unwrap_or_default())
    }

    async fn replace_program(
        &self,
        user_id: UserID,
        program: Vec<PlannedWorkout>,
    ) -> Result<Vec<Workout>, UpdateError> {
        let workouts = program
            .into_iter()
            .map(|plan| {
                Workout::from_plan(WorkoutID::from(Uuid::new_v4()), user_id, plan, || {
                    WorkoutExerciseID::from(Uuid::new_v4())
                })
            })
            .collect::<Vec<_>>();

        let mut state = self.state.write().map_err(|_| StorageError::Poisoned)?;
        let previous = state.programs.insert(user_id, workouts.clone());
        if let Err(err) = self.persist(&state) {
            match previous {
                Some(previous) => state.programs.insert(user_id, previous),
                None => state.programs.remove(&user_id),
            };
            return Err(err.into());
        }
        Ok(workouts)
    }
}

/// Serialized form of the whole storage state, keyed by user.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub preferences: BTreeMap<Uuid, wire::Preferences>,
    #[serde(default)]
    pub programs: BTreeMap<Uuid, Vec<wire::Workout>>,
}

impl From<&State> for Snapshot {
    fn from(value: &State) -> Self {
        Self {
            preferences: value
                .preferences
                .iter()
                .map(|(user_id, preferences)| (**user_id, wire::Preferences::from(preferences)))
                .collect(),
            programs: value
                .programs
                .iter()
                .map(|(user_id, workouts)| {
                    (**user_id, workouts.iter().map(wire::Workout::from).collect())
                })
                .collect(),
        }
    }
}

impl TryFrom<Snapshot> for State {
    type Error = wire::WireError;

    fn try_from(value: Snapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            preferences: value
                .preferences
                .into_iter()
                .map(|(user_id, preferences)| {
                    Ok((UserID::from(user_id), domain::UserPreferences::try_from(preferences)?))
                })
                .collect::<Result<_, Self::Error>>()?,
            programs: value
                .programs
                .into_iter()
                .map(|(user_id, workouts)| {
                    Ok((
                        UserID::from(user_id),
                        workouts
                            .into_iter()
                            .map(domain::Workout::try_from)
                            .collect::<Result<Vec<_>, _>>()?,
                    ))
                })
                .collect::<Result<_, Self::Error>>()?,
        })
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid data file: {0}")]
    Invalid(#[from] wire::WireError),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use liftplan_domain::{ProgramService, Service};
    use pretty_assertions::assert_eq;

    use crate::tests::data::{PREFERENCES, PREFERENCES_2, WORKOUT};

    use super::*;

    fn data_file() -> PathBuf {
        std::env::temp_dir().join(format!("liftplan-{}.json", Uuid::new_v4()))
    }

    fn plan(name: &str) -> PlannedWorkout {
        domain::generate_program(&PREFERENCES, &Catalog::builtin(), &domain::Constraints::none())
            .unwrap()
            .into_iter()
            .find(|w| w.name == name)
            .unwrap()
    }

    #[tokio::test]
    async fn test_read_catalog() {
        let storage = MemoryStorage::new(Catalog::builtin());
        assert_eq!(storage.read_catalog().await.unwrap(), Catalog::builtin());
    }

    #[tokio::test]
    async fn test_read_preferences_not_found() {
        let storage = MemoryStorage::new(Catalog::builtin());
        assert!(matches!(
            storage.read_preferences(UserID::from(1)).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_write_preferences() {
        let storage = MemoryStorage::new(Catalog::builtin());
        let user_id = UserID::from(1);

        storage
            .write_preferences(user_id, PREFERENCES.clone())
            .await
            .unwrap();
        storage
            .write_preferences(UserID::from(2), PREFERENCES.clone())
            .await
            .unwrap();
        assert_eq!(
            storage
                .write_preferences(user_id, PREFERENCES_2.clone())
                .await
                .unwrap(),
            PREFERENCES_2.clone()
        );

        assert_eq!(
            storage.read_preferences(user_id).await.unwrap(),
            PREFERENCES_2.clone()
        );
        assert_eq!(
            storage.read_preferences(UserID::from(2)).await.unwrap(),
            PREFERENCES.clone()
        );
    }

    #[tokio::test]
    async fn test_read_program_empty() {
        let storage = MemoryStorage::new(Catalog::builtin());
        assert_eq!(storage.read_program(UserID::from(1)).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_replace_program() {
        let storage = MemoryStorage::new(Catalog::builtin());
        let user_id = UserID::from(1);

        let first = storage
            .replace_program(
                user_id,
                vec![plan("Upper Body Day A"), plan("Lower Body Day A")],
            )
            .await
            .unwrap();
        let second = storage
            .replace_program(user_id, vec![plan("Upper Body Day B")])
            .await
            .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(storage.read_program(user_id).await.unwrap(), second);
        assert_eq!(
            second.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            vec!["Upper Body Day B"]
        );
        assert!(second.iter().all(|w| w.user_id == user_id && w.is_active));
        assert!(
            second
                .iter()
                .all(|w| w.exercises.iter().all(|e| e.workout_id == w.id))
        );
    }

    #[tokio::test]
    async fn test_replace_program_assigns_unique_ids() {
        let storage = MemoryStorage::new(Catalog::builtin());

        let workouts = storage
            .replace_program(
                UserID::from(1),
                vec![plan("Upper Body Day A"), plan("Lower Body Day A")],
            )
            .await
            .unwrap();

        let workout_ids = workouts.iter().map(|w| w.id).collect::<BTreeSet<_>>();
        let exercise_ids = workouts
            .iter()
            .flat_map(|w| &w.exercises)
            .map(|e| e.id)
            .collect::<BTreeSet<_>>();
        assert_eq!(workout_ids.len(), 2);
        assert_eq!(
            exercise_ids.len(),
            workouts.iter().map(|w| w.exercises.len()).sum::<usize>()
        );
        assert!(workout_ids.iter().all(|id| !id.is_nil()));
    }

    #[tokio::test]
    async fn test_replace_program_keeps_other_users() {
        let storage = MemoryStorage::new(Catalog::builtin());

        let other = storage
            .replace_program(UserID::from(2), vec![plan("Lower Body Day B")])
            .await
            .unwrap();
        storage
            .replace_program(UserID::from(1), vec![plan("Upper Body Day A")])
            .await
            .unwrap();

        assert_eq!(storage.read_program(UserID::from(2)).await.unwrap(), other);
    }

    #[tokio::test]
    async fn test_open_persists_updates() {
        let path = data_file();
        let user_id = UserID::from(1);

        let storage = MemoryStorage::open(Catalog::builtin(), &path).unwrap();
        storage
            .write_preferences(user_id, PREFERENCES.clone())
            .await
            .unwrap();
        let workouts = storage
            .replace_program(user_id, vec![plan("Upper Body Day A")])
            .await
            .unwrap();

        let reopened = MemoryStorage::open(Catalog::builtin(), &path).unwrap();
        assert_eq!(
            reopened.read_preferences(user_id).await.unwrap(),
            PREFERENCES.clone()
        );
        assert_eq!(reopened.read_program(user_id).await.unwrap(), workouts);
        assert_eq!(reopened.snapshot().unwrap(), storage.snapshot().unwrap());

        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_state() {
        let dir = std::env::temp_dir().join(format!("liftplan-{}", Uuid::new_v4()));
        fs::create_dir(&dir).unwrap();
        let storage = MemoryStorage::open(Catalog::builtin(), dir.join("data.json")).unwrap();
        let user_id = UserID::from(1);
        storage
            .write_preferences(user_id, PREFERENCES.clone())
            .await
            .unwrap();
        let workouts = storage
            .replace_program(user_id, vec![plan("Upper Body Day A")])
            .await
            .unwrap();

        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(
            storage
                .write_preferences(user_id, PREFERENCES_2.clone())
                .await,
            Err(UpdateError::Storage(StorageError::Other(_)))
        ));
        assert!(matches!(
            storage
                .replace_program(user_id, vec![plan("Lower Body Day A")])
                .await,
            Err(UpdateError::Storage(StorageError::Other(_)))
        ));
        assert_eq!(
            storage.read_preferences(user_id).await.unwrap(),
            PREFERENCES.clone()
        );
        assert_eq!(storage.read_program(user_id).await.unwrap(), workouts);

        let other = UserID::from(2);
        assert!(
            storage
                .write_preferences(other, PREFERENCES.clone())
                .await
                .is_err()
        );
        assert!(
            storage
                .replace_program(other, vec![plan("Upper Body Day A")])
                .await
                .is_err()
        );
        assert!(matches!(
            storage.read_preferences(other).await,
            Err(ReadError::NotFound)
        ));
        assert_eq!(storage.read_program(other).await.unwrap(), vec![]);
    }

    #[test]
    fn test_open_invalid_data_file() {
        let path = data_file();
        let mut snapshot = Snapshot::default();
        let mut preferences = wire::Preferences::from(PREFERENCES.clone());
        preferences.goal = String::from("bulk");
        snapshot.preferences.insert(Uuid::from_u128(1), preferences);
        fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        assert!(matches!(
            MemoryStorage::open(Catalog::builtin(), &path),
            Err(SnapshotError::Invalid(_))
        ));

        fs::write(&path, "{").unwrap();
        assert!(matches!(
            MemoryStorage::open(Catalog::builtin(), &path),
            Err(SnapshotError::Json(_))
        ));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_snapshot_serde() {
        let state = State {
            preferences: BTreeMap::from([(UserID::from(2), PREFERENCES.clone())]),
            programs: BTreeMap::from([(UserID::from(2), vec![WORKOUT.clone()])]),
        };
        let snapshot = Snapshot::from(&state);
        let deserialized: Snapshot =
            serde_json::from_str(&serde_json::to_string(&snapshot).unwrap()).unwrap();

        assert_eq!(State::try_from(deserialized), Ok(state));
    }

    #[tokio::test]
    async fn test_service_with_memory_storage() {
        let service = Service::new(MemoryStorage::new(Catalog::builtin()));
        let user_id = UserID::from(1);

        let workouts = service
            .set_preferences(user_id, PREFERENCES.clone())
            .await
            .unwrap();

        assert_eq!(
            workouts.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            vec![
                "Upper Body Day A",
                "Lower Body Day A",
                "Upper Body Day B",
                "Lower Body Day B"
            ]
        );
        assert_eq!(service.get_program(user_id).await.unwrap(), workouts);
    }
}
