//! Lesson-plan store.
//!
//! Owns the user's lesson plans and keeps them in a single slot of a
//! [`KeyValueStore`] as one JSON array. The whole array is rewritten after
//! every successful mutation; the collection is small enough (manual data
//! entry by one user) that incremental persistence is not worth having.
//!
//! Plans are kept most-recent-first.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::storage::{KeyValueStore, LessonPlan, LessonPlanDraft, LessonPlanPatch, StorageError};

/// Storage slot holding the serialized lesson plans.
pub const STORAGE_KEY: &str = "teachmaster_lesson_plans";

/// Id of the example plan in the default seed.
pub const EXAMPLE_PLAN_ID: &str = "lp_example";

/// Errors returned by [`LessonPlanStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The collection could not be serialized.
    #[error("Failed to serialize lesson plans: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend rejected the write. The in-memory collection is unchanged.
    #[error("Failed to save lesson plans: {0}")]
    Persist(#[source] StorageError),

    /// No plan matches the given id or prefix.
    #[error("No lesson plan found matching '{0}'")]
    NotFound(String),

    /// More than one plan matches the given prefix.
    #[error("Multiple lesson plans match '{prefix}': {}", .candidates.join(", "))]
    Ambiguous {
        prefix: String,
        candidates: Vec<String>,
    },
}

/// The lesson-plan collection and its persistence handle.
pub struct LessonPlanStore<S: KeyValueStore> {
    storage: S,
    plans: Vec<LessonPlan>,
}

impl<S: KeyValueStore> LessonPlanStore<S> {
    /// Loads the collection from `storage`, seeding it with [`default_seed`]
    /// when the slot is empty, unparsable, or cannot be read.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        Self::open_with_seed(storage, default_seed())
    }

    /// Loads the collection from `storage`, falling back to `seed`.
    ///
    /// A missing slot, a slot the backend fails to read, or one that does
    /// not parse as a lesson-plan array is replaced by `seed`, which is
    /// written back immediately. Only the write of the seed can fail.
    pub fn open_with_seed(storage: S, seed: Vec<LessonPlan>) -> Result<Self, StoreError> {
        let loaded = match storage.get(STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<LessonPlan>>(&json) {
                Ok(plans) => Some(plans),
                Err(e) => {
                    tracing::warn!("Stored lesson plans are unreadable, using seed: {e}");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("No stored lesson plans, using seed");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to read stored lesson plans, using seed: {e}");
                None
            }
        };

        match loaded {
            Some(plans) => {
                tracing::debug!("Loaded {} lesson plans", plans.len());
                Ok(Self { storage, plans })
            }
            None => {
                let mut store = Self {
                    storage,
                    plans: Vec::new(),
                };
                store.commit(seed)?;
                Ok(store)
            }
        }
    }

    /// The current collection, most recently created first.
    pub fn list(&self) -> &[LessonPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Looks up a plan by exact id.
    pub fn get(&self, id: &str) -> Option<&LessonPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Resolves a plan from an exact id or a unique id prefix.
    pub fn resolve(&self, prefix: &str) -> Result<&LessonPlan, StoreError> {
        if let Some(plan) = self.get(prefix) {
            return Ok(plan);
        }

        let matching: Vec<&LessonPlan> = self
            .plans
            .iter()
            .filter(|p| !prefix.is_empty() && p.id.starts_with(prefix))
            .collect();

        match matching.as_slice() {
            [] => Err(StoreError::NotFound(prefix.to_string())),
            [plan] => Ok(plan),
            many => Err(StoreError::Ambiguous {
                prefix: prefix.to_string(),
                candidates: many.iter().map(|p| p.id.clone()).collect(),
            }),
        }
    }

    /// Creates a plan from `draft`, stores it at the front of the collection
    /// and returns it.
    pub fn create(&mut self, draft: LessonPlanDraft) -> Result<LessonPlan, StoreError> {
        let plan = draft.into_plan(self.next_id(), Utc::now());

        let mut next = Vec::with_capacity(self.plans.len() + 1);
        next.push(plan.clone());
        next.extend(self.plans.iter().cloned());
        self.commit(next)?;

        tracing::debug!("Created lesson plan {}", plan.id);
        Ok(plan)
    }

    /// Merges `patch` into the plan with the given id.
    ///
    /// Returns the updated plan, or `None` if no plan has that id. In the
    /// latter case nothing is written.
    pub fn update(
        &mut self,
        id: &str,
        patch: LessonPlanPatch,
    ) -> Result<Option<LessonPlan>, StoreError> {
        let Some(index) = self.plans.iter().position(|p| p.id == id) else {
            tracing::debug!("Update skipped, no lesson plan {id}");
            return Ok(None);
        };

        let updated = patch.apply(&self.plans[index]);
        let mut next = self.plans.clone();
        next[index] = updated.clone();
        self.commit(next)?;

        tracing::debug!("Updated lesson plan {id}");
        Ok(Some(updated))
    }

    /// Removes the plan with the given id.
    ///
    /// Returns whether a plan was removed. Deleting an unknown id changes
    /// nothing and writes nothing, so repeated deletes are harmless.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.get(id).is_none() {
            tracing::debug!("Delete skipped, no lesson plan {id}");
            return Ok(false);
        }

        let next: Vec<LessonPlan> = self.plans.iter().filter(|p| p.id != id).cloned().collect();
        self.commit(next)?;

        tracing::debug!("Deleted lesson plan {id}");
        Ok(true)
    }

    /// Releases the storage handle.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Writes `plans` to storage, then makes them the current collection.
    fn commit(&mut self, plans: Vec<LessonPlan>) -> Result<(), StoreError> {
        let json = serde_json::to_string(&plans)?;
        self.storage
            .set(STORAGE_KEY, &json)
            .map_err(StoreError::Persist)?;
        self.plans = plans;
        Ok(())
    }

    fn next_id(&self) -> String {
        loop {
            let id = format!("lp_{}", Uuid::new_v4().simple());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// The collection used when nothing usable is stored yet.
pub fn default_seed() -> Vec<LessonPlan> {
    let draft = LessonPlanDraft {
        title: "Introduction to Fractions".to_string(),
        subject: "Mathematics".to_string(),
        grade_level: "4".to_string(),
        duration: "45 minutes".to_string(),
        objectives: vec![
            "Name the numerator and denominator of a fraction".to_string(),
            "Compare fractions with the same denominator".to_string(),
        ],
        materials: vec![
            "Fraction strips".to_string(),
            "Whiteboards and markers".to_string(),
        ],
        lesson_outline: "Warm-up with pizza slices, guided practice with fraction strips, pair work, wrap-up.".to_string(),
        teacher_actions: "Models folding strips into equal parts and asks guiding questions.".to_string(),
        student_actions: "Fold strips, label parts, and explain comparisons to a partner.".to_string(),
        assessment_method: "Exit ticket with two comparison questions.".to_string(),
        notes: String::new(),
        techniques_used: vec!["think-pair-share".to_string(), "exit-ticket".to_string()],
    };

    let created = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    vec![draft.into_plan(EXAMPLE_PLAN_ID.to_string(), created)]
}
