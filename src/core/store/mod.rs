//! Durable stores and session lifecycle
//!
//! Three stores share one storage handle but write disjoint record keys,
//! so their snapshots stay independent. There is no cross-store
//! transaction: a crash between two writes can leave one store a step
//! behind another, which the calculators tolerate because every store
//! also tolerates default-shaped input.

pub mod courses;
pub mod profile;
pub mod requirements;
pub mod storage;

pub use courses::CoursePlanStore;
pub use profile::{AcademicProfileStore, ProfileRecord};
pub use requirements::{RequirementRecord, RequirementStore};
pub use storage::{Storage, COURSES_KEY, PROFILE_KEY, REQUIREMENTS_KEY};

/// The whole client-local academic state, passed by reference wherever
/// derived values are computed
///
/// This is deliberately an explicit object rather than module-level
/// state; the only implicit global in the crate is the storage location
/// itself.
#[derive(Debug)]
pub struct AcademicSession {
    /// Planned-course list
    pub courses: CoursePlanStore,
    /// Scalar academic profile
    pub profile: AcademicProfileStore,
    /// Graduation-requirement categories
    pub requirements: RequirementStore,
}

impl AcademicSession {
    /// Hydrate all three stores from the given storage handle.
    #[must_use]
    pub fn load(storage: &Storage) -> Self {
        Self {
            courses: CoursePlanStore::load(storage.clone()),
            profile: AcademicProfileStore::load(storage.clone()),
            requirements: RequirementStore::load(storage.clone()),
        }
    }

    /// Restore every store to its defaults and clear all persisted
    /// snapshots.
    pub fn reset(&mut self) {
        self.courses.reset();
        self.profile.reset();
        self.requirements.reset();
    }
}
