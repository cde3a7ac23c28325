//! In-memory school collection

use schooltour_common::School;
use tokio::sync::RwLock;

/// Seed collection, matching the tutorial data set.
const SEED: [(i64, &str); 10] = [
    (11, "Mr. Nice"),
    (12, "Narco"),
    (13, "Bombasto"),
    (14, "Celeritas"),
    (15, "Magneta"),
    (16, "RubberMan"),
    (17, "Dynama"),
    (18, "Dr IQ"),
    (19, "Magma"),
    (20, "Tornado"),
];

/// Id handed out when the collection is empty.
const FIRST_ID: i64 = 11;

/// The backing collection, kept in insertion order.
pub struct SchoolStore {
    schools: RwLock<Vec<School>>,
}

impl SchoolStore {
    /// Create a store populated with the seed collection.
    pub fn new() -> Self {
        let schools = SEED
            .iter()
            .map(|(id, name)| School::new(*id, *name))
            .collect();
        Self {
            schools: RwLock::new(schools),
        }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self {
            schools: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the full collection.
    pub async fn list(&self) -> Vec<School> {
        self.schools.read().await.clone()
    }

    /// Find one school by id.
    pub async fn get(&self, id: i64) -> Option<School> {
        self.schools.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// Schools whose name contains `term`, case-insensitively.
    pub async fn search(&self, term: &str) -> Vec<School> {
        let term = term.to_lowercase();
        self.schools
            .read()
            .await
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Insert a new school, assigning the next id (max + 1).
    pub async fn insert(&self, name: String) -> School {
        let mut schools = self.schools.write().await;
        let id = schools.iter().map(|s| s.id).max().map_or(FIRST_ID, |m| m + 1);
        let school = School::new(id, name);
        schools.push(school.clone());
        school
    }

    /// Replace the record with the same id. Returns the stored record, or
    /// None if the id is unknown.
    pub async fn update(&self, school: School) -> Option<School> {
        let mut schools = self.schools.write().await;
        let slot = schools.iter_mut().find(|s| s.id == school.id)?;
        *slot = school.clone();
        Some(school)
    }

    /// Remove by id. Returns the removed record when one existed.
    pub async fn remove(&self, id: i64) -> Option<School> {
        let mut schools = self.schools.write().await;
        let pos = schools.iter().position(|s| s.id == id)?;
        Some(schools.remove(pos))
    }
}

impl Default for SchoolStore {
    fn default() -> Self {
        Self::new()
    }
}
