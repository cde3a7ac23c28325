//! List view controller

use std::sync::Arc;

use schooltour_common::{NewSchool, School};

use crate::service::SchoolService;

/// Controller for the full-collection view.
///
/// Holds a locally-mutable cache of the backend collection. Add and delete
/// mutate the cache optimistically rather than re-fetching; the cache is
/// never authoritative across runs.
pub struct SchoolList {
    service: Arc<SchoolService>,
    schools: Vec<School>,
}

impl SchoolList {
    pub fn new(service: Arc<SchoolService>) -> Self {
        Self {
            service,
            schools: Vec::new(),
        }
    }

    /// The cached collection.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Replace the cache with the backend collection. A failed fetch leaves
    /// an empty cache, indistinguishable from an empty collection.
    pub async fn refresh(&mut self) {
        self.schools = self.service.get_schools().await;
    }

    /// Create a school named `name` and append the server-assigned record
    /// to the cache. Blank names are ignored.
    pub async fn add(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(school) = self.service.add_school(NewSchool::new(name)).await {
            self.schools.push(school);
        }
    }

    /// Remove `school` from the cache, then request the backend delete.
    ///
    /// The removal is optimistic: a failed backend call does not restore
    /// the cache entry.
    pub async fn delete(&mut self, school: &School) {
        self.schools.retain(|s| s.id != school.id);
        self.service.delete_school(school.clone()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageLog;

    fn dead_list(schools: Vec<School>) -> SchoolList {
        let service = Arc::new(SchoolService::new(
            "http://127.0.0.1:1",
            Arc::new(MessageLog::new()),
        ));
        SchoolList { service, schools }
    }

    #[tokio::test]
    async fn add_ignores_blank_names_without_a_request() {
        let mut list = dead_list(Vec::new());
        list.add("   ").await;
        assert!(list.schools().is_empty());
        assert!(list.service.messages().is_empty());
    }

    #[tokio::test]
    async fn failed_add_leaves_cache_untouched() {
        let mut list = dead_list(vec![School::new(11, "Mr. Nice")]);
        list.add("Alice").await;
        assert_eq!(list.schools().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_optimistic_even_when_backend_is_down() {
        let seed: Vec<School> = (11..=20)
            .map(|id| School::new(id, format!("School {}", id)))
            .collect();
        let mut list = dead_list(seed);

        let target = School::new(15, "School 15");
        list.delete(&target).await;

        assert_eq!(list.schools().len(), 9);
        assert!(list.schools().iter().all(|s| s.id != 15));
    }
}
