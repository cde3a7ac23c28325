//! Search view controller

use std::sync::Arc;

use schooltour_common::School;

use crate::service::SchoolService;

/// Controller for the search-as-you-type view.
///
/// Each call issues one request and replaces the results with whatever
/// comes back. In-flight requests are not cancelled when a newer term is
/// issued, so a slower earlier response can overwrite a newer one; callers
/// drive one search at a time.
pub struct SchoolSearch {
    service: Arc<SchoolService>,
    results: Vec<School>,
}

impl SchoolSearch {
    pub fn new(service: Arc<SchoolService>) -> Self {
        Self {
            service,
            results: Vec::new(),
        }
    }

    /// The current result list.
    pub fn results(&self) -> &[School] {
        &self.results
    }

    /// Search for `term` and replace the results. Blank terms clear the
    /// results without a request.
    pub async fn search(&mut self, term: &str) {
        self.results = self.service.search_schools(term).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageLog;

    #[tokio::test]
    async fn blank_term_clears_results_without_a_request() {
        let service = Arc::new(SchoolService::new(
            "http://127.0.0.1:1",
            Arc::new(MessageLog::new()),
        ));
        let mut search = SchoolSearch::new(service.clone());
        search.search("  ").await;
        assert!(search.results().is_empty());
        assert!(service.messages().is_empty());
    }
}
