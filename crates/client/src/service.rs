//! Data-access service over the schools REST resource

use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, warn};

use schooltour_common::{Error, NewSchool, Result, School};

use crate::messages::MessageLog;

/// Target of a delete request: either a bare id or a full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    ById(i64),
    ByEntity(School),
}

impl DeleteTarget {
    pub fn id(&self) -> i64 {
        match self {
            DeleteTarget::ById(id) => *id,
            DeleteTarget::ByEntity(school) => school.id,
        }
    }
}

impl From<i64> for DeleteTarget {
    fn from(id: i64) -> Self {
        DeleteTarget::ById(id)
    }
}

impl From<School> for DeleteTarget {
    fn from(school: School) -> Self {
        DeleteTarget::ByEntity(school)
    }
}

/// Failure-tolerant client for the schools resource.
///
/// Transport failures never escape this boundary: each operation logs the
/// failure to the injected [`MessageLog`] and returns a benign fallback
/// (empty list, `None`). There is no retry and no backoff. The single
/// exception is [`SchoolService::get_school`], which surfaces the backend's
/// not-found answer to the caller.
pub struct SchoolService {
    http: reqwest::Client,
    schools_url: String,
    messages: Arc<MessageLog>,
}

impl SchoolService {
    /// Create a service rooted at `{base_url}/api/schools`.
    pub fn new(base_url: &str, messages: Arc<MessageLog>) -> Self {
        Self {
            http: reqwest::Client::new(),
            schools_url: format!("{}/api/schools", base_url.trim_end_matches('/')),
            messages,
        }
    }

    /// Fetch the whole collection. Empty on failure.
    pub async fn get_schools(&self) -> Vec<School> {
        match self.fetch_list(&[]).await {
            Ok(schools) => {
                self.log("fetched schools");
                schools
            }
            Err(err) => {
                self.report_failure("get_schools", &err);
                Vec::new()
            }
        }
    }

    /// Fetch one school by id.
    ///
    /// The backend's not-found answer propagates as [`Error::NotFound`];
    /// any other failure is absorbed into `Ok(None)`.
    pub async fn get_school(&self, id: i64) -> Result<Option<School>> {
        match self.fetch_one(id).await {
            Ok(school) => {
                self.log(format!("fetched school id={}", id));
                Ok(Some(school))
            }
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => {
                self.log(format!("did not find school id={}", id));
                Err(Error::NotFound { id })
            }
            Err(err) => {
                self.report_failure(&format!("get_school id={}", id), &err);
                Ok(None)
            }
        }
    }

    /// Fetch one school via the `?id=` existence-check variant, which
    /// answers with a 0-or-1-element array instead of a 404.
    pub async fn find_school(&self, id: i64) -> Option<School> {
        match self.fetch_list(&[("id", id.to_string())]).await {
            Ok(schools) => {
                let school = schools.into_iter().next();
                let outcome = if school.is_some() { "fetched" } else { "did not find" };
                self.log(format!("{} school id={}", outcome, id));
                school
            }
            Err(err) => {
                self.report_failure(&format!("find_school id={}", id), &err);
                None
            }
        }
    }

    /// Schools whose name contains `term`. A blank term short-circuits to
    /// an empty list without touching the network.
    pub async fn search_schools(&self, term: &str) -> Vec<School> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        match self.fetch_list(&[("name", term.to_string())]).await {
            Ok(schools) => {
                self.log(format!("found schools matching {:?}", term));
                schools
            }
            Err(err) => {
                self.report_failure("search_schools", &err);
                Vec::new()
            }
        }
    }

    /// Create a school; the returned record carries the assigned id.
    pub async fn add_school(&self, school: NewSchool) -> Option<School> {
        match self.post_school(&school).await {
            Ok(created) => {
                self.log(format!("added school w/ id={}", created.id));
                Some(created)
            }
            Err(err) => {
                self.report_failure("add_school", &err);
                None
            }
        }
    }

    /// Replace the stored record with `school`, keyed by its id.
    pub async fn update_school(&self, school: &School) -> Option<()> {
        match self.put_school(school).await {
            Ok(()) => {
                self.log(format!("updated school id={}", school.id));
                Some(())
            }
            Err(err) => {
                self.report_failure("update_school", &err);
                None
            }
        }
    }

    /// Delete by id or by record.
    pub async fn delete_school(&self, target: impl Into<DeleteTarget>) -> Option<()> {
        let id = target.into().id();
        match self.delete_by_id(id).await {
            Ok(()) => {
                self.log(format!("deleted school id={}", id));
                Some(())
            }
            Err(err) => {
                self.report_failure("delete_school", &err);
                None
            }
        }
    }

    /// The notification sink this service reports into.
    pub fn messages(&self) -> &Arc<MessageLog> {
        &self.messages
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    async fn fetch_list(&self, query: &[(&str, String)]) -> reqwest::Result<Vec<School>> {
        self.http
            .get(&self.schools_url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn fetch_one(&self, id: i64) -> reqwest::Result<School> {
        let url = format!("{}/{}", self.schools_url, id);
        self.http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn post_school(&self, school: &NewSchool) -> reqwest::Result<School> {
        self.http
            .post(&self.schools_url)
            .json(school)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn put_school(&self, school: &School) -> reqwest::Result<()> {
        self.http
            .put(&self.schools_url)
            .json(school)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> reqwest::Result<()> {
        let url = format!("{}/{}", self.schools_url, id);
        self.http.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    fn log(&self, message: impl Into<String>) {
        let message = message.into();
        debug!("{}", message);
        self.messages.add(format!("SchoolService: {}", message));
    }

    fn report_failure(&self, operation: &str, err: &reqwest::Error) {
        warn!("{} failed: {}", operation, err);
        self.log(format!("{} failed: {}", operation, err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens here; connections are refused immediately.
    const DEAD_URL: &str = "http://127.0.0.1:1";

    fn dead_service() -> SchoolService {
        SchoolService::new(DEAD_URL, Arc::new(MessageLog::new()))
    }

    #[test]
    fn delete_target_resolves_ids() {
        assert_eq!(DeleteTarget::from(15).id(), 15);
        assert_eq!(DeleteTarget::from(School::new(15, "Magneta")).id(), 15);
    }

    #[tokio::test]
    async fn blank_search_skips_the_network() {
        let service = dead_service();
        assert!(service.search_schools("").await.is_empty());
        assert!(service.search_schools("   ").await.is_empty());
        // No request was attempted, so nothing was logged either.
        assert!(service.messages().is_empty());
    }

    #[tokio::test]
    async fn list_failure_falls_back_to_empty_and_logs() {
        let service = dead_service();
        assert!(service.get_schools().await.is_empty());

        let messages = service.messages().messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("get_schools failed"));
    }

    #[tokio::test]
    async fn get_school_transport_failure_is_absorbed() {
        let service = dead_service();
        let result = service.get_school(15).await;
        assert!(matches!(result, Ok(None)));
        assert!(service.messages().messages()[0].contains("get_school id=15 failed"));
    }

    #[tokio::test]
    async fn mutations_fall_back_to_none_and_log() {
        let service = dead_service();
        assert!(service.add_school(NewSchool::new("Alice")).await.is_none());
        assert!(service.update_school(&School::new(15, "Magneta")).await.is_none());
        assert!(service.delete_school(15).await.is_none());

        let messages = service.messages().messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("add_school failed"));
        assert!(messages[1].contains("update_school failed"));
        assert!(messages[2].contains("delete_school failed"));
    }
}
