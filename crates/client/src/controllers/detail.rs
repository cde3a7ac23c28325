//! Detail view controller

use std::sync::Arc;

use schooltour_common::{Result, School};

use crate::service::SchoolService;

/// Controller for the single-school edit view.
///
/// Routing is out of scope here; "navigating back" means relinquishing the
/// editing state to whichever view owned control before.
pub struct SchoolDetail {
    service: Arc<SchoolService>,
    school: Option<School>,
}

impl SchoolDetail {
    pub fn new(service: Arc<SchoolService>) -> Self {
        Self {
            service,
            school: None,
        }
    }

    /// Load the school behind the routed-to id into editable state.
    ///
    /// A not-found answer propagates; any other failure leaves the view
    /// empty, with the notification log as the only trace.
    pub async fn load(&mut self, id: i64) -> Result<()> {
        self.school = self.service.get_school(id).await?;
        Ok(())
    }

    /// The record currently bound to the view.
    pub fn school(&self) -> Option<&School> {
        self.school.as_ref()
    }

    /// Edit the bound record's name in place.
    pub fn set_name(&mut self, name: &str) {
        if let Some(school) = &mut self.school {
            school.name = name.to_string();
        }
    }

    /// Persist the bound record, then navigate back. Navigation happens on
    /// completion whether or not the update succeeded.
    pub async fn save(&mut self) {
        if let Some(school) = self.school.clone() {
            self.service.update_school(&school).await;
        }
        self.go_back();
    }

    /// Pure navigation; no persistence side effect.
    pub fn go_back(&mut self) {
        self.school = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageLog;

    fn dead_detail(school: Option<School>) -> SchoolDetail {
        let service = Arc::new(SchoolService::new(
            "http://127.0.0.1:1",
            Arc::new(MessageLog::new()),
        ));
        SchoolDetail { service, school }
    }

    #[tokio::test]
    async fn load_failure_leaves_view_empty() {
        let mut detail = dead_detail(None);
        detail.load(15).await.unwrap();
        assert!(detail.school().is_none());
    }

    #[tokio::test]
    async fn save_navigates_back_even_on_failure() {
        let mut detail = dead_detail(Some(School::new(15, "Magneta")));
        detail.set_name("MagnetaX");
        assert_eq!(detail.school().unwrap().name, "MagnetaX");

        detail.save().await;
        assert!(detail.school().is_none());
    }

    #[test]
    fn go_back_drops_editing_state() {
        let mut detail = dead_detail(Some(School::new(15, "Magneta")));
        detail.go_back();
        assert!(detail.school().is_none());
    }
}
