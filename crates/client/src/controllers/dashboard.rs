//! Dashboard controller

use std::sync::Arc;

use schooltour_common::School;

use crate::service::SchoolService;

/// Controller for the dashboard view: the "top schools" strip.
pub struct Dashboard {
    service: Arc<SchoolService>,
    top_schools: Vec<School>,
}

impl Dashboard {
    pub fn new(service: Arc<SchoolService>) -> Self {
        Self {
            service,
            top_schools: Vec::new(),
        }
    }

    /// The four schools shown on the dashboard.
    pub fn top_schools(&self) -> &[School] {
        &self.top_schools
    }

    /// Fetch the collection and keep positions 1 through 4.
    pub async fn refresh(&mut self) {
        let schools = self.service.get_schools().await;
        self.top_schools = schools.into_iter().skip(1).take(4).collect();
    }
}
