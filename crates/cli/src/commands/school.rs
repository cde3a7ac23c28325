//! School Commands

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use schooltour_client::{SchoolDetail, SchoolList, SchoolService};
use schooltour_common::{NewSchool, School};

use crate::output::{print_error, print_item, print_list, print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum SchoolCommands {
    /// List all schools
    List,

    /// Get school details
    Get {
        /// School ID
        id: i64,
    },

    /// Add a new school
    Add {
        /// School name
        name: String,
    },

    /// Rename a school
    Update {
        /// School ID
        id: i64,

        /// New name
        name: String,
    },

    /// Delete a school
    Delete {
        /// School ID
        id: i64,
    },
}

/// School display wrapper for serialization
#[derive(Serialize)]
pub struct SchoolDisplay {
    pub id: i64,
    pub name: String,
}

impl From<School> for SchoolDisplay {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
        }
    }
}

impl TableDisplay for SchoolDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

pub async fn execute(cmd: SchoolCommands, service: Arc<SchoolService>, format: OutputFormat) -> Result<()> {
    match cmd {
        SchoolCommands::List => {
            let mut list = SchoolList::new(service);
            list.refresh().await;
            let displays: Vec<SchoolDisplay> =
                list.schools().iter().cloned().map(SchoolDisplay::from).collect();
            print_list(&displays, format);
        }

        SchoolCommands::Get { id } => match service.get_school(id).await {
            Ok(Some(school)) => print_item(&SchoolDisplay::from(school), format),
            Ok(None) => {
                print_error(&format!("Could not fetch school {}", id));
                std::process::exit(1);
            }
            Err(_) => {
                print_error(&format!("School {} not found", id));
                std::process::exit(1);
            }
        },

        SchoolCommands::Add { name } => match service.add_school(NewSchool::new(name)).await {
            Some(school) => {
                print_success(&format!("School '{}' added with id {}", school.name, school.id));
                print_item(&SchoolDisplay::from(school), format);
            }
            None => {
                print_error("Could not add school");
                std::process::exit(1);
            }
        },

        SchoolCommands::Update { id, name } => {
            let mut detail = SchoolDetail::new(service);
            match detail.load(id).await {
                Ok(()) if detail.school().is_some() => {
                    detail.set_name(&name);
                    detail.save().await;
                    print_success(&format!("School {} saved", id));
                }
                Ok(()) => {
                    print_error(&format!("Could not fetch school {}", id));
                    std::process::exit(1);
                }
                Err(_) => {
                    print_error(&format!("School {} not found", id));
                    std::process::exit(1);
                }
            }
        }

        SchoolCommands::Delete { id } => match service.delete_school(id).await {
            Some(()) => print_success(&format!("School {} deleted", id)),
            None => {
                print_error(&format!("Could not delete school {}", id));
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
