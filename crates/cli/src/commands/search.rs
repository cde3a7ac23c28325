//! Search Command

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use schooltour_client::{SchoolSearch, SchoolService};

use crate::commands::school::SchoolDisplay;
use crate::output::{print_list, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Name fragment to search for
    pub term: String,
}

pub async fn execute(args: SearchArgs, service: Arc<SchoolService>, format: OutputFormat) -> Result<()> {
    let mut search = SchoolSearch::new(service);
    search.search(&args.term).await;

    let displays: Vec<SchoolDisplay> =
        search.results().iter().cloned().map(SchoolDisplay::from).collect();
    print_list(&displays, format);

    Ok(())
}
