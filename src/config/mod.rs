use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster-query")]
#[command(about = "Query a student roster: filter, deduplicate, sort")]
pub struct CliConfig {
    /// Show only students in this group
    #[arg(long)]
    pub group: Option<String>,

    /// Show only students with this first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Show only students with this last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Print results as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(group) = &self.group {
            validate_non_empty_string("group", group)?;
        }
        if let Some(name) = &self.first_name {
            validate_non_empty_string("first_name", name)?;
        }
        if let Some(name) = &self.last_name {
            validate_non_empty_string("last_name", name)?;
        }
        Ok(())
    }
}
