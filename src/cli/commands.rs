use std::num::NonZeroUsize;

use clap::{Args, Subcommand};

use crate::types::SortField;

#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Server URL
    #[arg(long, env = "SPACE_RANGERS_SERVER", default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// Bearer token (user-token or admin-token)
    #[arg(long, env = "SPACE_RANGERS_TOKEN")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum MissionCommands {
    /// List missions
    List {
        /// Only show missions with this active flag
        #[arg(long)]
        active: Option<bool>,

        /// Field to sort by (id, title, reward, active, createdAt, createdBy)
        #[arg(long)]
        sort: Option<SortField>,

        /// Page number, starting at 1 (requires --page-size)
        #[arg(long, requires = "page_size")]
        page: Option<NonZeroUsize>,

        /// Missions per page (requires --page)
        #[arg(long, requires = "page")]
        page_size: Option<NonZeroUsize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single mission
    Get {
        /// Mission ID
        #[arg(long)]
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a mission
    Create {
        /// Mission title
        #[arg(long)]
        title: String,

        /// Reward paid on completion
        #[arg(long, allow_negative_numbers = true)]
        reward: f64,

        /// Create the mission as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update fields of a mission
    Update {
        /// Mission ID
        #[arg(long)]
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New reward
        #[arg(long, allow_negative_numbers = true)]
        reward: Option<f64>,

        /// New active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a mission (admin only)
    Delete {
        /// Mission ID
        #[arg(long)]
        id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Skip interactive prompts (requires --yes)
        #[arg(long)]
        non_interactive: bool,
    },
}
