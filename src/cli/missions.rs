use std::num::NonZeroUsize;

use serde::Serialize;

use super::commands::ClientArgs;
use super::http_client::ApiClient;
use crate::server::dto::MissionView;
use crate::types::{MissionInput, MissionQuery, SortField};

/// Asks before a destructive action unless `--yes` was given.
pub fn confirm_action(message: &str, yes: bool, non_interactive: bool) -> anyhow::Result<bool> {
    if yes {
        Ok(true)
    } else if non_interactive {
        anyhow::bail!("--yes is required for destructive operations in non-interactive mode");
    } else {
        Ok(inquire::Confirm::new(message)
            .with_default(false)
            .prompt()?)
    }
}

fn client(args: &ClientArgs) -> anyhow::Result<ApiClient> {
    ApiClient::new(&args.server, args.token.clone())
}

fn print_mission(mission: &MissionView) {
    let status = if mission.active { "active" } else { "inactive" };
    println!(
        "{:>4}  {:<40}  {:>10}  {}",
        mission.id, mission.title, mission.reward, status
    );
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_mission_list(
    args: &ClientArgs,
    active: Option<bool>,
    sort: Option<SortField>,
    page: Option<NonZeroUsize>,
    page_size: Option<NonZeroUsize>,
    json: bool,
) -> anyhow::Result<()> {
    let client = client(args)?;

    let query = MissionQuery {
        active,
        sort,
        page,
        page_size,
    };
    let missions: Vec<MissionView> = client.get_with_query("/missions", &query)?;

    if json {
        return print_json(&missions);
    }

    if missions.is_empty() {
        println!("No missions found.");
        return Ok(());
    }

    for mission in &missions {
        print_mission(mission);
    }

    Ok(())
}

pub fn run_mission_get(args: &ClientArgs, id: u64, json: bool) -> anyhow::Result<()> {
    let client = client(args)?;
    let mission: MissionView = client.get(&format!("/missions/{id}"))?;

    if json {
        return print_json(&mission);
    }

    print_mission(&mission);
    Ok(())
}

pub fn run_mission_create(
    args: &ClientArgs,
    title: String,
    reward: f64,
    inactive: bool,
) -> anyhow::Result<()> {
    let client = client(args)?;

    let request = MissionInput {
        title: Some(title),
        reward: Some(reward),
        active: Some(!inactive),
        ..Default::default()
    };

    let mission: MissionView = client.post("/missions", &request)?;

    println!("Created mission {} '{}'", mission.id, mission.title);
    Ok(())
}

pub fn run_mission_update(
    args: &ClientArgs,
    id: u64,
    title: Option<String>,
    reward: Option<f64>,
    active: Option<bool>,
) -> anyhow::Result<()> {
    if title.is_none() && reward.is_none() && active.is_none() {
        anyhow::bail!("Nothing to update. Pass --title, --reward or --active");
    }

    let client = client(args)?;

    let patch = MissionInput {
        title,
        reward,
        active,
        ..Default::default()
    };

    let mission: MissionView = client.put(&format!("/missions/{id}"), &patch)?;

    println!("Updated mission {}", mission.id);
    print_mission(&mission);
    Ok(())
}

pub fn run_mission_delete(
    args: &ClientArgs,
    id: u64,
    yes: bool,
    non_interactive: bool,
) -> anyhow::Result<()> {
    let client = client(args)?;

    let confirmed = confirm_action(&format!("Delete mission {id}?"), yes, non_interactive)?;

    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    client.delete(&format!("/missions/{id}"))?;

    println!("Deleted mission {id}");
    Ok(())
}
