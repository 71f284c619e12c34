mod commands;
pub mod http_client;
mod missions;

pub use commands::{ClientArgs, MissionCommands};
pub use missions::{
    confirm_action, run_mission_create, run_mission_delete, run_mission_get, run_mission_list,
    run_mission_update,
};

/// Dispatches a `missions` subcommand.
pub fn run_missions(args: &ClientArgs, command: MissionCommands) -> anyhow::Result<()> {
    match command {
        MissionCommands::List {
            active,
            sort,
            page,
            page_size,
            json,
        } => run_mission_list(args, active, sort, page, page_size, json),
        MissionCommands::Get { id, json } => run_mission_get(args, id, json),
        MissionCommands::Create {
            title,
            reward,
            inactive,
        } => run_mission_create(args, title, reward, inactive),
        MissionCommands::Update {
            id,
            title,
            reward,
            active,
        } => run_mission_update(args, id, title, reward, active),
        MissionCommands::Delete {
            id,
            yes,
            non_interactive,
        } => run_mission_delete(args, id, yes, non_interactive),
    }
}
