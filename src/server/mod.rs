pub mod dto;
mod missions;
pub mod response;
mod router;

pub use missions::missions_router;
pub use router::{AppState, create_router};
