mod middleware;
mod users;

pub use middleware::{AuthError, RequireAdmin, RequireUser};
pub use users::{Role, User, UserDirectory};
