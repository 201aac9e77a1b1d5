mod root;
mod state;

pub use root::App;
pub use state::UserRole;
