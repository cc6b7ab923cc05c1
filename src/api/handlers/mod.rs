// src/api/handlers/mod.rs
mod districts;
mod health;
mod login;
mod states;

pub use districts::{create_district, delete_district, get_district, update_district};
pub use health::health_check;
pub use login::login;
pub use states::{get_state, get_state_stats, list_states};
