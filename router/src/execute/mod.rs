//! Execute message handlers, grouped by concern.

mod admin;
mod config;
mod incoming;
mod outgoing;

pub use admin::{execute_emergency_withdraw, execute_set_swap_executor};
pub use config::{
    execute_set_route, execute_set_route_many, execute_update_whitelist_sender,
    execute_update_whitelist_sender_many, execute_update_whitelist_token,
};
pub use incoming::{execute_instant_receive, execute_transport_receive};
pub use outgoing::{execute_swap_and_send, finish_send};
