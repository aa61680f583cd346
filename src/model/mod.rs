pub mod health;
pub mod task;

pub use health::{ConnectivityStatus, SystemHealth};
pub use task::{Task, TaskId};
