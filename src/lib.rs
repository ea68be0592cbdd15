// cargo watch -x 'fmt' -x 'run -- /24 192.168.1.10'

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use processing::{evaluate, Direction, Evaluation};
