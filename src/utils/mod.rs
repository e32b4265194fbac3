pub mod datetime;
pub mod deserialize;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use datetime::{from_timestamp_micros, parse_datetime};
pub use sql::escape_like_pattern;
