mod preference;
mod profiling;
mod user;

pub use preference::*;
pub use profiling::*;
pub use user::*;

/// Inclusive bounds for a user's age.
pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;

/// Id carried by a user that has not been saved yet.
pub const UNASSIGNED_ID: u64 = 0;
