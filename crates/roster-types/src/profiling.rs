use serde::{Deserialize, Serialize};

/// Aggregated timing for every span that shared a name during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionStats {
    pub name: String,
    pub calls: u32,
    pub total_us: u64,
    pub avg_us: u64,
    pub max_us: u64,
}
