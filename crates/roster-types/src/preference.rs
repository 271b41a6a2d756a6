use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Preference {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl From<&str> for Preference {
    fn from(value: &str) -> Self {
        Preference::Text(value.to_string())
    }
}

impl From<String> for Preference {
    fn from(value: String) -> Self {
        Preference::Text(value)
    }
}

impl From<i64> for Preference {
    fn from(value: i64) -> Self {
        Preference::Integer(value)
    }
}

impl From<bool> for Preference {
    fn from(value: bool) -> Self {
        Preference::Boolean(value)
    }
}
