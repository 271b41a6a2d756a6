use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Preference, MAX_AGE, MIN_AGE, UNASSIGNED_ID};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Age must be between 0 and 150, got {0}")]
pub struct AgeOutOfRange(pub i64);

/// Checks an age against the allowed range and narrows it for storage.
pub fn validate_age(age: i64) -> Result<u32, AgeOutOfRange> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age as u32)
    } else {
        Err(AgeOutOfRange(age))
    }
}

/// A user record. Field order matches the exported JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    #[serde(default)]
    pub preferences: BTreeMap<String, Preference>,
}

impl User {
    /// Creates a user that has not been assigned an id yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<u32>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            email: email.into(),
            age,
            preferences: BTreeMap::new(),
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }

    pub fn set_age(&mut self, age: i64) -> Result<(), AgeOutOfRange> {
        self.age = Some(validate_age(age)?);
        Ok(())
    }

    pub fn update_preference(&mut self, key: impl Into<String>, value: impl Into<Preference>) {
        self.preferences.insert(key.into(), value.into());
    }

    /// `"name (age)"` when the age is known, otherwise just the name.
    pub fn display_name(&self) -> String {
        match self.age {
            Some(age) => format!("{} ({})", self.name, age),
            None => self.name.clone(),
        }
    }
}
