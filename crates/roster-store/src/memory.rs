use std::collections::BTreeMap;

use fastrace::trace;
use roster_types::User;
use tracing::debug;

use crate::{Repository, StoreError};

const FIRST_ID: u64 = 1;

/// In-memory repository. Ids are handed out sequentially, so iterating the
/// map by key yields insertion order.
#[derive(Debug)]
pub struct MemoryRepository {
    users: BTreeMap<u64, User>,
    /// `None` once `u64::MAX` has been handed out or saved explicitly.
    next_id: Option<u64>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: Some(FIRST_ID),
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MemoryRepository {
    #[trace]
    fn save(&mut self, mut user: User) -> Result<User, StoreError> {
        if user.is_unassigned() {
            let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
            user.id = id;
            self.next_id = id.checked_add(1);
            debug!("Assigned id {} to {}", user.id, user.email);
        } else if self.next_id.is_some_and(|next| user.id >= next) {
            self.next_id = user.id.checked_add(1);
        }

        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    fn find_all(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    #[trace]
    fn delete(&mut self, id: u64) -> bool {
        self.users.remove(&id).is_some()
    }

    #[trace]
    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    fn count(&self) -> usize {
        self.users.len()
    }
}
