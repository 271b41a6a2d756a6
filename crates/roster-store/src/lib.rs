mod memory;

pub use memory::MemoryRepository;

use roster_types::User;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No user ids left to assign")]
    IdsExhausted,
}

/// Storage interface for users keyed by integer id.
pub trait Repository {
    /// Stores a user, assigning the next id when it is still unassigned.
    /// Returns the stored record, or an error when no id is left to assign.
    fn save(&mut self, user: User) -> Result<User, StoreError>;

    fn find_by_id(&self, id: u64) -> Option<&User>;

    /// All stored users in insertion order.
    fn find_all(&self) -> Vec<&User>;

    /// Returns whether a user was removed.
    fn delete(&mut self, id: u64) -> bool;

    fn find_by_email(&self, email: &str) -> Option<&User>;

    fn count(&self) -> usize {
        self.find_all().len()
    }
}
