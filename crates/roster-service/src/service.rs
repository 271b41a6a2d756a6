use std::path::Path;

use fastrace::trace;
use roster_store::Repository;
use roster_types::{validate_age, Preference, User};
use tracing::{debug, info};

use crate::export::write_users_to_json;
use crate::ServiceError;

/// Validation and orchestration on top of a [`Repository`].
pub struct UserService<R: Repository> {
    repository: R,
}

impl<R: Repository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates and stores a new user.
    ///
    /// Checks run in order: duplicate email, missing `@`, age range. Nothing
    /// is stored when any of them fails.
    #[trace]
    pub fn create_user(
        &mut self,
        name: &str,
        email: &str,
        age: Option<i64>,
    ) -> Result<User, ServiceError> {
        if self.repository.find_by_email(email).is_some() {
            return Err(ServiceError::DuplicateEmail(email.to_string()));
        }

        if !email.contains('@') {
            return Err(ServiceError::InvalidEmailFormat(email.to_string()));
        }

        let age = age.map(validate_age).transpose()?;

        let saved = self.repository.save(User::new(name, email, age))?;
        info!("Created user: {} with ID {}", saved.name, saved.id);
        Ok(saved)
    }

    /// Returns `Ok(None)` when no user has the id. An out-of-range age leaves
    /// the stored record untouched.
    #[trace]
    pub fn update_user_age(&mut self, id: u64, age: i64) -> Result<Option<User>, ServiceError> {
        let Some(existing) = self.repository.find_by_id(id) else {
            debug!("No user with ID {} to update", id);
            return Ok(None);
        };

        let mut user = existing.clone();
        user.set_age(age)?;
        Ok(Some(self.repository.save(user)?))
    }

    pub fn set_user_preference(
        &mut self,
        id: u64,
        key: &str,
        value: impl Into<Preference>,
    ) -> Result<Option<User>, ServiceError> {
        let Some(existing) = self.repository.find_by_id(id) else {
            return Ok(None);
        };

        let mut user = existing.clone();
        user.update_preference(key, value);
        Ok(Some(self.repository.save(user)?))
    }

    /// Users with a known age in `[min_age, max_age]`.
    pub fn get_users_by_age_range(&self, min_age: u32, max_age: u32) -> Vec<&User> {
        self.repository
            .find_all()
            .into_iter()
            .filter(|user| matches!(user.age, Some(age) if (min_age..=max_age).contains(&age)))
            .collect()
    }

    pub fn find_user(&self, id: u64) -> Option<&User> {
        self.repository.find_by_id(id)
    }

    pub fn list_users(&self) -> Vec<&User> {
        self.repository.find_all()
    }

    pub fn delete_user(&mut self, id: u64) -> bool {
        let removed = self.repository.delete(id);
        if removed {
            info!("Deleted user with ID {}", id);
        }
        removed
    }

    #[trace]
    pub fn export_users_to_json(&self, path: &Path) -> Result<(), ServiceError> {
        let users = self.repository.find_all();
        write_users_to_json(path, &users)?;
        info!("Exported {} users to {}", users.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_store::{MemoryRepository, StoreError};
    use roster_types::AgeOutOfRange;

    fn service() -> UserService<MemoryRepository> {
        UserService::new(MemoryRepository::new())
    }

    #[test]
    fn test_create_then_find() {
        let mut svc = service();
        let created = svc.create_user("John Doe", "john@example.com", Some(30)).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(svc.find_user(created.id), Some(&created));
    }

    #[test]
    fn test_duplicate_email_checked_before_format() {
        let mut svc = service();
        svc.create_user("A", "a@example.com", None).unwrap();
        let err = svc.create_user("A2", "a@example.com", None).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateEmail(ref e) if e == "a@example.com"));
        assert_eq!(svc.repository().count(), 1);
    }

    #[test]
    fn test_email_without_at() {
        let mut svc = service();
        let err = svc.create_user("A", "not-an-email", Some(20)).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEmailFormat(_)));
        assert!(err.is_validation());
        assert_eq!(svc.repository().count(), 0);
    }

    #[test]
    fn test_negative_age_rejected() {
        let mut svc = service();
        let err = svc.create_user("A", "a@example.com", Some(-1)).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidAge(AgeOutOfRange(-1))));
        assert_eq!(svc.repository().count(), 0);
    }

    #[test]
    fn test_update_age_out_of_range_keeps_stored_age() {
        let mut svc = service();
        let user = svc.create_user("A", "a@example.com", Some(30)).unwrap();
        let err = svc.update_user_age(user.id, 200).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidAge(_)));
        assert_eq!(svc.find_user(user.id).unwrap().age, Some(30));
    }

    #[test]
    fn test_update_age_missing_user() {
        let mut svc = service();
        assert!(svc.update_user_age(42, 30).unwrap().is_none());
    }

    #[test]
    fn test_update_age() {
        let mut svc = service();
        let bob = svc.create_user("Bob", "bob@example.com", None).unwrap();
        let updated = svc.update_user_age(bob.id, 35).unwrap().unwrap();
        assert_eq!(updated.age, Some(35));
        assert_eq!(svc.find_user(bob.id).unwrap().age, Some(35));
    }

    #[test]
    fn test_age_range_skips_unknown_ages() {
        let mut svc = service();
        svc.create_user("John", "john@example.com", Some(30)).unwrap();
        svc.create_user("Jane", "jane@example.com", Some(25)).unwrap();
        svc.create_user("Bob", "bob@example.com", None).unwrap();
        svc.create_user("Old", "old@example.com", Some(41)).unwrap();

        let names: Vec<&str> = svc
            .get_users_by_age_range(25, 40)
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_set_preference() {
        let mut svc = service();
        let user = svc.create_user("A", "a@example.com", None).unwrap();
        svc.set_user_preference(user.id, "theme", "dark").unwrap().unwrap();
        svc.set_user_preference(user.id, "notifications", true).unwrap().unwrap();
        let stored = svc.find_user(user.id).unwrap();
        assert_eq!(stored.preferences.len(), 2);
        assert_eq!(stored.preferences["theme"], Preference::from("dark"));
        assert!(svc.set_user_preference(99, "theme", "light").unwrap().is_none());
    }

    #[test]
    fn test_create_fails_when_ids_exhausted() {
        let mut repo = MemoryRepository::new();
        let mut last = User::new("Last", "last@example.com", None);
        last.id = u64::MAX;
        repo.save(last).unwrap();

        let mut svc = UserService::new(repo);
        let err = svc.create_user("A", "a@example.com", None).unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::IdsExhausted)));
        assert!(!err.is_validation());
        assert_eq!(svc.repository().count(), 1);
    }

    #[test]
    fn test_delete_user() {
        let mut svc = service();
        let user = svc.create_user("A", "a@example.com", None).unwrap();
        assert!(svc.delete_user(user.id));
        assert!(!svc.delete_user(user.id));
        assert!(svc.list_users().is_empty());
    }
}
