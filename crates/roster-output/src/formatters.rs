use roster_types::{FunctionStats, User};

pub fn format_user_list(title: &str, users: &[&User]) -> String {
    if users.is_empty() {
        return format!("{}: (none)", title);
    }

    let mut lines = vec![format!("{}:", title)];
    lines.extend(
        users
            .iter()
            .map(|u| format!("  - {} ({})", u.display_name(), u.email)),
    );
    lines.join("\n")
}

pub fn format_age_update(user: &User) -> String {
    match user.age {
        Some(age) => format!("Updated {}'s age to {}", user.name, age),
        None => format!("Updated {}", user.name),
    }
}

pub fn format_age_range(label: &str, min_age: u32, max_age: u32, users: &[&User]) -> String {
    let names: Vec<String> = users.iter().map(|u| format!("'{}'", u.name)).collect();
    format!("{} ({}-{}): [{}]", label, min_age, max_age, names.join(", "))
}

pub fn format_shapes(descriptions: &[String]) -> String {
    let mut lines = vec!["Shapes:".to_string()];
    lines.extend(descriptions.iter().map(|d| format!("  - {}", d)));
    lines.join("\n")
}

pub fn format_users_json(users: &[&User]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(users)
}

pub fn format_profiling(functions: &[FunctionStats]) -> String {
    if functions.is_empty() {
        return "TIMING\n  (no spans recorded)".to_string();
    }

    let mut lines = vec!["TIMING".to_string()];
    lines.extend(functions.iter().map(|f| {
        format!(
            "  {:>10.2}ms  {:>4} calls  avg {:>8.2}ms  max {:>8.2}ms  {}",
            f.total_us as f64 / 1000.0,
            f.calls,
            f.avg_us as f64 / 1000.0,
            f.max_us as f64 / 1000.0,
            f.name
        )
    }));
    lines.join("\n")
}

pub fn format_error(error: &dyn std::fmt::Display) -> String {
    format!("Error: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, email: &str, age: Option<u32>) -> User {
        let mut user = User::new(name, email, age);
        user.id = id;
        user
    }

    #[test]
    fn test_format_user_list() {
        let john = user(1, "John Doe", "john@example.com", Some(30));
        let bob = user(3, "Bob Johnson", "bob@example.com", None);
        assert_eq!(
            format_user_list("Created users", &[&john, &bob]),
            "Created users:\n  - John Doe (30) (john@example.com)\n  - Bob Johnson (bob@example.com)"
        );
        assert_eq!(format_user_list("Users", &[]), "Users: (none)");
    }

    #[test]
    fn test_format_age_range() {
        let john = user(1, "John Doe", "john@example.com", Some(30));
        let jane = user(2, "Jane Smith", "jane@example.com", Some(25));
        assert_eq!(
            format_age_range("Adults", 25, 40, &[&john, &jane]),
            "Adults (25-40): ['John Doe', 'Jane Smith']"
        );
        assert_eq!(format_age_range("Seniors", 60, 70, &[]), "Seniors (60-70): []");
    }

    #[test]
    fn test_format_age_update() {
        let bob = user(3, "Bob Johnson", "bob@example.com", Some(35));
        assert_eq!(format_age_update(&bob), "Updated Bob Johnson's age to 35");
    }

    #[test]
    fn test_format_shapes() {
        let shapes = vec![
            "Circle with radius 5.0".to_string(),
            "Rectangle 10.0x20.0".to_string(),
        ];
        assert_eq!(
            format_shapes(&shapes),
            "Shapes:\n  - Circle with radius 5.0\n  - Rectangle 10.0x20.0"
        );
    }

    #[test]
    fn test_format_profiling() {
        let stats = vec![FunctionStats {
            name: "create_user".to_string(),
            calls: 3,
            total_us: 1500,
            avg_us: 500,
            max_us: 700,
        }];
        assert_eq!(
            format_profiling(&stats),
            "TIMING\n        1.50ms     3 calls  avg     0.50ms  max     0.70ms  create_user"
        );
        assert_eq!(format_profiling(&[]), "TIMING\n  (no spans recorded)");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error(&"Invalid email format: x"), "Error: Invalid email format: x");
    }
}
