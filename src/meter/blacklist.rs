// src/meter/blacklist.rs
use lazy_static::lazy_static;
use std::collections::HashSet;

/// Known-weak passwords rejected outright, stored lowercase.
pub const BLACKLIST: [&str; 8] = [
    "password",
    "password123",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "letmein",
    "admin",
];

lazy_static! {
    static ref BLACKLIST_SET: HashSet<&'static str> = BLACKLIST.iter().copied().collect();
}

/// Case-insensitive exact match against the blacklist.
pub fn is_blacklisted(password: &str) -> bool {
    BLACKLIST_SET.contains(password.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert!(is_blacklisted("password"));
        assert!(is_blacklisted("QWERTY"));
        assert!(is_blacklisted("LetMeIn"));
    }

    #[test]
    fn only_exact_matches_count() {
        assert!(!is_blacklisted(""));
        assert!(!is_blacklisted("password1234"));
        assert!(!is_blacklisted("password123!"));
    }
}
