// 📒 User Registry - single owning container for all users
//
// The registry owns its users by value in a Vec. Consumers get references
// or filtered clones; no shared-ownership handles are needed because the
// program is single-threaded and iteration is the only access pattern.

use crate::entities::User;

// ============================================================================
// USER REGISTRY
// ============================================================================

/// Ordered, owning collection of users.
///
/// No uniqueness of ids is enforced; callers supply unique ids. Lookup is a
/// linear scan in current order, so with duplicate ids the earliest entry
/// wins.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        UserRegistry { users: Vec::new() }
    }

    /// Build a registry from an existing collection
    pub fn from_users(users: Vec<User>) -> Self {
        UserRegistry { users }
    }

    /// Append a user (no dedup, order preserved)
    pub fn register(&mut self, user: User) {
        self.users.push(user);
    }

    /// Reorder in place so every VIP precedes every non-VIP.
    ///
    /// Uses a stable sort, so insertion order is preserved within each
    /// classification group.
    pub fn sort_by_status(&mut self) {
        self.users.sort_by(|a, b| b.is_vip().cmp(&a.is_vip()));
    }

    /// Find the first user with the given id, in current registry order.
    ///
    /// A miss is a normal outcome, not an error.
    pub fn find_by_id(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// All users, in current registry order
    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    /// Count all users
    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Get VIP users only
    pub fn vip_users(&self) -> Vec<User> {
        self.users.iter().filter(|u| u.is_vip()).cloned().collect()
    }

    /// Get standard (non-VIP) users only
    pub fn standard_users(&self) -> Vec<User> {
        self.users.iter().filter(|u| !u.is_vip()).cloned().collect()
    }

    /// Calculate total balance across all users
    pub fn total_balance(&self) -> f32 {
        self.users.iter().map(|u| u.balance()).sum()
    }

    /// Serialize the registry as a pretty JSON array (current order)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.users)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_registry() -> UserRegistry {
        UserRegistry::from_users(vec![
            User::new(1, "Анна", 1200.0).unwrap(),
            User::new(2, "Иван", 800.0).unwrap(),
            User::new_vip(3, "Мария", 5000.0, 0.05).unwrap(),
            User::new_vip(4, "Петр", 3000.0, 0.1).unwrap(),
        ])
    }

    #[test]
    fn test_register_and_count() {
        let mut registry = UserRegistry::new();
        assert!(registry.is_empty());

        registry.register(User::new(1, "Анна", 1200.0).unwrap());
        registry.register(User::new_vip(3, "Мария", 5000.0, 0.05).unwrap());

        assert_eq!(registry.count(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_sort_by_status_vip_first() {
        let mut registry = fixture_registry();
        registry.sort_by_status();

        let statuses: Vec<bool> = registry.all_users().iter().map(|u| u.is_vip()).collect();
        assert_eq!(statuses, vec![true, true, false, false]);

        // VIP ids {3,4} precede standard ids {1,2}
        let ids: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();
        assert!(ids[..2].contains(&3) && ids[..2].contains(&4));
        assert!(ids[2..].contains(&1) && ids[2..].contains(&2));
    }

    #[test]
    fn test_sort_no_vip_follows_standard() {
        let mut registry = fixture_registry();
        registry.sort_by_status();

        let users = registry.all_users();
        for pair in users.windows(2) {
            assert!(pair[0].is_vip() >= pair[1].is_vip());
        }
    }

    #[test]
    fn test_sort_is_stable_within_groups() {
        let mut registry = fixture_registry();
        registry.sort_by_status();

        let ids: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_sort_preserves_multiset() {
        let mut registry = fixture_registry();
        let mut before: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();
        before.sort();

        registry.sort_by_status();

        let mut after: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(registry.count(), 4);
    }

    #[test]
    fn test_sort_twice_same_partition() {
        let mut registry = fixture_registry();
        registry.sort_by_status();
        let first: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();

        registry.sort_by_status();
        let second: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty = UserRegistry::new();
        empty.sort_by_status();
        assert!(empty.is_empty());

        let mut single = UserRegistry::from_users(vec![User::new(1, "Анна", 1200.0).unwrap()]);
        single.sort_by_status();
        assert_eq!(single.count(), 1);
        assert_eq!(single.all_users()[0].id(), 1);
    }

    #[test]
    fn test_sort_all_same_classification() {
        let mut registry = UserRegistry::from_users(vec![
            User::new(10, "A", 0.0).unwrap(),
            User::new(20, "B", 0.0).unwrap(),
        ]);
        registry.sort_by_status();

        let ids: Vec<i32> = registry.all_users().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_find_by_id() {
        let mut registry = fixture_registry();
        registry.sort_by_status();

        let found = registry.find_by_id(2).unwrap();
        assert_eq!(found.name(), "Иван");
        assert_eq!(found.balance(), 800.0);

        assert!(registry.find_by_id(99).is_none());
    }

    #[test]
    fn test_find_by_id_first_match_wins_on_duplicates() {
        let registry = UserRegistry::from_users(vec![
            User::new(5, "First", 100.0).unwrap(),
            User::new(5, "Second", 200.0).unwrap(),
        ]);

        let found = registry.find_by_id(5).unwrap();
        assert_eq!(found.name(), "First");
    }

    #[test]
    fn test_find_by_id_on_empty_registry() {
        let registry = UserRegistry::new();
        assert!(registry.find_by_id(1).is_none());
    }

    #[test]
    fn test_vip_and_standard_views() {
        let registry = fixture_registry();

        let vips = registry.vip_users();
        assert_eq!(vips.len(), 2);
        assert!(vips.iter().all(|u| u.is_vip()));

        let standard = registry.standard_users();
        assert_eq!(standard.len(), 2);
        assert!(standard.iter().all(|u| !u.is_vip()));
    }

    #[test]
    fn test_total_balance() {
        let registry = fixture_registry();
        assert_eq!(registry.total_balance(), 1200.0 + 800.0 + 5000.0 + 3000.0);
    }

    #[test]
    fn test_to_json_round_trip() {
        let mut registry = fixture_registry();
        registry.sort_by_status();

        let json = registry.to_json().unwrap();
        let back: Vec<User> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, registry.all_users());
    }
}
