//! Membership set built from the caller's group list.

use std::collections::HashSet;

/// Set of group names a user belongs to.
///
/// Names are compared exactly: no trimming or case folding is applied, and
/// duplicates in the input collapse into a single entry.
///
/// # Examples
///
/// ```rust
/// use config_resolver::GroupSet;
///
/// let groups = GroupSet::from_groups(["admins", "staff", "admins"]);
/// assert_eq!(groups.len(), 2);
/// assert!(groups.contains("admins"));
/// assert!(!groups.contains("Admins"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSet {
    groups: HashSet<String>,
}

impl GroupSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any sequence of group names.
    #[must_use]
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        groups.into_iter().collect()
    }

    /// Returns `true` when `group` is a member.
    #[must_use]
    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// Returns `true` when every listed group is a member.
    ///
    /// An empty list is vacuously contained; callers decide whether an empty
    /// criterion is active.
    pub fn contains_all<I, S>(&self, groups: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        groups.into_iter().all(|group| self.contains(group.as_ref()))
    }

    /// Returns `true` when at least one listed group is a member.
    pub fn contains_any<I, S>(&self, groups: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        groups.into_iter().any(|group| self.contains(group.as_ref()))
    }

    /// Number of distinct groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when the user belongs to no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over the member groups in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for GroupSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            groups: iter
                .into_iter()
                .map(|group| group.as_ref().to_owned())
                .collect(),
        }
    }
}
