pub mod comment;
pub mod post;
pub mod user;

/// Substring test for the search filters. `lowered_needle` must already be
/// lowercase; callers lower it once per scan.
pub(crate) fn contains_lowered(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// `None` and `""` both mean "no filter".
pub(crate) fn active_filter(query: Option<&str>) -> Option<&str> {
    query.filter(|q| !q.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::db::id::SequentialIds;
    use crate::db::seed;
    use crate::db::store::Store;

    /// Seeded store whose new ids are `new-1`, `new-2`, ...
    pub fn seeded_store() -> Store {
        Store::with_collections(seed::demo_collections(), Arc::new(SequentialIds::new("new-")))
    }

    pub fn empty_store() -> Store {
        Store::new(Arc::new(SequentialIds::new("new-")))
    }
}
