/// Typed sub-fields of a slash-delimited entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityKey {
    pub category: Option<String>,
    pub name_extract: Option<String>,
}

/// Split an entity id on `/` and pull out the third segment (lower-cased) as
/// the category and the fourth as the name extract.
///
/// A leading slash yields an empty first segment, so "/v1/mobile/search"
/// decomposes to category "mobile", name "search". Paths too short for a
/// segment leave that field absent rather than erroring; nothing beyond
/// segment count is validated.
pub fn decompose(entity_id: &str) -> EntityKey {
    let segments: Vec<&str> = entity_id.split('/').collect();

    EntityKey {
        category: segments.get(2).map(|s| s.to_ascii_lowercase()),
        name_extract: segments.get(3).map(|s| s.to_string()),
    }
}
