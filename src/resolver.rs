use indexmap::{IndexMap, IndexSet};

/// Resolve each class group to its combined Tailwind classes.
///
/// A group's result is the union, in discovery order, of the classes mapped
/// to each of its whitespace-separated tokens; tokens with no mapping
/// contribute nothing. Every observed group gets exactly one entry, empty or
/// not, keyed by the original unsplit group string.
pub fn resolve_groups(
    groups: &IndexSet<String>,
    token_map: &IndexMap<String, IndexSet<String>>,
) -> IndexMap<String, Vec<String>> {
    let mut resolved = IndexMap::with_capacity(groups.len());

    for group in groups {
        let mut buffer: IndexSet<String> = IndexSet::new();
        for token in group.split_whitespace() {
            if let Some(classes) = token_map.get(token) {
                buffer.extend(classes.iter().cloned());
            }
        }
        resolved.insert(group.clone(), buffer.into_iter().collect());
    }

    resolved
}
