use indexmap::IndexSet;
use scraper::Html;

/// Marker for templated class expressions; attribute values containing it are
/// skipped entirely rather than partially collected.
const INTERPOLATION_MARKER: &str = "{{";

/// Collect the distinct `class` attribute values of an HTML document.
///
/// Each entry is the full original attribute string (a space-separated group,
/// not split into tokens). Groups are deduplicated by exact string equality
/// and kept in document order (depth-first).
pub fn collect_class_groups(html: &str) -> IndexSet<String> {
    let document = Html::parse_document(html);
    let mut groups = IndexSet::new();

    // Explicit stack instead of recursion, so deeply nested documents cannot
    // exhaust the call stack.
    let mut stack: Vec<_> = document.tree.root().children().rev().collect();

    while let Some(node) = stack.pop() {
        if let Some(element) = node.value().as_element() {
            if let Some(value) = element.attr("class") {
                if !value.contains(INTERPOLATION_MARKER) {
                    groups.insert(value.to_string());
                }
            }
        }
        stack.extend(node.children().rev());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_class_values() {
        let groups = collect_class_groups(r#"<div class="card"><p class="lead">hi</p></div>"#);
        let groups: Vec<&String> = groups.iter().collect();
        assert_eq!(groups, vec!["card", "lead"]);
    }

    #[test]
    fn test_groups_kept_whole() {
        let groups = collect_class_groups(r#"<div class="card header">x</div>"#);
        assert!(groups.contains("card header"));
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let groups =
            collect_class_groups(r#"<div class="btn">a</div><span class="btn">b</span>"#);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_templated_values_skipped() {
        let groups = collect_class_groups(r#"<div class="{{dynamicClass}}">x</div>"#);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_partially_templated_values_skipped() {
        let groups = collect_class_groups(r#"<div class="static {{dynamic}}">x</div>"#);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_elements_without_class_ignored() {
        let groups = collect_class_groups("<div><p>plain</p></div>");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <section class="first">
                <div class="second"><span class="third">x</span></div>
            </section>
            <footer class="fourth"></footer>
        "#;
        let groups = collect_class_groups(html);
        let groups: Vec<&String> = groups.iter().collect();
        assert_eq!(groups, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_deeply_nested_document() {
        let mut html = String::new();
        for _ in 0..5000 {
            html.push_str("<div class=\"deep\">");
        }
        for _ in 0..5000 {
            html.push_str("</div>");
        }
        let groups = collect_class_groups(&html);
        assert!(groups.contains("deep"));
    }
}
