use indexmap::IndexMap;

/// Rewrite the document text by replacing each resolved class group with its
/// Tailwind classes.
///
/// This is a global literal substring replacement over the whole document,
/// not an attribute-scoped rewrite: any text that happens to coincide with a
/// group string is rewritten too. That matches the original tool's behavior
/// and is a known limitation, kept for compatibility.
///
/// Double quotes in the replacement are normalized to single quotes so the
/// substitution cannot break a double-quoted attribute. Groups that resolved
/// to nothing are left untouched.
pub fn rewrite_document(original: &str, resolved: &IndexMap<String, Vec<String>>) -> String {
    let mut output = original.to_string();

    for (group, classes) in resolved {
        if classes.is_empty() {
            continue;
        }

        let replacement = classes.join(" ").replace('"', "'");
        output = output.replace(group.as_str(), &replacement);
    }

    output
}
