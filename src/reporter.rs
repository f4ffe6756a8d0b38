use indexmap::IndexMap;

const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print the resolved mapping to stdout, one block per class group.
/// Only the `tailwind:` label is colored; the class list prints plain.
pub fn print_report(resolved: &IndexMap<String, Vec<String>>) {
    for (group, classes) in resolved {
        println!("\nclass: {}", group);
        println!("{}tailwind:{}{}", CYAN, RESET, format_classes(classes));
    }
}

fn format_classes(classes: &[String]) -> String {
    if classes.is_empty() {
        format!("{} No tailwind equivalent found{}", RED, RESET)
    } else {
        format!(" {}", classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resolved_classes() {
        let classes = vec!["bg-blue-500".to_string(), "text-white".to_string()];
        let line = format_classes(&classes);
        assert_eq!(line, " bg-blue-500 text-white");
    }

    #[test]
    fn test_format_empty_resolution() {
        let line = format_classes(&[]);
        assert!(line.starts_with(RED));
        assert!(line.contains(" No tailwind equivalent found"));
    }
}
