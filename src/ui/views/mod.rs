pub mod analyze;
pub mod purpose;
pub mod scan;

/// `", "`-joined list, or `-` when empty.
pub(crate) fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
