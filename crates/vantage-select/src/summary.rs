//! Trigger text

use std::collections::HashSet;

use crate::item::SelectableItem;

/// What the closed trigger shows for the current selection.
///
/// `noun` is the plural used in counts ("events").
pub fn display_text(
    items: &[SelectableItem],
    selected: &HashSet<String>,
    placeholder: &str,
    noun: &str,
) -> String {
    if selected.is_empty() {
        return placeholder.to_string();
    }

    if selected.len() == items.len() {
        return format!("All {} selected", noun);
    }

    if selected.len() == 1 {
        if let Some(item) = items.iter().find(|i| selected.contains(&i.key)) {
            return item.label.clone();
        }
    }

    format!("{} {} selected", selected.len(), noun)
}
