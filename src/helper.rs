use crate::domain::Entry;

/// One `name phone` line per entry. Fields are not escaped.
pub fn serialize_entries(entries: &[&Entry]) -> String {
    let mut data = String::new();

    for entry in entries {
        data.push_str(&entry.name);
        data.push(' ');
        data.push_str(&entry.phone);
        data.push('\n');
    }
    data
}
