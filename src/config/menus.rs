/// One selectable option in a choice menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub key: &'static str,
}

impl MenuEntry {
    pub fn new(label: &'static str, key: &'static str) -> Self {
        Self { label, key }
    }
}

/// Averaging methods offered to the user
pub fn get_methods_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Three year weighted average", "war"),
        MenuEntry::new("Simple average of latest ratings", "simple"),
    ]
}

/// Gender filters offered to the user
pub fn get_gender_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Men and Women", ""),
        MenuEntry::new("Women only", "F"),
    ]
}
