pub mod directory;
pub mod entry;

pub use directory::Directory;
pub use entry::Entry;

/// One selection from the interactive menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuCommand {
    AddEntry,
    DeleteEntry,
    SearchEntry,
    UpdateEntry,
    DisplayPhonebook,
    SortPhonebook,
    SaveToFile,
    Exit,
}

impl MenuCommand {
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(MenuCommand::AddEntry),
            "2" => Some(MenuCommand::DeleteEntry),
            "3" => Some(MenuCommand::SearchEntry),
            "4" => Some(MenuCommand::UpdateEntry),
            "5" => Some(MenuCommand::DisplayPhonebook),
            "6" => Some(MenuCommand::SortPhonebook),
            "7" => Some(MenuCommand::SaveToFile),
            "8" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}
