pub mod txt;

use crate::domain::Entry;
use crate::errors::AppError;

/// Write side of phonebook persistence. There is no load path.
pub trait EntryStore {
    fn save(&self, entries: &[&Entry]) -> Result<(), AppError>;
}
