use super::*;
use crate::helper;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct TxtStore {
    path: PathBuf,
}

impl TxtStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TxtStore { path: path.into() }
    }
}

impl EntryStore for TxtStore {
    fn save(&self, entries: &[&Entry]) -> Result<(), AppError> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        let data = helper::serialize_entries(entries);
        writer.write_all(data.as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}
