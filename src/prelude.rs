pub use crate::cli::{command, run_app};
pub use crate::domain::{
    Directory, MenuCommand,
    directory::{self, Iter},
    entry::{self, Entry},
};
pub use crate::errors::AppError;
pub use crate::store::{self, EntryStore, txt::TxtStore};
