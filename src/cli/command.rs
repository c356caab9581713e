use clap::Parser;

pub const DEFAULT_SAVE_PATH: &str = "phonebook.txt";

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Interactive in-memory phonebook")]
pub struct Cli {
    /// File written when the save prompt is left blank
    #[arg(long, env = "PHONEBOOK_SAVE_PATH", default_value_t = String::from(DEFAULT_SAVE_PATH))]
    pub save_path: String,

    /// Log operations at debug level to stderr
    #[arg(short, long, env = "PHONEBOOK_VERBOSE")]
    pub verbose: bool,
}
