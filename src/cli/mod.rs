mod handlers;
mod parser;

pub use handlers::{USAGE, handle_command};
pub use parser::{Command, parse_args, split_global_flags};
