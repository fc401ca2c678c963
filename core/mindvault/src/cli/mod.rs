pub(crate) mod args;
pub(crate) mod render;

pub(crate) use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
