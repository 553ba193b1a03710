mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{DotParams, PostParams, TableParams};

/// Output format for the `table` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatChoice {
    #[default]
    Text,
    Json,
}

impl FormatChoice {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => FormatChoice::Json,
            _ => FormatChoice::Text,
        }
    }
}
