//! CLI domain: parse, route, output, and presentation only.
//! Resolution itself lives in the resolver; the route table only wires settings to it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat, OverrideArgs};
pub use presentation::{
    format_config_json, format_config_text, format_resource_json, format_resource_text,
};
pub use route::RunContext;
