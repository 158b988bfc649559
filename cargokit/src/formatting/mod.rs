//! CLI output formatting.
//!
//! Colors and symbols are shared across commands so output stays consistent.

mod headers;
mod output;
mod status;
mod tables;

pub use headers::{print_section_header, SectionStyle};
pub use output::{format_duration, print_key_value};
pub use status::{print_error, print_success};
pub use tables::print_project_table;
