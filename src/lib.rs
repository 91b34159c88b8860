/// Talks to the exam booking service: builds requests and sends them
pub mod client;

/// Request and response datastructures for each booking service endpoint
pub mod interfaces;

/// Command line parsing and subcommands
pub mod cli;

/// Renders query results as a table, JSON or YAML
pub mod output;

/// Log line format
pub mod log_format;
