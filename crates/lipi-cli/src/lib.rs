pub mod commands;
pub mod scheme_source;
pub mod trace_init;
