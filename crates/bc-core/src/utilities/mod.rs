/// Strict and lenient parsers for date and clock-time strings.
pub mod data_parsers;
