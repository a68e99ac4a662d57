pub mod config;
pub mod constants;
pub mod debug_printer;
pub mod string_manipulators;
