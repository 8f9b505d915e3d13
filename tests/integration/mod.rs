//! Integration tests for commander user interfaces

mod config_loading;
mod console_interface;
