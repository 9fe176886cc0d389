use std::sync::Once;

use phonebook::common::logger as core_logger;

static INIT: Once = Once::new();

/// Installs the crate logger once per test binary.
pub fn init_test_logger() {
    INIT.call_once(|| {
        // Exercise the debug paths of the table unless the caller chose a filter.
        if std::env::var("RUST_LOG").is_err() {
            // Runs before any test spawns threads that read the environment.
            unsafe {
                std::env::set_var("RUST_LOG", "phonebook=debug");
            }
        }
        core_logger::initialize_logger();
    });
}
