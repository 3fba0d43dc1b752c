pub mod carousel;
pub mod script_backend;
pub mod timer;

pub use script_backend::ScriptBackend;
pub use timer::sleep_ms;
