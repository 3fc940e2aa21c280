pub mod test_registry;
pub mod test_window;
