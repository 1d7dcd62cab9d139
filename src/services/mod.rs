pub mod allocator;
pub mod booking;
pub mod loader;
pub mod selection;
