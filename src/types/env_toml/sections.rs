// Declare submodules
pub mod libs;
pub mod platform;

// Re-export main types
pub use libs::LibsSection;
pub use platform::PlatformSection;
