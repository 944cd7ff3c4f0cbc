pub mod add;
pub mod list;
pub mod show;
pub mod stats;
pub mod version;
