//! Command implementations for OxiDjVu CLI.

pub mod dump;
pub mod info;
pub mod pages;
pub mod text;

pub use dump::cmd_dump;
pub use info::cmd_info;
pub use pages::cmd_pages;
pub use text::cmd_text;
