pub mod io;
pub mod page;
pub mod render;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::IoError;
pub use page::{PAGE_TEMPLATE, PAGE_TITLE, render_page};
pub use render::{BlockLine, BlockTag, render};
pub use site::{BuildReport, FailurePolicy, SiteBuilder, SiteError, WrittenNote, convert_note};
