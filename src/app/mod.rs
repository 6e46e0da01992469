pub mod workflow;

pub use workflow::{build_store, execute_blog_workflow, render_blog_section, BlogSection, SectionCopy};
