mod render_markdown;
mod export_markdown;

pub use export_markdown::{export_file_name, export_markdown};
pub use render_markdown::render_markdown;
