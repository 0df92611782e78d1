/// Formatters for the rendered dependency table
mod markdown_table_formatter;

pub use markdown_table_formatter::MarkdownTableFormatter;
