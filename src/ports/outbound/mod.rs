/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod inventory_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_metadata;
pub mod soup_formatter;
pub mod template_reader;

pub use inventory_reader::InventoryReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_metadata::RepositoryMetadataProvider;
pub use soup_formatter::SoupFormatter;
pub use template_reader::TemplateReader;
