/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod soup_request;
mod soup_response;

pub use soup_request::SoupRequest;
pub use soup_response::SoupResponse;
