pub mod service;

pub use service::ValidationService;
