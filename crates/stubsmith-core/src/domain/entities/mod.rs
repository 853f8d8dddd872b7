pub mod config;
pub mod context;
pub mod request;

pub use config::{GeneratorConfig, KindConfig};
pub use context::TemplateContext;
pub use request::GenerationRequest;
