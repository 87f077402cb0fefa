pub mod plot;
pub mod resolver;
pub mod sampler;

pub use resolver::resolve_processes;
pub use sampler::Sampler;
