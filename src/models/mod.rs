pub mod process;
pub mod samples;

pub use process::ResolvedProcess;
pub use samples::SampleMatrix;
