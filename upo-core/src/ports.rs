mod optimizer;
mod source;

pub use optimizer::Optimizer;
pub use source::TableSource;
