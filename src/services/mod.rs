pub mod exporter;
pub mod filter;
pub mod generator;
pub mod sorter;
pub mod store;

pub use exporter::*;
pub use filter::*;
pub use generator::*;
pub use sorter::*;
pub use store::*;
