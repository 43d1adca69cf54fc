pub mod summary;

pub use summary::SummaryGrid;
