// Graph Search Infrastructure

pub mod index;
pub mod searcher;

pub use index::SearchIndex;
pub use searcher::GraphSearcher;
