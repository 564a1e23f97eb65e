mod algorithm;
mod reconstruction;
mod search;
pub mod traits;
mod types;

pub use algorithm::Algorithm;
pub use reconstruction::{CarriedPath, Predecessors, Reconstruction};
pub use search::{search, search_with};
pub use traits::PathTracker;
pub use types::{Endpoint, EndpointProblem, Outcome, SearchError, SearchReport};
