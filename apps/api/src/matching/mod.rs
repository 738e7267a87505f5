// Candidate ↔ opening scoring and top-K ranking.
// Pure and synchronous; handlers are the only async code here.

pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod weights;
