// Job listing query engine.
// Local pipeline: store → filter → sort → paginate. The gateway chooses
// between it and the remote job-search API; handlers are thin surfaces over it.

pub mod filter;
pub mod gateway;
pub mod handlers;
pub mod paginate;
pub mod pipeline;
pub mod query;
pub mod remote;
pub mod sort;
pub mod store;
