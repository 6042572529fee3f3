// crates/tracemark-core/src/lib.rs
// Pure segmentation and annotation logic — no I/O, no rendering, no
// collaborator handles. Serializable via serde. Used by tracemark-browse
// and by anything that wants to post-process an annotation session.

pub mod helpers;
pub mod intervals;
pub mod planner;
pub mod scale;
pub mod store;
