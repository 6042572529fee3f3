// crates/tracemark-browse/src/lib.rs
// Session layer: the command loop that owns all mutable browsing state,
// plus the collaborator traits it calls out to. Rendering and key mapping
// live elsewhere — they emit BrowseCommands in and consume Snapshots out.

pub mod commands;
pub mod config;
pub mod external;
pub mod search;
pub mod selection;
pub mod session;
