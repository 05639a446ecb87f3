//! Player controller: the single source of truth for "what track, what
//! state", and the only producer of engine commands.

mod model;

pub use model::*;
