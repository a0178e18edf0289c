//! CLI commands for skein

pub mod dispatch;
pub mod inspect;
pub mod load;
pub mod path;
pub mod traverse;
