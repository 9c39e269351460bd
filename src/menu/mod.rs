//! Pure menu construction.
//!
//! Business rules decide which entries a menu holds; rendering decides how
//! they look. This module owns only the former.

pub mod entry;
pub mod profile;

pub use entry::{normalize, MenuAction, MenuEntry, MenuLink};
pub use profile::{profile_menu, Account, Capabilities, Relationship, Viewer};
