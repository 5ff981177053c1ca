// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod fields;
pub mod map;
pub mod marker;
pub mod multimedia;
pub mod pagination;

pub use map::*;
pub use marker::*;
pub use multimedia::*;
pub use pagination::*;
