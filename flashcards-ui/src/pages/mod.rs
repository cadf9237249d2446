//! Pages
//!
//! Loaders for each page template pushed on the navigator.

pub mod groupings;
pub mod quiz;
pub mod quiz_list;
pub mod score;
