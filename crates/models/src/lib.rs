//! SeaORM entities for the site's content tables plus connection helpers.
//!
//! Every table is flat: no foreign keys, no relations.

pub mod db;
pub mod offering;
pub mod solution;
pub mod service;
pub mod insight;
pub mod case_study;
pub mod leadership_profile;
pub mod contact_submission;

#[cfg(test)]
mod tests;
