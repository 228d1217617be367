// Resume feedback report core.
// Implements: tier classification, category aggregation, tip views, report composition,
// and the disclosure collaborator. Everything below `handlers` is pure and synchronous.

pub mod aggregate;
pub mod compose;
pub mod disclosure;
pub mod error;
pub mod handlers;
pub mod models;
pub mod tier;
pub mod tips;
