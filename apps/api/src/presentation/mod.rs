// Presentation-layer configuration.
// The report core never reads this; it only hands tiers and tip statuses to whoever renders them.

pub mod theme;

pub use theme::{Theme, Treatment};
