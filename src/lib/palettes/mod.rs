pub mod css;
pub mod palette;
pub mod ramps;
pub mod registry;
pub mod targets;
