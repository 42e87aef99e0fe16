pub mod chartjs;
pub mod layout;
pub mod model;
pub mod palette;
