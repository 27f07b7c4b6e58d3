pub mod dashboard;
pub mod help;
pub mod insights;
pub mod satellite;
pub mod solutions;
pub mod trends;
pub mod zones;
