pub mod cards;
pub mod charts;
pub mod popup;
pub mod sidebar;
pub mod tables;
