pub mod clinical;
pub mod grade;
pub mod nomogram;
pub mod report;
pub mod risk;
pub mod specimen;
