pub mod slip;
pub mod table;
