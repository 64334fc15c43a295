pub mod slip;
