pub mod cli;
pub mod data_handling;
pub mod gff;
pub mod helper_functions;
pub mod models;
pub mod reparation_merge;
pub mod ribotish_conversion;
