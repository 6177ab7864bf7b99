pub mod reparation;
pub mod ribotish;
