mod breakdown;
mod common;
mod provincial;
mod validate;
