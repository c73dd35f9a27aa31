pub mod create;
pub mod generate;
