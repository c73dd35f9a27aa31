mod command;
pub mod outcome;

pub use command::execute;
pub use outcome::ModuleOutcome;
