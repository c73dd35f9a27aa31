mod line_prompter;
mod module_store;

pub use line_prompter::LinePrompter;
pub use module_store::ModuleStore;
