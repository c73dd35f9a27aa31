mod module_filesystem;
mod terminal_prompter;

pub use module_filesystem::FilesystemModuleStore;
pub use terminal_prompter::TerminalPrompter;
