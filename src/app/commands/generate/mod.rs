mod input;
mod session;

pub use input::NameInput;
pub use session::{
    EMPTY_NAME_MESSAGE, FAREWELL, NAME_PROMPT, SessionSummary, TYPE_PROMPT, WELCOME, execute,
};
