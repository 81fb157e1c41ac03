mod classifier;
mod directions;
mod dispatcher;
mod sanitize;

pub use classifier::is_directions_request;
pub use directions::{CURRENT_LOCATION, directions_to};
pub use dispatcher::{Dispatcher, EMPTY_MESSAGE_PROMPT, Reply, ReplyKind};
pub use sanitize::sanitize;
