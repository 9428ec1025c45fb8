mod event;
mod result;

pub use event::Event;
pub use event::EventKind;
pub use result::Result;
