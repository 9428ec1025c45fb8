pub mod progress_style;

pub use progress_style::ProgressStyleTemplate;
