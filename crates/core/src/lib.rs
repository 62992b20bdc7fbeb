pub mod classify;
pub mod count;
pub mod error;
pub mod model;
pub mod report;

pub use classify::{category_for, FILE_TYPES};
pub use count::count_photos;
pub use error::CountError;
pub use model::{CategoryCount, CountSummary, DirectoryTally, FileType};
pub use report::render_report;
