mod category;
mod ids;
mod record;
mod task;

pub use category::Category;
pub use ids::RecordId;
pub use record::{Details, Record, RecordBuilder, RecordKind};
pub use task::{TaskPriority, TaskStatus};
