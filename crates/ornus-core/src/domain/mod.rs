//! Domain entities - raw posts in, normalized records out.

mod post;

mod record;

pub use post::RawPost;
pub use record::{NormalizedRecord, UserInfo};
