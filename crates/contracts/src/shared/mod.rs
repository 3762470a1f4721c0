//! Pure, target-independent building blocks shared by every admin page.

pub mod entity_registry;
pub mod envelope;
pub mod page_cache;
pub mod pagination;
pub mod slug;
pub mod table;
