//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod agenda_repo;
pub mod calendar_event_repo;
pub mod member_repo;
pub mod notification_repo;
pub mod post_repo;

pub use agenda_repo::AgendaRepo;
pub use calendar_event_repo::CalendarEventRepo;
pub use member_repo::MemberRepo;
pub use notification_repo::NotificationRepo;
pub use post_repo::PostRepo;
