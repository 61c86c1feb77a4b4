//! Database repositories
//!
//! Repositories handle all direct database interactions. Most methods accept any
//! Postgres executor so they can run on the pool or inside a transaction.

pub mod conflict_repo;
pub mod contest_repo;
pub mod notification_repo;
pub mod resource_repo;
pub mod review_repo;
pub mod user_repo;
pub mod venue_repo;

pub use conflict_repo::ConflictRepository;
pub use contest_repo::{ContestRepository, NewContest};
pub use notification_repo::{NotificationFilter, NotificationRepository};
pub use resource_repo::ResourceRepository;
pub use review_repo::{NewReview, ReviewRepository};
pub use user_repo::{NewUser, UserRepository};
pub use venue_repo::VenueRepository;
