//! Data models for Aranya

pub mod animal;
pub mod booking;
pub mod feedback;
pub mod medical;
pub mod staff;
pub mod visitor;
pub mod zone;

// Re-export commonly used types
pub use animal::Animal;
pub use booking::Ticket;
pub use feedback::Feedback;
pub use staff::Staff;
pub use visitor::{Admin, Role, SessionClaims, Visitor};
pub use zone::Zone;
