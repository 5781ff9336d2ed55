//! Domain models for the Imóveis Luxo Rio backend

pub mod contact;
pub mod favorite;
pub mod interaction;
pub mod property;
pub mod stats;
pub mod user;
pub mod visit;

// Re-export for convenience
pub use contact::{Contact, ContactStatus, NewContact};
pub use favorite::{Favorite, NewFavorite};
pub use interaction::{AiInteraction, InteractionFilters, InteractionType, NewAiInteraction};
pub use property::{BadgeColor, NewProperty, Property, PropertyFilters, SortKey, UpdateProperty};
pub use stats::{DashboardStats, LocationCount};
pub use user::{NewUser, User, UserRole};
pub use visit::{NewVisit, Visit, VisitStatus};
