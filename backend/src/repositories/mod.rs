//! Database repositories
//!
//! Provides data access for user profiles and stored advice.

pub mod advice;
pub mod profile;

pub use advice::{
    is_missing_profile, CreateAdviceRecord, HealthAdviceRecord, HealthAdviceRepository,
};
pub use profile::{ProfileFields, UpdateProfileFields, UserProfileRecord, UserProfileRepository};
