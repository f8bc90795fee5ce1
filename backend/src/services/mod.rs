//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the metrics engine and the advice generator.

pub mod health_advice;
pub mod profile;

pub use health_advice::HealthAdviceService;
pub use profile::ProfileService;
