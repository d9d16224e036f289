//! Core traits shared across layers.

use async_trait::async_trait;

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}

/// Trait for mapping between domain entities and DTOs.
///
/// Implementors are stateless; mapping is an associated function so it can be
/// called without constructing anything.
pub trait Mapper<From, To> {
    /// Maps from source type to target type.
    fn map(from: From) -> To;

    /// Maps every element of an iterator.
    fn map_all<I>(from: I) -> Vec<To>
    where
        I: IntoIterator<Item = From>,
    {
        from.into_iter().map(Self::map).collect()
    }
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is degraded but functional.
    Degraded(String),
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    #[must_use]
    pub const fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy(_))
    }
}
