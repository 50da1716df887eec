use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors raised when building a role cycle or its timing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleCycleError {
    #[error("role cycle must contain at least one role")]
    Empty,

    #[error("role #{index} is empty")]
    EmptyRole { index: usize },

    #[error("delete speed ({delete_ms} ms) must be shorter than type speed ({type_ms} ms)")]
    DeleteNotFaster { type_ms: u64, delete_ms: u64 },

    #[error("typewriter speeds must be non-zero")]
    ZeroSpeed,
}

/// Fixed, ordered, non-empty list of roles the typewriter rotates through.
///
/// Cloning is cheap: the roles are shared.
#[derive(Clone, PartialEq, Eq)]
pub struct RoleCycle {
    roles: Arc<[String]>,
}

impl RoleCycle {
    pub fn new<I, S>(roles: I) -> Result<Self, RoleCycleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(RoleCycleError::Empty);
        }
        if let Some(index) = roles.iter().position(|role| role.trim().is_empty()) {
            return Err(RoleCycleError::EmptyRole { index });
        }
        Ok(Self {
            roles: roles.into(),
        })
    }

    /// Role at `index`, wrapping around the cycle.
    pub fn role(&self, index: usize) -> &str {
        &self.roles[index % self.roles.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.roles.len()
    }
}

pub const DEFAULT_ROLES: [&str; 3] = ["Full Stack Developer", "ML Engineer", "DevOps Enthusiast"];

impl Default for RoleCycle {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|role| role.to_string()).collect(),
        }
    }
}

impl fmt::Debug for RoleCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.roles.iter()).finish()
    }
}

/// Tick intervals for the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_speed: Duration,
    pub delete_speed: Duration,
    pub dwell: Duration,
}

impl TypewriterTiming {
    pub fn new(
        type_speed: Duration,
        delete_speed: Duration,
        dwell: Duration,
    ) -> Result<Self, RoleCycleError> {
        if type_speed.is_zero() || delete_speed.is_zero() {
            return Err(RoleCycleError::ZeroSpeed);
        }
        if delete_speed >= type_speed {
            return Err(RoleCycleError::DeleteNotFaster {
                type_ms: type_speed.as_millis() as u64,
                delete_ms: delete_speed.as_millis() as u64,
            });
        }
        Ok(Self {
            type_speed,
            delete_speed,
            dwell,
        })
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            dwell: Duration::from_millis(2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cycle_is_rejected() {
        let roles: Vec<String> = Vec::new();
        assert_eq!(RoleCycle::new(roles), Err(RoleCycleError::Empty));
    }

    #[test]
    fn blank_role_is_rejected() {
        let err = RoleCycle::new(["Engineer", "  "]).unwrap_err();
        assert_eq!(err, RoleCycleError::EmptyRole { index: 1 });
    }

    #[test]
    fn role_wraps_around() {
        let cycle = RoleCycle::new(["a", "b"]).unwrap();
        assert_eq!(cycle.role(2), "a");
        assert_eq!(cycle.next_index(1), 0);
    }

    #[test]
    fn timing_requires_faster_delete() {
        let err = TypewriterTiming::new(
            Duration::from_millis(50),
            Duration::from_millis(50),
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(matches!(err, RoleCycleError::DeleteNotFaster { .. }));
    }

    #[test]
    fn timing_rejects_zero() {
        let err = TypewriterTiming::new(Duration::ZERO, Duration::ZERO, Duration::ZERO).unwrap_err();
        assert_eq!(err, RoleCycleError::ZeroSpeed);
    }
}
