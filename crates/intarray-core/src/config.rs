//! Construction parameters.

use crate::error::IntArrayError;

/// What to do when a caller asks for a non-positive size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// Silently substitute [`ArrayConfig::default_len`].
    #[default]
    FallBackToDefault,
    /// Refuse with [`IntArrayError::InvalidSize`].
    Reject,
}

/// Configuration for [`IntArray::with_config`](crate::IntArray::with_config).
///
/// [`IntArray::new`](crate::IntArray::new) uses [`ArrayConfig::default()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Length used when no size, or a non-positive size, is requested.
    ///
    /// Default: 10. Must be non-zero.
    pub default_len: usize,

    /// Handling of non-positive requested sizes.
    pub size_policy: SizePolicy,
}

impl ArrayConfig {
    /// Default array length.
    pub const DEFAULT_LEN: usize = 10;

    /// Config that rejects non-positive sizes instead of defaulting.
    pub fn strict() -> Self {
        Self {
            size_policy: SizePolicy::Reject,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), IntArrayError> {
        if self.default_len == 0 {
            return Err(IntArrayError::InvalidConfig {
                reason: "default_len must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Resolve a requested size to the length that will be allocated.
    pub fn resolve_len(&self, requested: isize) -> Result<usize, IntArrayError> {
        if requested > 0 {
            return Ok(requested as usize);
        }
        match self.size_policy {
            SizePolicy::FallBackToDefault => Ok(self.default_len),
            SizePolicy::Reject => Err(IntArrayError::InvalidSize { requested }),
        }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            default_len: Self::DEFAULT_LEN,
            size_policy: SizePolicy::FallBackToDefault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_len_is_ten() {
        assert_eq!(ArrayConfig::default().default_len, 10);
    }

    #[test]
    fn positive_sizes_pass_through() {
        let config = ArrayConfig::default();
        assert_eq!(config.resolve_len(7).unwrap(), 7);
        assert_eq!(config.resolve_len(1).unwrap(), 1);
    }

    #[test]
    fn non_positive_sizes_fall_back() {
        let config = ArrayConfig::default();
        assert_eq!(config.resolve_len(0).unwrap(), 10);
        assert_eq!(config.resolve_len(-5).unwrap(), 10);
        assert_eq!(config.resolve_len(isize::MIN).unwrap(), 10);
    }

    #[test]
    fn strict_policy_rejects_non_positive() {
        let config = ArrayConfig::strict();
        assert!(matches!(
            config.resolve_len(0),
            Err(IntArrayError::InvalidSize { requested: 0 })
        ));
        assert!(matches!(
            config.resolve_len(-3),
            Err(IntArrayError::InvalidSize { requested: -3 })
        ));
        assert_eq!(config.resolve_len(4).unwrap(), 4);
    }

    #[test]
    fn zero_default_len_fails_validation() {
        let config = ArrayConfig {
            default_len: 0,
            ..ArrayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IntArrayError::InvalidConfig { .. })
        ));
        assert!(ArrayConfig::default().validate().is_ok());
    }
}
