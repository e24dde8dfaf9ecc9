//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart / carousel rule violations                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  apps/storefront errors                                                │
//! │  ├── ConfigError      - Config file / env failures                     │
//! │  └── ApiError         - What presentation sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Toast / UI             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected operation never changes state: the cart keeps its previous
//! mapping and the carousel keeps its previous slide index.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and carousel rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product id is not part of the session catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Adding one more unit would exceed the per-product maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Cart already holds the maximum number of distinct products.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Direct carousel navigation to a slide that does not exist.
    ///
    /// ## When This Occurs
    /// ```text
    /// 3 slides rendered (indicators 0, 1, 2)
    ///      │
    ///      ▼
    /// go_to(5)
    ///      │
    ///      ▼
    /// SlideOutOfRange { index: 5, total: 3 }
    /// ```
    #[error("Slide {index} is out of range ({total} slides)")]
    SlideOutOfRange { index: usize, total: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
