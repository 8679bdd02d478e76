//! Error types for the densa core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{builder::ExecutionStrategy, point::Axis};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DataSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataSourceError {
    /// Requested index was outside the source's bounds.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The requested row that exceeded the source bounds.
        index: usize,
    },
    /// A point carried a NaN or infinite coordinate.
    #[error("point {index} has a non-finite {axis} coordinate: {value}")]
    NonFiniteCoordinate {
        /// Position of the offending point in the source.
        index: usize,
        /// Coordinate that failed validation.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`DataSourceError`] variants.
    enum DataSourceErrorCode for DataSourceError {
        /// Requested index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "DATA_SOURCE_OUT_OF_BOUNDS",
        /// A point carried a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "DATA_SOURCE_NON_FINITE_COORDINATE",
    }
}

/// Error type produced when constructing or running [`crate::Densa`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DensaError {
    /// The neighbourhood radius must be finite and strictly positive.
    #[error("eps must be finite and greater than 0 (got {got})")]
    InvalidEps {
        /// The rejected radius.
        got: f64,
    },
    /// The minimum neighbourhood size must be at least one.
    #[error("min_pts must be at least 1 (got {got})")]
    InvalidMinPts {
        /// The rejected minimum neighbourhood size.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// A dedicated worker pool for neighbour precomputation could not be built.
    #[error("failed to build worker pool: {message}")]
    ThreadPool {
        /// Description reported by the pool builder.
        message: Arc<str>,
    },
    /// A [`crate::DataSource`] failed validation while running the algorithm.
    #[error("data source `{data_source}` failed: {error}")]
    DataSource {
        /// Identifier for the data source that produced the error.
        data_source: Arc<str>,
        #[source]
        /// Underlying data source error.
        error: DataSourceError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DensaError`] variants.
    enum DensaErrorCode for DensaError {
        /// The neighbourhood radius must be finite and strictly positive.
        InvalidEps => InvalidEps { .. } => "DENSA_INVALID_EPS",
        /// The minimum neighbourhood size must be at least one.
        InvalidMinPts => InvalidMinPts { .. } => "DENSA_INVALID_MIN_PTS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "DENSA_BACKEND_UNAVAILABLE",
        /// A dedicated worker pool could not be built.
        ThreadPool => ThreadPool { .. } => "DENSA_THREAD_POOL",
        /// A [`crate::DataSource`] failed validation while running the algorithm.
        DataSourceFailure => DataSource { .. } => "DENSA_DATA_SOURCE_FAILURE",
    }
}

impl DensaError {
    /// Retrieve the inner [`DataSourceErrorCode`] when the error originated in a [`crate::DataSource`].
    #[must_use]
    pub const fn data_source_code(&self) -> Option<DataSourceErrorCode> {
        match self {
            Self::DataSource { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DensaError>;
