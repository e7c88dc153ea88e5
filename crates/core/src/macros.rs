// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the gk crates.
//!
//! - [`simple_display!`] maps enum variants to fixed strings
//! - [`builder!`] generates a test-only builder for plain data structs
//! - [`setters!`] generates by-value setters on production config types

/// Implement `Display` for an enum by mapping each variant to a literal.
///
/// Variants with payloads are matched with `(..)`.
///
/// ```ignore
/// gk_core::simple_display! {
///     RunOutcome {
///         Success => "SUCCESS",
///         Failure => "FAILURE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate a builder for a data struct, compiled only for tests and the
/// `test-support` feature.
///
/// - `set { field: Type = default }` setter takes `Type` directly
/// - `option { field: Type = default }` builder field is `Option<Type>`;
///   the setter wraps its argument in `Some(v.into())`
///
/// ```ignore
/// gk_core::builder! {
///     pub struct JobSnapshotBuilder => JobSnapshot {
///         set { exists: bool = true }
///         option { last_successful: u64 = None }
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder {
    (
        pub struct $builder:ident => $target:ident {
            $(set {
                $( $set_field:ident : $set_ty:ty = $set_default:expr ),* $(,)?
            })?
            $(option {
                $( $opt_field:ident : $opt_ty:ty = $opt_default:expr ),* $(,)?
            })?
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            $($( $set_field: $set_ty, )*)?
            $($( $opt_field: Option<$opt_ty>, )*)?
        }

        #[cfg(any(test, feature = "test-support"))]
        impl Default for $builder {
            fn default() -> Self {
                Self {
                    $($( $set_field: $set_default, )*)?
                    $($( $opt_field: $opt_default, )*)?
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $($(
                pub fn $set_field(mut self, v: $set_ty) -> Self {
                    self.$set_field = v;
                    self
                }
            )*)?

            $($(
                pub fn $opt_field(mut self, v: impl Into<$opt_ty>) -> Self {
                    self.$opt_field = Some(v.into());
                    self
                }
            )*)?

            pub fn build(self) -> $target {
                $target {
                    $($( $set_field: self.$set_field, )*)?
                    $($( $opt_field: self.$opt_field, )*)?
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            /// Create a builder with test defaults.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}

/// Generate by-value setter methods inside an existing `impl` block.
///
/// ```ignore
/// impl ValidationRules {
///     gk_core::setters! {
///         set { job_exists: bool, is_building: bool }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        set {
            $( $set_field:ident : $set_ty:ty ),* $(,)?
        }
    ) => {
        $(
            pub fn $set_field(mut self, v: $set_ty) -> Self {
                self.$set_field = v;
                self
            }
        )*
    };
}
