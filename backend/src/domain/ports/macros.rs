//! `define_port_error!` builds the error enums returned by driven ports.
//!
//! Each variant becomes a `thiserror` variant carrying its display message,
//! and gains a snake_case constructor whose fields accept anything
//! convertible into the declared field type:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum StoreError {
//!         Connection { message: String } => "store unavailable: {message}",
//!         Closed => "store closed",
//!     }
//! }
//!
//! let err = StoreError::connection("timed out");
//! assert_eq!(StoreError::closed().to_string(), "store closed");
//! ```

macro_rules! define_port_error {
    (@ctor $name:ident $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $name:ident $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $name $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
