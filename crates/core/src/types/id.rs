//! Newtype IDs for type-safe entity references.
//!
//! Identifiers are assigned by the hosted backend (UUID strings), never by
//! the site itself. Use the `define_id!` macro to create wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe, store-assigned ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use witherstex_core::define_id;
/// define_id!(WarehouseId);
/// define_id!(SupplierId);
///
/// let warehouse = WarehouseId::new("9b2c");
/// let supplier = SupplierId::new("9b2c");
///
/// // These are different types, so this won't compile:
/// // let _: WarehouseId = supplier;
/// assert_eq!(warehouse.as_str(), supplier.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier issued by the backend.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the raw identifier.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_value() {
        let id = ProductId::new("3f1e9c2a-0000-4000-8000-000000000001");
        assert_eq!(id.to_string(), "3f1e9c2a-0000-4000-8000-000000000001");
    }

    #[test]
    fn test_serializes_transparently() {
        let id = UserId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: UserId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }
}
