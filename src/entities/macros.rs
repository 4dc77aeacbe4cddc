//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the struct definition and the repetitive
//! `Entity` implementation needed for each record type.

/// Complete macro to create an entity with an automatic `Entity` implementation
///
/// - `search`: fields matched by the free-text search
/// - `required`: fields that must not be blank on creation
/// - `exposed`: fields reachable through `Entity::field_value` (filtering,
///   exact search); every `search` and `required` field must be listed here
/// - `normalize` (optional): a `fn(&mut Self)` run before every write, for
///   derived fields
///
/// The generated struct serializes with camelCase keys and rejects unknown
/// keys, so update patches naming a non-existent field fail.
///
/// # Example
///
/// ```rust,ignore
/// use backoffice::prelude::*;
///
/// impl_entity!(
///     Customer,
///     "customer",
///     "customers",
///     search: [name, email],
///     required: [name],
///     exposed: [name, email],
///     {
///         name: String,
///         email: String,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_entity {
    (
        $(#[$meta:meta])*
        $type:ident,
        $singular:expr,
        $plural:expr,
        search: [ $( $search:ident ),* $(,)? ],
        required: [ $( $required:ident ),* $(,)? ],
        exposed: [ $( $exposed:ident ),* $(,)? ],
        $( normalize: $normalize:path, )?
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $type {
            /// Unique identifier (9 base-36 characters)
            pub id: String,
            $( $(#[$field_meta])* pub $field : $field_type ),*
        }

        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn search_fields() -> &'static [&'static str] {
                &[ $( stringify!($search) ),* ]
            }

            fn required_fields() -> &'static [&'static str] {
                &[ $( stringify!($required) ),* ]
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn normalize(&mut self) {
                $( $normalize(self); )?
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                if field == "id" {
                    return Some($crate::core::field::FieldValue::from(&self.id));
                }
                $(
                    if field == stringify!($exposed) {
                        return Some($crate::core::field::FieldValue::from(&self.$exposed));
                    }
                )*
                None
            }
        }
    };
}

/// Define a closed set of string labels (statuses, document kinds)
///
/// Generates the enum with serde renames, `as_str`, `ALL`, `Display`,
/// `FromStr` and a conversion into `FieldValue`. Mark one variant
/// `#[default]`.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$variant_meta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every label, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }

        impl From<&$name> for $crate::core::field::FieldValue {
            fn from(value: &$name) -> Self {
                $crate::core::field::FieldValue::String(value.as_str().to_string())
            }
        }
    };
}
