#[macro_export]
macro_rules! skip_err {
    ($result:expr) => {
        match $result {
            Ok(value) => Ok(value),
            Err(_) => continue,
        }
    };
}

/// Defines a struct that serializes to a single-entry map keyed by its own
/// type name, with PascalCase field names, e.g. `AuthAccount { account }`
/// becomes `{"AuthAccount":{"Account":"..."}}`. Used for the inner objects
/// of XRPL array fields (`AuthAccounts`, `VoteSlots`, `SignerEntries`, ...)
/// where each array entry is wrapped in its own type tag.
#[macro_export]
macro_rules! serde_with_tag {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                #[derive(serde::Serialize)]
                #[serde(rename_all = "PascalCase")]
                struct Inner<'__a> {
                    $(
                        $field: &'__a $ty,
                    )*
                }
                let inner = Inner {
                    $(
                        $field: &self.$field,
                    )*
                };
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(stringify!($name), &inner)?;
                map.end()
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                #[derive(serde::Deserialize)]
                #[serde(rename_all = "PascalCase")]
                struct Inner {
                    $(
                        $field: $ty,
                    )*
                }
                let mut map: alloc::collections::BTreeMap<alloc::string::String, Inner> =
                    serde::Deserialize::deserialize(deserializer)?;
                map.remove(stringify!($name))
                    .map(|inner| $name { $( $field: inner.$field, )* })
                    .ok_or_else(|| serde::de::Error::custom(
                        concat!("missing \"", stringify!($name), "\" tag")
                    ))
            }
        }
    };
}

/// Like [`serde_with_tag`] but only generates the `Serialize` half; used
/// where the struct already derives `Deserialize` directly (untagged) and
/// only the outer JSON representation needs the type-name wrapper.
#[macro_export]
macro_rules! serialize_with_tag {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$lt:lifetime>)? {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name $(<$lt>)? {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $(<$lt>)? serde::Serialize for $name $(<$lt>)? {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                #[derive(serde::Serialize)]
                #[serde(rename_all = "PascalCase")]
                struct Inner<'__a> {
                    $(
                        $field: &'__a $ty,
                    )*
                }
                let inner = Inner {
                    $(
                        $field: &self.$field,
                    )*
                };
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(stringify!($name), &inner)?;
                map.end()
            }
        }
    };
}
