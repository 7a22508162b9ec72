use crate::domain::{Challenge, PathEntry};
use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, de};
use std::fmt::Formatter;

impl<'de> Deserialize<'de> for Challenge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChallengeVisitor;

        impl<'de> Visitor<'de> for ChallengeVisitor {
            type Value = Challenge;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "a challenge object with a 'path' array, or a bare path array")
            }

            // Documents exported from a transaction detail view are bare path arrays.
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut path = Vec::new();
                while let Some(entry) = seq.next_element::<PathEntry>()? {
                    path.push(entry);
                }

                Ok(Challenge { hash: None, path })
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut hash: Option<String> = None;
                let mut path: Option<Vec<PathEntry>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "hash" => hash = map.next_value()?,
                        "path" => path = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(Challenge {
                    hash,
                    path: path.ok_or_else(|| de::Error::missing_field("path"))?,
                })
            }
        }

        deserializer.deserialize_any(ChallengeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_challenge_object() {
        let challenge = serde_json::from_value::<Challenge>(json!({
            "hash": "mnpCKZsiafrJlDy2qg7nImqoTrXkL5NhfyFUSDn4Hpk",
            "path": [{ "challengee": "hotspot", "challengee_lon": 1.0, "challengee_lat": 2.0 }]
        }))
        .unwrap();

        assert_eq!(challenge.hash.as_deref(), Some("mnpCKZsiafrJlDy2qg7nImqoTrXkL5NhfyFUSDn4Hpk"));
        assert_eq!(challenge.path.len(), 1);
    }

    #[test]
    fn deserializes_a_bare_path_array() {
        let challenge = serde_json::from_value::<Challenge>(json!([{ "challengee": "hotspot" }])).unwrap();

        assert_eq!(challenge.hash, None);
        assert_eq!(challenge.path.len(), 1);
    }

    #[test]
    fn ignores_unknown_transaction_fields() {
        let challenge = serde_json::from_value::<Challenge>(json!({
            "type": "poc_receipts_v1",
            "height": 935461,
            "fee": 0,
            "path": []
        }))
        .unwrap();

        assert_eq!(challenge.path.len(), 0);
    }

    #[test]
    fn a_null_hash_is_absent() {
        let challenge = serde_json::from_value::<Challenge>(json!({ "hash": null, "path": [] })).unwrap();

        assert_eq!(challenge.hash, None);
    }

    #[test]
    fn fails_without_a_path() {
        let result = serde_json::from_value::<Challenge>(json!({ "hash": "abc" }));

        assert!(result.is_err());
    }
}
