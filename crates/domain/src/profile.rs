//! Player profile model
//!
//! The player endpoint returns a loosely shaped JSON document. Fields are
//! extracted one by one so that a missing or oddly typed value only blanks
//! that field instead of failing the whole profile.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key whose object value marks a response as describing an existing player.
pub const PROFILE_MARKER: &str = "profile";

/// Profile fields shown for a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Numeric account id.
    pub account_id: Option<u64>,
    /// Steam display name.
    pub persona_name: Option<String>,
    /// URL of the full-size avatar image.
    pub avatar_url: Option<String>,
    /// Last login timestamp as reported by the API.
    pub last_login: Option<String>,
    /// Competitive rank, rendered as received.
    pub competitive_rank: Option<String>,
    /// Two-digit medal encoding, rendered as received.
    pub rank_tier: Option<String>,
    /// Estimated matchmaking rating.
    pub mmr_estimate: Option<String>,
}

impl PlayerProfile {
    /// Extracts a profile from a player response.
    ///
    /// Returns `None` when the response has no `profile` object, which is how
    /// the API answers for unknown or private accounts.
    #[must_use]
    pub fn from_response(response: &Value) -> Option<Self> {
        let profile = response.get(PROFILE_MARKER)?.as_object()?;

        Some(Self {
            account_id: profile.get("account_id").and_then(Value::as_u64),
            persona_name: profile.get("personaname").and_then(scalar_text),
            avatar_url: profile.get("avatarfull").and_then(scalar_text),
            last_login: profile.get("last_login").and_then(scalar_text),
            competitive_rank: response.get("competitive_rank").and_then(scalar_text),
            rank_tier: response.get("rank_tier").and_then(scalar_text),
            mmr_estimate: response
                .get("mmr_estimate")
                .and_then(|mmr| mmr.get("estimate"))
                .and_then(scalar_text),
        })
    }

    /// Returns the labelled fields that are present, in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<ProfileField> {
        let mut fields = Vec::new();

        if let Some(name) = &self.persona_name {
            fields.push(ProfileField::new("Nickname", name.clone()));
        }
        if let Some(last_login) = &self.last_login {
            fields.push(ProfileField::new("Last Login", format_timestamp(last_login)));
        }
        if let Some(rank) = &self.competitive_rank {
            fields.push(ProfileField::new("Competitive Rank", rank.clone()));
        }
        if let Some(tier) = &self.rank_tier {
            fields.push(ProfileField::new("Rank Tier", describe_rank_tier(tier)));
        }
        if let Some(estimate) = &self.mmr_estimate {
            fields.push(ProfileField::new("Rating", estimate.clone()));
        }

        fields
    }
}

/// One labelled line of the profile panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileField {
    /// Field label without the trailing colon.
    pub label: String,
    /// Display value.
    pub value: String,
}

impl ProfileField {
    /// Creates a new field.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Dota 2 ranked medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    /// Medal 1.
    Herald,
    /// Medal 2.
    Guardian,
    /// Medal 3.
    Crusader,
    /// Medal 4.
    Archon,
    /// Medal 5.
    Legend,
    /// Medal 6.
    Ancient,
    /// Medal 7.
    Divine,
    /// Medal 8, has no stars.
    Immortal,
}

impl Medal {
    const fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            1 => Some(Self::Herald),
            2 => Some(Self::Guardian),
            3 => Some(Self::Crusader),
            4 => Some(Self::Archon),
            5 => Some(Self::Legend),
            6 => Some(Self::Ancient),
            7 => Some(Self::Divine),
            8 => Some(Self::Immortal),
            _ => None,
        }
    }

    /// Returns the medal name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Herald => "Herald",
            Self::Guardian => "Guardian",
            Self::Crusader => "Crusader",
            Self::Archon => "Archon",
            Self::Legend => "Legend",
            Self::Ancient => "Ancient",
            Self::Divine => "Divine",
            Self::Immortal => "Immortal",
        }
    }
}

/// Decoded `rank_tier`: tens digit is the medal, units digit the stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    /// The medal.
    pub medal: Medal,
    /// Stars within the medal, 0 for Immortal.
    pub stars: u8,
}

impl RankTier {
    /// Decodes the API's two-digit encoding.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        let medal = Medal::from_digit(code / 10)?;
        let stars = u8::try_from(code % 10).ok()?;
        if medal != Medal::Immortal && !(1..=5).contains(&stars) {
            return None;
        }
        Some(Self { medal, stars })
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.medal {
            Medal::Immortal => f.write_str(self.medal.name()),
            medal => write!(f, "{} {}", medal.name(), self.stars),
        }
    }
}

fn describe_rank_tier(raw: &str) -> String {
    raw.parse::<u32>()
        .ok()
        .and_then(RankTier::from_code)
        .map_or_else(|| raw.to_string(), |tier| format!("{raw} ({tier})"))
}

fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |ts| ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

/// Renders a JSON scalar as display text. `null`, arrays and objects count as absent.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn full_response() -> Value {
        json!({
            "profile": {
                "account_id": 86_745_912,
                "personaname": "Miracle-",
                "avatarfull": "https://avatars.example/full.jpg",
                "last_login": "2023-05-01T12:34:56.789Z"
            },
            "competitive_rank": 7500,
            "rank_tier": 80,
            "mmr_estimate": { "estimate": 6420 }
        })
    }

    #[test]
    fn test_missing_marker_is_not_a_profile() {
        assert!(PlayerProfile::from_response(&json!({ "error": "Not Found" })).is_none());
        assert!(PlayerProfile::from_response(&json!({ "profile": null })).is_none());
        assert!(PlayerProfile::from_response(&json!([])).is_none());
    }

    #[test]
    fn test_nickname_is_labelled() {
        let profile = PlayerProfile::from_response(&full_response()).unwrap();
        assert_eq!(profile.fields()[0], ProfileField::new("Nickname", "Miracle-"));
    }

    #[test]
    fn test_fields_in_display_order() {
        let profile = PlayerProfile::from_response(&full_response()).unwrap();
        let labels: Vec<_> = profile.fields().into_iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Nickname", "Last Login", "Competitive Rank", "Rank Tier", "Rating"]
        );
        assert_eq!(profile.account_id, Some(86_745_912));
        assert_eq!(
            profile.avatar_url.as_deref(),
            Some("https://avatars.example/full.jpg")
        );
    }

    #[test]
    fn test_absent_and_null_fields_are_skipped() {
        let response = json!({
            "profile": { "personaname": "anon", "last_login": null },
            "rank_tier": null
        });
        let profile = PlayerProfile::from_response(&response).unwrap();
        assert_eq!(profile.fields(), vec![ProfileField::new("Nickname", "anon")]);
        assert!(profile.avatar_url.is_none());
    }

    #[test]
    fn test_last_login_formatting() {
        assert_eq!(
            format_timestamp("2023-05-01T12:34:56.789Z"),
            "2023-05-01 12:34 UTC"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_rank_tier_decoding() {
        assert_eq!(describe_rank_tier("54"), "54 (Legend 4)");
        assert_eq!(describe_rank_tier("80"), "80 (Immortal)");
        assert_eq!(describe_rank_tier("11"), "11 (Herald 1)");
        assert_eq!(describe_rank_tier("59"), "59");
        assert_eq!(describe_rank_tier("95"), "95");
        assert_eq!(describe_rank_tier("legend"), "legend");
    }

    #[test]
    fn test_rating_uses_estimate() {
        let profile = PlayerProfile::from_response(&full_response()).unwrap();
        let rating = profile
            .fields()
            .into_iter()
            .find(|f| f.label == "Rating")
            .unwrap();
        assert_eq!(rating.to_string(), "Rating: 6420");
    }
}
