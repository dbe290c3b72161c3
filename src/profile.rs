//! Profile document model.
//!
//! The page renders a single persona profile fetched as JSON (`db.json`).
//! Decoding is the validation boundary for the document shape: required
//! fields must be present and string-typed, optional fields decode to
//! `None`, unknown keys are ignored.

use serde::Deserialize;

/// Personal-attributes record rendered on the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub picture_url: String,
    pub age: String,
    pub education: String,
    pub marital_status: String,
    pub location: String,
    pub occupation: String,
    pub tech_literate: String,
    #[serde(default)]
    pub tech_interest: Option<String>,
    #[serde(default)]
    pub tech_expertise: Option<String>,
}

impl Profile {
    /// Display name shown in the page header.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Detail rows in their fixed display order. Optional fields that are
    /// absent yield `None` and get no row.
    pub fn detail_entries(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("age", Some(self.age.as_str())),
            ("education", Some(self.education.as_str())),
            ("marital_status", Some(self.marital_status.as_str())),
            ("location", Some(self.location.as_str())),
            ("occupation", Some(self.occupation.as_str())),
            ("tech_literate", Some(self.tech_literate.as_str())),
            ("tech_interest", self.tech_interest.as_deref()),
            ("tech_expertise", self.tech_expertise.as_deref()),
        ]
    }
}

/// The full fetched document. Immutable once received.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProfileDocument {
    pub profile: Profile,
    pub quote: String,
    pub personality: Vec<String>,
    pub bio: String,
    pub needs: Vec<String>,
    pub frustrations: Vec<String>,

    // Present in the data shape but not rendered anywhere.
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub payment_medium: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// Upper-cased detail label with underscores shown as spaces
/// ("marital_status" -> "MARITAL STATUS").
pub fn detail_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "profile": {
                "first_name": "Imani",
                "last_name": "Okafor",
                "picture_url": "images/imani.png",
                "age": "34",
                "education": "MSc Design",
                "marital_status": "married",
                "location": "Rotterdam",
                "occupation": "UX researcher",
                "tech_literate": "high",
                "tech_interest": "wearables",
                "tech_expertise": "intermediate"
            },
            "quote": "Make it obvious before you make it clever.",
            "personality": ["curious", "methodical"],
            "bio": "Runs field studies for a mobility startup.",
            "needs": ["fast summaries"],
            "frustrations": ["cluttered dashboards"],
            "brands": ["Muji"],
            "payment_medium": "card",
            "payment_method": "credit"
        }"#
    }

    #[test]
    fn test_decode_full_document() {
        let doc: ProfileDocument = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(doc.profile.first_name, "Imani");
        assert_eq!(doc.profile.tech_interest.as_deref(), Some("wearables"));
        assert_eq!(doc.personality.len(), 2);
        assert_eq!(doc.brands, vec!["Muji"]);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = sample_json()
            .replace(r#""tech_interest": "wearables","#, "")
            .replace(r#""tech_expertise": "intermediate""#, r#""age2": "x""#)
            .replace(r#""payment_medium": "card","#, "");
        let doc: ProfileDocument = serde_json::from_str(&json).unwrap();
        assert!(doc.profile.tech_interest.is_none());
        assert!(doc.profile.tech_expertise.is_none());
        assert!(doc.payment_medium.is_none());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let json = sample_json().replace(r#""quote": "Make it obvious before you make it clever.","#, "");
        assert!(serde_json::from_str::<ProfileDocument>(&json).is_err());
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let json = sample_json().replace(
            r#""quote":"#,
            r#""favorite_color": "teal", "quote":"#,
        );
        assert!(serde_json::from_str::<ProfileDocument>(&json).is_ok());
    }

    #[test]
    fn test_full_name_joins_with_single_space() {
        let doc: ProfileDocument = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(doc.profile.full_name(), "Imani Okafor");
    }

    #[test]
    fn test_detail_entries_order_and_presence() {
        let mut doc: ProfileDocument = serde_json::from_str(sample_json()).unwrap();
        doc.profile.tech_expertise = None;

        let entries = doc.profile.detail_entries();
        assert_eq!(entries[0], ("age", Some("34")));
        assert_eq!(entries[2].0, "marital_status");
        assert_eq!(entries[7], ("tech_expertise", None));
    }

    #[test]
    fn test_detail_label_formatting() {
        assert_eq!(detail_label("age"), "AGE");
        assert_eq!(detail_label("marital_status"), "MARITAL STATUS");
        assert_eq!(detail_label("tech_literate"), "TECH LITERATE");
    }
}
