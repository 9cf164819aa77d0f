//! Wire DTOs for the transformation backend and the style vocabulary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies. Optional fields default so a
//! partially populated response still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Transformation presets offered by the style picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Cartoon,
    Sketch,
    Watercolor,
    #[serde(rename = "oilpaint")]
    OilPaint,
}

impl Style {
    pub const ALL: [Self; 4] = [Self::Cartoon, Self::Sketch, Self::Watercolor, Self::OilPaint];

    /// Form/storage value sent to the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cartoon => "cartoon",
            Self::Sketch => "sketch",
            Self::Watercolor => "watercolor",
            Self::OilPaint => "oilpaint",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cartoon => "Cartoon",
            Self::Sketch => "Sketch",
            Self::Watercolor => "Watercolor",
            Self::OilPaint => "Oil Paint",
        }
    }

    /// Parse a stored or form value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Processing engine choice; `Ai` maps to `use_ai=true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Processing {
    Ai,
    #[default]
    Opencv,
}

impl Processing {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Opencv => "opencv",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ai" => Some(Self::Ai),
            "opencv" => Some(Self::Opencv),
            _ => None,
        }
    }

    #[must_use]
    pub fn uses_ai(self) -> bool {
        matches!(self, Self::Ai)
    }
}

/// Slider values for the parameter re-apply request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub intensity: f64,
    pub blur: u32,
    pub edge_threshold: u32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self { intensity: 1.0, blur: 7, edge_threshold: 100 }
    }
}

/// `POST /login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
}

/// `POST /transform` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TransformResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub variants: Variants,
    #[serde(default)]
    pub ai_used: bool,
}

/// Named alternate renderings in the order the backend listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variants(Vec<(String, String)>);

impl Variants {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&String> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, data)| data)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter().map(|(name, data)| (name, data))
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Insert or replace `name`. A replaced entry keeps its position.
    pub fn insert(&mut self, name: String, data: String) {
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = data,
            None => self.0.push((name, data)),
        }
    }
}

impl FromIterator<(String, String)> for Variants {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut variants = Self::default();
        for (name, data) in iter {
            variants.insert(name, data);
        }
        variants
    }
}

impl<'de> Deserialize<'de> for Variants {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = Variants;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of variant name to base64 image")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Variants, A::Error> {
                let mut variants = Variants::default();
                while let Some((name, data)) = access.next_entry::<String, String>()? {
                    variants.insert(name, data);
                }
                Ok(variants)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// `GET /test-ai` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AiStatus {
    pub ready: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body shared by the account-change endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChangeResponse {
    #[serde(default)]
    pub success: bool,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
