//! Indentation configuration for emitted source.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};

/// Indentation unit applied once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C#, Java).
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JSON).
    pub const TWO: Self = Self::Spaces(2);

    /// Tab indentation.
    pub const TAB: Self = Self::Tab;

    /// The string for one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(n) => Cow::Owned(" ".repeat(*n as usize)),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

/// Accepts either a space count (`indent = 2`) or the string `"tab"`.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Width(u8),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Width(n) => Ok(Self::Spaces(n)),
            Raw::Name(name) if name.eq_ignore_ascii_case("tab") => Ok(Self::Tab),
            Raw::Name(name) => Err(D::Error::custom(format!(
                "invalid indent '{name}', expected a space count or \"tab\""
            ))),
        }
    }
}
