use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(InteractionSeverity {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
});

str_enum!(SymptomSeverity {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
});

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(Page {
    Home => "home",
    Scanner => "scanner",
    Voice => "voice",
    Tracking => "tracking",
    Interactions => "interactions",
    Reminders => "reminders",
    Faqs => "faqs",
    Safety => "safety",
    Emergency => "emergency",
});

str_enum!(Language {
    English => "en",
    Spanish => "es",
    French => "fr",
    German => "de",
    Chinese => "zh",
});

impl Language {
    /// BCP-47 tag handed to speech engines for this language.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Spanish => "es-ES",
            Self::French => "fr-FR",
            Self::German => "de-DE",
            Self::Chinese => "zh-CN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn interaction_severity_round_trip() {
        for (variant, s) in [
            (InteractionSeverity::Low, "Low"),
            (InteractionSeverity::Moderate, "Moderate"),
            (InteractionSeverity::High, "High"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(InteractionSeverity::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn message_role_round_trip() {
        for (variant, s) in [
            (MessageRole::User, "user"),
            (MessageRole::Assistant, "assistant"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(MessageRole::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn page_round_trip() {
        for (variant, s) in [
            (Page::Home, "home"),
            (Page::Scanner, "scanner"),
            (Page::Voice, "voice"),
            (Page::Tracking, "tracking"),
            (Page::Interactions, "interactions"),
            (Page::Reminders, "reminders"),
            (Page::Faqs, "faqs"),
            (Page::Safety, "safety"),
            (Page::Emergency, "emergency"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Page::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn language_speech_locales() {
        assert_eq!(Language::English.speech_locale(), "en-US");
        assert_eq!(Language::Spanish.speech_locale(), "es-ES");
        assert_eq!(Language::French.speech_locale(), "fr-FR");
        assert_eq!(Language::German.speech_locale(), "de-DE");
        assert_eq!(Language::Chinese.speech_locale(), "zh-CN");
    }

    #[test]
    fn interaction_severity_serializes_as_variant_name() {
        // The severity labels are part of the data contract with the shell.
        let json = serde_json::to_string(&InteractionSeverity::High).unwrap();
        assert_eq!(json, "\"High\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(InteractionSeverity::from_str("Critical").is_err());
        assert!(MessageRole::from_str("bot").is_err());
        assert!(Page::from_str("").is_err());
        assert!(Language::from_str("pt").is_err());
    }
}
