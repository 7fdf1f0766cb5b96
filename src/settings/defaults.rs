use serde_json::Value;

/// Default value of a recognized setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl DefaultValue {
    #[must_use]
    pub fn to_json(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(n) => Value::from(n),
            Self::Str(s) => Value::String(s.to_string()),
        }
    }
}

/// A recognized setting and its default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDefault {
    pub key: &'static str,
    pub value: DefaultValue,
}

/// Recognized settings, in file order
pub const DEFAULTS: &[SettingDefault] = &[
    SettingDefault {
        key: "model",
        value: DefaultValue::Str("turbo"),
    },
    SettingDefault {
        key: "mute_beeps",
        value: DefaultValue::Bool(false),
    },
    SettingDefault {
        key: "mic_enabled",
        value: DefaultValue::Bool(true),
    },
    SettingDefault {
        key: "hotkey",
        value: DefaultValue::Str("`"),
    },
    SettingDefault {
        key: "window_x",
        value: DefaultValue::Int(100),
    },
    SettingDefault {
        key: "window_y",
        value: DefaultValue::Int(100),
    },
    SettingDefault {
        key: "expanded",
        value: DefaultValue::Bool(false),
    },
];

/// Look up the default for a recognized key
#[must_use]
pub fn find_default(key: &str) -> Option<&'static SettingDefault> {
    DEFAULTS.iter().find(|d| d.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_table() {
        assert_eq!(DEFAULTS.len(), 7);
        assert_eq!(
            find_default("model").map(|d| d.value),
            Some(DefaultValue::Str("turbo"))
        );
        assert_eq!(
            find_default("hotkey").map(|d| d.value),
            Some(DefaultValue::Str("`"))
        );
        assert_eq!(
            find_default("window_y").map(|d| d.value),
            Some(DefaultValue::Int(100))
        );
        assert!(find_default("foo").is_none());
    }

    #[test]
    fn test_keys_unique() {
        for (i, d) in DEFAULTS.iter().enumerate() {
            assert!(
                DEFAULTS[i + 1..].iter().all(|other| other.key != d.key),
                "Duplicate default key: {}",
                d.key
            );
        }
    }

    #[test]
    fn test_to_json() {
        assert_eq!(DefaultValue::Bool(true).to_json(), Value::Bool(true));
        assert_eq!(DefaultValue::Int(100).to_json(), Value::from(100));
        assert_eq!(
            DefaultValue::Str("turbo").to_json(),
            Value::String("turbo".to_string())
        );
    }
}
