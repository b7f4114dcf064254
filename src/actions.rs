//! The fixed catalog of appliance actions a step can perform.
//!
//! Each action carries a display profile: label, icon, which parameters it
//! uses, their defaults and valid ranges, and a one-line tip. The catalog is
//! the single source of truth for both the player UI and parameter
//! validation when recipes come back from the API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed enumerated cooking operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Chop,
    Mix,
    Cook,
    Fry,
    Steam,
    Knead,
    Emulsify,
    Blend,
    Weigh,
    Rest,
}

/// Valid range and default for one step parameter. A disabled parameter
/// always defaults to 0 ("not applicable").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub enabled: bool,
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl ParamSpec {
    const fn off() -> Self {
        Self {
            enabled: false,
            default: 0,
            min: 0,
            max: 0,
        }
    }

    const fn range(default: u32, min: u32, max: u32) -> Self {
        Self {
            enabled: true,
            default,
            min,
            max,
        }
    }

    /// Whether a value is acceptable for this parameter (0 is always
    /// allowed and means "not applicable")
    pub fn accepts(&self, value: u32) -> bool {
        if value == 0 {
            return true;
        }
        self.enabled && value >= self.min && value <= self.max
    }
}

/// Display and parameter profile for one action
#[derive(Debug, Clone, Copy)]
pub struct ActionProfile {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Temperature in degrees Celsius
    pub temperature: ParamSpec,
    /// Unitless 0-10 blade speed
    pub speed: ParamSpec,
    /// Duration in minutes
    pub duration: ParamSpec,
    pub tip: &'static str,
}

impl ActionKind {
    /// All actions in menu order
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::Chop,
            ActionKind::Mix,
            ActionKind::Cook,
            ActionKind::Fry,
            ActionKind::Steam,
            ActionKind::Knead,
            ActionKind::Emulsify,
            ActionKind::Blend,
            ActionKind::Weigh,
            ActionKind::Rest,
        ]
    }

    /// Parse an action key from the API. Unknown or missing keys fall back
    /// to `Mix`, matching how the service treats legacy recipes.
    pub fn parse_or_default(key: &str) -> ActionKind {
        match key {
            "chop" => ActionKind::Chop,
            "cook" => ActionKind::Cook,
            "fry" => ActionKind::Fry,
            "steam" => ActionKind::Steam,
            "knead" => ActionKind::Knead,
            "emulsify" => ActionKind::Emulsify,
            "blend" => ActionKind::Blend,
            "weigh" => ActionKind::Weigh,
            "rest" => ActionKind::Rest,
            _ => ActionKind::Mix,
        }
    }

    /// Wire key for this action
    pub fn key(self) -> &'static str {
        match self {
            ActionKind::Chop => "chop",
            ActionKind::Mix => "mix",
            ActionKind::Cook => "cook",
            ActionKind::Fry => "fry",
            ActionKind::Steam => "steam",
            ActionKind::Knead => "knead",
            ActionKind::Emulsify => "emulsify",
            ActionKind::Blend => "blend",
            ActionKind::Weigh => "weigh",
            ActionKind::Rest => "rest",
        }
    }

    pub fn profile(self) -> &'static ActionProfile {
        match self {
            ActionKind::Chop => &CHOP,
            ActionKind::Mix => &MIX,
            ActionKind::Cook => &COOK,
            ActionKind::Fry => &FRY,
            ActionKind::Steam => &STEAM,
            ActionKind::Knead => &KNEAD,
            ActionKind::Emulsify => &EMULSIFY,
            ActionKind::Blend => &BLEND,
            ActionKind::Weigh => &WEIGH,
            ActionKind::Rest => &REST,
        }
    }
}

static CHOP: ActionProfile = ActionProfile {
    label: "Chop",
    icon: "🔪",
    description: "Chopping ingredients to various sizes",
    temperature: ParamSpec::off(),
    speed: ParamSpec::range(5, 3, 10),
    duration: ParamSpec::range(1, 1, 60),
    tip: "Speed 5-8 for vegetables, 8-10 for hard ingredients",
};

static MIX: ActionProfile = ActionProfile {
    label: "Mix",
    icon: "🌀",
    description: "Gentle mixing of ingredients",
    temperature: ParamSpec::off(),
    speed: ParamSpec::range(2, 1, 4),
    duration: ParamSpec::range(2, 1, 30),
    tip: "Low speeds for delicate ingredients",
};

static COOK: ActionProfile = ActionProfile {
    label: "Cook",
    icon: "🔥",
    description: "Cooking with stirring",
    temperature: ParamSpec::range(100, 37, 120),
    speed: ParamSpec::range(1, 1, 3),
    duration: ParamSpec::range(10, 2, 120),
    tip: "Speed 1-2 to avoid splashing",
};

static FRY: ActionProfile = ActionProfile {
    label: "Fry",
    icon: "🍳",
    description: "Frying with stirring",
    temperature: ParamSpec::range(120, 80, 160),
    speed: ParamSpec::range(1, 1, 2),
    duration: ParamSpec::range(5, 1, 60),
    tip: "100-120°C for vegetables, 140-160°C for meat",
};

static STEAM: ActionProfile = ActionProfile {
    label: "Steam",
    icon: "💨",
    description: "Steam cooking (Varoma)",
    temperature: ParamSpec::range(100, 90, 120),
    speed: ParamSpec::off(),
    duration: ParamSpec::range(15, 3, 120),
    tip: "Use Varoma basket or steaming insert",
};

static KNEAD: ActionProfile = ActionProfile {
    label: "Knead",
    icon: "🍞",
    description: "Kneading dough",
    temperature: ParamSpec::off(),
    speed: ParamSpec::off(),
    duration: ParamSpec::range(3, 1, 15),
    tip: "Kneading function works automatically",
};

static EMULSIFY: ActionProfile = ActionProfile {
    label: "Emulsify",
    icon: "🥄",
    description: "Creating emulsions and sauces",
    temperature: ParamSpec::off(),
    speed: ParamSpec::range(4, 3, 7),
    duration: ParamSpec::range(2, 1, 10),
    tip: "Add oil slowly while emulsifying",
};

static BLEND: ActionProfile = ActionProfile {
    label: "Blend",
    icon: "🥤",
    description: "Blending to smooth consistency",
    temperature: ParamSpec::off(),
    speed: ParamSpec::range(8, 6, 10),
    duration: ParamSpec::range(1, 1, 5),
    tip: "High speeds create smooth consistency",
};

static WEIGH: ActionProfile = ActionProfile {
    label: "Weigh",
    icon: "⚖️",
    description: "Weighing ingredients",
    temperature: ParamSpec::off(),
    speed: ParamSpec::off(),
    duration: ParamSpec::off(),
    tip: "Use tare function before adding next ingredient",
};

static REST: ActionProfile = ActionProfile {
    label: "Rest",
    icon: "⏱️",
    description: "Waiting or resting time",
    temperature: ParamSpec::off(),
    speed: ParamSpec::off(),
    duration: ParamSpec::range(10, 1, 180),
    tip: "Time for dough to rise or ingredients to cool",
};

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for kind in ActionKind::all() {
            assert_eq!(ActionKind::parse_or_default(kind.key()), *kind);
        }
    }

    #[test]
    fn test_parse_unknown_falls_back_to_mix() {
        assert_eq!(ActionKind::parse_or_default("serve"), ActionKind::Mix);
        assert_eq!(ActionKind::parse_or_default(""), ActionKind::Mix);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&ActionKind::Emulsify).unwrap();
        assert_eq!(json, "\"emulsify\"");
        let back: ActionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ActionKind::Emulsify);
    }

    #[test]
    fn test_profiles_are_internally_consistent() {
        for kind in ActionKind::all() {
            let profile = kind.profile();
            assert!(!profile.label.is_empty());
            for spec in [profile.temperature, profile.speed, profile.duration] {
                if spec.enabled {
                    assert!(spec.min <= spec.default && spec.default <= spec.max);
                } else {
                    assert_eq!(spec.default, 0);
                }
            }
        }
    }

    #[test]
    fn test_param_spec_accepts() {
        let spec = ParamSpec::range(100, 37, 120);
        assert!(spec.accepts(37));
        assert!(spec.accepts(120));
        assert!(spec.accepts(0)); // 0 always means "not applicable"
        assert!(!spec.accepts(36));
        assert!(!spec.accepts(121));

        let off = ParamSpec::off();
        assert!(off.accepts(0));
        assert!(!off.accepts(5));
    }

    #[test]
    fn test_weigh_has_no_timer() {
        assert!(!ActionKind::Weigh.profile().duration.enabled);
    }
}
