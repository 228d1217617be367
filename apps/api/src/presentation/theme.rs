use serde::Serialize;

use crate::feedback::models::Tier;

/// Visual register a treatment maps to. Colors and icons are chosen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Caution,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Treatment {
    pub tone: Tone,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierTreatments {
    pub strong: Treatment,
    pub fair: Treatment,
    pub poor: Treatment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipTreatments {
    pub positive: Treatment,
    pub advisory: Treatment,
}

/// Tier and tip-status treatment table served alongside every render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub tiers: TierTreatments,
    pub tips: TipTreatments,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tiers: TierTreatments {
                strong: Treatment {
                    tone: Tone::Positive,
                    label: "Strong",
                },
                fair: Treatment {
                    tone: Tone::Caution,
                    label: "Good Start",
                },
                poor: Treatment {
                    tone: Tone::Negative,
                    label: "Needs Work",
                },
            },
            tips: TipTreatments {
                positive: Treatment {
                    tone: Tone::Positive,
                    label: "What's working well:",
                },
                advisory: Treatment {
                    tone: Tone::Caution,
                    label: "How to improve:",
                },
            },
        }
    }
}

impl Theme {
    pub fn for_tier(&self, tier: Tier) -> &Treatment {
        match tier {
            Tier::Strong => &self.tiers.strong,
            Tier::Fair => &self.tiers.fair,
            Tier::Poor => &self.tiers.poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels() {
        let theme = Theme::default();
        assert_eq!(theme.for_tier(Tier::Strong).label, "Strong");
        assert_eq!(theme.for_tier(Tier::Fair).label, "Good Start");
        assert_eq!(theme.for_tier(Tier::Poor).label, "Needs Work");
    }

    #[test]
    fn test_tier_tones() {
        let theme = Theme::default();
        assert_eq!(theme.for_tier(Tier::Strong).tone, Tone::Positive);
        assert_eq!(theme.for_tier(Tier::Fair).tone, Tone::Caution);
        assert_eq!(theme.for_tier(Tier::Poor).tone, Tone::Negative);
    }

    #[test]
    fn test_tip_headings() {
        let theme = Theme::default();
        assert_eq!(theme.tips.positive.label, "What's working well:");
        assert_eq!(theme.tips.advisory.label, "How to improve:");
        assert_eq!(theme.tips.advisory.tone, Tone::Caution);
    }

    #[test]
    fn test_theme_serializes_by_key() {
        let value = serde_json::to_value(Theme::default()).unwrap();
        assert_eq!(value["tiers"]["fair"]["tone"], "caution");
        assert_eq!(value["tips"]["advisory"]["label"], "How to improve:");
    }
}
