use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feedback::error::ReportError;

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

/// An analyzer score in `[0, 100]`. Out-of-range input is rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ScoreValue(u8);

impl ScoreValue {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, ReportError> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ReportError::MalformedReport(format!(
                "score {value} is outside 0..=100"
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ScoreValue {
    type Error = ReportError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Coarse display bucket derived from a score. Ordered `Poor < Fair < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Poor,
    Fair,
    Strong,
}

// ────────────────────────────────────────────────────────────────────────────
// Tips
// ────────────────────────────────────────────────────────────────────────────

/// Analyzer wire names are `"good"` and `"improve"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipStatus {
    #[serde(alias = "good")]
    Positive,
    #[serde(alias = "improve")]
    Advisory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub status: TipStatus,
    pub summary: String,
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of report categories, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    #[serde(rename = "tone-style")]
    ToneStyle,
    #[serde(rename = "content")]
    Content,
    #[serde(rename = "structure")]
    Structure,
    #[serde(rename = "skills")]
    Skills,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::ToneStyle,
        CategoryKind::Content,
        CategoryKind::Structure,
        CategoryKind::Skills,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CategoryKind::ToneStyle => "tone-style",
            CategoryKind::Content => "content",
            CategoryKind::Structure => "structure",
            CategoryKind::Skills => "skills",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CategoryKind::ToneStyle => "Tone & Style",
            CategoryKind::Content => "Content",
            CategoryKind::Structure => "Structure",
            CategoryKind::Skills => "Skills",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable key, also used for disclosure-state lookup.
    pub id: String,
    pub title: String,
    pub score: ScoreValue,
    pub tips: Vec<Tip>,
}

impl Category {
    pub fn new(kind: CategoryKind, score: ScoreValue, tips: Vec<Tip>) -> Self {
        Self {
            id: kind.id().to_string(),
            title: kind.title().to_string(),
            score,
            tips,
        }
    }
}

/// A short ATS suggestion. Unlike category tips these carry no explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsTip {
    pub status: TipStatus,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsSection {
    pub score: ScoreValue,
    pub tips: Vec<AtsTip>,
}

/// One analysis result. Built once, never mutated; a new analysis builds a new report.
///
/// `categories` is kept in the order the analyzer supplied it. The aggregator is
/// responsible for checking the closed category set and imposing display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub overall_score: ScoreValue,
    pub categories: Vec<Category>,
    pub ats: Option<AtsSection>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackTip {
    #[serde(rename = "type")]
    pub status: TipStatus,
    pub tip: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCategory {
    pub score: i64,
    #[serde(default)]
    pub tips: Vec<FeedbackTip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackAtsTip {
    #[serde(rename = "type")]
    pub status: TipStatus,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackAts {
    pub score: i64,
    #[serde(default)]
    pub tips: Vec<FeedbackAtsTip>,
}

/// The analyzer's feedback payload as it arrives over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_score: i64,
    #[serde(rename = "ATS", default)]
    pub ats: Option<FeedbackAts>,
    #[serde(default)]
    pub tone_and_style: Option<FeedbackCategory>,
    #[serde(default)]
    pub content: Option<FeedbackCategory>,
    #[serde(default)]
    pub structure: Option<FeedbackCategory>,
    #[serde(default)]
    pub skills: Option<FeedbackCategory>,
}

impl FeedbackCategory {
    fn into_category(self, kind: CategoryKind) -> Result<Category, ReportError> {
        let score = ScoreValue::new(self.score).map_err(|_| {
            ReportError::MalformedReport(format!(
                "category '{kind}' score {} is outside 0..=100",
                self.score
            ))
        })?;
        let tips = self
            .tips
            .into_iter()
            .map(|t| Tip {
                status: t.status,
                summary: t.tip,
                explanation: t.explanation,
            })
            .collect();
        Ok(Category::new(kind, score, tips))
    }
}

/// Validates every score. Absent categories are left out rather than rejected here so
/// that the aggregator reports them with the rest of the category-set checks.
impl TryFrom<Feedback> for Report {
    type Error = ReportError;

    fn try_from(feedback: Feedback) -> Result<Self, Self::Error> {
        let overall_score = ScoreValue::new(feedback.overall_score).map_err(|_| {
            ReportError::MalformedReport(format!(
                "overall score {} is outside 0..=100",
                feedback.overall_score
            ))
        })?;

        let ats = feedback
            .ats
            .map(|ats| -> Result<AtsSection, ReportError> {
                let score = ScoreValue::new(ats.score).map_err(|_| {
                    ReportError::MalformedReport(format!(
                        "ATS score {} is outside 0..=100",
                        ats.score
                    ))
                })?;
                let tips = ats
                    .tips
                    .into_iter()
                    .map(|t| AtsTip {
                        status: t.status,
                        summary: t.tip,
                    })
                    .collect();
                Ok(AtsSection { score, tips })
            })
            .transpose()?;

        let slots = [
            (CategoryKind::ToneStyle, feedback.tone_and_style),
            (CategoryKind::Content, feedback.content),
            (CategoryKind::Structure, feedback.structure),
            (CategoryKind::Skills, feedback.skills),
        ];

        let mut categories = Vec::with_capacity(slots.len());
        for (kind, slot) in slots {
            if let Some(raw) = slot {
                categories.push(raw.into_category(kind)?);
            }
        }

        Ok(Report {
            overall_score,
            categories,
            ats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_value_accepts_bounds() {
        assert_eq!(ScoreValue::new(0).unwrap().get(), 0);
        assert_eq!(ScoreValue::new(100).unwrap().get(), 100);
    }

    #[test]
    fn test_score_value_rejects_out_of_range() {
        assert!(matches!(
            ScoreValue::new(-1),
            Err(ReportError::MalformedReport(_))
        ));
        assert!(matches!(
            ScoreValue::new(101),
            Err(ReportError::MalformedReport(_))
        ));
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Poor < Tier::Fair);
        assert!(Tier::Fair < Tier::Strong);
    }

    #[test]
    fn test_category_kind_ids_round_trip() {
        for kind in CategoryKind::ALL {
            assert_eq!(CategoryKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CategoryKind::from_id("ats"), None);
    }

    #[test]
    fn test_feedback_wire_names() {
        let feedback: Feedback = serde_json::from_value(json!({
            "overallScore": 72,
            "ATS": { "score": 60, "tips": [{ "type": "good", "tip": "Clear headings" }] },
            "toneAndStyle": {
                "score": 80,
                "tips": [{ "type": "improve", "tip": "Fewer buzzwords", "explanation": "..." }]
            }
        }))
        .unwrap();

        assert_eq!(feedback.overall_score, 72);
        assert_eq!(feedback.ats.as_ref().unwrap().tips[0].status, TipStatus::Positive);
        assert_eq!(
            feedback.tone_and_style.as_ref().unwrap().tips[0].status,
            TipStatus::Advisory
        );
        assert!(feedback.skills.is_none());
    }

    #[test]
    fn test_report_from_feedback_keeps_present_categories() {
        let feedback: Feedback = serde_json::from_value(json!({
            "overallScore": 50,
            "content": { "score": 40, "tips": [] },
            "skills": { "score": 90, "tips": [] }
        }))
        .unwrap();

        let report = Report::try_from(feedback).unwrap();
        let ids: Vec<&str> = report.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["content", "skills"]);
        assert_eq!(report.categories[1].title, "Skills");
        assert!(report.ats.is_none());
    }

    #[test]
    fn test_report_from_feedback_rejects_bad_category_score() {
        let feedback: Feedback = serde_json::from_value(json!({
            "overallScore": 50,
            "structure": { "score": 140, "tips": [] }
        }))
        .unwrap();

        match Report::try_from(feedback) {
            Err(ReportError::MalformedReport(msg)) => assert!(msg.contains("structure")),
            other => panic!("expected MalformedReport, got {other:?}"),
        }
    }

    #[test]
    fn test_report_from_feedback_rejects_bad_ats_score() {
        let feedback: Feedback = serde_json::from_value(json!({
            "overallScore": 50,
            "ATS": { "score": -3 }
        }))
        .unwrap();

        assert!(matches!(
            Report::try_from(feedback),
            Err(ReportError::MalformedReport(_))
        ));
    }
}
