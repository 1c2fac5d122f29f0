use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreHistoryItem {
    pub date: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummaryItem {
    pub skill: &'static str,
    pub average_score: f64,
    pub fill: &'static str,
}

/// Dashboard data: score trend plus per-skill averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub score_history: &'static [ScoreHistoryItem],
    pub skill_summary: &'static [SkillSummaryItem],
}

const SCORE_HISTORY: &[ScoreHistoryItem] = &[
    ScoreHistoryItem { date: "ส.ค. 1", score: 6.5 },
    ScoreHistoryItem { date: "ส.ค. 8", score: 7.0 },
    ScoreHistoryItem { date: "ส.ค. 15", score: 7.5 },
    ScoreHistoryItem { date: "ส.ค. 22", score: 8.0 },
    ScoreHistoryItem { date: "ส.ค. 29", score: 8.5 },
    ScoreHistoryItem { date: "ก.ย. 5", score: 8.2 },
    ScoreHistoryItem { date: "ก.ย. 12", score: 8.8 },
];

const SKILL_SUMMARY: &[SkillSummaryItem] = &[
    SkillSummaryItem {
        skill: "ไวยากรณ์ (Grammar)",
        average_score: 8.9,
        fill: "#FF6B6B",
    },
    SkillSummaryItem {
        skill: "คำศัพท์ (Vocabulary)",
        average_score: 7.8,
        fill: "#4D96FF",
    },
    SkillSummaryItem {
        skill: "ความสละสลวย (Fluency)",
        average_score: 9.2,
        fill: "#587370",
    },
];

pub fn summary() -> SummaryResponse {
    SummaryResponse {
        score_history: SCORE_HISTORY,
        skill_summary: SKILL_SUMMARY,
    }
}
