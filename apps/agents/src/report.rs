//! Console rendering of agent results. Pure: every function returns the text.

use std::path::Path;

use crate::agents::gap_analyst::GapReport;
use crate::agents::loose::LooseNumber;
use crate::agents::tailor::{TailorReport, BULLETS_SHOWN, TARGET_ATS_SCORE};
use crate::pipeline::PipelineOutcome;

const RULE_WIDTH: usize = 60;

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Title between two rules.
pub fn banner(title: &str) -> String {
    format!("{}\n{title}\n{}", rule('='), rule('='))
}

fn frequency_icon(frequency: &str) -> &'static str {
    match frequency {
        "high" => "🔥",
        "medium" => "👍",
        "low" => "💡",
        _ => "•",
    }
}

fn urgency_icon(urgency: &str) -> &'static str {
    match urgency {
        "critical" => "🚨",
        "important" => "⚠️",
        "nice-to-have" => "📌",
        _ => "•",
    }
}

pub fn render_gap_report(report: &GapReport) -> String {
    let mut lines = vec![String::new(), banner("📊 CAREER GAP ANALYSIS REPORT")];

    lines.push("\n✅ SKILLS YOU HAVE:".to_string());
    for skill in &report.skills_i_have {
        lines.push(format!(
            "  {} {} - {} demand",
            frequency_icon(&skill.frequency_in_jds),
            skill.skill,
            skill.frequency_in_jds.to_uppercase()
        ));
        lines.push(format!("      Evidence: {}", skill.evidence_in_resume));
    }

    lines.push("\n❌ SKILLS YOU LACK:".to_string());
    for gap in &report.skills_i_lack {
        lines.push(format!(
            "  {} {} [{}] - Learn in: {}",
            urgency_icon(&gap.urgency),
            gap.skill,
            gap.urgency.to_uppercase(),
            gap.learning_effort
        ));
        lines.push(format!("      Why: {}", gap.why_it_matters));
    }

    lines.push("\n🔑 ATS KEYWORDS TO ADD TO YOUR RESUME:".to_string());
    for keyword in report.ats_keywords_by_frequency() {
        lines.push(format!(
            "  • \"{}\" (in {} JDs) → Add to: {}",
            keyword.keyword, keyword.appears_in_n_jds, keyword.where_to_add_in_resume
        ));
    }

    lines.push("\n⚡ TITLE MISMATCH NOTE:".to_string());
    lines.push(format!("  {}", report.title_mismatch));

    lines.push("\n🎯 YOUR TOP 3 PRIORITIES RIGHT NOW:".to_string());
    for (i, priority) in report.top_3_priorities.iter().enumerate() {
        lines.push(format!("  {}. {priority}", i + 1));
    }

    lines.push("\n🇮🇳 INDIA MARKET INSIGHT:".to_string());
    lines.push(format!("  {}", report.india_market_insight));

    lines.push(format!("\n{}", rule('=')));
    lines.join("\n")
}

/// `84` for any readable score, otherwise the model's text as given.
fn score_label(score: &LooseNumber) -> String {
    score
        .value()
        .map(|v| v.to_string())
        .unwrap_or_else(|| score.to_string())
}

/// Ten cells, one filled per full ten points.
pub fn score_bar(score: u32) -> String {
    let filled = (score / 10).min(10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// `saved_to` is where the tailored resume was written, if anywhere.
pub fn render_tailor_report(report: &TailorReport, saved_to: Option<&Path>) -> String {
    let score = report.score_value();
    let mut lines = vec![String::new(), banner("🎯 RESUME TAILOR REPORT")];

    lines.push(format!(
        "\n📊 ATS MATCH SCORE: {}%",
        score_label(&report.ats_match_score)
    ));
    lines.push(format!("   [{}]", score_bar(score)));
    lines.push(format!("   {}", report.score_reasoning));
    if report.meets_target() {
        lines.push(format!("   ✅ Above {TARGET_ATS_SCORE}% target, ready to apply!"));
    } else {
        lines.push(format!("   ⚠️  Below {TARGET_ATS_SCORE}% target, review gaps below"));
    }

    lines.push("\n✍️  KEY BULLET REWRITES:".to_string());
    for bullet in report.bullets_rewritten.iter().take(BULLETS_SHOWN) {
        lines.push(format!("\n  BEFORE: {}", bullet.original));
        lines.push(format!("  AFTER:  {}", bullet.rewritten));
        if !bullet.keywords_added.is_empty() {
            lines.push(format!("  ADDED:  {}", bullet.keywords_added.join(", ")));
        }
    }

    if !report.gaps_flagged.is_empty() {
        lines.push("\n🚨 UNFILLABLE GAPS (be ready to address in interview):".to_string());
        for gap in &report.gaps_flagged {
            lines.push(format!("  • {gap}"));
        }
    }

    lines.push("\n📝 REWRITTEN PROFESSIONAL SUMMARY:".to_string());
    lines.push(format!("  {}", report.summary_rewrite));

    if let Some(path) = saved_to {
        lines.push(format!("\n💾 Tailored resume saved to: {}", path.display()));
    }

    lines.push(format!("\n{}", rule('=')));
    lines.join("\n")
}

/// Closing summary of a pipeline run.
pub fn render_action_plan(outcome: &PipelineOutcome) -> String {
    let mut lines = vec![
        String::new(),
        banner("✅ PIPELINE COMPLETE - YOUR ACTION PLAN"),
    ];

    for (i, priority) in outcome.gap.top_3_priorities.iter().enumerate() {
        lines.push(format!("  Week {}: {priority}", i + 1));
    }

    lines.push(format!(
        "\n  📊 Resume ATS Score: {}%",
        score_label(&outcome.tailor.ats_match_score)
    ));
    if let Some(path) = &outcome.tailored_resume_path {
        lines.push(format!("  📄 Tailored resume: {}", path.display()));
    }
    if let Some(outreach) = &outcome.outreach {
        lines.push(format!("  🤝 Outreach messages: {}", outreach.path.display()));
    }
    lines.push("\n  Good luck! 🎯".to_string());
    lines.push(rule('='));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::agents::gap_analyst::{AtsKeyword, SkillGap, SkillHave};
    use crate::agents::tailor::BulletRewrite;

    fn sample_gap() -> GapReport {
        GapReport {
            skills_i_have: vec![SkillHave {
                skill: "Selenium".into(),
                evidence_in_resume: "8 years of UI automation".into(),
                frequency_in_jds: "high".into(),
            }],
            skills_i_lack: vec![SkillGap {
                skill: "k6".into(),
                why_it_matters: "Performance testing is expected".into(),
                urgency: "critical".into(),
                learning_effort: "1-2 weeks".into(),
            }],
            ats_keywords_to_add: vec![
                AtsKeyword {
                    keyword: "Shift-Left".into(),
                    appears_in_n_jds: LooseNumber::from(1),
                    where_to_add_in_resume: "Summary".into(),
                },
                AtsKeyword {
                    keyword: "Playwright".into(),
                    appears_in_n_jds: LooseNumber::from("3"),
                    where_to_add_in_resume: "Skills".into(),
                },
            ],
            title_mismatch: "Title matches".into(),
            top_3_priorities: vec!["Learn k6".into(), "Add metrics".into()],
            india_market_insight: "Remote roles pay well".into(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0), "░░░░░░░░░░");
        assert_eq!(score_bar(85), "████████░░");
        assert_eq!(score_bar(100), "██████████");
        assert_eq!(score_bar(250), "██████████");
    }

    #[test]
    fn test_gap_report_lists_sections_and_sorts_keywords() {
        let text = render_gap_report(&sample_gap());
        assert!(text.contains("🔥 Selenium - HIGH demand"));
        assert!(text.contains("Evidence: 8 years of UI automation"));
        assert!(text.contains("🚨 k6 [CRITICAL] - Learn in: 1-2 weeks"));
        assert!(text.contains("  1. Learn k6\n  2. Add metrics"));

        let playwright = text.find("\"Playwright\" (in 3 JDs)").unwrap();
        let shift_left = text.find("\"Shift-Left\" (in 1 JDs)").unwrap();
        assert!(playwright < shift_left);
    }

    #[test]
    fn test_unknown_frequency_uses_bullet_icon() {
        let mut gap = sample_gap();
        gap.skills_i_have[0].frequency_in_jds = "sometimes".into();
        assert!(render_gap_report(&gap).contains("• Selenium - SOMETIMES demand"));
    }

    #[test]
    fn test_tailor_report_caps_bullets_and_reports_target() {
        let report = TailorReport {
            ats_match_score: LooseNumber::new(json!("72")),
            bullets_rewritten: (0..7)
                .map(|i| BulletRewrite {
                    original: format!("old {i}"),
                    rewritten: format!("new {i}"),
                    keywords_added: vec![],
                })
                .collect(),
            gaps_flagged: vec!["Kubernetes".into()],
            ..Default::default()
        };
        let text = render_tailor_report(&report, None);
        assert!(text.contains("ATS MATCH SCORE: 72%"));
        assert!(text.contains("[███████░░░]"));
        assert!(text.contains("Below 80% target"));
        assert!(text.contains("BEFORE: old 4"));
        assert!(!text.contains("BEFORE: old 5"));
        assert!(text.contains("• Kubernetes"));
        assert!(!text.contains("saved to"));
    }

    #[test]
    fn test_score_label_drops_model_percent_sign() {
        assert_eq!(score_label(&LooseNumber::from("84%")), "84");
        assert_eq!(score_label(&LooseNumber::from("high")), "high");
        assert_eq!(score_label(&LooseNumber::default()), "?");
    }

    #[test]
    fn test_tailor_report_mentions_saved_path() {
        let report = TailorReport {
            ats_match_score: LooseNumber::from(91),
            tailored_resume: "JANE".into(),
            ..Default::default()
        };
        let text = render_tailor_report(&report, Some(Path::new("out/tailored_resume.txt")));
        assert!(text.contains("Above 80% target"));
        assert!(text.contains("💾 Tailored resume saved to: out/tailored_resume.txt"));
        assert!(!text.contains("UNFILLABLE GAPS"));
    }
}
