//! Plain-text cards for terminal output.

use super::AnalysisReport;
use std::fmt::Write;

/// Render the report as a sequence of titled cards. Absent sections are skipped.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "== Article Analysis ==");
    if let Some(title) = &report.title {
        let _ = writeln!(out, "Title: {title}");
    }
    let _ = writeln!(out, "Truth Score: {}", report.truth_score);
    let _ = writeln!(out, "Confidence: {}", report.confidence);

    if let Some(bias) = &report.bias {
        let _ = writeln!(out, "\n== Bias [{}] ==", bias.category);
        let _ = writeln!(out, "{} ({} confidence)", bias.label, bias.confidence);
        if let Some(explanation) = &bias.explanation {
            let _ = writeln!(out, "{explanation}");
        }
    }

    if let Some(cred) = &report.credibility {
        let _ = writeln!(out, "\n== Credibility [{}] ==", cred.tier);
        let _ = writeln!(out, "Score: {}", cred.score);
        if let Some(factors) = &cred.factors {
            let _ = writeln!(out, "Factors:");
            for f in factors {
                let _ = writeln!(out, "  - {f}");
            }
        }
    }

    if let Some(sentiment) = &report.sentiment {
        let _ = writeln!(out, "\n== Sentiment [{}] ==", sentiment.category);
        let _ = writeln!(out, "{} ({})", sentiment.label, sentiment.score);
    }

    if let Some(fact) = &report.factuality {
        let _ = writeln!(out, "\n== Factuality ==");
        let _ = writeln!(out, "Score: {}", fact.score);
        let _ = writeln!(out, "Claims verified: {}", fact.claims_verified);
        if let Some(issues) = &fact.issues {
            let _ = writeln!(out, "Issues found:");
            for i in issues {
                let _ = writeln!(out, "  - {i}");
            }
        }
    }

    if let Some(summary) = &report.summary {
        let _ = writeln!(out, "\n== Summary ==");
        let _ = writeln!(out, "{summary}");
    }

    out
}
