//! Output formatters: JSON for machines, a coloured summary for people

use crate::analysis::frequency::most_common;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::{Counts, Payload};
use crate::output::report::AnalysisReport;
use colored::Colorize;
use std::fmt::Write;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct ConsoleFormatter {
    use_colors: bool,
    top_n: usize,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors, top_n: 5 }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn counts_line(&self, counts: &Counts) -> String {
        let top = most_common(counts, self.top_n);
        if top.is_empty() {
            return "(none)".to_string();
        }
        top.iter()
            .map(|(key, count)| format!("{} ({})", key, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} ({} records, {})",
            self.heading("Job market signals"),
            report.record_count,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for result in &report.results {
            let _ = writeln!(out, "\n{}", self.heading(&result.name));
            match &result.payload {
                Payload::Frequencies(counts) => {
                    let _ = writeln!(out, "  {}", self.counts_line(counts));
                }
                Payload::PosTokens(tokens) => {
                    let _ = writeln!(out, "  verbs: {}", self.counts_line(&tokens.verbs));
                    let _ = writeln!(out, "  nouns: {}", self.counts_line(&tokens.nouns));
                    let _ = writeln!(out, "  adjectives: {}", self.counts_line(&tokens.adjectives));
                }
                Payload::TopSkills(roles) => {
                    for (role, skills) in roles {
                        let listed = skills
                            .iter()
                            .take(self.top_n)
                            .map(|s| format!("{} {:.3}", s.skill, s.score))
                            .collect::<Vec<_>>()
                            .join(", ");
                        let _ = writeln!(out, "  {}: {}", self.highlight(role), listed);
                    }
                }
                Payload::Network(edges) => {
                    let mut strongest: Vec<_> = edges.iter().collect();
                    strongest.sort_by(|a, b| b.weight.total_cmp(&a.weight));
                    for edge in strongest.into_iter().take(self.top_n) {
                        let _ = writeln!(
                            out,
                            "  {} - {}: {:.3} bits",
                            edge.source, edge.target, edge.weight
                        );
                    }
                    let _ = writeln!(out, "  {} edges", edges.len());
                }
                Payload::Overload(scores) => {
                    for score in scores.iter().filter(|s| s.flagged) {
                        let _ = writeln!(
                            out,
                            "  #{} {} @ {}: ODI {}",
                            score.index,
                            score.role.as_deref().unwrap_or("-"),
                            score.company.as_deref().unwrap_or("-"),
                            self.highlight(&format!("{:.2}", score.odi.unwrap_or_default()))
                        );
                    }
                    let _ = writeln!(
                        out,
                        "  {} of {} postings flagged",
                        report.flagged_count(),
                        scores.len()
                    );
                }
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// Pick the formatter for `format`
pub fn formatter_for(
    format: OutputFormat,
    pretty: bool,
    use_colors: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
    }
}
