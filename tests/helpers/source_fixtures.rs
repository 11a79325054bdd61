//! Turns small dialplan snippets into statements.
//!
//! Only what the tests need: `[context]` headers, `exten =>` and `same =>`
//! lines, and `;` comments. Blank lines are skipped but counted.

use dplint::{Analysis, Analyzer, AnalyzerConfig, JumpRegistry, Location, Statement};

pub fn statements_from(source: &str) -> Vec<Statement> {
    let mut context = String::new();
    let mut statements = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let location = Location::new("test.conf", index as u32 + 1);
        let line = line.split(';').next().unwrap_or_default().trim();
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            context = name.to_string();
        } else if let Some(rest) = line.strip_prefix("exten =>") {
            let mut fields = rest.trim().splitn(3, ',');
            let pattern = fields.next().unwrap_or_default();
            let prio = fields.next().unwrap_or_default();
            let app = fields.next().unwrap_or_default();
            statements.push(Statement::exten(context.as_str(), pattern, prio, app, location));
        } else if let Some(rest) = line.strip_prefix("same =>") {
            let mut fields = rest.trim().splitn(2, ',');
            let prio = fields.next().unwrap_or_default();
            let app = fields.next().unwrap_or_default();
            statements.push(Statement::same(context.as_str(), prio, app, location));
        }
    }
    statements
}

/// Analyze a snippet with the given configuration.
pub fn analyze_with(source: &str, config: AnalyzerConfig) -> (Analysis, JumpRegistry) {
    let mut jumps = JumpRegistry::new();
    let mut analyzer = Analyzer::new(config);
    analyzer.analyze(statements_from(source), &mut jumps);
    (analyzer.finish(), jumps)
}

/// Analyze a snippet with the default configuration.
pub fn analyze_source(source: &str) -> (Analysis, JumpRegistry) {
    analyze_with(source, AnalyzerConfig::default())
}

/// `(pattern, priority, app)` of every step in a context, grouped by pattern.
pub fn grouped_steps(analysis: &Analysis, context: &str) -> Vec<(String, u32, String)> {
    analysis
        .dialplan
        .context(context)
        .unwrap_or_else(|| panic!("no context '{}'", context))
        .by_pattern_flat()
        .map(|s| (s.pattern.to_string(), s.priority.get(), s.app.clone()))
        .collect()
}
