//! Context step lists and by-pattern grouping.

use crate::helpers::source_fixtures::analyze_source;

#[test]
fn test_steps_keep_source_order() {
    let (analysis, _) = analyze_source(
        "[context]
exten => 20,1,NoOp(a)
exten => 10,1,NoOp(b)
exten => 20,2,NoOp(c)
exten => 10,2,NoOp(d)
exten => 30,1,NoOp(e)
",
    );
    let ctx = analysis.dialplan.context("context").unwrap();

    let source: Vec<&str> = ctx.steps().iter().map(|s| s.app.as_str()).collect();
    assert_eq!(source, vec!["NoOp(a)", "NoOp(b)", "NoOp(c)", "NoOp(d)", "NoOp(e)"]);

    let groups = ctx.by_pattern();
    let keys: Vec<&str> = groups.iter().map(|g| g.pattern).collect();
    assert_eq!(keys, vec!["20", "10", "30"]);
    for group in &groups {
        let prios: Vec<u32> = group.steps.iter().map(|s| s.priority.get()).collect();
        let mut sorted = prios.clone();
        sorted.sort_unstable();
        assert_eq!(prios, sorted, "group {} out of order", group.pattern);
    }
}

#[test]
fn test_contexts_in_first_appearance_order() {
    let (analysis, _) = analyze_source(
        "[b]
exten => s,1,NoOp()
[a]
exten => s,0,NoOp()
[b]
exten => s,2,NoOp()
",
    );
    let names: Vec<&str> = analysis.dialplan.contexts().map(|c| c.name()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert!(analysis.dialplan.context("a").unwrap().is_empty());
    assert_eq!(analysis.dialplan.context("b").unwrap().len(), 2);
    assert_eq!(analysis.dialplan.step_count(), 2);
}

#[test]
fn test_labels_are_kept() {
    let (analysis, _) = analyze_source(
        "[context]
exten => s,1(start),Answer()
 same => n(retry),Wait(1)
 same => n,Goto(retry)
",
    );
    let ctx = analysis.dialplan.context("context").unwrap();
    let retry = ctx.find_label("s", "retry").unwrap();
    assert_eq!(retry.priority.get(), 2);
    assert_eq!(ctx.find_label("s", "start").unwrap().priority.get(), 1);
    assert!(analysis.diagnostics.is_empty());
}

#[test]
fn test_step_location_is_statement_line() {
    let (analysis, _) = analyze_source(
        "[context]
exten => s,1,NoOp()

exten => s,n,NoOp()
",
    );
    let lines: Vec<u32> = analysis
        .dialplan
        .context("context")
        .unwrap()
        .steps()
        .iter()
        .map(|s| s.location.line)
        .collect();
    assert_eq!(lines, vec![2, 4]);
}
