//! Jump destinations registered by Gosub, GosubIf, Goto and GotoIf.

use rstest::rstest;

use dplint::{JumpDestination, JumpPriority, Name};

use crate::helpers::diagnostic_helpers::assert_linted;
use crate::helpers::source_fixtures::analyze_source;

fn dest(
    context: Option<&str>,
    label: Option<&str>,
    priority: Option<JumpPriority>,
) -> JumpDestination {
    JumpDestination {
        context: context.map(Name::from),
        label: label.map(Name::from),
        priority,
    }
}

fn single(app: &str) -> (Vec<JumpDestination>, Vec<dplint::Diagnostic>) {
    let (analysis, jumps) = analyze_source(&format!("[context]\nexten => s,1,{}\n", app));
    (jumps.destinations().cloned().collect(), analysis.diagnostics)
}

// ============================================================================
// Gosub
// ============================================================================

#[rstest]
#[case("Gosub(1)", dest(None, None, Some(JumpPriority::Number(1))))]
#[case("Gosub(s,1)", dest(None, Some("s"), Some(JumpPriority::Number(1))))]
#[case("Gosub(sub,s,1)", dest(Some("sub"), Some("s"), Some(JumpPriority::Number(1))))]
#[case("Gosub(sub,s,start)", dest(Some("sub"), Some("s"), Some(JumpPriority::Named(Name::from("start")))))]
#[case("Gosub(sub,s,1(a,b))", dest(Some("sub"), Some("s"), Some(JumpPriority::Number(1))))]
#[case("gosub(sub,s,1)", dest(Some("sub"), Some("s"), Some(JumpPriority::Number(1))))]
fn test_gosub_registers_left_padded(#[case] app: &str, #[case] expected: JumpDestination) {
    let (jumps, diagnostics) = single(app);
    assert_eq!(jumps, vec![expected]);
    assert_linted(&diagnostics, &[]);
}

#[rstest]
#[case::pipe("Gosub(sub|s|1)", "E_APP_ARG_PIPEDELIM")]
#[case::too_many("Gosub(a,b,c,d)", "E_APP_ARG_MANY")]
#[case::too_few("Gosub()", "E_APP_ARG_FEW")]
fn test_gosub_bad_args_register_nothing(#[case] app: &str, #[case] code: &'static str) {
    let (jumps, diagnostics) = single(app);
    assert!(jumps.is_empty());
    assert_linted(&diagnostics, &[(code, 1)]);
}

#[test]
fn test_every_call_registers() {
    let (analysis, jumps) = analyze_source(
        "[context]
exten => s,1,Gosub(sub,s,1)
 same => n,Gosub(sub,s,1)
 same => n,Goto(other,s,1)
 same => n,Return()
 same => n,StackPop()
",
    );
    assert_eq!(jumps.len(), 3);
    let lines: Vec<u32> = jumps.iter().map(|e| e.location.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    assert_linted(&analysis.diagnostics, &[]);
}

// ============================================================================
// GosubIf
// ============================================================================

#[test]
fn test_gosubif_both_branches() {
    let (jumps, diagnostics) = single("GosubIf($[${X}=1]?yes,s,1:no,s,1)");
    assert_eq!(
        jumps,
        vec![
            dest(Some("yes"), Some("s"), Some(JumpPriority::Number(1))),
            dest(Some("no"), Some("s"), Some(JumpPriority::Number(1))),
        ]
    );
    assert_linted(&diagnostics, &[]);
}

#[rstest]
#[case::no_false_branch("GosubIf(${X}?s,1)", dest(None, Some("s"), Some(JumpPriority::Number(1))))]
#[case::empty_true_branch("GosubIf(${X}?:2)", dest(None, None, Some(JumpPriority::Number(2))))]
fn test_gosubif_empty_branch_registers_nothing(
    #[case] app: &str,
    #[case] expected: JumpDestination,
) {
    let (jumps, diagnostics) = single(app);
    assert_eq!(jumps, vec![expected]);
    assert_linted(&diagnostics, &[]);
}

#[test]
fn test_gosubif_condition_never_registers() {
    let (jumps, _) = single("GosubIf(${EXISTS(a,b,c)}?:)");
    assert!(jumps.is_empty());
}

#[test]
fn test_gosubif_without_question_mark() {
    let (jumps, diagnostics) = single("GosubIf(sub,s,1)");
    assert!(jumps.is_empty());
    assert_linted(&diagnostics, &[("E_APP_ARG_IFSTYLE", 1)]);
}

#[test]
fn test_gotoif_registers_like_gosubif() {
    let (jumps, _) = single("GotoIf($[${X}>1]?big:small)");
    assert_eq!(
        jumps,
        vec![
            dest(None, None, Some(JumpPriority::Named(Name::from("big")))),
            dest(None, None, Some(JumpPriority::Named(Name::from("small")))),
        ]
    );
}

#[test]
fn test_rejected_statement_registers_nothing() {
    let (analysis, jumps) = analyze_source(
        "[context]
exten => s,1,NoOp()
exten => s,1,Gosub(sub,s,1)
",
    );
    assert!(jumps.is_empty());
    assert_linted(&analysis.diagnostics, &[("E_DP_PRIO_DUPE", 1)]);
}
