use super::{parse_command, CommandRequest};
use crate::error::ParseError;
use crate::scanner::Transition;
use rstest::rstest;
use std::collections::BTreeSet;
use std::path::Path;

fn set(items: &[&str]) -> Option<BTreeSet<String>> {
    Some(items.iter().map(ToString::to_string).collect())
}

#[test]
fn test_all_tags_with_files_and_except() {
    let request = parse_command("comment all in a.ts,b.ts except temp").unwrap();

    assert_eq!(
        request,
        CommandRequest {
            action: Transition::Comment,
            tags: None,
            files: set(&["a.ts", "b.ts"]),
            except_tags: set(&["temp"]),
        }
    );
}

#[rstest]
#[case("toggle", Transition::Toggle, None, None, None)]
#[case("uncomment perf", Transition::Uncomment, set(&["perf"]), None, None)]
#[case("comment perf, net", Transition::Comment, set(&["perf", "net"]), None, None)]
#[case("comment in app.ts", Transition::Comment, None, set(&["app.ts"]), None)]
#[case("toggle all in all", Transition::Toggle, None, None, None)]
#[case("comment all except temp", Transition::Comment, None, None, set(&["temp"]))]
#[case(
    "uncomment perf except slow in src/app.ts",
    Transition::Uncomment,
    set(&["perf"]),
    set(&["src/app.ts"]),
    set(&["slow"])
)]
#[case("  COMMENT net  ", Transition::Comment, set(&["net"]), None, None)]
fn test_parse_cases(
    #[case] command: &str,
    #[case] action: Transition,
    #[case] tags: Option<BTreeSet<String>>,
    #[case] files: Option<BTreeSet<String>>,
    #[case] except_tags: Option<BTreeSet<String>>,
) {
    assert_eq!(
        parse_command(command),
        Ok(CommandRequest {
            action,
            tags,
            files,
            except_tags,
        })
    );
}

#[test]
fn test_file_clause_except_takes_precedence() {
    let request = parse_command("toggle perf except main in a.ts except file").unwrap();

    assert_eq!(request.tags, set(&["perf"]));
    assert_eq!(request.files, set(&["a.ts"]));
    assert_eq!(request.except_tags, set(&["file"]));
}

#[rstest]
#[case("", ParseError::Empty)]
#[case("   ", ParseError::Empty)]
#[case("flip all", ParseError::UnknownAction("flip".to_string()))]
#[case("comment perf db", ParseError::UnexpectedWord("db".to_string()))]
#[case("toggle perf, net extra in a.ts", ParseError::UnexpectedWord("extra".to_string()))]
#[case("comment all in", ParseError::MissingFiles)]
#[case("comment all in ,", ParseError::MissingFiles)]
#[case("comment all except", ParseError::MissingExceptTags)]
#[case("comment in a.ts except", ParseError::MissingExceptTags)]
#[case("comment in a.ts except ,", ParseError::MissingExceptTags)]
fn test_rejected_commands(#[case] command: &str, #[case] expected: ParseError) {
    assert_eq!(parse_command(command), Err(expected));
}

#[test]
fn test_filter_mirrors_request() {
    let request = parse_command("comment perf in a.ts except slow").unwrap();
    let filter = request.filter();

    assert_eq!(filter.only, set(&["perf"]));
    assert_eq!(filter.except, set(&["slow"]));
    assert!(filter.selects(Some("perf")));
    assert!(!filter.selects(Some("slow")));
    assert!(!filter.selects(None));
}

#[test]
fn test_file_matching() {
    let request = parse_command("toggle in app.ts,lib/util.ts").unwrap();

    assert!(request.matches_file(Path::new("/repo/src/app.ts")));
    assert!(request.matches_file(Path::new("app.ts")));
    assert!(request.matches_file(Path::new("/repo/lib/util.ts")));
    assert!(!request.matches_file(Path::new("/repo/src/util.ts")));
    assert!(!request.matches_file(Path::new("/repo/src/myapp.ts")));

    let everything = parse_command("toggle").unwrap();
    assert!(everything.matches_file(Path::new("anything.ts")));
}
