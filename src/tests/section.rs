use super::{locate_sections, CommentState, DebugSection};
use crate::config::Config;

#[test]
fn test_locates_sections_with_tags_and_state() {
    let cfg = Config::default();
    let lines = [
        "import x from 'x';",
        "// DEBUG START [net]",
        "/*",
        "fetch();",
        "*/",
        "// DEBUG END",
        "  // DEBUG START",
        "log();",
        "  // DEBUG END",
    ];

    let sections = locate_sections(&lines, &cfg);

    assert_eq!(
        sections,
        vec![
            DebugSection {
                start_line: 1,
                end_line: 5,
                tag: Some("net".to_string()),
                state: CommentState::Commented,
                terminated: true,
            },
            DebugSection {
                start_line: 6,
                end_line: 8,
                tag: None,
                state: CommentState::Uncommented,
                terminated: true,
            },
        ]
    );
}

#[test]
fn test_unterminated_section_runs_to_end() {
    let cfg = Config::default();
    let lines = ["// DEBUG START", "a();", "b();"];

    let sections = locate_sections(&lines, &cfg);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].end_line, 2);
    assert!(!sections[0].terminated);
}

#[test]
fn test_start_marker_on_last_line() {
    let cfg = Config::default();
    let lines = ["a();", "// DEBUG START [tail]"];

    let sections = locate_sections(&lines, &cfg);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].start_line, 1);
    assert_eq!(sections[0].end_line, 1);
    assert_eq!(sections[0].state, CommentState::Uncommented);
    assert!(!sections[0].terminated);
}

#[test]
fn test_no_markers_no_sections() {
    let cfg = Config::default();
    let lines: [&str; 2] = ["// DEBUG", "/* DEBUG END? no */"];

    assert!(locate_sections(&lines, &cfg).is_empty());
}
