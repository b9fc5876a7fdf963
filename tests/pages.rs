use pretty_assertions::assert_eq;

use pagetoc::{insert_page_toc, Config, TocOutcome};

#[test]
fn fixtures_match_expected_output() {
    let cases = [
        (
            "three-headings",
            include_str!("fixtures/html/three-headings.html"),
            include_str!("fixtures/expected/three-headings.html"),
            TocOutcome::Inserted { entries: 3 },
        ),
        (
            "single-heading",
            include_str!("fixtures/html/single-heading.html"),
            include_str!("fixtures/expected/single-heading.html"),
            TocOutcome::Removed,
        ),
        (
            "no-headings",
            include_str!("fixtures/html/no-headings.html"),
            include_str!("fixtures/expected/no-headings.html"),
            TocOutcome::Removed,
        ),
        (
            "markup-labels",
            include_str!("fixtures/html/markup-labels.html"),
            include_str!("fixtures/expected/markup-labels.html"),
            TocOutcome::Inserted { entries: 2 },
        ),
    ];

    for (name, input, expected, outcome) in cases {
        let result = insert_page_toc(input, &Config::default())
            .unwrap_or_else(|err| panic!("{}: {}", name, err));
        assert_eq!(result.html, expected, "fixture {}", name);
        assert_eq!(result.outcome, outcome, "fixture {}", name);
    }
}

#[test]
fn inserted_fixtures_are_stable_under_reprocessing() {
    let inserted = [
        include_str!("fixtures/html/three-headings.html"),
        include_str!("fixtures/html/markup-labels.html"),
    ];

    for input in inserted {
        let config = Config::default();
        let first = insert_page_toc(input, &config).unwrap();
        let second = insert_page_toc(&first.html, &config).unwrap();
        assert_eq!(second.html, first.html);
    }
}
