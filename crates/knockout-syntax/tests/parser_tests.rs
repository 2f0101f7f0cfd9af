use knockout_syntax::model::{DRAW, PLACEHOLDER_RESULT};
use knockout_syntax::{ParseErrorKind, ParseOutcome, parse, tokenize};

fn parse_str(input: &str) -> ParseOutcome {
    parse(tokenize(input))
}

const DOCUMENT: &str = r#"
tournament {
    name: "Copa Metropolitana",
    teams: 4,
    venue: "Estadio Central"
}

teams {
    team: "Cobras" [
        player: "Ana Silva" [position: "FORWARD", number: 9, age: 24],
        player: "Rita Costa" [position: "GOALKEEPER", number: 1, age: 29]
    ]
    team: "Lobos" [
        player: "Eva Kane" [position: "FORWARD", number: 11, age: 22]
    ]
    team: "Tigres" [ ]
    team: "Osos" [ ]
}

elimination {
    semifinal: [
        match: "Cobras" vs "Lobos" [
            result: "2-1",
            scorers: [
                scorer: "Ana Silva" [minute: 15],
                scorer: "Eva Kane" [minute: 40],
                scorer: "Ana Silva" [minute: 88]
            ]
        ],
        match: "Tigres" vs "Osos" [
            result: "0-0"
        ]
    ],
    final: [
        match: "Cobras" vs "Tigres" [
            result: "Pending"
        ]
    ]
}
"#;

#[test]
fn test_full_document() {
    let outcome = parse_str(DOCUMENT);

    assert!(outcome.success);
    assert!(outcome.errors.is_empty());

    let t = outcome.tournament.unwrap();
    assert_eq!(t.name, "Copa Metropolitana");
    assert_eq!(t.venue, "Estadio Central");
    assert_eq!(t.declared_team_count, 4);
    assert_eq!(t.teams.len(), 4);
    assert_eq!(t.teams[0].players.len(), 2);
    assert_eq!(t.teams[0].players[1].position, "GOALKEEPER");
    assert_eq!(t.teams[0].players[1].number, 1);
    assert_eq!(t.teams[0].players[1].age, 29);

    // Phase order is declaration order, not sorted.
    assert_eq!(t.phases.len(), 2);
    assert_eq!(t.phases[0].name, "semifinal");
    assert_eq!(t.phases[1].name, "final");
    assert_eq!(t.phases[0].matches.len(), 2);
}

#[test]
fn test_winner_derivation() {
    let outcome = parse_str(DOCUMENT);
    let t = outcome.tournament.unwrap();

    let semifinal = &t.phases[0];
    assert_eq!(semifinal.matches[0].winner, "Cobras");
    assert_eq!(semifinal.matches[0].goals1, 2);
    assert_eq!(semifinal.matches[0].goals2, 1);
    assert_eq!(semifinal.matches[1].winner, DRAW);

    // "Pending" has no numeric sides, both default to 0.
    let final_match = &t.phases[1].matches[0];
    assert_eq!(final_match.goals1, 0);
    assert_eq!(final_match.goals2, 0);
    assert_eq!(final_match.winner, DRAW);
}

#[test]
fn test_scorers_in_order() {
    let outcome = parse_str(DOCUMENT);
    let t = outcome.tournament.unwrap();

    let scorers = &t.phases[0].matches[0].scorers;
    assert_eq!(scorers.len(), 3);
    assert_eq!(scorers[0].name, "Ana Silva");
    assert_eq!(scorers[0].minute, 15);
    assert_eq!(scorers[2].minute, 88);
}

#[test]
fn test_match_without_result_keeps_placeholder() {
    let outcome = parse_str(
        r#"
        tournament { name: "X" }
        teams { }
        elimination {
            final: [
                match: "A" vs "B" [ ]
            ]
        }
        "#,
    );

    let t = outcome.tournament.unwrap();
    let m = &t.phases[0].matches[0];
    assert_eq!(m.result_text, PLACEHOLDER_RESULT);
    assert_eq!(m.winner, DRAW);
    assert!(m.scorers.is_empty());
}

#[test]
fn test_header_attributes_in_any_order() {
    let outcome = parse_str(
        r#"
        tournament { venue: "V" teams: 8 name: "N" }
        teams { }
        elimination { }
        "#,
    );

    assert!(outcome.success);
    let t = outcome.tournament.unwrap();
    assert_eq!(t.name, "N");
    assert_eq!(t.venue, "V");
    assert_eq!(t.declared_team_count, 8);
}

#[test]
fn test_unknown_attribute_single_error_rest_parsed() {
    let outcome = parse_str(
        r#"
        tournament { name: "N", result: "x", venue: "V" }
        teams { }
        elimination { }
        "#,
    );

    assert!(outcome.success);
    let unknown: Vec<_> = outcome
        .errors
        .iter()
        .filter(|e| e.kind == ParseErrorKind::UnknownAttribute)
        .collect();
    assert_eq!(unknown.len(), 1);
    assert!(unknown[0].description.contains("result"));

    let t = outcome.tournament.unwrap();
    assert_eq!(t.name, "N");
    assert_eq!(t.venue, "V");
}

#[test]
fn test_declared_count_not_validated_against_roster() {
    let outcome = parse_str(
        r#"
        tournament { name: "N", teams: 16 }
        teams { team: "A" [ ] }
        elimination { }
        "#,
    );

    assert!(outcome.success);
    assert!(outcome.errors.is_empty());
    let t = outcome.tournament.unwrap();
    assert_eq!(t.declared_team_count, 16);
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn test_missing_section_keyword_is_fatal() {
    let outcome = parse_str(r#"tournament { name: "N" } elimination { }"#);

    assert!(!outcome.success);
    assert!(outcome.tournament.is_none());
    assert_eq!(outcome.errors.len(), 1);
    let err = &outcome.errors[0];
    assert_eq!(err.kind, ParseErrorKind::Fatal);
    assert!(err.description.contains("expected keyword 'teams'"));
}

#[test]
fn test_missing_closing_brace_is_fatal_with_one_error() {
    let outcome = parse_str(
        r#"
        tournament { name: "N" }
        teams {
        "#,
    );

    assert!(!outcome.success);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ParseErrorKind::Fatal);
}

#[test]
fn test_empty_document_is_fatal() {
    let outcome = parse_str("");

    assert!(!outcome.success);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].description.contains("end of input"));
}

#[test]
fn test_phase_names_accept_any_keyword() {
    let outcome = parse_str(
        r#"
        tournament { name: "N" }
        teams { }
        elimination {
            quarterfinal: [ ]
            semifinal: [ ]
            final: [ ]
        }
        "#,
    );

    assert!(outcome.success);
    let t = outcome.tournament.unwrap();
    let names: Vec<&str> = t.phases.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["quarterfinal", "semifinal", "final"]);
}

#[test]
fn test_parse_does_not_touch_team_counters() {
    let outcome = parse_str(DOCUMENT);
    let t = outcome.tournament.unwrap();

    for team in &t.teams {
        assert_eq!(team.matches_played, 0);
        assert_eq!(team.goals_for, 0);
    }
    for team in &t.teams {
        for player in &team.players {
            assert!(player.goals.is_empty());
        }
    }
}
