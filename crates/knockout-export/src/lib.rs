//! Graphviz bracket export.
//!
//! [`render_dot`] turns a tournament into a DOT digraph: one ellipse header
//! node, one cluster per phase, one box per match, and edges that follow
//! each winner into the next phase. The output feeds straight into
//! `dot -Tpng`.

use std::fmt::Write;

use knockout_syntax::{Match, Tournament};

/// Renders the tournament bracket as a Graphviz DOT document.
pub fn render_dot(tournament: &Tournament) -> String {
    let mut dot = String::new();

    dot.push_str("digraph Tournament {\n");
    dot.push_str("    rankdir=TB;\n");
    dot.push_str("    node [shape=box style=filled fontname=\"Arial\"];\n\n");
    let _ = writeln!(
        dot,
        "    tournament [label=\"{}\\n{}\", shape=ellipse, style=filled, fillcolor=yellow];",
        escape(&tournament.name),
        escape(&tournament.venue),
    );

    for (phase_index, phase) in tournament.phases.iter().enumerate() {
        let _ = writeln!(dot, "\n    subgraph cluster_{phase_index} {{");
        let _ = writeln!(dot, "        label=\"{}\";", escape(&capitalize(&phase.name)));
        dot.push_str("        style=filled;\n");
        let _ = writeln!(dot, "        color={};", phase_color(&phase.name));

        for (match_index, m) in phase.matches.iter().enumerate() {
            let _ = writeln!(
                dot,
                "        match_{phase_index}_{match_index} [label=\"{} {}\\n{} {}\", fillcolor={}];",
                escape(&m.team1),
                m.goals1,
                escape(&m.team2),
                m.goals2,
                match_color(m),
            );
        }

        dot.push_str("    }\n");
    }

    for (phase_index, phase) in tournament.phases.iter().enumerate() {
        for (match_index, m) in phase.matches.iter().enumerate() {
            if phase_index == 0 {
                let _ = writeln!(dot, "    tournament -> match_{phase_index}_{match_index};");
            }

            if let Some(next_phase) = tournament.phases.get(phase_index + 1) {
                let next = next_phase
                    .matches
                    .iter()
                    .position(|n| n.team1 == m.winner || n.team2 == m.winner);
                if let Some(next_index) = next {
                    let _ = writeln!(
                        dot,
                        "    match_{phase_index}_{match_index} -> match_{}_{next_index};",
                        phase_index + 1,
                    );
                }
            }
        }
    }

    dot.push_str("}\n");
    dot
}

/// Box color: green behind the first team when it won, coral when it lost,
/// white for a draw or pending match.
fn match_color(m: &Match) -> &'static str {
    if m.winner == m.team1 {
        "lightgreen"
    } else if m.winner == m.team2 {
        "lightcoral"
    } else {
        "white"
    }
}

// "quarterfinal" contains "final"; the quarter check must run first.
fn phase_color(phase_name: &str) -> &'static str {
    let name = phase_name.to_lowercase();
    if name.contains("quarter") {
        "lightgrey"
    } else if name.contains("semi") {
        "lightblue"
    } else if name.contains("final") {
        "yellow"
    } else {
        "white"
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn escape(text: &str) -> String {
    text.replace('"', "\\\"").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use knockout_syntax::{Phase, parse, tokenize};

    fn bracket() -> Tournament {
        let outcome = parse(tokenize(
            r#"
            tournament { name: "Copa", venue: "Estadio" }
            teams {
                team: "A" [ ] team: "B" [ ] team: "C" [ ] team: "D" [ ]
            }
            elimination {
                semifinal: [
                    match: "A" vs "B" [ result: "2-1" ],
                    match: "C" vs "D" [ result: "0-1" ]
                ],
                final: [
                    match: "A" vs "D" [ result: "Pending" ]
                ]
            }
            "#,
        ));
        outcome.tournament.unwrap()
    }

    #[test]
    fn header_node_carries_name_and_venue() {
        let dot = render_dot(&bracket());
        assert!(dot.starts_with("digraph Tournament {"));
        assert!(dot.contains(
            "tournament [label=\"Copa\\nEstadio\", shape=ellipse, style=filled, fillcolor=yellow];"
        ));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn one_cluster_per_phase_with_color() {
        let dot = render_dot(&bracket());
        assert!(dot.contains("subgraph cluster_0 {"));
        assert!(dot.contains("label=\"Semifinal\";"));
        assert!(dot.contains("color=lightblue;"));
        assert!(dot.contains("subgraph cluster_1 {"));
        assert!(dot.contains("label=\"Final\";"));
        assert!(dot.contains("color=yellow;"));
    }

    #[test]
    fn match_nodes_colored_by_winner_side() {
        let dot = render_dot(&bracket());
        assert!(dot.contains("match_0_0 [label=\"A 2\\nB 1\", fillcolor=lightgreen];"));
        assert!(dot.contains("match_0_1 [label=\"C 0\\nD 1\", fillcolor=lightcoral];"));
        assert!(dot.contains("match_1_0 [label=\"A 0\\nD 0\", fillcolor=white];"));
    }

    #[test]
    fn winners_feed_the_next_phase() {
        let dot = render_dot(&bracket());
        assert!(dot.contains("tournament -> match_0_0;"));
        assert!(dot.contains("tournament -> match_0_1;"));
        assert!(dot.contains("match_0_0 -> match_1_0;"));
        assert!(dot.contains("match_0_1 -> match_1_0;"));
        // The final has no successor phase.
        assert!(!dot.contains("match_1_0 ->"));
    }

    #[test]
    fn quarterfinal_is_grey_not_yellow() {
        assert_eq!(phase_color("quarterfinal"), "lightgrey");
        assert_eq!(phase_color("Final"), "yellow");
        assert_eq!(phase_color("playoff"), "white");
    }

    #[test]
    fn quotes_and_newlines_are_escaped() {
        let mut t = Tournament::new();
        t.name = "Cup \"23\"".to_string();
        t.phases.push(Phase {
            name: "final".to_string(),
            matches: Vec::new(),
        });

        let dot = render_dot(&t);
        assert!(dot.contains("Cup \\\"23\\\""));
    }
}
