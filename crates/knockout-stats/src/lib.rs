//! Statistics derivation and reports for parsed knockout tournaments.
//!
//! The syntax crate leaves every counter at zero; this crate turns a parsed
//! [`Tournament`](knockout_syntax::Tournament) into one with per-team and
//! per-player statistics filled in, and offers the report queries built on
//! top of them.
//!
//! ```
//! use knockout_syntax::{parse, tokenize};
//! use knockout_stats::{derive_statistics, standings};
//!
//! let outcome = parse(tokenize(
//!     r#"
//!     tournament { name: "Cup" }
//!     teams { team: "A" [ ] team: "B" [ ] }
//!     elimination { final: [ match: "A" vs "B" [ result: "1-0" ] ] }
//!     "#,
//! ));
//! let derived = derive_statistics(&outcome.tournament.unwrap());
//! let table = standings(&derived);
//! assert_eq!(table[0].team, "A");
//! assert_eq!(table[0].matches_won, 1);
//! ```

mod derive;
mod index;
mod report;

pub use derive::derive_statistics;
pub use index::{TeamId, TeamIndex};
pub use report::{StandingRow, Summary, TopScorerRow, standings, summary, top_scorers};
