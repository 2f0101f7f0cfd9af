pub use knockout_export::render_dot;
pub use knockout_stats::{derive_statistics, standings, summary, top_scorers};
pub use knockout_syntax::{
    ParseError, ParseErrorKind, ParseOutcome, Token, TokenKind, Tournament, parse, tokenize,
};

pub mod prelude {
    pub use crate::{derive_statistics, parse, render_dot, tokenize};
    pub use crate::{ParseOutcome, Tournament};
}
