pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{Error, ErrorCode};
pub use runtime::{Evaluator, Finale, Renderer, ScenePlan, SceneState, Step};
pub use syntax::ast::{Canvas, Command};
pub use syntax::token::{Token, TokenKind};

use syntax::lexer::Lexer;
use syntax::parser::Parser;

/// Lex and parse source text into a command tree, ready for evaluation.
pub fn compile(source: &str) -> Result<Canvas, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse()
}

/// Compile and evaluate in one go, producing the display plan for `renderer`.
pub fn build_plan(source: &str, renderer: &dyn Renderer) -> Result<ScenePlan, Error> {
    let canvas = compile(source)?;
    Ok(Evaluator::new(renderer).eval(&canvas))
}
