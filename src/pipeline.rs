//! End-to-end pipeline: text → tokens → tree → HTML
//!
//! Every run starts from scratch; nothing is cached between inputs. A trace
//! hook can be installed to observe intermediate stages. Without a hook the
//! pipeline has no side effects.
//!
//! ```rust,ignore
//! let mut seen = Vec::new();
//! let html = Pipeline::new()
//!     .with_hook(|trace| seen.push(trace.stage()))
//!     .run("# Hi");
//! ```

use crate::ast::Document;
use crate::emitter::emit;
use crate::lexer::{tokenize, Token};
use crate::parser::parse;

/// An intermediate result handed to the trace hook
#[derive(Debug, Clone, Copy)]
pub enum Trace<'a> {
    Tokens(&'a [Token]),
    Tree(&'a Document),
    Html(&'a str),
}

impl Trace<'_> {
    pub fn stage(&self) -> &'static str {
        match self {
            Trace::Tokens(_) => "tokens",
            Trace::Tree(_) => "tree",
            Trace::Html(_) => "html",
        }
    }
}

type TraceHook<'h> = Box<dyn FnMut(Trace<'_>) + 'h>;

#[derive(Default)]
pub struct Pipeline<'h> {
    hook: Option<TraceHook<'h>>,
}

impl<'h> Pipeline<'h> {
    pub fn new() -> Self {
        Self { hook: None }
    }

    /// Install a hook that is called after each stage
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(Trace<'_>) + 'h,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    fn trace(&mut self, trace: Trace<'_>) {
        if let Some(hook) = self.hook.as_mut() {
            hook(trace);
        }
    }

    pub fn tokenize(&mut self, source: &str) -> Vec<Token> {
        let tokens = tokenize(source);
        self.trace(Trace::Tokens(&tokens));
        tokens
    }

    pub fn parse(&mut self, tokens: &[Token]) -> Document {
        let doc = parse(tokens);
        self.trace(Trace::Tree(&doc));
        doc
    }

    pub fn emit(&mut self, doc: &Document) -> String {
        let html = emit(doc);
        self.trace(Trace::Html(&html));
        html
    }

    /// Tokenize and parse `source`
    pub fn document(&mut self, source: &str) -> Document {
        let tokens = self.tokenize(source);
        self.parse(&tokens)
    }

    /// Run all three stages on `source`
    pub fn run(&mut self, source: &str) -> String {
        let doc = self.document(source);
        self.emit(&doc)
    }
}

/// Convert source text straight to an HTML fragment
pub fn to_html(source: &str) -> String {
    Pipeline::new().run(source)
}
