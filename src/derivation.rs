// src/derivation.rs
use std::fmt;
use std::str::FromStr;

use crate::context::RenderContext;
use crate::errors::{ContextError, Result};
use crate::size::Size;
use crate::style::Style;

/// One derivation step, as written on the command line
/// (`style:text`, `size:3`, `color:katex-blue`, `phantom`, `reset`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    Style(Style),
    Size(Size),
    Color(String),
    Phantom,
    Reset,
}

impl Derivation {
    pub fn apply(&self, ctx: &RenderContext) -> RenderContext {
        match self {
            Derivation::Style(style) => ctx.with_style(*style),
            Derivation::Size(size) => ctx.with_size(*size),
            Derivation::Color(color) => ctx.with_color(color.as_str()),
            Derivation::Phantom => ctx.with_phantom(),
            Derivation::Reset => ctx.reset(),
        }
    }
}

/// Apply steps left to right, starting from `root`.
pub fn apply_all<'a>(
    root: &RenderContext,
    steps: impl IntoIterator<Item = &'a Derivation>,
) -> RenderContext {
    steps
        .into_iter()
        .fold(root.clone(), |ctx, step| step.apply(&ctx))
}

impl FromStr for Derivation {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || ContextError::InvalidOperation(s.to_string());
        match s.trim().split_once(':') {
            Some(("style", arg)) => Ok(Derivation::Style(arg.parse()?)),
            Some(("size", arg)) => {
                let step: i64 = arg.trim().parse().map_err(|_| bad())?;
                Ok(Derivation::Size(Size::try_from(step)?))
            }
            Some(("color", arg)) if !arg.trim().is_empty() => {
                Ok(Derivation::Color(arg.trim().to_string()))
            }
            Some(_) => Err(bad()),
            None => match s.trim() {
                "phantom" => Ok(Derivation::Phantom),
                "reset" => Ok(Derivation::Reset),
                _ => Err(bad()),
            },
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivation::Style(style) => write!(f, "style:{style}"),
            Derivation::Size(size) => write!(f, "size:{}", size.get()),
            Derivation::Color(color) => write!(f, "color:{color}"),
            Derivation::Phantom => f.write_str("phantom"),
            Derivation::Reset => f.write_str("reset"),
        }
    }
}
