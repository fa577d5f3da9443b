// src/context.rs
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color;
use crate::errors::{ContextError, Result};
use crate::size::Size;
use crate::style::Style;

/// Raw construction record for a [`RenderContext`].
///
/// Sizes stay plain integers here; they are validated when the record is
/// turned into a context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    pub style: Style,
    pub size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub phantom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_size: Option<i64>,
}

impl ContextConfig {
    pub fn new(style: Style, size: i64) -> Self {
        Self {
            style,
            size,
            color: None,
            phantom: false,
            parent_style: None,
            parent_size: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            debug!(error = %e, "rejected context config");
            ContextError::from(e)
        })
    }
}

/// Overrides applied by [`RenderContext::extend`]. Unset fields keep the
/// receiver's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extension {
    pub style: Option<Style>,
    pub size: Option<Size>,
    pub color: Option<String>,
    pub phantom: Option<bool>,
}

impl Extension {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn phantom(mut self, phantom: bool) -> Self {
        self.phantom = Some(phantom);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.phantom.is_none()
    }
}

/// Styling state carried by the parser at one nesting level.
///
/// A context is never modified after construction. Entering a nested
/// construct derives a new context through one of the `with_*` methods (or
/// [`extend`](Self::extend)), which records the receiver's current style and
/// size as the child's parent values. Only those two values are captured,
/// never a reference to the enclosing context, so the parent fields always
/// describe the immediately preceding derivation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ContextConfig")]
pub struct RenderContext {
    style: Style,
    size: Size,
    color: Option<String>,
    phantom: bool,
    parent_style: Style,
    parent_size: Size,
}

impl RenderContext {
    /// Build a context from a configuration record, validating sizes.
    pub fn new(config: ContextConfig) -> Result<Self> {
        let size = Size::try_from(config.size).map_err(|e| {
            debug!(size = config.size, "rejected context size");
            e
        })?;
        let parent_size = match config.parent_size {
            Some(raw) => Size::try_from(raw).map_err(|e| {
                debug!(parent_size = raw, "rejected parent size");
                e
            })?,
            None => size,
        };
        Ok(Self {
            style: config.style,
            size,
            color: config.color,
            phantom: config.phantom,
            parent_style: config.parent_style.unwrap_or(config.style),
            parent_size,
        })
    }

    /// A root context with no color that is its own parent.
    pub fn root(style: Style, size: Size) -> Self {
        Self {
            style,
            size,
            color: None,
            phantom: false,
            parent_style: style,
            parent_size: size,
        }
    }

    /// Derive a child context. The child's parent style and size are always
    /// the receiver's current style and size.
    pub fn extend(&self, extension: Extension) -> Self {
        trace!(
            from_style = %self.style,
            from_size = %self.size,
            ?extension,
            "deriving render context"
        );
        let Extension { style, size, color, phantom } = extension;
        Self {
            style: style.unwrap_or(self.style),
            size: size.unwrap_or(self.size),
            color: color.or_else(|| self.color.clone()),
            phantom: phantom.unwrap_or(self.phantom),
            parent_style: self.style,
            parent_size: self.size,
        }
    }

    pub fn with_style(&self, style: Style) -> Self {
        self.extend(Extension::new().style(style))
    }

    pub fn with_size(&self, size: Size) -> Self {
        self.extend(Extension::new().size(size))
    }

    pub fn with_color(&self, color: impl Into<String>) -> Self {
        self.extend(Extension::new().color(color))
    }

    /// Mark the subtree invisible. There is no way back: every context
    /// derived from the result stays phantom.
    pub fn with_phantom(&self) -> Self {
        self.extend(Extension::new().phantom(true))
    }

    /// Same observable state with the parent values collapsed onto the
    /// current style and size.
    pub fn reset(&self) -> Self {
        self.extend(Extension::new())
    }

    /// The color to paint with, or `None` to inherit the default ink.
    pub fn get_color(&self) -> Option<&str> {
        color::resolve(self.color.as_deref(), self.phantom)
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The color as set, before table lookup.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn is_phantom(&self) -> bool {
        self.phantom
    }

    pub fn parent_style(&self) -> Style {
        self.parent_style
    }

    pub fn parent_size(&self) -> Size {
        self.parent_size
    }

    pub fn style_changed(&self) -> bool {
        self.style != self.parent_style
    }

    pub fn size_changed(&self) -> bool {
        self.size != self.parent_size
    }

    pub fn size_multiplier(&self) -> f64 {
        self.size.multiplier()
    }

    /// Scale of the current size relative to the parent size.
    pub fn size_multiplier_from_parent(&self) -> f64 {
        self.size.multiplier() / self.parent_size.multiplier()
    }

    /// Scale of the current style relative to the parent style.
    pub fn style_multiplier_from_parent(&self) -> f64 {
        self.style.size_multiplier() / self.parent_style.size_multiplier()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::root(Style::Display, Size::NORMAL)
    }
}

impl TryFrom<ContextConfig> for RenderContext {
    type Error = ContextError;

    fn try_from(config: ContextConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl From<&RenderContext> for ContextConfig {
    fn from(ctx: &RenderContext) -> Self {
        Self {
            style: ctx.style,
            size: i64::from(ctx.size.get()),
            color: ctx.color.clone(),
            phantom: ctx.phantom,
            parent_style: Some(ctx.parent_style),
            parent_size: Some(i64::from(ctx.parent_size.get())),
        }
    }
}
