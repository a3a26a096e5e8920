//! Drawable containers.
//!
//! [`Container`] is a closed sum over the fourteen container kinds. Code that
//! needs per-kind behaviour matches on it exhaustively, so adding a kind is a
//! compile error at every such site until the new arm is written.

/// Implements [`Drawable`] for a struct with `bounds` and `fields` members.
macro_rules! impl_drawable {
    ($ty:ident, $kind:ident) => {
        impl $crate::container::Drawable for $ty {
            const KIND: $crate::enums::ContainerKind = $crate::enums::ContainerKind::$kind;

            fn bounds(&self) -> $crate::geometry::Bounds {
                self.bounds
            }

            fn set_bounds(&mut self, bounds: $crate::geometry::Bounds) {
                self.bounds = bounds;
            }

            fn fields(&self) -> &$crate::field::FieldSet {
                &self.fields
            }

            fn fields_mut(&mut self) -> &mut $crate::field::FieldSet {
                &mut self.fields
            }
        }

        impl From<$ty> for $crate::container::Container {
            fn from(container: $ty) -> Self {
                $crate::container::Container::$kind(container)
            }
        }
    };
}

mod filters;
mod graphics;
mod shapes;
mod text;

use serde::{Deserialize, Serialize};
use std::any::Any;

pub use filters::{HighlightContainer, ObfuscateContainer};
pub use graphics::{EmojiContainer, ImageContainer, MetafileContainer, SvgContainer};
pub use shapes::{
    ArrowContainer, EllipseContainer, FreehandContainer, LineContainer, RectangleContainer,
};
pub use text::{SpeechbubbleContainer, StepLabelContainer, TextContainer};

use crate::enums::{ContainerKind, FieldKind};
use crate::error::Result;
use crate::field::{FieldSet, FieldValue};
use crate::geometry::Bounds;

/// Behaviour shared by every concrete container type.
pub trait Drawable {
    /// The kind this type implements.
    const KIND: ContainerKind;

    fn bounds(&self) -> Bounds;
    fn set_bounds(&mut self, bounds: Bounds);
    fn fields(&self) -> &FieldSet;
    fn fields_mut(&mut self) -> &mut FieldSet;

    /// Set a field, scoping it to this kind if it is new.
    fn set_field(&mut self, kind: FieldKind, value: impl Into<FieldValue>)
    where
        Self: Sized,
    {
        self.fields_mut().set(kind, Self::KIND.scope(), value);
    }
}

/// Any drawable container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Container {
    Line(LineContainer),
    Rectangle(RectangleContainer),
    Ellipse(EllipseContainer),
    Arrow(ArrowContainer),
    Freehand(FreehandContainer),
    Highlight(HighlightContainer),
    Obfuscate(ObfuscateContainer),
    Speechbubble(SpeechbubbleContainer),
    StepLabel(StepLabelContainer),
    Text(TextContainer),
    Image(ImageContainer),
    Metafile(MetafileContainer),
    Svg(SvgContainer),
    Emoji(EmojiContainer),
}

/// Evaluates `$body` with `$c` bound to the inner container, whatever its kind.
macro_rules! each_container {
    ($value:expr, $c:ident => $body:expr) => {
        match $value {
            Container::Line($c) => $body,
            Container::Rectangle($c) => $body,
            Container::Ellipse($c) => $body,
            Container::Arrow($c) => $body,
            Container::Freehand($c) => $body,
            Container::Highlight($c) => $body,
            Container::Obfuscate($c) => $body,
            Container::Speechbubble($c) => $body,
            Container::StepLabel($c) => $body,
            Container::Text($c) => $body,
            Container::Image($c) => $body,
            Container::Metafile($c) => $body,
            Container::Svg($c) => $body,
            Container::Emoji($c) => $body,
        }
    };
}

impl Container {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Line(_) => ContainerKind::Line,
            Container::Rectangle(_) => ContainerKind::Rectangle,
            Container::Ellipse(_) => ContainerKind::Ellipse,
            Container::Arrow(_) => ContainerKind::Arrow,
            Container::Freehand(_) => ContainerKind::Freehand,
            Container::Highlight(_) => ContainerKind::Highlight,
            Container::Obfuscate(_) => ContainerKind::Obfuscate,
            Container::Speechbubble(_) => ContainerKind::Speechbubble,
            Container::StepLabel(_) => ContainerKind::StepLabel,
            Container::Text(_) => ContainerKind::Text,
            Container::Image(_) => ContainerKind::Image,
            Container::Metafile(_) => ContainerKind::Metafile,
            Container::Svg(_) => ContainerKind::Svg,
            Container::Emoji(_) => ContainerKind::Emoji,
        }
    }

    pub fn bounds(&self) -> Bounds {
        each_container!(self, c => c.bounds())
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        each_container!(self, c => c.set_bounds(bounds))
    }

    pub fn fields(&self) -> &FieldSet {
        each_container!(self, c => c.fields())
    }

    pub fn fields_mut(&mut self) -> &mut FieldSet {
        each_container!(self, c => c.fields_mut())
    }

    /// Set a field, scoping it to this container's kind if it is new.
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<FieldValue>) {
        let scope = self.kind().scope();
        self.fields_mut().set(kind, scope, value);
    }

    /// Compare two containers the way a save and reload sees them: fields
    /// by [`FieldSet::same_values`], everything else structurally.
    pub fn same_content(&self, other: &Container) -> bool {
        if self.kind() != other.kind()
            || self.bounds() != other.bounds()
            || !self.fields().same_values(other.fields())
        {
            return false;
        }

        let mut a = self.clone();
        let mut b = other.clone();
        *a.fields_mut() = FieldSet::new();
        *b.fields_mut() = FieldSet::new();
        a == b
    }

    /// Set a field from a boxed editor value.
    ///
    /// Fails without touching the container if the value's type is not a
    /// supported field value type.
    pub fn set_field_dyn(&mut self, kind: FieldKind, value: &dyn Any) -> Result<()> {
        let scope = self.kind().scope();
        self.fields_mut().set_dyn(kind, scope, value)
    }
}
