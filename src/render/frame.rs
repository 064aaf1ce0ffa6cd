use crate::core::{PointF, RectF};
use crate::error::{PrintError, PrintResult};
use crate::render::{Color, Font, Pen, TextAlign};

/// One recorded drawing call, already mapped to device coordinates.
///
/// `clip` is the device clip region active when the call was made.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: RectF,
        color: Color,
        clip: Option<RectF>,
    },
    StrokeRect {
        rect: RectF,
        pen: Pen,
        clip: Option<RectF>,
    },
    Line {
        from: PointF,
        to: PointF,
        pen: Pen,
        clip: Option<RectF>,
    },
    Text {
        rect: RectF,
        text: String,
        align: TextAlign,
        font: Font,
        color: Color,
        clip: Option<RectF>,
    },
}

impl PaintCommand {
    #[must_use]
    pub fn clip(&self) -> Option<RectF> {
        match self {
            PaintCommand::FillRect { clip, .. }
            | PaintCommand::StrokeRect { clip, .. }
            | PaintCommand::Line { clip, .. }
            | PaintCommand::Text { clip, .. } => *clip,
        }
    }

    pub fn validate(&self) -> PrintResult<()> {
        match self {
            PaintCommand::FillRect { rect, color, .. } => {
                validate_rect(*rect)?;
                color.validate()
            }
            PaintCommand::StrokeRect { rect, pen, .. } => {
                validate_rect(*rect)?;
                validate_pen(*pen)
            }
            PaintCommand::Line { from, to, pen, .. } => {
                if !from.x.is_finite()
                    || !from.y.is_finite()
                    || !to.x.is_finite()
                    || !to.y.is_finite()
                {
                    return Err(PrintError::InvalidData(
                        "line coordinates must be finite".to_owned(),
                    ));
                }
                validate_pen(*pen)
            }
            PaintCommand::Text {
                rect, font, color, ..
            } => {
                validate_rect(*rect)?;
                if !font.point_size.is_finite() || font.point_size <= 0.0 {
                    return Err(PrintError::InvalidData(
                        "font size must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()
            }
        }
    }
}

fn validate_rect(rect: RectF) -> PrintResult<()> {
    if !rect.x.is_finite()
        || !rect.y.is_finite()
        || !rect.width.is_finite()
        || !rect.height.is_finite()
    {
        return Err(PrintError::InvalidData(
            "rectangle coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn validate_pen(pen: Pen) -> PrintResult<()> {
    if !pen.width.is_finite() || pen.width < 0.0 {
        return Err(PrintError::InvalidData(
            "pen width must be finite and >= 0".to_owned(),
        ));
    }
    pen.color.validate()
}

/// Ordered drawing calls captured from one print pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintFrame {
    pub commands: Vec<PaintCommand>,
}

impl PrintFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PaintCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, other: PrintFrame) {
        self.commands.extend(other.commands);
    }

    pub fn validate(&self) -> PrintResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, RectF)> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Text { text, rect, .. } => Some((text.as_str(), *rect)),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (RectF, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::FillRect { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn outlines(&self) -> impl Iterator<Item = (RectF, Pen)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::StrokeRect { rect, pen, .. } => Some((*rect, *pen)),
            _ => None,
        })
    }
}
