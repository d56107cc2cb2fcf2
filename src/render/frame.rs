use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{ImagePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// One draw call against the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Line(LinePrimitive),
    Image(ImagePrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
            Self::Line(line) => line.validate(),
            Self::Image(image) => image.validate(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Commands are kept in emission order; backends paint them front to back so
/// later commands cover earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub canvas: CanvasSize,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push_line(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push_text(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push_rect(rect);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: ImagePrimitive) -> Self {
        self.push_image(image);
        self
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_image(&mut self, image: ImagePrimitive) {
        self.commands.push(DrawCommand::Image(image));
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Image(image) => Some(image),
            _ => None,
        })
    }

    #[must_use]
    pub fn counts(&self) -> FrameCounts {
        let mut counts = FrameCounts::default();
        for command in &self.commands {
            match command {
                DrawCommand::Rect(_) => counts.rects += 1,
                DrawCommand::Text(_) => counts.texts += 1,
                DrawCommand::Line(_) => counts.lines += 1,
                DrawCommand::Image(_) => counts.images += 1,
            }
        }
        counts
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "invalid canvas size: width={}, height={}",
                self.canvas.width, self.canvas.height
            )));
        }

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Number of commands per primitive kind in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCounts {
    pub rects: usize,
    pub texts: usize,
    pub lines: usize,
    pub images: usize,
}

#[cfg(test)]
mod tests {
    use super::{FrameCounts, RenderFrame};
    use crate::core::CanvasSize;
    use crate::render::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn builder_keeps_emission_order_and_counts_kinds() {
        let frame = RenderFrame::new(CanvasSize::new(100.0, 50.0))
            .with_text(TextPrimitive::new(
                "title",
                0.0,
                10.0,
                12.0,
                Color::BLACK,
                TextHAlign::Left,
            ))
            .with_rect(RectPrimitive::new(0.0, 0.0, 10.0, 10.0, Color::WHITE))
            .with_line(LinePrimitive::new(0.0, 0.0, 0.0, 10.0, 1.0, Color::BLACK));

        frame.validate().expect("valid frame");
        assert_eq!(
            frame.counts(),
            FrameCounts {
                rects: 1,
                texts: 1,
                lines: 1,
                images: 0,
            }
        );
        assert_eq!(frame.texts().next().map(|t| t.text.as_str()), Some("title"));
    }

    #[test]
    fn zero_height_canvas_is_rejected() {
        let frame = RenderFrame::new(CanvasSize::new(100.0, 0.0));
        assert!(frame.validate().is_err());
    }
}
