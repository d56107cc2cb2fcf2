use std::fmt::Write as _;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawCommand, ImagePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

/// Renderer that serializes each frame into a standalone SVG document.
///
/// The last rendered document is kept until the next `render` call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// SVG text of the last rendered frame; empty before the first render.
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = frame_to_svg(frame).map_err(|err| {
            ChartError::Backend(format!("failed to serialize svg document: {err}"))
        })?;
        debug!(
            bytes = self.document.len(),
            commands = frame.commands.len(),
            "svg document rendered"
        );
        Ok(())
    }
}

fn frame_to_svg(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" class="chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.canvas.width,
        h = frame.canvas.height,
    )?;

    for command in &frame.commands {
        match command {
            DrawCommand::Rect(rect) => write_rect(&mut out, rect)?,
            DrawCommand::Text(text) => write_text(&mut out, text)?,
            DrawCommand::Line(line) => write_line(&mut out, line)?,
            DrawCommand::Image(image) => write_image(&mut out, image)?,
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    out.push_str("<rect");
    if let Some(id) = &rect.id {
        write!(out, r#" id="{}""#, escape_xml(id))?;
    }
    write!(
        out,
        r#" x="{}" y="{}" width="{}" height="{}""#,
        rect.x, rect.y, rect.width, rect.height
    )?;
    match rect.fill_color {
        Some(fill) => write_paint_attr(out, "fill", fill)?,
        None => out.push_str(r#" fill="none""#),
    }
    if rect.border_width > 0.0 {
        write_paint_attr(out, "stroke", rect.border_color)?;
        write!(out, r#" stroke-width="{}""#, rect.border_width)?;
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}""#,
        text.x, text.y, text.font_size_px
    )?;
    out.push_str(match text.h_align {
        TextHAlign::Left => r#" text-anchor="start""#,
        TextHAlign::Center => r#" text-anchor="middle""#,
        TextHAlign::Right => r#" text-anchor="end""#,
    });
    write_paint_attr(out, "fill", text.color)?;
    out.push('>');
    out.push_str(&escape_xml(&text.text));
    out.push_str("</text>\n");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
        line.x1, line.y1, line.x2, line.y2, line.stroke_width
    )?;
    write_paint_attr(out, "stroke", line.color)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_image(out: &mut String, image: &ImagePrimitive) -> std::fmt::Result {
    let href = escape_xml(&image.href);
    writeln!(
        out,
        r#"<image href="{href}" xlink:href="{href}" x="{}" y="{}" width="{}" height="{}"/>"#,
        image.x, image.y, image.width, image.height
    )
}

fn write_paint_attr(out: &mut String, attr: &str, color: Color) -> std::fmt::Result {
    write!(out, r#" {attr}="{}""#, color.to_hex())?;
    if color.alpha < 1.0 {
        write!(out, r#" {attr}-opacity="{}""#, color.alpha)?;
    }
    Ok(())
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
