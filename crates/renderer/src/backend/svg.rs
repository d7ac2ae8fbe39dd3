//! SVG document backend.

use std::fmt::Write;

use crate::error::RenderError;
use crate::scene::{Group, Hover, Line, Node, Rect, Scene, Stroke, Text};

use super::SceneBackend;

/// Writes a scene as a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    /// Emit a `<title>` per hoverable element (native tooltip)
    pub titles: bool,
    /// Emit a `:hover` stylesheet for highlight borders
    pub hover_css: bool,
    /// Emit `data-tooltip` and `data-highlight-*` attributes for scripts
    pub hover_attributes: bool,
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self {
            titles: true,
            hover_css: true,
            hover_attributes: false,
        }
    }
}

impl SvgBackend {
    /// Plain drawing with no hover support, used for rasterization.
    pub fn static_only() -> Self {
        Self {
            titles: false,
            hover_css: false,
            hover_attributes: false,
        }
    }

    /// Serialize the scene. Writing into a `String` cannot fail.
    pub fn to_svg_string(&self, scene: &Scene) -> String {
        let mut out = String::with_capacity(64 * 1024);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = num(scene.width),
            h = num(scene.height),
        );

        if self.hover_css {
            if let Some(hover) = first_hover(&scene.root) {
                let _ = writeln!(
                    out,
                    "<style>.cell:hover {{ stroke: {}; stroke-width: {}px; }}</style>",
                    hover.highlight.color.to_css(),
                    num(hover.highlight.width)
                );
            }
        }

        self.write_group(&mut out, &scene.root, 1);
        out.push_str("</svg>\n");
        out
    }

    fn write_group(&self, out: &mut String, group: &Group, depth: usize) {
        indent(out, depth);
        out.push_str("<g");
        write_opt_attr(out, "id", group.id.as_deref());
        write_opt_attr(out, "class", group.class.as_deref());
        if group.translate != (0.0, 0.0) {
            let _ = write!(
                out,
                r#" transform="translate({}, {})""#,
                num(group.translate.0),
                num(group.translate.1)
            );
        }
        out.push_str(">\n");

        for child in &group.children {
            match child {
                Node::Group(g) => self.write_group(out, g, depth + 1),
                Node::Rect(r) => self.write_rect(out, r, depth + 1),
                Node::Text(t) => write_text(out, t, depth + 1),
                Node::Line(l) => write_line(out, l, depth + 1),
            }
        }

        indent(out, depth);
        out.push_str("</g>\n");
    }

    fn write_rect(&self, out: &mut String, rect: &Rect, depth: usize) {
        indent(out, depth);
        out.push_str("<rect");
        write_opt_attr(out, "id", rect.id.as_deref());
        write_opt_attr(out, "class", rect.class.as_deref());
        for (key, value) in &rect.data {
            write_attr(out, &format!("data-{}", key), value);
        }
        let _ = write!(
            out,
            r#" x="{}" y="{}" width="{}" height="{}""#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height)
        );
        match &rect.fill {
            Some(fill) => write_attr(out, "fill", &fill.to_css()),
            None => write_attr(out, "fill", "none"),
        }
        if let Some(stroke) = &rect.stroke {
            write_stroke(out, stroke);
        }
        if let (Some(hover), true) = (&rect.hover, self.hover_attributes) {
            write_hover_attributes(out, hover);
        }

        match (&rect.hover, self.titles) {
            (Some(hover), true) => {
                out.push_str("><title>");
                out.push_str(&escape(&hover.tooltip));
                out.push_str("</title></rect>\n");
            }
            _ => out.push_str("/>\n"),
        }
    }
}

impl SceneBackend for SvgBackend {
    type Output = String;

    fn render(&self, scene: &Scene) -> Result<String, RenderError> {
        Ok(self.to_svg_string(scene))
    }
}

fn write_hover_attributes(out: &mut String, hover: &Hover) {
    write_attr(out, "data-tooltip", &hover.tooltip);
    write_attr(out, "data-highlight-color", &hover.highlight.color.to_css());
    write_attr(out, "data-highlight-width", &num(hover.highlight.width));
}

fn write_text(out: &mut String, text: &Text, depth: usize) {
    indent(out, depth);
    out.push_str("<text");
    write_opt_attr(out, "id", text.id.as_deref());
    let _ = write!(out, r#" x="{}" y="{}""#, num(text.x), num(text.y));
    if text.dy != 0.0 {
        let _ = write!(out, r#" dy="{}em""#, num(text.dy));
    }
    let _ = write!(
        out,
        r#" font-size="{}px" text-anchor="{}""#,
        num(text.font_size),
        text.anchor.as_str()
    );
    if let Some(fill) = &text.fill {
        write_attr(out, "fill", &fill.to_css());
    }
    out.push('>');
    out.push_str(&escape(&text.content));
    out.push_str("</text>\n");
}

fn write_line(out: &mut String, line: &Line, depth: usize) {
    indent(out, depth);
    out.push_str("<line");
    write_opt_attr(out, "class", line.class.as_deref());
    let _ = write!(
        out,
        r#" x1="{}" y1="{}" x2="{}" y2="{}""#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2)
    );
    write_stroke(out, &line.stroke);
    out.push_str("/>\n");
}

fn write_stroke(out: &mut String, stroke: &Stroke) {
    write_attr(out, "stroke", &stroke.color.to_css());
    write_attr(out, "stroke-width", &num(stroke.width));
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {}="{}""#, name, escape(value));
}

fn write_opt_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        write_attr(out, name, value);
    }
}

fn first_hover(group: &Group) -> Option<&Hover> {
    group.children.iter().find_map(|node| match node {
        Node::Rect(rect) => rect.hover.as_ref(),
        Node::Group(g) => first_hover(g),
        _ => None,
    })
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Compact number formatting: integers without a fraction, everything else
/// with at most four decimals.
pub(crate) fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape XML special characters in text and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num() {
        assert_eq!(num(900.0), "900");
        assert_eq!(num(3.448275862), "3.4483");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(-0.00001), "0");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
