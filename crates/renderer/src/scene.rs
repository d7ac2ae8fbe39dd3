//! Backend-independent description of a rendered chart.
//!
//! A [`Scene`] is a tree of groups, rectangles, text and lines in SVG-like
//! user units. Groups carry a translation that applies to their children.
//! Backends walk the tree; tests query it directly.

use heatmap_common::Color;

/// Complete chart: canvas size, element tree and the hover overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub root: Group,
    pub tooltip: Tooltip,
}

impl Scene {
    /// All nodes in document order (depth-first, parents before children).
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        collect(&self.root.children, &mut out);
        out
    }

    /// Every heatmap cell rectangle.
    pub fn cells(&self) -> Vec<&Rect> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                Node::Rect(rect) if rect.has_class("cell") => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// Group with the given id, searching the whole tree.
    pub fn group(&self, id: &str) -> Option<&Group> {
        if self.root.id.as_deref() == Some(id) {
            return Some(&self.root);
        }
        self.nodes().into_iter().find_map(|node| match node {
            Node::Group(group) if group.id.as_deref() == Some(id) => Some(group),
            _ => None,
        })
    }

    /// Text element with the given id.
    pub fn text(&self, id: &str) -> Option<&Text> {
        self.nodes().into_iter().find_map(|node| match node {
            Node::Text(text) if text.id.as_deref() == Some(id) => Some(text),
            _ => None,
        })
    }

    /// Color rectangles of the legend group.
    pub fn legend_rects(&self) -> Vec<&Rect> {
        self.group("legend")
            .map(|g| g.rects().collect())
            .unwrap_or_default()
    }

    /// Boundary labels of the legend group.
    pub fn legend_labels(&self) -> Vec<&Text> {
        self.group("legend")
            .map(|g| g.texts().collect())
            .unwrap_or_default()
    }
}

fn collect<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        out.push(node);
        if let Node::Group(group) = node {
            collect(&group.children, out);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Rect(Rect),
    Text(Text),
    Line(Line),
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Rect> for Node {
    fn from(rect: Rect) -> Self {
        Node::Rect(rect)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Line> for Node {
    fn from(line: Line) -> Self {
        Node::Line(line)
    }
}

/// Container translating its children by `translate`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub class: Option<String>,
    pub translate: (f64, f64),
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.translate = (x, y);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Direct child rectangles.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.children.iter().filter_map(|n| match n {
            Node::Rect(r) => Some(r),
            _ => None,
        })
    }

    /// Direct child text elements.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.children.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Direct child lines.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.children.iter().filter_map(|n| match n {
            Node::Line(l) => Some(l),
            _ => None,
        })
    }

    /// Direct child groups.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|n| match n {
            Node::Group(g) => Some(g),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn black(width: f64) -> Self {
        Self::new(Color::black(), width)
    }
}

/// Pointer-over behavior attached to a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    /// Text shown in the tooltip overlay
    pub tooltip: String,
    /// Border drawn while the pointer is over the element
    pub highlight: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub id: Option<String>,
    pub class: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    /// Inspectable metadata, emitted as `data-{key}` attributes
    pub data: Vec<(String, String)>,
    pub hover: Option<Hover>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: None,
            class: None,
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
            data: Vec::new(),
            hover: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.data.push((key.into(), value.to_string()));
        self
    }

    pub fn with_hover(mut self, hover: Hover) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    /// Value of a `data-{key}` attribute.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    /// Baseline shift in em
    pub dy: f64,
    pub content: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub fill: Option<Color>,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            id: None,
            x,
            y,
            dy: 0.0,
            content: content.into(),
            font_size: 10.0,
            anchor: TextAnchor::Start,
            fill: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn shifted(mut self, dy: f64) -> Self {
        self.dy = dy;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub class: Option<String>,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        Self {
            class: None,
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// The single overlay element shown while hovering a cell.
///
/// Placed at the pointer x plus `offset_x` and the hovered element's top
/// plus `offset_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub id: String,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            id: "tooltip".to_string(),
            offset_x: 10.0,
            offset_y: -40.0,
        }
    }
}
