//! Standalone HTML page backend with a live hover tooltip.

use crate::error::RenderError;
use crate::scene::Scene;

use super::svg::{escape, num, SvgBackend};
use super::SceneBackend;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body { font-family: sans-serif; }
  #{tooltip_id} {
    position: absolute;
    display: none;
    padding: 6px 8px;
    background: rgba(255, 255, 255, 0.95);
    border: 1px solid #333;
    border-radius: 4px;
    font-size: 12px;
    pointer-events: none;
  }
</style>
</head>
<body>
<h1>{heading}</h1>
{svg}<div id="{tooltip_id}"></div>
<script>
(function () {
  var tooltip = document.getElementById('{tooltip_id}');
  document.querySelectorAll('.cell').forEach(function (cell) {
    cell.addEventListener('mouseover', function (event) {
      var box = cell.getBoundingClientRect();
      tooltip.setAttribute('data-year', cell.getAttribute('data-year'));
      tooltip.textContent = cell.getAttribute('data-tooltip');
      tooltip.style.display = 'block';
      tooltip.style.left = (event.pageX + {offset_x}) + 'px';
      tooltip.style.top = (box.top + window.scrollY + {offset_y}) + 'px';
      cell.style.stroke = cell.getAttribute('data-highlight-color');
      cell.style.strokeWidth = cell.getAttribute('data-highlight-width') + 'px';
    });
    cell.addEventListener('mouseout', function () {
      tooltip.style.display = 'none';
      cell.style.stroke = 'none';
    });
  });
})();
</script>
</body>
</html>
"#;

/// Wraps the SVG drawing in a page that shows the scene's tooltip overlay
/// on pointer-enter and hides it on pointer-leave.
#[derive(Debug, Clone)]
pub struct HtmlBackend {
    /// Static page heading shown above the chart
    pub heading: String,
    /// Document title
    pub title: String,
}

impl Default for HtmlBackend {
    fn default() -> Self {
        Self {
            heading: "HeatMap".to_string(),
            title: "Global Land-Surface Temperature".to_string(),
        }
    }
}

impl SceneBackend for HtmlBackend {
    type Output = String;

    fn render(&self, scene: &Scene) -> Result<String, RenderError> {
        let svg = SvgBackend {
            titles: false,
            hover_css: false,
            hover_attributes: true,
        }
        .to_svg_string(scene);

        let title = escape(&self.title);
        let heading = escape(&self.heading);
        let tooltip_id = escape(&scene.tooltip.id);
        let offset_x = num(scene.tooltip.offset_x);
        let offset_y = num(scene.tooltip.offset_y);

        Ok(fill_template(
            PAGE_TEMPLATE,
            &[
                ("title", title.as_str()),
                ("heading", heading.as_str()),
                ("tooltip_id", tooltip_id.as_str()),
                ("offset_x", offset_x.as_str()),
                ("offset_y", offset_y.as_str()),
                ("svg", svg.as_str()),
            ],
        ))
    }
}

/// Substitute `{name}` placeholders in one pass over the template, so
/// substituted values are never rescanned. Unknown braces are copied as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let value = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
