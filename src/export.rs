//! Export of a design to procedural drawing code.
//!
//! Generates a standalone Python script targeting the ReportLab canvas API:
//! a single `render(path, data)` function that draws every element in
//! z-order and substitutes placeholder values out of `data`. Element
//! geometry is already in points, so the only transform the exporter owns is
//! flipping the y-axis from the designer's top-left origin to PDF's
//! bottom-left origin.

use crate::document::Design;
use crate::types::ElementContent;

/// Generate the complete drawing script for a design.
pub fn generate_script(design: &Design) -> String {
    let page_width = design.page.width;
    let page_height = design.page.height;

    let mut out = String::new();
    out.push_str("#!/usr/bin/env python3\n");
    out.push_str("\"\"\"Drawing script generated by Pagecraft.\"\"\"\n\n");
    out.push_str("import base64\n");
    out.push_str("from io import BytesIO\n\n");
    out.push_str("from reportlab.lib.colors import HexColor\n");
    out.push_str("from reportlab.lib.utils import ImageReader\n");
    out.push_str("from reportlab.pdfgen.canvas import Canvas\n\n");
    out.push_str(&format!("PAGE_WIDTH = {page_width}\n"));
    out.push_str(&format!("PAGE_HEIGHT = {page_height}\n\n"));

    let labels = design.placeholder_labels();
    out.push_str("PLACEHOLDERS = [");
    out.push_str(
        &labels
            .iter()
            .map(|label| py_string_literal(label))
            .collect::<Vec<_>>()
            .join(", "),
    );
    out.push_str("]\n\n\n");

    out.push_str("def render(path, data=None):\n");
    out.push_str("    \"\"\"Draw the document to `path`, filling placeholders from `data`.\"\"\"\n");
    out.push_str("    data = data or {}\n");
    out.push_str("    c = Canvas(path, pagesize=(PAGE_WIDTH, PAGE_HEIGHT))\n");

    for element in &design.elements {
        let (x, y) = element.position;
        let translucent = element.opacity < 1.0;

        out.push_str(&format!(
            "    # {} element {}\n",
            element.content.kind_label().to_lowercase(),
            element.id
        ));
        if translucent {
            out.push_str("    c.saveState()\n");
            out.push_str(&format!("    c.setFillAlpha({})\n", element.opacity));
            out.push_str(&format!("    c.setStrokeAlpha({})\n", element.opacity));
        }

        match &element.content {
            ElementContent::Text {
                text,
                font_family,
                font_size,
                color,
            } => {
                // Baseline sits one font size below the element's top edge.
                let baseline = page_height - y - font_size;
                out.push_str(&format!(
                    "    c.setFont({}, {font_size})\n",
                    py_string_literal(font_family)
                ));
                out.push_str(&format!(
                    "    c.setFillColor(HexColor({}))\n",
                    py_string_literal(color)
                ));
                out.push_str(&format!(
                    "    c.drawString({x}, {baseline}, {})\n",
                    py_string_literal(text)
                ));
            }
            ElementContent::Image { data } => {
                let bottom = page_height - y - element.height;
                out.push_str(&format!(
                    "    image = ImageReader(BytesIO(base64.b64decode({})))\n",
                    py_string_literal(&data.to_base64())
                ));
                out.push_str(&format!(
                    "    c.drawImage(image, {x}, {bottom}, width={}, height={}, mask=\"auto\")\n",
                    element.width, element.height
                ));
            }
            ElementContent::Line {
                end,
                stroke_width,
                stroke_color,
            } => {
                let (x2, y2) = *end;
                let flipped_y1 = page_height - y;
                let flipped_y2 = page_height - y2;
                out.push_str(&format!("    c.setLineWidth({stroke_width})\n"));
                out.push_str(&format!(
                    "    c.setStrokeColor(HexColor({}))\n",
                    py_string_literal(stroke_color)
                ));
                out.push_str(&format!(
                    "    c.line({x}, {flipped_y1}, {x2}, {flipped_y2})\n"
                ));
            }
            ElementContent::Placeholder {
                label,
                font_family,
                font_size,
                color,
            } => {
                let baseline = page_height - y - font_size;
                out.push_str(&format!(
                    "    c.setFont({}, {font_size})\n",
                    py_string_literal(font_family)
                ));
                out.push_str(&format!(
                    "    c.setFillColor(HexColor({}))\n",
                    py_string_literal(color)
                ));
                out.push_str(&format!(
                    "    c.drawString({x}, {baseline}, str(data.get({}, \"\")))\n",
                    py_string_literal(label)
                ));
            }
        }

        if translucent {
            out.push_str("    c.restoreState()\n");
        }
    }

    out.push_str("    c.showPage()\n");
    out.push_str("    c.save()\n\n\n");
    out.push_str("if __name__ == \"__main__\":\n");
    out.push_str("    import sys\n\n");
    out.push_str("    render(sys.argv[1] if len(sys.argv) > 1 else \"output.pdf\")\n");
    out
}

/// Quote a string as a Python double-quoted literal.
fn py_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}
