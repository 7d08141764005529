use crate::model::*;

/// Millimetres per typographic point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

fn escape_attr(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
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

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn fmt_f64(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn push_num(out: &mut String, key: &str, value: f64) {
    push_attr(out, key, &fmt_f64(value));
}

fn write_style(out: &mut String, style: &Style) {
    push_attr(out, "fill", &style.fill);
    push_attr(out, "stroke", &style.stroke);
    push_num(out, "stroke-width", style.stroke_width * MM_PER_PT);
}

struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    fn x(&self, x: f64) -> f64 {
        x * self.width
    }

    fn y(&self, y: f64) -> f64 {
        (1.0 - y) * self.height
    }
}

fn write_shape(out: &mut String, frame: &Frame, shape: &Shape, level: usize) {
    push_indent(out, level);
    match shape {
        Shape::Rect {
            lower_left,
            width,
            height,
            style,
        } => {
            out.push_str("<rect");
            push_num(out, "x", frame.x(lower_left.x));
            push_num(out, "y", frame.y(lower_left.y + height));
            push_num(out, "width", width * frame.width);
            push_num(out, "height", height * frame.height);
            write_style(out, style);
            out.push_str("/>\n");
        }
        Shape::Ellipse {
            center,
            width,
            height,
            style,
        } => {
            out.push_str("<ellipse");
            push_num(out, "cx", frame.x(center.x));
            push_num(out, "cy", frame.y(center.y));
            push_num(out, "rx", width * frame.width / 2.0);
            push_num(out, "ry", height * frame.height / 2.0);
            write_style(out, style);
            out.push_str("/>\n");
        }
        Shape::Text {
            at,
            content,
            font_size,
            baseline,
        } => {
            out.push_str("<text");
            push_num(out, "x", frame.x(at.x));
            push_num(out, "y", frame.y(at.y));
            push_num(out, "font-size", font_size * MM_PER_PT);
            push_attr(out, "text-anchor", "middle");
            if let Baseline::Central = baseline {
                push_attr(out, "dominant-baseline", "central");
            }
            out.push('>');
            out.push_str(&escape_attr(content));
            out.push_str("</text>\n");
        }
    }
}

/// Serialises a page as a standalone SVG document with millimetre user units.
pub fn write_page(page: &Page) -> String {
    let frame = Frame {
        width: page.width_mm,
        height: page.height_mm,
    };

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<svg");
    push_attr(&mut out, "xmlns", "http://www.w3.org/2000/svg");
    push_attr(&mut out, "width", &format!("{}mm", fmt_f64(page.width_mm)));
    push_attr(&mut out, "height", &format!("{}mm", fmt_f64(page.height_mm)));
    push_attr(
        &mut out,
        "viewBox",
        &format!("0 0 {} {}", fmt_f64(page.width_mm), fmt_f64(page.height_mm)),
    );
    push_attr(&mut out, "font-family", &page.font_family);
    out.push_str(">\n");

    push_indent(&mut out, 1);
    out.push_str("<title>");
    out.push_str(&escape_attr(&page.title));
    out.push_str("</title>\n");

    for shape in page.shapes() {
        write_shape(&mut out, &frame, shape, 1);
    }

    out.push_str("</svg>\n");
    out
}
