//! SVG overlay document construction

use super::geometry::CaptionBox;
use super::layout::TextLine;

/// Escape the five XML-reserved characters so caller-controlled text cannot
/// inject markup into the overlay document.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Build the self-contained overlay document for one request.
///
/// The document is sized exactly to the base image so the raster engine can
/// composite it with a plain alpha-over blend. Text is bold sans-serif with a
/// drop shadow for legibility over busy imagery.
pub fn build_overlay(width: u32, height: u32, cbox: &CaptionBox, lines: &[TextLine]) -> String {
    let mut svg = format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    );

    svg.push_str(concat!(
        r#"<defs><filter id="shadow" x="-20%" y="-20%" width="140%" height="140%">"#,
        r#"<feDropShadow dx="2" dy="2" stdDeviation="2" flood-color="black" flood-opacity="0.8"/>"#,
        r#"</filter></defs>"#,
    ));

    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="black" opacity="0.6"/>"#,
        cbox.left,
        cbox.top,
        cbox.width,
        cbox.height,
        r = cbox.corner_radius,
    ));

    for line in lines {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="Arial, sans-serif" font-weight="bold" fill="white" filter="url(#shadow)">{}</text>"#,
            line.x,
            line.baseline_y,
            line.font_size,
            escape_xml(&line.content),
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(content: &str) -> TextLine {
        TextLine {
            content: content.to_string(),
            x: 60,
            baseline_y: 529,
            font_size: 28,
        }
    }

    #[test]
    fn escapes_exactly_the_five_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">&'b'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;b&apos;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("plain text 123"), "plain text 123");
    }

    #[test]
    fn document_is_sized_to_the_base_image() {
        let cbox = CaptionBox::for_image(800, 600);
        let svg = build_overlay(800, 600, &cbox, &[]);

        assert!(svg.starts_with(r#"<svg width="800" height="600""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn background_rect_matches_the_caption_box() {
        let cbox = CaptionBox::for_image(800, 600);
        let svg = build_overlay(800, 600, &cbox, &[]);

        assert!(svg.contains(
            r#"<rect x="20" y="430" width="760" height="150" rx="15" ry="15" fill="black" opacity="0.6"/>"#
        ));
    }

    #[test]
    fn caller_text_cannot_break_out_of_its_element() {
        let cbox = CaptionBox::for_image(800, 600);
        let svg = build_overlay(800, 600, &cbox, &[line(r#"</text><script>"1"</script>"#)]);

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;&quot;1&quot;&lt;/script&gt;"));
        // Still parses as a well-formed overlay.
        let opts = usvg::Options::default();
        assert!(usvg::Tree::from_data(svg.as_bytes(), &opts).is_ok());
    }

    #[test]
    fn lines_carry_their_own_font_size() {
        let cbox = CaptionBox::for_image(800, 600);
        let mut name = line("Alice");
        name.font_size = 36;
        name.baseline_y = 488;
        let svg = build_overlay(800, 600, &cbox, &[name, line("Hello")]);

        assert!(svg.contains(r#"<text x="60" y="488" font-size="36""#));
        assert!(svg.contains(r#"<text x="60" y="529" font-size="28""#));
    }
}
