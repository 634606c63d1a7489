//! Aspect-ratio-preserving resize of an SVG's root `width`/`height`.

use crate::svg::document::SvgDocument;
use crate::svg::error::Result;
use crate::svg::viewbox::ViewBox;

/// Target dimensions requested by the caller. `None` and zero both mean
/// "not requested".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestedSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl RequestedSize {
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    pub fn width(width: f64) -> Self {
        Self::new(Some(width), None)
    }

    pub fn height(height: f64) -> Self {
        Self::new(None, Some(height))
    }

    fn requested_width(&self) -> Option<f64> {
        self.width.filter(|w| *w != 0.0)
    }

    fn requested_height(&self) -> Option<f64> {
        self.height.filter(|h| *h != 0.0)
    }
}

/// Compute `(width, height)` for a document with the given `viewBox`.
///
/// A requested width wins over a requested height; the other side follows
/// the viewBox aspect ratio. With neither requested the viewBox size is used.
pub fn fit_dimensions(view_box: &ViewBox, size: RequestedSize) -> (f64, f64) {
    let (raw_w, raw_h) = (view_box.width, view_box.height);

    if let Some(width) = size.requested_width() {
        (width, (raw_h / raw_w) * width)
    } else if let Some(height) = size.requested_height() {
        ((raw_w / raw_h) * height, height)
    } else {
        (raw_w, raw_h)
    }
}

/// Resize SVG markup.
///
/// Returns the input unchanged when the root has no usable `viewBox`.
/// Fails only when the markup is not a well-formed SVG document.
pub fn resize_svg(text: &str, size: RequestedSize) -> Result<String> {
    let mut document = SvgDocument::parse(text)?;

    let Some(raw_view_box) = document.root().view_box_attr() else {
        tracing::debug!("No viewBox on root element, returning original");
        return Ok(text.to_string());
    };

    let view_box = match ViewBox::parse(raw_view_box) {
        Some(vb) if vb.has_usable_size() => vb,
        _ => {
            tracing::debug!(view_box = %raw_view_box, "Unusable viewBox, returning original");
            return Ok(text.to_string());
        }
    };

    let (width, height) = fit_dimensions(&view_box, size);
    tracing::debug!(
        raw_width = view_box.width,
        raw_height = view_box.height,
        width,
        height,
        "Resizing SVG"
    );

    document.root_mut().set_size(width, height);
    document.to_svg_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn root_size(svg: &str) -> (f64, f64) {
        let doc = SvgDocument::parse(svg).unwrap();
        let w = doc.root().width().unwrap().parse().unwrap();
        let h = doc.root().height().unwrap().parse().unwrap();
        (w, h)
    }

    #[test]
    fn test_width_scenario() {
        let out = resize_svg(r#"<svg viewBox="0 0 100 50"></svg>"#, RequestedSize::width(200.0))
            .unwrap();
        assert_eq!(out, r#"<svg viewBox="0 0 100 50" width="200" height="100"></svg>"#);
    }

    #[test]
    fn test_width_keeps_aspect_ratio() {
        for (w, h, n) in [(100.0, 50.0, 37.0), (3.0, 7.0, 11.5), (1920.0, 1080.0, 64.0)] {
            let svg = format!(r#"<svg viewBox="0 0 {w} {h}"/>"#);
            let (out_w, out_h) = root_size(&resize_svg(&svg, RequestedSize::width(n)).unwrap());
            assert_eq!(out_w, n);
            assert!((out_h - (h / w) * n).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_height_keeps_aspect_ratio() {
        let svg = r#"<svg viewBox="10 10 300 120"><rect/></svg>"#;
        let (out_w, out_h) = root_size(&resize_svg(svg, RequestedSize::height(60.0)).unwrap());
        assert_eq!(out_h, 60.0);
        assert!((out_w - 150.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_width_wins_over_height() {
        let svg = r#"<svg viewBox="0 0 100 50"/>"#;
        let out = resize_svg(svg, RequestedSize::new(Some(10.0), Some(999.0))).unwrap();
        assert_eq!(root_size(&out), (10.0, 5.0));
    }

    #[test]
    fn test_no_request_uses_view_box_size() {
        let svg = r#"<svg viewBox="0 0 30 20" width="1" height="1"/>"#;
        let out = resize_svg(svg, RequestedSize::default()).unwrap();
        assert_eq!(out, r#"<svg viewBox="0 0 30 20" width="30" height="20"/>"#);
    }

    #[test]
    fn test_zero_counts_as_absent() {
        let svg = r#"<svg viewBox="0 0 100 50"/>"#;
        let out = resize_svg(svg, RequestedSize::new(Some(0.0), Some(25.0))).unwrap();
        assert_eq!(root_size(&out), (50.0, 25.0));
    }

    #[test]
    fn test_missing_view_box_is_byte_identical() {
        let svg = "<svg  width='10'   height=\"10\">\n  <circle r='4'/>\n</svg>";
        assert_eq!(resize_svg(svg, RequestedSize::width(200.0)).unwrap(), svg);
    }

    #[test]
    fn test_unusable_view_box_is_byte_identical() {
        for vb in ["0 0 0 50", "0 0 100 0", "0 0 x 50", "0 0 100", ""] {
            let svg = format!("<svg viewBox='{vb}'  id='a'></svg>");
            assert_eq!(resize_svg(&svg, RequestedSize::width(200.0)).unwrap(), svg);
        }
    }

    #[test]
    fn test_idempotent() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 48"><path d="M0 0h1"/></svg>"#;
        let size = RequestedSize::height(30.0);
        let once = resize_svg(svg, size).unwrap();
        let twice = resize_svg(&once, size).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_still_fails_without_view_box() {
        assert!(resize_svg("<svg><g></svg>", RequestedSize::default()).is_err());
        assert!(resize_svg("<div viewBox=\"0 0 1 1\"/>", RequestedSize::default()).is_err());
    }

    #[test]
    fn test_output_stays_well_formed_with_quoted_values() {
        let svg = r#"<svg viewBox="0 0 100 50" data-label='say "hi"'></svg>"#;
        let out = resize_svg(svg, RequestedSize::width(200.0)).unwrap();
        let doc = SvgDocument::parse(&out).unwrap();
        assert_eq!(doc.root().attribute("data-label"), Some("say &quot;hi&quot;"));
        assert_eq!(root_size(&out), (200.0, 100.0));
    }

    #[test]
    fn test_children_untouched() {
        let svg = r#"<svg viewBox="0 0 2 1"><g width="5" height="5"><![CDATA[x < y]]></g></svg>"#;
        let out = resize_svg(svg, RequestedSize::width(4.0)).unwrap();
        assert!(out.ends_with(r#"><g width="5" height="5"><![CDATA[x < y]]></g></svg>"#));
        assert!(out.starts_with(r#"<svg viewBox="0 0 2 1" width="4" height="2">"#));
    }
}
