use folio_layout::{PanelFrame, ViewportClass};

const DESKTOP_CONTENT_PADDING: f32 = 48.0;
const MOBILE_CONTENT_PADDING: f32 = 16.0;

/// Page padding around the content column.
pub(crate) fn content_padding(class: ViewportClass) -> f32 {
    match class {
        ViewportClass::Mobile => MOBILE_CONTENT_PADDING,
        ViewportClass::Desktop => DESKTOP_CONTENT_PADDING,
    }
}

/// Horizontal space the sidebar takes away from the page.
///
/// On mobile the panel overlays the page and reserves nothing.
pub(crate) fn sidebar_reserved_width(
    class: ViewportClass,
    frame: PanelFrame,
) -> f32 {
    match class {
        ViewportClass::Mobile => 0.0,
        ViewportClass::Desktop => frame.width.max(0.0),
    }
}

/// Width left for the page once the sidebar has taken its share.
pub(crate) fn content_width(
    window_width: f32,
    class: ViewportClass,
    frame: PanelFrame,
) -> f32 {
    (window_width - sidebar_reserved_width(class, frame)).max(0.0)
}

#[cfg(test)]
mod tests {
    use folio_layout::{PanelFrame, ViewportClass};

    use super::{content_padding, content_width};

    #[test]
    fn given_desktop_with_open_panel_when_sizing_then_content_shrinks_by_panel_width()
     {
        let width = content_width(
            1280.0,
            ViewportClass::Desktop,
            PanelFrame::expanded(240.0),
        );

        assert_eq!(width, 1040.0);
    }

    #[test]
    fn given_desktop_mid_transition_when_sizing_then_content_reflows_with_frame() {
        let frame = PanelFrame {
            width: 120.0,
            opacity: 0.5,
        };

        assert_eq!(content_width(1280.0, ViewportClass::Desktop, frame), 1160.0);
    }

    #[test]
    fn given_mobile_overlay_when_sizing_then_content_keeps_full_width() {
        let width = content_width(
            400.0,
            ViewportClass::Mobile,
            PanelFrame::expanded(240.0),
        );

        assert_eq!(width, 400.0);
    }

    #[test]
    fn given_panel_wider_than_window_when_sizing_then_width_is_clamped() {
        let width = content_width(
            100.0,
            ViewportClass::Desktop,
            PanelFrame::expanded(240.0),
        );

        assert_eq!(width, 0.0);
    }

    #[test]
    fn given_viewport_class_when_padding_then_mobile_is_tighter() {
        assert!(
            content_padding(ViewportClass::Mobile)
                < content_padding(ViewportClass::Desktop)
        );
    }
}
