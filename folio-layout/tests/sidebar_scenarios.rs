use folio_layout::{
    Breakpoint, LayoutController, LayoutEvent, ViewportClass,
    ViewportClassifier, backdrop_visible,
};

struct Harness {
    viewport: ViewportClassifier,
    layout: LayoutController,
}

impl Harness {
    fn mount(width: f32) -> Self {
        let viewport = ViewportClassifier::new(Breakpoint::default(), width);
        let layout = LayoutController::initialize(&viewport);
        Self { viewport, layout }
    }

    fn resize(&mut self, width: f32) {
        if let Some(class) = self.viewport.observe(width) {
            self.layout.on_viewport_class_change(class.is_mobile());
        }
    }

    fn backdrop(&self) -> bool {
        backdrop_visible(self.layout.is_open(), self.layout.class())
    }
}

#[test]
fn given_mobile_mount_when_toggle_then_backdrop_click_then_sidebar_opens_and_closes()
 {
    let mut harness = Harness::mount(375.0);
    assert!(!harness.layout.is_open());
    assert!(!harness.backdrop());

    harness.layout.toggle();
    assert!(harness.layout.is_open());
    assert!(harness.backdrop());

    harness.layout.toggle();
    assert!(!harness.layout.is_open());
    assert!(!harness.backdrop());
}

#[test]
fn given_desktop_mount_when_resized_to_mobile_then_sidebar_closes_without_toggle()
 {
    let mut harness = Harness::mount(1440.0);
    assert!(harness.layout.is_open());
    assert!(!harness.backdrop());

    harness.resize(1000.0);
    assert!(harness.layout.is_open());

    harness.resize(640.0);
    assert!(!harness.layout.is_open());
    assert_eq!(harness.layout.class(), ViewportClass::Mobile);
}

#[test]
fn given_open_mobile_sidebar_when_resized_to_desktop_then_it_stays_open_without_backdrop()
 {
    let mut harness = Harness::mount(480.0);
    harness.layout.toggle();
    assert!(harness.backdrop());

    harness.resize(1280.0);
    assert!(harness.layout.is_open());
    assert!(!harness.backdrop());

    harness.layout.toggle();
    harness.layout.toggle();
    assert!(!harness.backdrop());
}

#[test]
fn given_user_toggle_when_breakpoint_is_crossed_then_toggle_is_discarded() {
    let mut harness = Harness::mount(1280.0);
    harness.layout.toggle();
    assert!(!harness.layout.is_open());

    harness.resize(700.0);
    harness.resize(1300.0);

    assert!(harness.layout.is_open());
}

#[test]
fn given_toggle_and_crossing_in_same_pass_when_settled_then_flag_matches_new_class()
 {
    for (mount, crossing) in [
        (1280.0, ViewportClass::Mobile),
        (480.0, ViewportClass::Desktop),
    ] {
        let mut harness = Harness::mount(mount);

        harness.layout.enqueue(LayoutEvent::Toggled);
        harness
            .layout
            .enqueue(LayoutEvent::ViewportClassChanged(crossing));
        harness.layout.enqueue(LayoutEvent::Toggled);
        harness.layout.settle();

        assert_eq!(harness.layout.is_open(), !crossing.is_mobile());
    }
}
