/// Intent events handled by the content widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentIntent {
    Select(&'static str),
}

/// Effect events produced by the content reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentEffect {
    /// A known category became the current page.
    CategorySelected,
}

/// Content event stream routed through the app update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentEvent {
    Intent(ContentIntent),
    Effect(ContentEffect),
}
