use iced::Task;

use super::event::{ContentEffect, ContentEvent, ContentIntent};
use super::state::ContentState;
use crate::catalog;

/// Reduce a content intent into state updates and effects.
pub(super) fn reduce(
    state: &mut ContentState,
    intent: ContentIntent,
) -> Task<ContentEvent> {
    match intent {
        ContentIntent::Select(name) => {
            if catalog::find(name).is_none() {
                log::warn!("ignoring selection of unknown category {name}");
                return Task::none();
            }

            state.select(name);
            Task::done(ContentEvent::Effect(ContentEffect::CategorySelected))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentIntent, ContentState, reduce};
    use crate::catalog::DEFAULT_CATEGORY;

    #[test]
    fn given_new_state_when_created_then_default_category_is_selected() {
        assert_eq!(ContentState::default().selected(), DEFAULT_CATEGORY);
    }

    #[test]
    fn given_known_category_when_selected_then_page_switches() {
        let mut state = ContentState::default();

        let _ = reduce(&mut state, ContentIntent::Select("rust"));
        assert_eq!(state.selected(), DEFAULT_CATEGORY);

        let _ = reduce(&mut state, ContentIntent::Select("docker"));
        assert_eq!(state.selected(), "docker");
    }

    #[test]
    fn given_selected_category_when_home_requested_then_default_is_restored() {
        let mut state = ContentState::default();
        let _ = reduce(&mut state, ContentIntent::Select("python"));

        let _ = reduce(&mut state, ContentIntent::Select(DEFAULT_CATEGORY));

        assert_eq!(state.selected(), DEFAULT_CATEGORY);
    }
}
