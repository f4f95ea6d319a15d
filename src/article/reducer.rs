use crate::article::intent::ArticleIntent;
use crate::article::state::ArticleDetailState;
use crate::mvi::Reducer;

/// State machine: Idle --Loading--> Loading --Loaded--> Loaded, with
/// re-entrant Loading from any state and an explicit Failed terminal
/// transition so the loading flag is cleared on every path.
pub struct ArticleReducer;

impl Reducer for ArticleReducer {
    type State = ArticleDetailState;
    type Intent = ArticleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticleIntent::Loading => ArticleDetailState {
                is_loading: true,
                last_error: None,
                // Keep the previous load visible while the next one runs.
                ..state
            },
            ArticleIntent::Loaded(projection) => ArticleDetailState {
                is_loading: false,
                title: projection.title,
                author: projection.author,
                last_error: None,
            },
            ArticleIntent::Failed(reason) => ArticleDetailState {
                is_loading: false,
                last_error: Some(reason),
                ..state
            },
        }
    }
}
