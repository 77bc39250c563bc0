//! Keeping the session history in step with navigations.

use super::NavigationFlags;
use wayfarer_core::{History, HistoryState, Params, RouteKey};

/// What happened to the history for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryWrite {
    Pushed,
    Replaced,
    Skipped,
}

/// Record a navigation to `key` at `url`.
///
/// Navigations replaying a history entry write nothing; the entry is
/// already there.
pub(crate) fn synchronize<H: History>(
    history: &H,
    key: &RouteKey,
    params: &Params,
    url: &str,
    flags: NavigationFlags,
) -> HistoryWrite {
    if flags.contains(NavigationFlags::FROM_HISTORY_POP) {
        return HistoryWrite::Skipped;
    }

    let state = HistoryState {
        route_id: key.id().to_string(),
        params: params.clone(),
        fallback: key.is_fallback(),
    };
    if flags.contains(NavigationFlags::REPLACE_HISTORY) {
        history.replace_state(&state, url);
        HistoryWrite::Replaced
    } else {
        history.push_state(&state, url);
        HistoryWrite::Pushed
    }
}
