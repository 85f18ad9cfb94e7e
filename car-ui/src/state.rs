//! Application state managed via Dioxus context.
//!
//! Each app bundles its reactive signals into one `Clone + Copy` struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<PlannerState>()` (or `SavedState`).

use crate::layers::QueryPin;
use car_core::alert::PollutionAlert;
use car_core::location::Location;
use car_core::pollution::PollutionReading;
use car_core::route::RouteOption;
use car_core::saved::SavedRoute;
use dioxus::prelude::*;

/// Lifecycle of the route calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalcPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

impl CalcPhase {
    /// Whether the form accepts a new submission in this phase. A failed
    /// calculation behaves like Idle here: the user may simply resubmit.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, CalcPhase::Loading)
    }
}

/// Supersession rule for calculate responses: only the completion matching
/// the most recently submitted sequence number may touch the route list.
/// There is no cancellation; a stale response is simply discarded.
pub fn response_is_current(latest_seq: u64, response_seq: u64) -> bool {
    latest_seq == response_seq
}

/// Which route a fresh response auto-selects: the first in backend order.
/// The backend sorts cleanest first and the frontend never re-sorts.
pub fn auto_selection(routes: &[RouteOption]) -> Option<String> {
    routes.first().map(|r| r.id.clone())
}

/// Whether a route-card click changes the selection. Re-selecting the
/// current route is a no-op; the caller skips the signal write so the
/// map effects do not re-fire.
pub fn selection_changes(current: Option<&str>, clicked: &str) -> bool {
    current != Some(clicked)
}

/// Kind of a dismissible banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A dismissible banner message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Banner messages plus the id counter they share with query pins.
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    pub notices: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            notices: Signal::new(Vec::new()),
            next_id: Signal::new(1),
        }
    }

    /// Claim the next unique id (notices and pins draw from one sequence).
    pub fn take_id(&mut self) -> u64 {
        let id = (self.next_id)();
        self.next_id.set(id + 1);
        id
    }

    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) {
        let id = self.take_id();
        self.notices.write().push(Notice {
            id,
            kind,
            text: text.into(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.write().retain(|notice| notice.id != id);
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state for the route planner app.
#[derive(Clone, Copy)]
pub struct PlannerState {
    /// Source endpoint of the form (unresolved until a place is picked)
    pub source: Signal<Location>,
    /// Destination endpoint of the form
    pub destination: Signal<Location>,
    /// Where the calculate request currently stands
    pub phase: Signal<CalcPhase>,
    /// Latest successfully loaded route list, in backend order
    pub routes: Signal<Vec<RouteOption>>,
    /// Id of the highlighted route, if any
    pub selected_route_id: Signal<Option<String>>,
    /// Sequence number of the most recent calculate submission
    pub calc_seq: Signal<u64>,
    /// Current conditions at the selected source
    pub conditions: Signal<Option<PollutionReading>>,
    /// Result of the one-shot health ping (None until it settles)
    pub backend_healthy: Signal<Option<bool>>,
    /// Heat approximation layer toggle
    pub show_heat: Signal<bool>,
    /// Click-to-query toggle
    pub query_mode: Signal<bool>,
    /// Pins dropped by the point-query tool
    pub query_pins: Signal<Vec<QueryPin>>,
    pub board: NoticeBoard,
}

impl PlannerState {
    pub fn new() -> Self {
        Self {
            source: Signal::new(Location::default()),
            destination: Signal::new(Location::default()),
            phase: Signal::new(CalcPhase::Idle),
            routes: Signal::new(Vec::new()),
            selected_route_id: Signal::new(None),
            calc_seq: Signal::new(0),
            conditions: Signal::new(None),
            backend_healthy: Signal::new(None),
            show_heat: Signal::new(false),
            query_mode: Signal::new(false),
            query_pins: Signal::new(Vec::new()),
            board: NoticeBoard::new(),
        }
    }

    /// Start a new calculate request, superseding any in flight. Returns
    /// the sequence number the completion must present.
    pub fn begin_calc(&mut self) -> u64 {
        let seq = (self.calc_seq)() + 1;
        self.calc_seq.set(seq);
        self.phase.set(CalcPhase::Loading);
        seq
    }

    /// Snapshot of the currently selected route.
    pub fn selected_route(&self) -> Option<RouteOption> {
        let selected_id = (self.selected_route_id)()?;
        self.routes
            .read()
            .iter()
            .find(|route| route.id == selected_id)
            .cloned()
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state for the saved routes app.
#[derive(Clone, Copy)]
pub struct SavedState {
    pub saved: Signal<Vec<SavedRoute>>,
    pub alerts: Signal<Vec<PollutionAlert>>,
    /// Pending flag for the saved-routes fetch
    pub loading_saved: Signal<bool>,
    /// Pending flag for the alerts fetch, independent of the one above
    pub loading_alerts: Signal<bool>,
    pub board: NoticeBoard,
}

impl SavedState {
    pub fn new() -> Self {
        Self {
            saved: Signal::new(Vec::new()),
            alerts: Signal::new(Vec::new()),
            loading_saved: Signal::new(true),
            loading_alerts: Signal::new(true),
            board: NoticeBoard::new(),
        }
    }

    /// The view shows its loading state until both fetches have settled.
    pub fn is_loading(&self) -> bool {
        (self.loading_saved)() || (self.loading_alerts)()
    }
}

impl Default for SavedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_core::route::PollutantLevels;

    fn route(id: &str, score: f64) -> RouteOption {
        RouteOption {
            id: id.to_string(),
            route_name: format!("route {id}"),
            distance_km: 10.0,
            duration_minutes: 15.0,
            pollution_score: score,
            waypoints: vec![],
            pollutant_levels: PollutantLevels::default(),
            recommendations: vec![],
            waypoint_details: None,
        }
    }

    #[test]
    fn test_only_loading_blocks_resubmission() {
        assert!(CalcPhase::Idle.accepts_submit());
        assert!(CalcPhase::Loaded.accepts_submit());
        assert!(CalcPhase::Error.accepts_submit());
        assert!(!CalcPhase::Loading.accepts_submit());
    }

    #[test]
    fn test_stale_responses_are_not_current() {
        // submissions 1 and 2 in flight; 2 is the live one
        assert!(!response_is_current(2, 1));
        assert!(response_is_current(2, 2));
        // a sequence from the future never matches either
        assert!(!response_is_current(2, 3));
    }

    #[test]
    fn test_auto_selection_takes_first_in_backend_order() {
        let routes = vec![route("r1", 25.0), route("r2", 60.0)];
        assert_eq!(auto_selection(&routes), Some("r1".to_string()));
        assert_eq!(auto_selection(&[]), None);
    }

    #[test]
    fn test_reselecting_the_current_route_changes_nothing() {
        assert!(!selection_changes(Some("r1"), "r1"));
        assert!(selection_changes(Some("r1"), "r2"));
        // the first selection always goes through
        assert!(selection_changes(None, "r1"));
    }
}
