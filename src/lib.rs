#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod capabilities;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

pub use app::App;
pub use capabilities::{Capabilities, Effect, StoreError};

/// Storage slot holding the serialized route.
pub const STATE_KEY: &str = "state";

/// Production lookup service. Overridable at build time.
pub const DEFAULT_BASE_URL: &str = "https://teremok.nerezidenti.org";

/// External voting-assistance site offered to in-country residents.
pub const ASSISTANCE_URL: &str = "https://votesmart.appspot.com";

#[must_use]
pub fn base_url() -> &'static str {
    option_env!("NEREZIDENTI_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// A selectable named entity returned by the lookup service: a constituent
/// region ("state") or a consular office. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

impl Subject {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

mod collation {
    use super::{Ordering, Subject};
    use icu_collator::{Collator, CollatorOptions, Strength};
    use icu_locid::locale;
    use std::sync::OnceLock;

    static COLLATORS: OnceLock<Option<(Collator, Collator)>> = OnceLock::new();

    fn collator(strength: Strength) -> Option<Collator> {
        let mut options = CollatorOptions::new();
        options.strength = Some(strength);
        Collator::try_new(&locale!("ru").into(), options).ok()
    }

    fn collators() -> Option<&'static (Collator, Collator)> {
        COLLATORS
            .get_or_init(|| Some((collator(Strength::Secondary)?, collator(Strength::Tertiary)?)))
            .as_ref()
    }

    /// Two-key comparator: case-insensitive collation of `name` first,
    /// case-sensitive collation as the tie-break. Total order even for names
    /// equal under the case-insensitive pass.
    #[must_use]
    pub fn compare_subjects(lhs: &Subject, rhs: &Subject) -> Ordering {
        match collators() {
            Some((primary, tiebreak)) => primary
                .compare(&lhs.name, &rhs.name)
                .then_with(|| tiebreak.compare(&lhs.name, &rhs.name)),
            // Compiled collation data failed to load; degrade to a
            // deterministic codepoint order rather than panic.
            None => lhs
                .name
                .to_lowercase()
                .cmp(&rhs.name.to_lowercase())
                .then_with(|| lhs.name.cmp(&rhs.name)),
        }
    }

    pub fn sort_subjects(subjects: &mut [Subject]) {
        subjects.sort_by(compare_subjects);
    }
}

pub use collation::{compare_subjects, sort_subjects};

/// Decodes a lookup response body: a JSON object mapping id to display name.
/// Non-string values are tolerated and coerced to their JSON text.
pub fn decode_subjects(body: &[u8]) -> Result<Vec<Subject>, LookupError> {
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(body).map_err(|e| LookupError::Decode {
            message: e.to_string(),
        })?;

    let mut subjects: Vec<Subject> = entries
        .into_iter()
        .map(|(id, name)| Subject {
            id,
            name: coerce_display(&name),
        })
        .collect();

    sort_subjects(&mut subjects);
    Ok(subjects)
}

fn coerce_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub mod endpoints {
    use super::LookupError;
    use url::Url;

    fn base() -> Result<Url, LookupError> {
        Url::parse(super::base_url()).map_err(|e| LookupError::Endpoint {
            message: e.to_string(),
        })
    }

    fn with_segments(segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = base()?;
        url.path_segments_mut()
            .map_err(|()| LookupError::Endpoint {
                message: "base URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn states_url() -> Result<Url, LookupError> {
        with_segments(&["v1", "states"])
    }

    pub fn offices_url(state_id: &str) -> Result<Url, LookupError> {
        with_segments(&["v1", "states", state_id, "offices"])
    }
}

/// Screen identifiers of the decision tree. The serialized form is what ends
/// up inside the persisted route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    CitizenshipQuestion,
    NotCitizen,
    ResidencyQuestion,
    ResidentInCountry,
    ResidenceSelection,
    OfficeSelection,
}

impl Screen {
    /// Screens that must carry a selected residence in the route.
    #[must_use]
    pub const fn requires_residence(self) -> bool {
        matches!(self, Self::OfficeSelection)
    }

    /// Dead ends with no forward transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::NotCitizen | Self::ResidentInCountry)
    }

    /// The lookup slot a screen depends on, if any.
    #[must_use]
    pub const fn owned_slot(self) -> Option<SlotId> {
        match self {
            Self::ResidenceSelection => Some(SlotId::Residences),
            Self::OfficeSelection => Some(SlotId::Offices),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotId {
    Residences,
    Offices,
}

/// The persisted application state: which screen is showing plus the
/// residence selected on the way to the office screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Route {
    pub screen: Screen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence: Option<Subject>,
}

impl Route {
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Invariant: `residence` is present iff the screen requires it.
    pub fn validate(&self) -> Result<(), RouteError> {
        match (self.screen.requires_residence(), self.residence.is_some()) {
            (true, false) => Err(RouteError::MissingResidence {
                screen: self.screen,
            }),
            (false, true) => Err(RouteError::UnexpectedResidence {
                screen: self.screen,
            }),
            _ => Ok(()),
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, RouteError> {
        let route: Self = serde_json::from_slice(bytes).map_err(|e| RouteError::Malformed {
            message: e.to_string(),
        })?;
        route.validate()?;
        Ok(route)
    }

    pub fn encode(&self) -> Result<Vec<u8>, RouteError> {
        serde_json::to_vec(self).map_err(|e| RouteError::Serialize {
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("stored state is not a valid route: {message}")]
    Malformed { message: String },
    #[error("route for {screen:?} is missing the selected residence")]
    MissingResidence { screen: Screen },
    #[error("route for {screen:?} carries a residence it must not have")]
    UnexpectedResidence { screen: Screen },
    #[error("route serialization failed: {message}")]
    Serialize { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },
    #[error("request failed: {message}")]
    Transport { message: String },
    #[error("malformed response body: {message}")]
    Decode { message: String },
    #[error("invalid endpoint: {message}")]
    Endpoint { message: String },
}

/// Typed outcome of a lookup. `NotFound` is only a distinct signal for the
/// office lookup, where a 404 means the selected residence no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Vec<Subject>),
    NotFound,
    Failed(LookupError),
}

fn classify_lookup(
    result: crux_http::Result<crux_http::Response<Vec<u8>>>,
    not_found_is_signal: bool,
) -> LookupOutcome {
    match result {
        Ok(mut response) => {
            let status: u16 = response.status().into();
            match status {
                200 => {
                    let body = response.take_body().unwrap_or_default();
                    match decode_subjects(&body) {
                        Ok(subjects) => LookupOutcome::Found(subjects),
                        Err(e) => LookupOutcome::Failed(e),
                    }
                }
                404 if not_found_is_signal => LookupOutcome::NotFound,
                other => LookupOutcome::Failed(LookupError::Status { status: other }),
            }
        }
        Err(e) => LookupOutcome::Failed(LookupError::Transport {
            message: e.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed,
}

/// Per-lookup side state: phase, cached subjects, last failure, and the
/// generation token used to discard stale completions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupSlot {
    pub phase: LoadPhase,
    pub subjects: Option<Vec<Subject>>,
    pub last_error: Option<LookupError>,
    pub generation: u64,
}

impl LookupSlot {
    /// Drops cached data and pending state. Any in-flight completion becomes
    /// stale because the generation moves on.
    pub fn clear(&mut self) {
        self.phase = LoadPhase::Idle;
        self.subjects = None;
        self.last_error = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Abandons an in-flight request without touching cached data.
    pub fn invalidate_pending(&mut self) {
        if self.phase == LoadPhase::Pending {
            self.phase = LoadPhase::Idle;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Marks the slot in flight and returns the generation the completion
    /// must present to be accepted.
    pub fn begin(&mut self) -> u64 {
        self.phase = LoadPhase::Pending;
        self.last_error = None;
        self.generation
    }

    #[must_use]
    pub fn accepts(&self, generation: u64) -> bool {
        self.phase == LoadPhase::Pending && self.generation == generation
    }

    pub fn complete(&mut self, subjects: Vec<Subject>) {
        self.phase = LoadPhase::Ready;
        self.subjects = Some(subjects);
        self.last_error = None;
    }

    pub fn fail(&mut self, error: LookupError) {
        self.phase = LoadPhase::Failed;
        self.last_error = Some(error);
    }

    /// Re-arms a failed slot so the next screen entry issues one new request.
    pub fn rearm(&mut self) {
        self.phase = LoadPhase::Idle;
        self.last_error = None;
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub const fn should_fetch(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestorePhase {
    #[default]
    NotStarted,
    Restoring,
    Done,
}

#[derive(Debug, Default)]
pub struct Model {
    pub route: Route,
    pub restore: RestorePhase,
    pub residences: LookupSlot,
    pub offices: LookupSlot,
    pub storage_fault: Option<String>,
}

impl Model {
    #[must_use]
    pub fn slot(&self, id: SlotId) -> &LookupSlot {
        match id {
            SlotId::Residences => &self.residences,
            SlotId::Offices => &self.offices,
        }
    }

    pub fn slot_mut(&mut self, id: SlotId) -> &mut LookupSlot {
        match id {
            SlotId::Residences => &mut self.residences,
            SlotId::Offices => &mut self.offices,
        }
    }

    /// The lookup failure shown for the current screen, if any. At most one
    /// banner can be active because each screen owns at most one slot.
    #[must_use]
    pub fn active_banner(&self) -> Option<&LookupError> {
        self.route
            .screen
            .owned_slot()
            .and_then(|id| self.slot(id).last_error.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    AppStarted,
    StateLoaded {
        result: Result<Option<Vec<u8>>, StoreError>,
    },
    StateSaved {
        result: Result<(), StoreError>,
    },

    CitizenshipAnswered {
        is_citizen: bool,
    },
    ResidencyAnswered {
        lives_abroad: bool,
    },
    BackRequested,
    ResidenceSelected {
        id: String,
    },
    OfficeSelected {
        id: String,
    },
    AssistanceLinkRequested,
    RetryRequested,

    ResidencesLoaded {
        generation: u64,
        outcome: LookupOutcome,
    },
    OfficesLoaded {
        generation: u64,
        outcome: LookupOutcome,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppStarted => "app_started",
            Self::StateLoaded { .. } => "state_loaded",
            Self::StateSaved { .. } => "state_saved",
            Self::CitizenshipAnswered { .. } => "citizenship_answered",
            Self::ResidencyAnswered { .. } => "residency_answered",
            Self::BackRequested => "back_requested",
            Self::ResidenceSelected { .. } => "residence_selected",
            Self::OfficeSelected { .. } => "office_selected",
            Self::AssistanceLinkRequested => "assistance_link_requested",
            Self::RetryRequested => "retry_requested",
            Self::ResidencesLoaded { .. } => "residences_loaded",
            Self::OfficesLoaded { .. } => "offices_loaded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Restoring,
    CitizenshipQuestion,
    NotCitizen,
    ResidencyQuestion,
    ResidentInCountry {
        assistance_url: String,
    },
    /// `subjects: None` means the list is still loading (spinner).
    ResidenceSelection {
        subjects: Option<Vec<Subject>>,
    },
    OfficeSelection {
        residence_name: String,
        subjects: Option<Vec<Subject>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupBanner {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub screen: ScreenView,
    pub banner: Option<LookupBanner>,
    pub storage_fault: Option<String>,
}

pub mod app {
    use super::{
        classify_lookup, endpoints, Capabilities, Event, LoadPhase, LookupBanner, LookupError,
        LookupOutcome, Model, RestorePhase, Route, Screen, ScreenView, ViewModel, ASSISTANCE_URL,
        STATE_KEY,
    };

    #[derive(Default)]
    pub struct App;

    impl App {
        fn persist_route(model: &mut Model, caps: &Capabilities) {
            match model.route.encode() {
                Ok(bytes) => {
                    caps.store
                        .set(STATE_KEY, bytes, |result| Event::StateSaved { result });
                }
                Err(e) => {
                    tracing::error!(error = %e, "route serialization failed");
                    model.storage_fault = Some(e.to_string());
                }
            }
        }

        /// Applies a transition: abandon lookups owned by the screen being
        /// left, swap the route, persist, run the on-enter hook, render.
        fn apply_transition(model: &mut Model, next: Route, caps: &Capabilities) {
            if next == model.route {
                return;
            }

            if next.screen != model.route.screen {
                if let Some(slot_id) = model.route.screen.owned_slot() {
                    model.slot_mut(slot_id).invalidate_pending();
                }
            }

            model.route = next;
            Self::persist_route(model, caps);
            Self::enter_screen(model, caps);
            caps.render.render();
        }

        /// On-enter effect hook: the only place lookups are issued. `view`
        /// stays pure.
        fn enter_screen(model: &mut Model, caps: &Capabilities) {
            match model.route.screen {
                Screen::ResidenceSelection if model.residences.should_fetch() => {
                    Self::fetch_residences(model, caps);
                }
                Screen::OfficeSelection if model.offices.should_fetch() => {
                    Self::fetch_offices(model, caps);
                }
                _ => {}
            }
        }

        fn fetch_residences(model: &mut Model, caps: &Capabilities) {
            let url = match endpoints::states_url() {
                Ok(url) => url,
                Err(e) => {
                    model.residences.fail(e);
                    return;
                }
            };

            let generation = model.residences.begin();
            tracing::debug!(%url, generation, "fetching residences");

            caps.http.get(url.as_str()).send(move |result| {
                Event::ResidencesLoaded {
                    generation,
                    outcome: classify_lookup(result, false),
                }
            });
        }

        fn fetch_offices(model: &mut Model, caps: &Capabilities) {
            let Some(residence_id) = model.route.residence.as_ref().map(|s| s.id.clone()) else {
                tracing::warn!("office lookup without a selected residence");
                return;
            };

            let url = match endpoints::offices_url(&residence_id) {
                Ok(url) => url,
                Err(e) => {
                    model.offices.fail(e);
                    return;
                }
            };

            let generation = model.offices.begin();
            tracing::debug!(%url, generation, residence = %residence_id, "fetching offices");

            caps.http.get(url.as_str()).send(move |result| {
                Event::OfficesLoaded {
                    generation,
                    outcome: classify_lookup(result, true),
                }
            });
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            tracing::debug!(event = event.name(), screen = ?model.route.screen, "update");

            match event {
                Event::AppStarted => {
                    if model.restore != RestorePhase::NotStarted {
                        return;
                    }
                    model.restore = RestorePhase::Restoring;
                    caps.store
                        .get(STATE_KEY, |result| Event::StateLoaded { result });
                    caps.render.render();
                }

                Event::StateLoaded { result } => {
                    model.restore = RestorePhase::Done;
                    match result {
                        Ok(Some(bytes)) => match Route::decode(&bytes) {
                            Ok(route) => {
                                model.route = route;
                            }
                            Err(e) => {
                                // Corrupt state is discarded, not surfaced.
                                tracing::warn!(error = %e, "discarding stored state");
                                model.route = Route::initial();
                                Self::persist_route(model, caps);
                            }
                        },
                        Ok(None) => {
                            model.route = Route::initial();
                            Self::persist_route(model, caps);
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "state load failed");
                            model.storage_fault = Some(e.to_string());
                            model.route = Route::initial();
                        }
                    }
                    Self::enter_screen(model, caps);
                    caps.render.render();
                }

                Event::StateSaved { result } => match result {
                    Ok(()) => {
                        if model.storage_fault.take().is_some() {
                            caps.render.render();
                        }
                    }
                    Err(e) => {
                        // Losing persistence silently is worse than a visible
                        // fault.
                        tracing::error!(error = %e, "state write failed");
                        model.storage_fault = Some(e.to_string());
                        caps.render.render();
                    }
                },

                Event::CitizenshipAnswered { is_citizen } => {
                    if model.route.screen == Screen::CitizenshipQuestion {
                        let screen = if is_citizen {
                            Screen::ResidencyQuestion
                        } else {
                            Screen::NotCitizen
                        };
                        Self::apply_transition(
                            model,
                            Route {
                                screen,
                                residence: None,
                            },
                            caps,
                        );
                    }
                }

                Event::ResidencyAnswered { lives_abroad } => {
                    if model.route.screen == Screen::ResidencyQuestion {
                        let screen = if lives_abroad {
                            model.residences.clear();
                            Screen::ResidenceSelection
                        } else {
                            Screen::ResidentInCountry
                        };
                        Self::apply_transition(
                            model,
                            Route {
                                screen,
                                residence: None,
                            },
                            caps,
                        );
                    }
                }

                Event::BackRequested => {
                    let target = match model.route.screen {
                        Screen::NotCitizen | Screen::ResidencyQuestion => {
                            Some(Screen::CitizenshipQuestion)
                        }
                        Screen::ResidentInCountry | Screen::ResidenceSelection => {
                            Some(Screen::ResidencyQuestion)
                        }
                        Screen::OfficeSelection => {
                            model.offices.clear();
                            Some(Screen::ResidenceSelection)
                        }
                        Screen::CitizenshipQuestion => None,
                    };
                    if let Some(screen) = target {
                        Self::apply_transition(
                            model,
                            Route {
                                screen,
                                residence: None,
                            },
                            caps,
                        );
                    }
                }

                Event::ResidenceSelected { id } => {
                    if model.route.screen != Screen::ResidenceSelection {
                        return;
                    }
                    // The selection must reference a subject from the fetched
                    // list; anything else is a no-op.
                    let Some(subject) = model
                        .residences
                        .subjects
                        .as_ref()
                        .and_then(|list| list.iter().find(|s| s.id == id))
                        .cloned()
                    else {
                        tracing::warn!(%id, "selection of an unknown residence ignored");
                        return;
                    };
                    model.offices.clear();
                    Self::apply_transition(
                        model,
                        Route {
                            screen: Screen::OfficeSelection,
                            residence: Some(subject),
                        },
                        caps,
                    );
                }

                Event::OfficeSelected { id } => {
                    // Terminal: the flow ends at the office list.
                    if model.route.screen == Screen::OfficeSelection {
                        tracing::debug!(%id, "office selected");
                    }
                }

                Event::AssistanceLinkRequested => {
                    if model.route.screen == Screen::ResidentInCountry {
                        caps.link.open(ASSISTANCE_URL);
                    }
                }

                Event::RetryRequested => {
                    let Some(slot_id) = model.route.screen.owned_slot() else {
                        return;
                    };
                    if model.slot(slot_id).last_error.is_none() {
                        return;
                    }
                    model.slot_mut(slot_id).rearm();
                    Self::enter_screen(model, caps);
                    caps.render.render();
                }

                Event::ResidencesLoaded {
                    generation,
                    outcome,
                } => {
                    if !model.residences.accepts(generation) {
                        tracing::debug!(generation, "stale residences lookup discarded");
                        return;
                    }
                    match outcome {
                        LookupOutcome::Found(subjects) => model.residences.complete(subjects),
                        // The states endpoint has no 404 contract.
                        LookupOutcome::NotFound => {
                            model.residences.fail(LookupError::Status { status: 404 });
                        }
                        LookupOutcome::Failed(e) => {
                            tracing::warn!(error = %e, "residences lookup failed");
                            model.residences.fail(e);
                        }
                    }
                    caps.render.render();
                }

                Event::OfficesLoaded {
                    generation,
                    outcome,
                } => {
                    if !model.offices.accepts(generation) {
                        tracing::debug!(generation, "stale offices lookup discarded");
                        return;
                    }
                    match outcome {
                        LookupOutcome::Found(subjects) => {
                            model.offices.complete(subjects);
                            caps.render.render();
                        }
                        LookupOutcome::NotFound => {
                            // The selected residence no longer exists
                            // upstream: drop it and start the selection over.
                            tracing::warn!("selected residence vanished, returning to selection");
                            model.residences.clear();
                            model.offices.clear();
                            Self::apply_transition(
                                model,
                                Route {
                                    screen: Screen::ResidenceSelection,
                                    residence: None,
                                },
                                caps,
                            );
                        }
                        LookupOutcome::Failed(e) => {
                            tracing::warn!(error = %e, "offices lookup failed");
                            model.offices.fail(e);
                            caps.render.render();
                        }
                    }
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let screen = match model.restore {
                RestorePhase::NotStarted | RestorePhase::Restoring => ScreenView::Restoring,
                RestorePhase::Done => match model.route.screen {
                    Screen::CitizenshipQuestion => ScreenView::CitizenshipQuestion,
                    Screen::NotCitizen => ScreenView::NotCitizen,
                    Screen::ResidencyQuestion => ScreenView::ResidencyQuestion,
                    Screen::ResidentInCountry => ScreenView::ResidentInCountry {
                        assistance_url: ASSISTANCE_URL.to_string(),
                    },
                    Screen::ResidenceSelection => ScreenView::ResidenceSelection {
                        subjects: visible_subjects(&model.residences),
                    },
                    Screen::OfficeSelection => ScreenView::OfficeSelection {
                        residence_name: model
                            .route
                            .residence
                            .as_ref()
                            .map(|s| s.name.clone())
                            .unwrap_or_default(),
                        subjects: visible_subjects(&model.offices),
                    },
                },
            };

            ViewModel {
                screen,
                banner: model.active_banner().map(|e| LookupBanner {
                    description: e.to_string(),
                }),
                storage_fault: model.storage_fault.clone(),
            }
        }
    }

    fn visible_subjects(slot: &super::LookupSlot) -> Option<Vec<super::Subject>> {
        match slot.phase {
            LoadPhase::Ready => slot.subjects.clone(),
            _ => None,
        }
    }
}
