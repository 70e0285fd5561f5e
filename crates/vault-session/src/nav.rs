//! Navigation state machine for the vault UI shell.
//!
//! Tracks which surface is showing and what is selected:
//! - `Mode`: investor pitch vs. interactive demo
//! - `View`: demo drill level (track list, track detail, chapter content)
//! - `PitchSubState`: overlays within the pitch surface
//!
//! Every transition is total: an operation whose precondition fails leaves
//! the state untouched and reports that nothing happened. Callers never need
//! to pre-validate before invoking a transition.

use tracing::debug;
use vault_catalog::{Catalog, Industry, PartnerRole};

/// Top-level surface the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The investor pitch deck.
    Pitch,
    /// The interactive knowledge-platform demo.
    Demo,
}

/// Drill level within the demo surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Grid of asset tracks, optionally filtered by industry.
    TrackList,
    /// One track expanded into its domains and chapters.
    TrackDetail,
    /// A single chapter with generated content.
    ChapterContent,
}

/// Overlay within the pitch surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchSubState {
    /// The main deck.
    Main,
    /// Expanded problem/solution framing.
    ProblemDeepDive,
    /// Expanded view of one transformation stage.
    TransformationDeepDive,
}

/// Complete navigation state.
///
/// Invariant: whenever `view` is [`View::TrackDetail`] or
/// [`View::ChapterContent`], `selected_track` is `Some`; whenever `view` is
/// [`View::ChapterContent`], `selected_domain` and `selected_chapter` are
/// both `Some`. All transitions preserve this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Current surface.
    pub mode: Mode,
    /// Current demo drill level.
    pub view: View,
    /// Current pitch overlay.
    pub pitch_sub: PitchSubState,
    /// Track shown in detail/content views.
    pub selected_track: Option<String>,
    /// Domain of the open chapter.
    pub selected_domain: Option<String>,
    /// The open chapter.
    pub selected_chapter: Option<String>,
    /// Industry filter applied to the track list.
    pub industry: Industry,
    /// Lens used when generating content.
    pub role: PartnerRole,
    /// Which transformation stage the deep dive shows.
    pub transformation_index: usize,
}

impl NavigationState {
    /// State on session start: pitch deck, nothing selected, no filter.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            mode: Mode::Pitch,
            view: View::TrackList,
            pitch_sub: PitchSubState::Main,
            selected_track: None,
            selected_domain: None,
            selected_chapter: None,
            industry: Industry::All,
            role: PartnerRole::default(),
            transformation_index: 0,
        }
    }

    /// Whether the selection fields are consistent with the view.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        match self.view {
            View::TrackList => true,
            View::TrackDetail => self.selected_track.is_some(),
            View::ChapterContent => {
                self.selected_track.is_some()
                    && self.selected_domain.is_some()
                    && self.selected_chapter.is_some()
            }
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Applies transitions to a [`NavigationState`].
///
/// Transitions that need to resolve identifiers take the [`Catalog`] as an
/// argument so the controller itself stays a plain value.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    /// Controller starting from [`NavigationState::initial`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: NavigationState::initial(),
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Opens a track from the track list.
    ///
    /// Applies only in demo mode at [`View::TrackList`] with a track id the
    /// catalog knows. Returns whether the transition applied.
    pub fn enter_track(&mut self, catalog: &Catalog, track_id: &str) -> bool {
        if self.state.mode != Mode::Demo || self.state.view != View::TrackList {
            debug!(track_id, "enter_track ignored outside demo track list");
            return false;
        }
        if catalog.track(track_id).is_none() {
            debug!(track_id, "enter_track ignored: unknown track");
            return false;
        }
        self.state.selected_track = Some(track_id.to_owned());
        self.state.view = View::TrackDetail;
        debug!(track_id, "entered track detail");
        true
    }

    /// Opens a chapter from the track detail view.
    ///
    /// The domain must belong to the selected track and the chapter must
    /// exist. Returns whether the transition applied.
    pub fn enter_chapter(&mut self, catalog: &Catalog, domain_id: &str, chapter_id: &str) -> bool {
        if self.state.mode != Mode::Demo || self.state.view != View::TrackDetail {
            debug!(domain_id, chapter_id, "enter_chapter ignored outside track detail");
            return false;
        }
        let Some(track_id) = self.state.selected_track.as_deref() else {
            return false;
        };
        let belongs = catalog
            .domain(domain_id)
            .is_some_and(|d| d.track_id == track_id);
        if !belongs || catalog.chapter(chapter_id).is_none() {
            debug!(domain_id, chapter_id, "enter_chapter ignored: unresolved ids");
            return false;
        }
        self.state.selected_domain = Some(domain_id.to_owned());
        self.state.selected_chapter = Some(chapter_id.to_owned());
        self.state.view = View::ChapterContent;
        debug!(domain_id, chapter_id, "entered chapter content");
        true
    }

    /// Steps one level back.
    ///
    /// An open pitch overlay closes first. Otherwise the view walks
    /// `ChapterContent -> TrackDetail -> TrackList`, clearing the selections
    /// the departed view required; at the track list any lingering track
    /// selection is dropped. The walk applies in both modes, so a chapter
    /// left open across a switch to pitch can still be backed out of.
    pub fn go_back(&mut self) {
        if self.state.mode == Mode::Pitch && self.state.pitch_sub != PitchSubState::Main {
            self.state.pitch_sub = PitchSubState::Main;
            debug!("closed pitch overlay");
            return;
        }
        match self.state.view {
            View::ChapterContent => {
                self.state.selected_domain = None;
                self.state.selected_chapter = None;
                self.state.view = View::TrackDetail;
                debug!("back to track detail");
            }
            View::TrackDetail | View::TrackList => {
                self.state.selected_track = None;
                self.state.view = View::TrackList;
                debug!("back to track list");
            }
        }
    }

    /// Switches surface.
    ///
    /// Entering pitch closes any overlay. Entering demo lands on the track
    /// list and clears any open chapter; the selected track, industry filter
    /// and role survive the switch.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        match mode {
            Mode::Pitch => {
                self.state.pitch_sub = PitchSubState::Main;
            }
            Mode::Demo => {
                self.state.view = View::TrackList;
                self.state.selected_domain = None;
                self.state.selected_chapter = None;
            }
        }
        debug!(?mode, "switched mode");
    }

    /// Jumps from a pitch topic card straight into the demo.
    ///
    /// The topic label is matched by substring against known themes to pick
    /// a destination track and industry filter; labels with no themed match
    /// fall back to the flagship track with the filter cleared. If the
    /// resolved track is missing from the catalog nothing happens.
    pub fn cross_mode_drill_down(&mut self, catalog: &Catalog, topic_label: &str) -> bool {
        let (track_id, industry) = drill_down_target(topic_label);
        if catalog.track(track_id).is_none() {
            debug!(topic_label, track_id, "drill-down ignored: track not in catalog");
            return false;
        }
        self.state.mode = Mode::Demo;
        self.state.industry = industry;
        self.state.selected_track = Some(track_id.to_owned());
        self.state.selected_domain = None;
        self.state.selected_chapter = None;
        self.state.view = View::TrackDetail;
        debug!(topic_label, track_id, "drilled down from pitch");
        true
    }

    /// Sets the industry filter. Applies only at the track list.
    pub fn set_industry_filter(&mut self, industry: Industry) -> bool {
        if self.state.view != View::TrackList {
            debug!(?industry, "industry filter ignored outside track list");
            return false;
        }
        self.state.industry = industry;
        true
    }

    /// Changes the partner-role lens. Always applies.
    pub fn set_role(&mut self, role: PartnerRole) {
        self.state.role = role;
        debug!(?role, "role changed");
    }

    /// Opens the problem/solution deep dive. Pitch mode only.
    pub fn open_problem_deep_dive(&mut self) -> bool {
        if self.state.mode != Mode::Pitch {
            return false;
        }
        self.state.pitch_sub = PitchSubState::ProblemDeepDive;
        true
    }

    /// Opens the transformation deep dive on the given stage. Pitch mode
    /// only; the index must name one of the partner roles. Re-selecting the
    /// stage already showing keeps it open; [`Self::go_back`] closes it.
    pub fn toggle_transformation_detail(&mut self, index: usize) -> bool {
        if self.state.mode != Mode::Pitch || index >= PartnerRole::ALL.len() {
            return false;
        }
        self.state.transformation_index = index;
        self.state.pitch_sub = PitchSubState::TransformationDeepDive;
        true
    }
}

/// Maps a pitch topic label to its demo destination.
fn drill_down_target(topic_label: &str) -> (&'static str, Industry) {
    if topic_label.contains("Climate") {
        ("t2", Industry::Gov)
    } else if topic_label.contains("Workforce") {
        ("t3", Industry::Trade)
    } else if topic_label.contains("Housing") {
        ("t4", Industry::Trade)
    } else if topic_label.contains("Governance") {
        ("t5", Industry::Gov)
    } else if topic_label.contains("Health") {
        ("t7", Industry::Corporate)
    } else {
        ("t1", Industry::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_controller() -> NavigationController {
        let mut ctl = NavigationController::new();
        ctl.switch_mode(Mode::Demo);
        ctl
    }

    #[test]
    fn initial_state_is_pitch_main() {
        let state = NavigationState::initial();
        assert_eq!(state.mode, Mode::Pitch);
        assert_eq!(state.view, View::TrackList);
        assert_eq!(state.pitch_sub, PitchSubState::Main);
        assert!(state.invariant_holds());
    }

    #[test]
    fn enter_track_requires_demo_track_list() {
        let catalog = vault_catalog::builtin();
        let mut ctl = NavigationController::new();
        // Still in pitch mode.
        assert!(!ctl.enter_track(catalog, "t1"));
        ctl.switch_mode(Mode::Demo);
        assert!(ctl.enter_track(catalog, "t1"));
        assert_eq!(ctl.state().view, View::TrackDetail);
        assert_eq!(ctl.state().selected_track.as_deref(), Some("t1"));
        // Already in detail view, second entry is ignored.
        assert!(!ctl.enter_track(catalog, "t2"));
        assert_eq!(ctl.state().selected_track.as_deref(), Some("t1"));
    }

    #[test]
    fn enter_track_rejects_unknown_id() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        assert!(!ctl.enter_track(catalog, "t99"));
        assert_eq!(ctl.state().view, View::TrackList);
    }

    #[test]
    fn enter_chapter_checks_domain_ownership() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        assert!(ctl.enter_track(catalog, "t1"));
        // d4 belongs to t2, not t1.
        assert!(!ctl.enter_chapter(catalog, "d4", "1"));
        assert_eq!(ctl.state().view, View::TrackDetail);
        assert!(ctl.enter_chapter(catalog, "d1", "1"));
        assert_eq!(ctl.state().view, View::ChapterContent);
        assert!(ctl.state().invariant_holds());
    }

    #[test]
    fn go_back_walks_demo_views_and_clears_selection() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        ctl.enter_track(catalog, "t1");
        ctl.enter_chapter(catalog, "d1", "1");

        ctl.go_back();
        assert_eq!(ctl.state().view, View::TrackDetail);
        assert_eq!(ctl.state().selected_chapter, None);
        assert_eq!(ctl.state().selected_domain, None);
        assert_eq!(ctl.state().selected_track.as_deref(), Some("t1"));

        ctl.go_back();
        assert_eq!(ctl.state().view, View::TrackList);
        assert_eq!(ctl.state().selected_track, None);

        // Settled at the root.
        ctl.go_back();
        assert_eq!(ctl.state().view, View::TrackList);
        assert_eq!(ctl.state().selected_track, None);
    }

    #[test]
    fn go_back_closes_pitch_overlay_first() {
        let mut ctl = NavigationController::new();
        assert!(ctl.open_problem_deep_dive());
        ctl.go_back();
        assert_eq!(ctl.state().pitch_sub, PitchSubState::Main);
        assert_eq!(ctl.state().mode, Mode::Pitch);
    }

    #[test]
    fn go_back_in_pitch_main_walks_demo_views() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        ctl.enter_track(catalog, "t1");
        ctl.enter_chapter(catalog, "d1", "1");
        // The open chapter survives the switch to pitch.
        ctl.switch_mode(Mode::Pitch);
        assert_eq!(ctl.state().view, View::ChapterContent);

        ctl.go_back();
        assert_eq!(ctl.state().view, View::TrackDetail);
        assert_eq!(ctl.state().selected_chapter, None);
        assert!(ctl.state().invariant_holds());

        ctl.go_back();
        assert_eq!(ctl.state().view, View::TrackList);
        assert_eq!(ctl.state().selected_track, None);
        assert_eq!(ctl.state().mode, Mode::Pitch);
    }

    #[test]
    fn go_back_drops_track_kept_across_mode_switch() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        ctl.enter_track(catalog, "t2");
        // Returning to demo lands on the list with the track still selected.
        ctl.switch_mode(Mode::Pitch);
        ctl.switch_mode(Mode::Demo);
        assert_eq!(ctl.state().selected_track.as_deref(), Some("t2"));
        ctl.go_back();
        assert_eq!(ctl.state().selected_track, None);
        assert_eq!(ctl.state().view, View::TrackList);
    }

    #[test]
    fn switch_to_demo_clears_open_chapter_but_keeps_track() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        ctl.enter_track(catalog, "t2");
        ctl.enter_chapter(catalog, "d4", "1");
        ctl.switch_mode(Mode::Pitch);
        ctl.switch_mode(Mode::Demo);
        let state = ctl.state();
        assert_eq!(state.view, View::TrackList);
        assert_eq!(state.selected_domain, None);
        assert_eq!(state.selected_chapter, None);
        assert_eq!(state.selected_track.as_deref(), Some("t2"));
        assert!(state.invariant_holds());
    }

    #[test]
    fn switch_to_pitch_resets_overlay() {
        let mut ctl = NavigationController::new();
        ctl.toggle_transformation_detail(2);
        ctl.switch_mode(Mode::Demo);
        ctl.switch_mode(Mode::Pitch);
        assert_eq!(ctl.state().pitch_sub, PitchSubState::Main);
    }

    #[test]
    fn drill_down_matches_topic_themes() {
        let catalog = vault_catalog::builtin();
        let cases = [
            ("Climate Resilience", "t2", Industry::Gov),
            ("Workforce Pipeline Collapse", "t3", Industry::Trade),
            ("Housing Affordability", "t4", Industry::Trade),
            ("Data Governance", "t5", Industry::Gov),
            ("Community Health", "t7", Industry::Corporate),
            ("Something Else Entirely", "t1", Industry::All),
        ];
        for (label, track, industry) in cases {
            let mut ctl = NavigationController::new();
            assert!(ctl.cross_mode_drill_down(catalog, label), "label {label}");
            let state = ctl.state();
            assert_eq!(state.mode, Mode::Demo);
            assert_eq!(state.view, View::TrackDetail);
            assert_eq!(state.selected_track.as_deref(), Some(track));
            assert_eq!(state.industry, industry);
            assert!(state.invariant_holds());
        }
    }

    #[test]
    fn drill_down_noop_when_track_absent() {
        // A catalog without t2 makes the Climate theme unresolvable.
        let catalog = Catalog::from_parts(
            vec![vault_catalog::builtin().track("t1").cloned().unwrap()],
            vec![],
            vault_catalog::builtin().chapters().to_vec(),
        )
        .unwrap();
        let mut ctl = NavigationController::new();
        assert!(!ctl.cross_mode_drill_down(&catalog, "Climate Resilience"));
        assert_eq!(ctl.state().mode, Mode::Pitch);
    }

    #[test]
    fn industry_filter_only_applies_at_track_list() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        assert!(ctl.set_industry_filter(Industry::HigherEd));
        ctl.enter_track(catalog, "t1");
        assert!(!ctl.set_industry_filter(Industry::Gov));
        assert_eq!(ctl.state().industry, Industry::HigherEd);
    }

    #[test]
    fn transformation_detail_is_pitch_only_and_bounded() {
        let mut ctl = NavigationController::new();
        assert!(!ctl.toggle_transformation_detail(PartnerRole::ALL.len()));
        assert!(ctl.toggle_transformation_detail(1));
        assert_eq!(ctl.state().pitch_sub, PitchSubState::TransformationDeepDive);
        assert_eq!(ctl.state().transformation_index, 1);
        // Re-selecting the open stage keeps the deep dive showing.
        assert!(ctl.toggle_transformation_detail(1));
        assert_eq!(ctl.state().pitch_sub, PitchSubState::TransformationDeepDive);
        assert_eq!(ctl.state().transformation_index, 1);
        // A different index moves the deep dive to the new stage.
        assert!(ctl.toggle_transformation_detail(3));
        assert_eq!(ctl.state().transformation_index, 3);
        assert_eq!(ctl.state().pitch_sub, PitchSubState::TransformationDeepDive);
        // Backing out closes it.
        ctl.go_back();
        assert_eq!(ctl.state().pitch_sub, PitchSubState::Main);

        ctl.switch_mode(Mode::Demo);
        assert!(!ctl.toggle_transformation_detail(0));
    }

    #[test]
    fn role_changes_apply_anywhere() {
        let catalog = vault_catalog::builtin();
        let mut ctl = demo_controller();
        ctl.enter_track(catalog, "t1");
        ctl.enter_chapter(catalog, "d1", "2");
        ctl.set_role(PartnerRole::LegalStructuring);
        assert_eq!(ctl.state().role, PartnerRole::LegalStructuring);
    }
}
