//! State of the media showcase: which item is on screen, the two-stage swap
//! transition between items, playback flags and the slideshow position.

use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

use crate::content::MediaOption;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Outgoing item is fading; `target` becomes active when the exit delay elapses.
    Exiting { target: usize },
    /// New item is mounted and loading; playback starts when the settle delay elapses.
    Settling,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaSelector {
    media: &'static [MediaOption],
    active: usize,
    phase: Phase,
    is_playing: bool,
    is_muted: bool,
    current_slide: usize,
    slide_direction: i8,
}

impl MediaSelector {
    pub fn new(media: &'static [MediaOption]) -> Self {
        Self {
            media,
            active: 0,
            phase: Phase::Idle,
            is_playing: false,
            is_muted: true,
            current_slide: 0,
            slide_direction: 0,
        }
    }

    pub fn media(&self) -> &'static [MediaOption] {
        self.media
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_media(&self) -> Option<&'static MediaOption> {
        self.media.get(self.active)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// `1` after moving forward, `-1` after moving back, `0` before any move.
    pub fn slide_direction(&self) -> i8 {
        self.slide_direction
    }

    pub fn is_video(&self) -> bool {
        self.active_media().map_or(false, MediaOption::is_video)
    }

    pub fn is_slideshow(&self) -> bool {
        self.slide_count() > 0
    }

    pub fn slide_count(&self) -> usize {
        self.active_media().map_or(0, MediaOption::slide_count)
    }

    /// Starts swapping to `index`. Ignored for the current item, unknown
    /// indices, and while another swap is still running.
    pub fn select_media(&mut self, index: usize) -> bool {
        if index == self.active || index >= self.media.len() || self.is_transitioning() {
            return false;
        }
        debug!("media: {} -> {} (exiting)", self.active, index);
        self.phase = Phase::Exiting { target: index };
        self.is_playing = false;
        true
    }

    pub fn complete_exit(&mut self) -> bool {
        let Phase::Exiting { target } = self.phase else {
            return false;
        };
        debug!("media: {} mounted (settling)", target);
        self.active = target;
        self.current_slide = 0;
        self.slide_direction = 0;
        self.phase = Phase::Settling;
        true
    }

    /// Ends the swap. Returns true when the new item is a video and playback
    /// should start.
    pub fn complete_settle(&mut self) -> bool {
        if self.phase != Phase::Settling {
            return false;
        }
        self.phase = Phase::Idle;
        self.is_playing = self.is_video();
        debug!("media: {} ready, playing={}", self.active, self.is_playing);
        self.is_playing
    }

    pub fn advance_slide(&mut self, direction: i8) -> bool {
        let count = self.slide_count();
        if count == 0 || direction == 0 {
            return false;
        }
        let step = if direction > 0 { 1 } else { count - 1 };
        self.current_slide = (self.current_slide + step) % count;
        self.slide_direction = direction.signum();
        true
    }

    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if index >= self.slide_count() || index == self.current_slide {
            return false;
        }
        self.slide_direction = if index > self.current_slide { 1 } else { -1 };
        self.current_slide = index;
        true
    }

    pub fn autoplay_tick(&mut self) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.advance_slide(1)
    }

    pub fn toggle_play(&mut self) -> bool {
        if !self.is_video() || self.is_transitioning() {
            return false;
        }
        self.is_playing = !self.is_playing;
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        if !self.is_video() {
            return false;
        }
        self.is_muted = !self.is_muted;
        true
    }

    /// Feedback from the `<video>` element's own play/pause events.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        if !self.is_video() || self.is_playing == playing {
            return false;
        }
        self.is_playing = playing;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaAction {
    Select(usize),
    ExitElapsed,
    SettleElapsed,
    Advance(i8),
    GoToSlide(usize),
    AutoplayTick,
    TogglePlay,
    ToggleMute,
    PlaybackChanged(bool),
}

impl Reducible for MediaSelector {
    type Action = MediaAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            MediaAction::Select(index) => next.select_media(index),
            MediaAction::ExitElapsed => next.complete_exit(),
            MediaAction::SettleElapsed => {
                next.complete_settle();
                next != *self
            }
            MediaAction::Advance(direction) => next.advance_slide(direction),
            MediaAction::GoToSlide(index) => next.go_to_slide(index),
            MediaAction::AutoplayTick => next.autoplay_tick(),
            MediaAction::TogglePlay => next.toggle_play(),
            MediaAction::ToggleMute => next.toggle_mute(),
            MediaAction::PlaybackChanged(playing) => next.set_playing(playing),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MEDIA_OPTIONS;

    const SLIDESHOW: usize = 2;

    fn selector() -> MediaSelector {
        MediaSelector::new(MEDIA_OPTIONS)
    }

    fn swap_to(selector: &mut MediaSelector, index: usize) {
        assert!(selector.select_media(index));
        assert!(selector.complete_exit());
        selector.complete_settle();
    }

    #[test]
    fn starts_on_first_video_muted_and_paused() {
        let s = selector();
        assert_eq!(s.active(), 0);
        assert!(s.is_video());
        assert!(s.is_muted());
        assert!(!s.is_playing());
        assert!(!s.is_transitioning());
    }

    #[test]
    fn video_to_slideshow_settles_without_playback() {
        let mut s = selector();
        s.toggle_play();
        assert!(s.is_playing());

        assert!(s.select_media(SLIDESHOW));
        assert!(s.is_transitioning());
        assert!(!s.is_playing());
        assert_eq!(s.active(), 0);

        assert!(s.complete_exit());
        assert_eq!(s.active(), SLIDESHOW);
        assert_eq!(s.phase(), Phase::Settling);

        assert!(!s.complete_settle());
        assert!(!s.is_transitioning());
        assert_eq!(s.current_slide(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn switching_to_video_autoplays() {
        let mut s = selector();
        s.select_media(1);
        s.complete_exit();
        assert!(s.complete_settle());
        assert!(s.is_playing());
    }

    #[test]
    fn select_is_ignored_for_current_or_busy() {
        let mut s = selector();
        assert!(!s.select_media(0));
        assert!(!s.select_media(9));
        assert!(s.select_media(1));
        assert!(!s.select_media(SLIDESHOW));
        assert_eq!(s.phase(), Phase::Exiting { target: 1 });
        s.complete_exit();
        assert!(!s.select_media(SLIDESHOW));
    }

    #[test]
    fn stray_timer_callbacks_are_ignored() {
        let mut s = selector();
        assert!(!s.complete_exit());
        assert!(!s.complete_settle());
        assert_eq!(s, selector());
    }

    #[test]
    fn slideshow_wraps_both_ways() {
        let mut s = selector();
        swap_to(&mut s, SLIDESHOW);

        assert!(s.advance_slide(1));
        assert_eq!(s.current_slide(), 1);
        assert!(s.advance_slide(1));
        assert_eq!(s.current_slide(), 0);
        assert_eq!(s.slide_direction(), 1);

        assert!(s.advance_slide(-1));
        assert_eq!(s.current_slide(), 1);
        assert_eq!(s.slide_direction(), -1);
    }

    #[test]
    fn go_to_slide_sets_direction() {
        let mut s = selector();
        swap_to(&mut s, SLIDESHOW);
        assert!(s.go_to_slide(1));
        assert_eq!(s.slide_direction(), 1);
        assert!(s.go_to_slide(0));
        assert_eq!(s.slide_direction(), -1);
        assert!(!s.go_to_slide(0));
        assert!(!s.go_to_slide(5));
    }

    #[test]
    fn slides_and_autoplay_do_nothing_on_video() {
        let mut s = selector();
        assert!(!s.advance_slide(1));
        assert!(!s.autoplay_tick());
        assert!(!s.go_to_slide(1));
        assert_eq!(s.current_slide(), 0);
    }

    #[test]
    fn playback_controls_only_apply_to_video() {
        let mut s = selector();
        assert!(s.toggle_mute());
        assert!(!s.is_muted());
        assert!(s.set_playing(true));
        assert!(!s.set_playing(true));

        swap_to(&mut s, SLIDESHOW);
        assert!(!s.toggle_play());
        assert!(!s.toggle_mute());
        assert!(!s.set_playing(true));
        assert!(!s.is_playing());
    }

    #[test]
    fn new_media_resets_slide() {
        let mut s = selector();
        swap_to(&mut s, SLIDESHOW);
        s.advance_slide(1);
        swap_to(&mut s, 0);
        swap_to(&mut s, SLIDESHOW);
        assert_eq!(s.current_slide(), 0);
        assert_eq!(s.slide_direction(), 0);
    }

    #[test]
    fn reducer_keeps_identity_for_no_ops() {
        let state = Rc::new(selector());
        let same = state.clone().reduce(MediaAction::Select(0));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(MediaAction::Select(SLIDESHOW));
        assert!(!Rc::ptr_eq(&state, &moved));
        let mounted = moved.reduce(MediaAction::ExitElapsed);
        let settled = mounted.reduce(MediaAction::SettleElapsed);
        assert!(!settled.is_transitioning());
        let ticked = settled.reduce(MediaAction::AutoplayTick);
        assert_eq!(ticked.current_slide(), 1);
    }

    #[test]
    fn play_toggle_waits_for_swap_to_finish() {
        let mut s = selector();
        assert!(s.select_media(1));
        assert!(!s.toggle_play());
        assert!(!s.is_playing());

        assert!(s.complete_exit());
        assert!(!s.toggle_play());
        assert!(!s.is_playing());

        assert!(s.complete_settle());
        assert!(s.toggle_play());
        assert!(!s.is_playing());
    }
}
