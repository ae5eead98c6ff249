//! I18nState - Locale Selection and Switch Transition
//!
//! Holds the active locale and the transient `changing` flag the views
//! use to fade the page body across a language switch. All mutation
//! goes through [`I18nState::set_locale`]; nothing else may write the
//! locale or the flag.

use std::time::Duration;

use gpui::Context;

use crate::i18n::Locale;

/// Fade-out window before the text swap. Matches the opacity fade the
/// workspace applies while `changing` is true.
pub const FADE_OUT: Duration = Duration::from_millis(400);

/// Settle window after the swap, so the new text is committed before
/// the fade back in starts.
pub const SETTLE: Duration = Duration::from_millis(50);

/// Active locale selection plus the in-flight transition marker.
///
/// A switch runs Idle -> FadingOut -> Swapping -> Idle: `changing`
/// turns on immediately, the locale is reassigned only after
/// [`FADE_OUT`], and `changing` turns off [`SETTLE`] later. Each
/// accepted switch bumps `epoch`; timer callbacks carry the epoch they
/// were scheduled under and are dropped when a newer switch has
/// superseded them, so rapid re-switching can never leave the flag
/// stuck or the locale half-applied.
#[derive(Debug)]
pub struct I18nState {
    locale: Locale,
    changing: bool,
    epoch: u64,
}

impl Default for I18nState {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            changing: false,
            epoch: 0,
        }
    }
}

impl I18nState {
    /// Currently active locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether a locale switch is in flight
    pub fn is_changing(&self) -> bool {
        self.changing
    }

    /// Accept a switch request. Returns the epoch the caller's timers
    /// must present to `commit` and `settle`, or `None` when the
    /// target already is the active locale (strict no-op).
    fn request(&mut self, next: Locale) -> Option<u64> {
        if next == self.locale {
            return None;
        }
        self.epoch += 1;
        self.changing = true;
        Some(self.epoch)
    }

    /// Reassign the locale after the fade-out window. Stale epochs are
    /// ignored and report `false`.
    fn commit(&mut self, epoch: u64, next: Locale) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.locale = next;
        true
    }

    /// Clear the `changing` flag after the settle window. Stale epochs
    /// are ignored and report `false`.
    fn settle(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.changing = false;
        true
    }

    /// Switch the active locale with the two-phase fade transition.
    pub fn set_locale(&mut self, next: Locale, cx: &mut Context<Self>) {
        let Some(epoch) = self.request(next) else {
            return;
        };
        cx.notify();

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(FADE_OUT).await;

            let committed = this
                .update(cx, |state, cx| {
                    let committed = state.commit(epoch, next);
                    if committed {
                        cx.notify();
                    }
                    committed
                })
                .unwrap_or(false);
            if !committed {
                return;
            }

            cx.background_executor().timer(SETTLE).await;

            let _ = this.update(cx, |state, cx| {
                if state.settle(epoch) {
                    cx.notify();
                }
            });
        })
        .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;

    #[test]
    fn starts_idle_in_polish() {
        let state = I18nState::default();
        assert_eq!(state.locale(), Locale::Pl);
        assert!(!state.is_changing());
        assert_eq!(t(state.locale(), "nav.home"), "Start");
    }

    #[test]
    fn reselecting_the_active_locale_is_a_no_op() {
        let mut state = I18nState::default();
        assert_eq!(state.request(Locale::Pl), None);
        assert_eq!(state.locale(), Locale::Pl);
        assert!(!state.is_changing());
    }

    #[test]
    fn locale_swaps_only_after_the_fade_out_step() {
        let mut state = I18nState::default();

        let epoch = state.request(Locale::En).expect("switch accepted");
        assert!(state.is_changing());
        assert_eq!(state.locale(), Locale::Pl, "old text stays mounted");

        assert!(state.commit(epoch, Locale::En));
        assert_eq!(state.locale(), Locale::En);
        assert!(state.is_changing(), "new text renders pre-faded-in");
        assert_eq!(t(state.locale(), "nav.home"), "Home");

        assert!(state.settle(epoch));
        assert!(!state.is_changing());
    }

    #[test]
    fn round_trip_settles_back_to_the_initial_state() {
        let mut state = I18nState::default();
        let sample = ["nav.home", "hero.title", "contact.audit.labels.send"];
        let before: Vec<_> = sample.iter().map(|path| t(state.locale(), path)).collect();

        for target in [Locale::En, Locale::Pl] {
            let epoch = state.request(target).expect("switch accepted");
            assert!(state.commit(epoch, target));
            assert!(state.settle(epoch));
        }

        assert_eq!(state.locale(), Locale::Pl);
        assert!(!state.is_changing());
        let after: Vec<_> = sample.iter().map(|path| t(state.locale(), path)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn newer_switch_supersedes_pending_callbacks() {
        let mut state = I18nState::default();

        let first = state.request(Locale::En).expect("switch accepted");
        let second = state.request(Locale::Ru).expect("switch accepted");

        // The first transition's timers fire late and must do nothing.
        assert!(!state.commit(first, Locale::En));
        assert_eq!(state.locale(), Locale::Pl);
        assert!(!state.settle(first));
        assert!(state.is_changing());

        assert!(state.commit(second, Locale::Ru));
        assert!(state.settle(second));
        assert_eq!(state.locale(), Locale::Ru);
        assert!(!state.is_changing());
    }
}
