// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::Config;
use iced_toast::ui::notifications::{
    Glyph, Notification, Presenter, Severity, ToastSurface, Visibility,
};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn mounted() -> Presenter {
    Presenter::new(ToastSurface::new(), &Config::default())
}

/// Ticks every 10ms across `[from, to]` and returns the offsets (relative to
/// `origin`) at which the surface was hidden.
fn hides_between(presenter: &mut Presenter, origin: Instant, from: u64, to: u64) -> Vec<u64> {
    (from..=to)
        .step_by(10)
        .filter(|offset| presenter.tick(origin + ms(*offset)))
        .collect()
}

#[test]
fn text_slots_hold_exact_values() {
    let mut presenter = mounted();
    let cases = [
        ("Saved", "Your review has been posted."),
        ("", ""),
        ("<script>alert(1)</script>", "&amp; stays &amp;"),
        ("Ünïcødé ✓", "   padded   "),
    ];

    for (title, message) in cases {
        presenter.display(&Notification::normal(title, message));
        let surface = presenter.surface().expect("surface is mounted");
        assert_eq!(surface.title(), title);
        assert_eq!(surface.message(), message);
    }
}

#[test]
fn severity_selects_style_and_icon() {
    let mut presenter = mounted();

    presenter.display(&Notification::success("t", "m"));
    let surface = presenter.surface().expect("surface is mounted");
    assert_eq!(surface.appearance(), Severity::Success.style().appearance);
    assert_eq!(surface.icon(), Some(Glyph::Checkmark));

    presenter.display(&Notification::error("t", "m"));
    let surface = presenter.surface().expect("surface is mounted");
    assert_eq!(surface.appearance(), Severity::Error.style().appearance);
    assert_eq!(surface.icon(), Some(Glyph::Cross));
}

#[test]
fn normal_and_unknown_severity_leave_icon_untouched() {
    let mut presenter = mounted();
    presenter.display(&Notification::error("Failed", "first"));

    presenter.display(&Notification::new(Severity::from("warning"), "Heads up", "second"));
    let surface = presenter.surface().expect("surface is mounted");
    assert_eq!(surface.appearance(), Severity::Normal.style().appearance);
    assert_eq!(surface.icon(), Some(Glyph::Cross));

    let mut fresh = mounted();
    fresh.display(&Notification::normal("Hi", "no icon yet"));
    assert_eq!(fresh.surface().and_then(ToastSurface::icon), None);
}

#[test]
fn display_makes_surface_visible_synchronously() {
    let mut presenter = mounted();
    presenter.display(&Notification::normal("t", "m"));

    let surface = presenter.surface().expect("surface is mounted");
    assert_eq!(surface.visibility(), Visibility::Visible);
    assert_eq!(surface.presentation(), Visibility::Visible.presentation());
}

#[test]
fn redisplay_resets_countdown_and_hides_once() {
    let mut presenter = mounted();
    let origin = Instant::now();

    presenter.display_at(&Notification::normal("first", "1").with_duration(ms(1000)), origin);
    assert!(hides_between(&mut presenter, origin, 0, 500).is_empty());

    presenter.display_at(
        &Notification::success("second", "2").with_duration(ms(1000)),
        origin + ms(600),
    );

    // The first deadline (1000ms) passes without effect; only the second (1600ms) fires.
    let hides = hides_between(&mut presenter, origin, 600, 3000);
    assert_eq!(hides, vec![1600]);

    let surface = presenter.surface().expect("surface is mounted");
    assert!(!surface.is_visible());
    assert_eq!(surface.title(), "second");
}

#[test]
fn shorter_second_duration_still_replaces_first_timer() {
    let mut presenter = mounted();
    let origin = Instant::now();

    presenter.display_at(&Notification::normal("first", "1").with_duration(ms(5000)), origin);
    presenter.display_at(
        &Notification::normal("second", "2").with_duration(ms(200)),
        origin + ms(100),
    );

    assert_eq!(hides_between(&mut presenter, origin, 100, 6000), vec![300]);
}

#[test]
fn toast_hides_exactly_once_after_duration() {
    let mut presenter = mounted();
    let origin = Instant::now();
    presenter.display_at(&Notification::normal("t", "m"), origin);

    let default_ms = u64::try_from(presenter.default_duration().as_millis())
        .expect("default duration fits in u64");
    let hides = hides_between(&mut presenter, origin, 0, default_ms * 2);

    assert_eq!(hides, vec![default_ms]);
    assert!(!presenter.has_pending_dismissal());
}

#[test]
fn display_without_surface_is_a_no_op() {
    let mut presenter = Presenter::detached(&Config::default());

    presenter.display(&Notification::success("t", "m"));
    assert!(presenter.surface().is_none());
    assert!(!presenter.has_pending_dismissal());

    // Mounting afterwards yields the untouched surface.
    let original = ToastSurface::new().with_icon(Glyph::Checkmark);
    presenter.mount(original.clone());
    assert_eq!(presenter.surface(), Some(&original));
}
