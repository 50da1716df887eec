mod common;

use common::{make_app_on, press};
use crossterm::event::KeyCode;
use termfolio::ui::pages::{Page, PageView, ABOUT_SECTIONS};
use termfolio::ui::reveal::{RegionHandle, RegionId, RevealDriver, Viewport};

fn handles() -> Vec<(RegionId, Option<RegionHandle>)> {
    vec![
        (RegionId(0), Some(RegionHandle { top: 0, height: 10 })),
        (RegionId(1), Some(RegionHandle { top: 30, height: 10 })),
        (RegionId(2), Some(RegionHandle { top: 100, height: 10 })),
    ]
}

#[test]
fn region_below_threshold_never_appears() {
    let mut driver = RevealDriver::mount(0.3, 3);
    // Region 1 peeks in by two rows (20%) and no further.
    for height in [30, 31, 32, 31, 30] {
        driver.sync(handles(), Viewport { offset: 0, height });
    }
    assert!(driver.is_revealed(RegionId(0)));
    assert!(!driver.is_revealed(RegionId(1)));
    assert!(!driver.is_revealed(RegionId(2)));
}

#[test]
fn crossing_twice_records_one_entry() {
    let mut driver = RevealDriver::mount(0.3, 3);
    let viewport = |offset| Viewport { offset, height: 20 };
    driver.sync(handles(), viewport(25));
    assert!(driver.is_revealed(RegionId(1)));
    driver.sync(handles(), viewport(60));
    driver.sync(handles(), viewport(25));
    assert!(driver.is_revealed(RegionId(1)));
    assert_eq!(driver.set().revealed_count(), 1);
}

#[test]
fn membership_survives_fraction_dropping_to_zero() {
    let mut driver = RevealDriver::mount(0.2, 3);
    driver.sync(handles(), Viewport { offset: 95, height: 20 });
    assert!(driver.is_revealed(RegionId(2)));
    driver.sync(handles(), Viewport { offset: 0, height: 5 });
    assert!(driver.is_revealed(RegionId(2)));
}

#[test]
fn unmounted_driver_ignores_the_viewport() {
    let mut driver = RevealDriver::mount(0.2, 3);
    driver.unmount();
    assert!(!driver.is_observing());
    driver.sync(handles(), Viewport { offset: 0, height: 200 });
    assert_eq!(driver.set().revealed_count(), 0);
}

#[test]
fn about_sections_reveal_as_the_page_scrolls() {
    let mut app = make_app_on(Page::About);
    app.on_resize(80, 12);

    let revealed = |app: &termfolio::ui::app::App| match app.view() {
        PageView::About(about) => about.sections().set().revealed_count(),
        other => panic!("expected the about page, got {:?}", other.page()),
    };
    let first = revealed(&app);
    assert!(first >= 1, "header should be revealed on mount");
    assert!(first < ABOUT_SECTIONS);

    press(&mut app, KeyCode::End);
    let after = revealed(&app);
    assert!(after > first);

    // Scrolling back up never un-reveals anything.
    press(&mut app, KeyCode::Home);
    assert_eq!(revealed(&app), after);
}

#[test]
fn home_timeline_reveals_on_scroll() {
    let mut app = make_app_on(Page::Home);
    app.on_resize(100, 10);
    let timeline = |app: &termfolio::ui::app::App| match app.view() {
        PageView::Home(home) => home.timeline().set().revealed_count(),
        other => panic!("expected home, got {:?}", other.page()),
    };
    assert_eq!(timeline(&app), 0);
    for _ in 0..200 {
        press(&mut app, KeyCode::Down);
    }
    assert!(timeline(&app) > 0);
}

#[test]
fn tall_region_needs_enough_rows_to_cross_the_threshold() {
    let tall = || vec![(RegionId(0), Some(RegionHandle { top: 10, height: 25 }))];

    // Four rows of a 25-row region is 16%, wherever the viewport sits.
    let mut short = RevealDriver::mount(0.2, 1);
    for offset in 0..40 {
        short.sync(tall(), Viewport { offset, height: 4 });
    }
    assert!(!short.is_revealed(RegionId(0)));

    let mut taller = RevealDriver::mount(0.2, 1);
    taller.sync(tall(), Viewport { offset: 12, height: 5 });
    assert!(taller.is_revealed(RegionId(0)));
}
