//! Integration tests for carousels driven through the public API.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use vitrine::carousel::{
    kind_filter, text_filter, topic_filter, CarouselController, Key, KeyPress, Modifiers,
};
use vitrine::net::{EntryKind, ListDataSource, Repository, ResumeSource, TimelineEntry};
use vitrine::session::{CarouselSession, LoadState};
use vitrine::{CarouselError, ManualClock, Signal};

#[derive(Debug, Clone, PartialEq)]
struct Card {
    name: &'static str,
    tag: &'static str,
}

fn cards() -> Vec<Card> {
    vec![
        Card { name: "A", tag: "x" },
        Card { name: "B", tag: "y" },
        Card { name: "C", tag: "x" },
    ]
}

fn repo(name: &str, topic: &str, day: u32) -> Repository {
    Repository {
        name: name.to_string(),
        description: None,
        topics: vec![topic.to_string()],
        html_url: format!("https://github.com/u/{name}"),
        updated_at: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
        language: None,
        homepage: None,
    }
}

fn names(c: &CarouselController<Card>) -> Vec<&'static str> {
    c.visible_items().map(|card| card.name).collect()
}

#[test]
fn filter_by_tag_then_navigate() {
    let mut c = CarouselController::new();
    c.initialize(cards());
    c.filter_by(|card: &Card| card.tag == "x");

    assert_eq!(names(&c), vec!["A", "C"]);
    assert_eq!(c.current_index(), Some(0));

    c.next();
    assert_eq!(c.current_item().map(|card| card.name), Some("C"));
    c.next();
    assert_eq!(c.current_item().map(|card| card.name), Some("A"));

    assert_eq!(c.jump_to(2), Err(CarouselError::OutOfRange { index: 2, len: 2 }));
}

#[test]
fn filter_to_nothing_then_back() {
    let mut c = CarouselController::new();
    c.initialize(cards());
    c.filter_by(|card: &Card| card.tag == "z");
    assert!(c.is_empty());
    assert!(c.snapshot().is_empty());
    c.next();
    assert_eq!(c.current_item(), None);

    c.clear_filter();
    assert_eq!(names(&c), vec!["A", "B", "C"]);
}

#[test]
fn autoplay_cycles_on_manual_clock() {
    let clock = Arc::new(ManualClock::new());
    let mut c = CarouselController::with_clock(clock.clone());
    c.initialize(cards());
    c.set_autoplay(true, Duration::from_millis(3000));

    let mut seen = Vec::new();
    for _ in 0..4 {
        clock.advance(Duration::from_millis(3000));
        c.process_events();
        seen.push(c.current_item().map(|card| card.name).unwrap_or("-"));
    }
    assert_eq!(seen, vec!["B", "C", "A", "B"]);
    assert!(c.is_playing());
}

#[test]
fn missed_intervals_coalesce_into_one_tick() {
    let clock = Arc::new(ManualClock::new());
    let mut c = CarouselController::with_clock(clock.clone());
    c.initialize(cards());
    c.set_autoplay(true, Duration::from_millis(100));

    clock.advance(Duration::from_millis(1000));
    assert_eq!(c.process_events(), 1);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn zero_interval_advances_once_per_pump() {
    let clock = Arc::new(ManualClock::new());
    let mut c = CarouselController::with_clock(clock.clone());
    c.initialize(cards());
    c.set_autoplay(true, Duration::ZERO);

    c.process_events();
    c.process_events();
    assert_eq!(c.autoplay_ticks(), 2);
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn dispose_before_first_tick_cancels_autoplay() {
    let clock = Arc::new(ManualClock::new());
    let mut c = CarouselController::with_clock(clock.clone());
    c.initialize(cards());
    c.set_autoplay(true, Duration::from_millis(3000));
    c.dispose();

    clock.advance(Duration::from_secs(60));
    assert_eq!(c.process_events(), 0);
    assert_eq!(c.autoplay_ticks(), 0);
    assert_eq!(c.active_timer_count(), 0);
}

#[test]
fn keyboard_input_routes_through_event_pump() {
    let keys: Arc<Signal<KeyPress>> = Arc::new(Signal::new());
    let mut c = CarouselController::new();
    c.initialize(cards());
    c.bind_keyboard(&keys);
    assert_eq!(keys.connection_count(), 1);

    keys.emit(Key::ArrowRight.into());
    keys.emit(Key::ArrowRight.into());
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.time_until_next_event(), Some(Duration::ZERO));

    assert_eq!(c.process_events(), 2);
    assert_eq!(c.current_index(), Some(2));

    keys.emit(Key::Home.into());
    keys.emit(KeyPress::with_modifiers(Key::End, Modifiers::CTRL));
    c.process_events();
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn keyboard_navigation_pauses_before_same_pump_tick() {
    let keys: Arc<Signal<KeyPress>> = Arc::new(Signal::new());
    let clock = Arc::new(ManualClock::new());
    let mut c = CarouselController::with_clock(clock.clone());
    c.initialize(cards());
    c.bind_keyboard(&keys);
    c.set_autoplay(true, Duration::from_millis(500));

    clock.advance(Duration::from_millis(500));
    keys.emit(Key::ArrowLeft.into());
    c.process_events();

    assert_eq!(c.current_index(), Some(2));
    assert!(!c.is_playing());
    assert_eq!(c.autoplay_ticks(), 0);
}

#[test]
fn rebinding_keyboard_replaces_registration() {
    let first: Arc<Signal<KeyPress>> = Arc::new(Signal::new());
    let second: Arc<Signal<KeyPress>> = Arc::new(Signal::new());
    let mut c = CarouselController::new();
    c.initialize(cards());

    c.bind_keyboard(&first);
    c.bind_keyboard(&second);
    assert_eq!(first.connection_count(), 0);
    assert_eq!(second.connection_count(), 1);
}

#[test]
fn dispose_releases_keyboard() {
    let keys: Arc<Signal<KeyPress>> = Arc::new(Signal::new());
    let mut c = CarouselController::new();
    c.initialize(cards());
    c.bind_keyboard(&keys);

    c.dispose();
    assert_eq!(keys.connection_count(), 0);
    assert!(!c.is_keyboard_bound());

    keys.emit(Key::ArrowRight.into());
    assert_eq!(c.process_events(), 0);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn drop_releases_keyboard() {
    let keys: Arc<Signal<KeyPress>> = Arc::new(Signal::new());
    {
        let mut c = CarouselController::<Card>::new();
        c.bind_keyboard(&keys);
        assert_eq!(keys.connection_count(), 1);
    }
    assert_eq!(keys.connection_count(), 0);
}

#[test]
fn repository_search_and_topics() {
    let mut c = CarouselController::new();
    c.initialize(vec![
        repo("portfolio", "react", 3),
        repo("etl-pipeline", "python", 2),
        repo("dashboards", "python", 1),
    ]);

    c.set_filter(topic_filter("Python").into());
    assert_eq!(c.len(), 2);
    assert_eq!(c.current_item().map(|r| r.name.as_str()), Some("etl-pipeline"));

    c.set_filter(text_filter("dash"));
    assert_eq!(c.len(), 1);

    c.set_filter(text_filter("   "));
    assert_eq!(c.len(), 3);
    assert!(!c.has_filter());
}

#[tokio::test]
async fn resume_session_filters_by_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkedin-data.json");
    std::fs::write(
        &path,
        r#"{
            "experiences": [
                {"role": "Data Analyst", "company": "Walmart", "date": "Jan 2023 - Present"}
            ],
            "education": [
                {"degree": "B.Sc. Statistics", "institution": "State University", "year": "2021"}
            ],
            "certifications": [
                {"title": "Generative AI Fundamentals", "issuer": "Databricks", "date": "May 7, 2024"}
            ]
        }"#,
    )
    .unwrap();

    let source = ResumeSource::from_file(&path);
    assert_eq!(source.load().await.unwrap().len(), 3);

    let mut session = CarouselSession::new(source);
    session.load().await.unwrap();
    assert_eq!(session.state(), &LoadState::Ready);

    let titles: Vec<&str> = session
        .controller()
        .visible_items()
        .map(|entry: &TimelineEntry| entry.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Data Analyst", "Generative AI Fundamentals", "B.Sc. Statistics"]
    );

    session.controller_mut().set_filter(Some(kind_filter(EntryKind::Education)));
    assert_eq!(
        session.controller().current_item().map(|e| e.organization.as_str()),
        Some("State University")
    );
}

#[tokio::test]
async fn failed_session_load_keeps_controller_uninitialized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkedin-data.json");

    let mut session = CarouselSession::new(ResumeSource::from_file(&path));
    assert!(session.load().await.is_err());
    assert!(matches!(session.state(), LoadState::Failed(_)));
    assert!(session.controller().is_empty());
    assert!(!session.is_showing_empty_result());

    std::fs::write(&path, r#"{"experiences": [], "education": []}"#).unwrap();
    session.retry().await.unwrap();
    assert_eq!(session.state(), &LoadState::Ready);
    assert!(session.is_showing_empty_result());
}
