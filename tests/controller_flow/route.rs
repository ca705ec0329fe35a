use crate::seeded_state;
use route_map_demo::app::ColorMode;
use route_map_demo::{AppCommand, AppController, AppIntent, AppState, GeoPoint, Stop};
use std::sync::Arc;

/// Drei Stopps auf einer Linie: A=(1,0), B=(5,0), C=(2,0).
fn line_state() -> AppState {
    let mut state = seeded_state(7, 5);
    state.stops = Arc::new(vec![
        Stop::new(1, GeoPoint::new(1.0, 0.0)),
        Stop::new(2, GeoPoint::new(5.0, 0.0)),
        Stop::new(3, GeoPoint::new(2.0, 0.0)),
    ]);
    state
}

fn drop_start(controller: &mut AppController, state: &mut AppState, position: GeoPoint) {
    controller
        .handle_intent(state, AppIntent::DropModeRequested)
        .expect("DropModeRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(state, AppIntent::MapClicked { position })
        .expect("MapClicked sollte ohne Fehler durchlaufen");
}

#[test]
fn test_drop_then_sort_labels_stops_in_greedy_order() {
    let mut controller = AppController::new();
    let mut state = line_state();

    drop_start(&mut controller, &mut state, GeoPoint::new(0.0, 0.0));
    assert_eq!(state.start_point, Some(GeoPoint::new(0.0, 0.0)));
    assert!(!state.interaction.drop_pending());

    controller
        .handle_intent(&mut state, AppIntent::SortRequested)
        .expect("SortRequested sollte ohne Fehler durchlaufen");

    let order: Vec<u64> = state.stops.iter().map(|s| s.id).collect();
    let labels: Vec<Option<u32>> = state.stops.iter().map(|s| s.label).collect();
    assert_eq!(order, vec![1, 3, 2]);
    assert_eq!(labels, vec![Some(1), Some(2), Some(3)]);

    let stop = state.find_stop(3).expect("Stopp 3 sollte existieren");
    assert_eq!(stop.display_title(), "Stop 2");
    assert_eq!(stop.name, "Stop 3");

    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::SortStopsByDistance)
    ));
}

#[test]
fn test_map_click_without_drop_mode_keeps_start_point() {
    let mut controller = AppController::new();
    let mut state = line_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                position: GeoPoint::new(3.0, 3.0),
            },
        )
        .expect("MapClicked sollte ohne Fehler durchlaufen");

    assert!(state.start_point.is_none());
}

#[test]
fn test_second_map_click_after_drop_is_ignored() {
    let mut controller = AppController::new();
    let mut state = line_state();

    drop_start(&mut controller, &mut state, GeoPoint::new(0.0, 0.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                position: GeoPoint::new(9.0, 9.0),
            },
        )
        .expect("MapClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.start_point, Some(GeoPoint::new(0.0, 0.0)));
}

#[test]
fn test_sort_without_start_point_leaves_stops_unchanged() {
    let mut controller = AppController::new();
    let mut state = line_state();
    let before = (*state.stops).clone();

    controller
        .handle_intent(&mut state, AppIntent::SortRequested)
        .expect("SortRequested sollte ohne Fehler durchlaufen");

    assert_eq!(*state.stops, before);
}

#[test]
fn test_new_start_point_resorts_and_relabels() {
    let mut controller = AppController::new();
    let mut state = line_state();

    drop_start(&mut controller, &mut state, GeoPoint::new(0.0, 0.0));
    controller
        .handle_intent(&mut state, AppIntent::SortRequested)
        .expect("SortRequested sollte ohne Fehler durchlaufen");

    drop_start(&mut controller, &mut state, GeoPoint::new(6.0, 0.0));
    controller
        .handle_intent(&mut state, AppIntent::SortRequested)
        .expect("SortRequested sollte ohne Fehler durchlaufen");

    let order: Vec<u64> = state.stops.iter().map(|s| s.id).collect();
    assert_eq!(order, vec![2, 3, 1]);
    assert_eq!(state.stops[0].label, Some(1));
    assert_eq!(state.stops[2].label, Some(3));
}

#[test]
fn test_sorting_keeps_colors() {
    let mut controller = AppController::new();
    let mut state = line_state();

    controller
        .handle_intent(&mut state, AppIntent::ColorModeToggled)
        .expect("ColorModeToggled sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::StopClicked { id: 2 })
        .expect("StopClicked sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ApplyColorRequested)
        .expect("ApplyColorRequested sollte ohne Fehler durchlaufen");

    drop_start(&mut controller, &mut state, GeoPoint::new(0.0, 0.0));
    controller
        .handle_intent(&mut state, AppIntent::SortRequested)
        .expect("SortRequested sollte ohne Fehler durchlaufen");

    let stop = state.find_stop(2).expect("Stopp 2 sollte existieren");
    assert_eq!(stop.color, state.interaction.active_color);
    assert_eq!(stop.label, Some(3));
}

#[test]
fn test_regenerate_resets_route_and_selection_but_keeps_color_mode() {
    let mut controller = AppController::new();
    let mut state = seeded_state(9, 12);

    controller
        .handle_intent(&mut state, AppIntent::ColorModeToggled)
        .expect("ColorModeToggled sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::StopClicked { id: 4 })
        .expect("StopClicked sollte ohne Fehler durchlaufen");
    drop_start(&mut controller, &mut state, GeoPoint::new(40.16, -75.12));
    controller
        .handle_intent(&mut state, AppIntent::DropModeRequested)
        .expect("DropModeRequested sollte ohne Fehler durchlaufen");
    let before = (*state.stops).clone();

    controller
        .handle_intent(&mut state, AppIntent::RegenerateRequested)
        .expect("RegenerateRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.stop_count(), 12);
    assert_ne!(*state.stops, before);
    assert!(state.start_point.is_none());
    assert!(state.selection.is_empty());
    assert!(!state.interaction.drop_pending());
    assert_eq!(state.interaction.color_mode, ColorMode::SelectMode);
    assert!(state.stops.iter().all(|s| s.label.is_none()));
}
