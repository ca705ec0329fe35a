use crate::seeded_state;
use route_map_demo::{AppCommand, AppController, AppIntent, AppState, StopColor};

fn color_mode_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = seeded_state(21, 8);
    controller
        .handle_intent(&mut state, AppIntent::ColorModeToggled)
        .expect("ColorModeToggled sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn click(controller: &mut AppController, state: &mut AppState, id: u64) {
    controller
        .handle_intent(state, AppIntent::StopClicked { id })
        .expect("StopClicked sollte ohne Fehler durchlaufen");
}

#[test]
fn test_stop_click_outside_color_mode_is_ignored() {
    let mut controller = AppController::new();
    let mut state = seeded_state(21, 8);

    click(&mut controller, &mut state, 2);

    assert!(state.selection.is_empty());
}

#[test]
fn test_apply_colors_selected_stops_and_clears_selection() {
    let (mut controller, mut state) = color_mode_state();

    click(&mut controller, &mut state, 2);
    click(&mut controller, &mut state, 5);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ActiveColorChanged {
                color: StopColor::Blue,
            },
        )
        .expect("ActiveColorChanged sollte ohne Fehler durchlaufen");

    // Farbwahl ändert weder Selektion noch Stopps
    assert_eq!(state.selection.len(), 2);
    assert!(state.stops.iter().all(|s| s.color == StopColor::White));

    controller
        .handle_intent(&mut state, AppIntent::ApplyColorRequested)
        .expect("ApplyColorRequested sollte ohne Fehler durchlaufen");

    for stop in state.stops.iter() {
        let expected = if stop.id == 2 || stop.id == 5 {
            StopColor::Blue
        } else {
            StopColor::White
        };
        assert_eq!(stop.color, expected, "Farbe von Stopp {}", stop.id);
    }
    assert!(state.selection.is_empty());
    assert!(state.interaction.color_mode_active());
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::ApplyActiveColor)
    ));
}

#[test]
fn test_second_click_deselects_stop() {
    let (mut controller, mut state) = color_mode_state();

    click(&mut controller, &mut state, 3);
    assert!(state.selection.contains(3));

    click(&mut controller, &mut state, 3);
    assert!(!state.selection.contains(3));
}

#[test]
fn test_unknown_stop_id_is_not_selected() {
    let (mut controller, mut state) = color_mode_state();

    click(&mut controller, &mut state, 999);

    assert!(state.selection.is_empty());
}

#[test]
fn test_apply_with_empty_selection_changes_nothing() {
    let (mut controller, mut state) = color_mode_state();
    let before = (*state.stops).clone();

    controller
        .handle_intent(&mut state, AppIntent::ApplyColorRequested)
        .expect("ApplyColorRequested sollte ohne Fehler durchlaufen");

    assert_eq!(*state.stops, before);
}

#[test]
fn test_leaving_color_mode_keeps_selection_and_colors() {
    let (mut controller, mut state) = color_mode_state();

    click(&mut controller, &mut state, 1);
    controller
        .handle_intent(&mut state, AppIntent::ApplyColorRequested)
        .expect("ApplyColorRequested sollte ohne Fehler durchlaufen");
    click(&mut controller, &mut state, 4);

    controller
        .handle_intent(&mut state, AppIntent::ColorModeToggled)
        .expect("ColorModeToggled sollte ohne Fehler durchlaufen");

    assert!(!state.interaction.color_mode_active());
    assert!(state.selection.contains(4));
    let recolored = state.find_stop(1).expect("Stopp 1 sollte existieren");
    assert_eq!(recolored.color, StopColor::Red);

    // Klicks werden außerhalb des Farbmodus ignoriert
    click(&mut controller, &mut state, 4);
    assert!(state.selection.contains(4));
}
