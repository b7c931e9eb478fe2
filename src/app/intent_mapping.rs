//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{CurveDegree, EditorPhase};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            let mut commands = Vec::with_capacity(2);

            // Verlorenes Release (z.B. Fokuswechsel) → alten Drag zuerst beenden
            if state.scene.phase() == EditorPhase::DraggingPoint {
                commands.push(AppCommand::EndDrag);
            }

            match state.scene.hit_test(pos, state.options.hit_threshold_px) {
                Some(target) => commands.push(AppCommand::BeginDrag { target }),
                None => commands.push(AppCommand::AddPoint { pos }),
            }
            commands
        }
        AppIntent::PointerMoved { pos } => match state.scene.phase() {
            EditorPhase::DraggingPoint => vec![AppCommand::DragPointTo { pos }],
            EditorPhase::Idle => vec![],
        },
        AppIntent::PointerReleased { .. } => match state.scene.phase() {
            EditorPhase::DraggingPoint => vec![AppCommand::EndDrag],
            EditorPhase::Idle => vec![],
        },
        AppIntent::SetDegreeRequested { point_count } => {
            match CurveDegree::try_from(point_count) {
                Ok(degree) => vec![AppCommand::SetDegree { degree }],
                Err(e) => {
                    log::warn!("{}", e);
                    vec![]
                }
            }
        }
        AppIntent::UndoRequested => vec![AppCommand::UndoLastAction],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::OpenOptionsRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DragTarget;
    use glam::Vec2;

    fn state_with_linear_curve() -> AppState {
        let mut state = AppState::new();
        state.scene.set_degree(CurveDegree::Linear);
        state.scene.add_point(Vec2::new(100.0, 100.0));
        state.scene.add_point(Vec2::new(200.0, 100.0));
        state
    }

    #[test]
    fn press_near_control_point_begins_drag() {
        let state = state_with_linear_curve();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                pos: Vec2::new(195.0, 103.0),
            },
        );
        assert_eq!(
            commands,
            vec![AppCommand::BeginDrag {
                target: DragTarget { curve: 0, point: 1 }
            }]
        );
    }

    #[test]
    fn press_elsewhere_adds_point() {
        let state = state_with_linear_curve();
        let pos = Vec2::new(150.0, 300.0);
        let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });
        assert_eq!(commands, vec![AppCommand::AddPoint { pos }]);
    }

    #[test]
    fn hit_threshold_comes_from_options() {
        let mut state = state_with_linear_curve();
        state.options.hit_threshold_px = 2.0;
        let pos = Vec2::new(195.0, 103.0);
        let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });
        assert_eq!(commands, vec![AppCommand::AddPoint { pos }]);
    }

    #[test]
    fn move_and_release_are_ignored_while_idle() {
        let state = state_with_linear_curve();
        let pos = Vec2::new(1.0, 1.0);
        assert!(map_intent_to_commands(&state, AppIntent::PointerMoved { pos }).is_empty());
        assert!(map_intent_to_commands(&state, AppIntent::PointerReleased { pos }).is_empty());
    }

    #[test]
    fn press_during_stale_drag_ends_it_first() {
        let mut state = state_with_linear_curve();
        assert!(state.scene.begin_drag(DragTarget { curve: 0, point: 0 }));
        let pos = Vec2::new(500.0, 500.0);
        let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });
        assert_eq!(commands, vec![AppCommand::EndDrag, AppCommand::AddPoint { pos }]);
    }

    #[test]
    fn invalid_degree_is_rejected() {
        let state = AppState::new();
        for point_count in [0, 1, 5, 255] {
            assert!(
                map_intent_to_commands(&state, AppIntent::SetDegreeRequested { point_count })
                    .is_empty()
            );
        }
        assert_eq!(
            map_intent_to_commands(&state, AppIntent::SetDegreeRequested { point_count: 3 }),
            vec![AppCommand::SetDegree {
                degree: CurveDegree::Quadratic
            }]
        );
    }
}
