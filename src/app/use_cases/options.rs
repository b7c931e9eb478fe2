//! Use-Case für das Übernehmen von Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::{EditorOptions, SceneChange};

/// Übernimmt Optionen, berechnet Kurven bei geänderter Sample-Anzahl neu
/// und speichert die Optionen, falls ein Pfad hinterlegt ist.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    let options = options.sanitized();
    if options == state.options {
        return Ok(());
    }

    let resampled = state.scene.set_sample_count(options.sample_count);
    if let Some(change) = resampled {
        log::info!(
            "Sample-Anzahl: {} → alle Kurven neu berechnet",
            options.sample_count
        );
        state.push_scene_changes([change]);
    }

    // Stil-Änderungen betreffen alle gezeichneten Elemente
    state.push_scene_changes([SceneChange::AllCurvesUpdated, SceneChange::PendingUpdated]);
    state.options = options;

    if let Some(path) = &state.options_path {
        state.options.save_to_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveDegree;
    use glam::Vec2;

    #[test]
    fn sample_count_change_reevaluates_curves() {
        let mut state = AppState::new();
        state.scene.set_degree(CurveDegree::Linear);
        state.scene.add_point(Vec2::ZERO);
        state.scene.add_point(Vec2::new(10.0, 0.0));

        let options = EditorOptions {
            sample_count: 4,
            ..EditorOptions::default()
        };
        apply_options(&mut state, options).expect("ohne Pfad kein I/O");

        assert_eq!(state.scene.sample_count(), 4);
        assert_eq!(state.scene.curves()[0].polyline().len(), 5);
        assert!(state
            .view
            .scene_changes
            .contains(&SceneChange::AllCurvesUpdated));
    }

    #[test]
    fn unchanged_options_cause_no_redraw() {
        let mut state = AppState::new();
        let options = state.options.clone();
        apply_options(&mut state, options).expect("ohne Pfad kein I/O");
        assert!(state.view.scene_changes.is_empty());
    }

    #[test]
    fn options_are_sanitized() {
        let mut state = AppState::new();
        let options = EditorOptions {
            sample_count: 0,
            ..EditorOptions::default()
        };
        apply_options(&mut state, options).expect("ohne Pfad kein I/O");
        assert_eq!(state.options.sample_count, 1);
        assert_eq!(state.scene.sample_count(), 1);
    }
}
