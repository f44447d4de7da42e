use approx::assert_abs_diff_eq;
use regression_playground::{
    ControlPoint, DragState, ErrorBarConfig, GestureEvent, HitTarget, HitTolerance,
    InteractionController, InteractionMode, InteractionSettings, PlotScale, RegressionParameters,
    RenderCommand, RenderLog, Sample,
};

// x = [0, 10], y = [5, 35]; default line y = x + 1 has handles at (0, 1) and (10, 11).
fn two_point_sample() -> Sample {
    Sample::new(vec![0.0, 10.0], vec![5.0, 35.0]).unwrap()
}

fn settings() -> InteractionSettings {
    InteractionSettings {
        tolerance: HitTolerance {
            control_point_radius: 0.5,
            line_band: 0.25,
        },
        ..InteractionSettings::default()
    }
}

fn controller() -> InteractionController<RenderLog> {
    InteractionController::new(two_point_sample(), settings(), RenderLog::new())
}

fn down(c: &mut InteractionController<RenderLog>, x: f64, y: f64) {
    c.handle(GestureEvent::PointerDown(Some([x, y])));
}

fn drag_to(c: &mut InteractionController<RenderLog>, x: f64, y: f64) -> bool {
    c.handle(GestureEvent::PointerMove(Some([x, y])))
}

#[test]
fn starts_idle_at_default_parameters() {
    let c = controller();
    assert_eq!(c.drag_state(), DragState::Idle);
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
    assert!(c.binding().commands.is_empty());
}

#[test]
fn dragging_start_pins_start_and_keeps_end() {
    let mut c = controller();
    down(&mut c, 0.1, 1.2);
    assert_eq!(c.drag_state(), DragState::DraggingStart);
    assert!(c.binding().commands.is_empty(), "press alone must not render");

    assert!(drag_to(&mut c, 3.0, 7.0));
    let p = c.parameters();
    assert_abs_diff_eq!(p.eval(0.0), 7.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.eval(10.0), 11.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.slope, 0.4, epsilon = 1e-12);
    assert_eq!(c.drag_state(), DragState::DraggingStart);
}

#[test]
fn dragging_end_pins_end_and_keeps_start() {
    let mut c = controller();
    down(&mut c, 10.0, 10.9);
    assert_eq!(c.drag_state(), DragState::DraggingEnd);

    assert!(drag_to(&mut c, 9.0, 21.0));
    let p = c.parameters();
    assert_abs_diff_eq!(p.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.intercept, 1.0, epsilon = 1e-12);
}

#[test]
fn successive_start_moves_hold_the_current_end() {
    let mut c = controller();
    down(&mut c, 0.0, 1.0);
    drag_to(&mut c, 0.0, 4.0);
    drag_to(&mut c, 0.0, -2.0);
    let p = c.parameters();
    assert_abs_diff_eq!(p.eval(0.0), -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.eval(10.0), 11.0, epsilon = 1e-12);
}

#[test]
fn dragging_line_translates_vertically() {
    let mut c = controller();
    down(&mut c, 5.0, 6.1);
    assert!(matches!(c.drag_state(), DragState::DraggingLine { .. }));

    assert!(drag_to(&mut c, 5.0, 8.1));
    let p = c.parameters();
    assert_abs_diff_eq!(p.slope, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.intercept, 3.0, epsilon = 1e-12);
    match c.drag_state() {
        DragState::DraggingLine { last_pointer_y } => assert_eq!(last_pointer_y, 8.1),
        other => panic!("unexpected drag state {other:?}"),
    }
}

#[test]
fn line_drags_compose_additively() {
    let mut split = controller();
    down(&mut split, 5.0, 6.0);
    drag_to(&mut split, 5.0, 8.5);
    drag_to(&mut split, 5.0, 7.25);

    let mut single = controller();
    down(&mut single, 5.0, 6.0);
    drag_to(&mut single, 5.0, 7.25);

    assert_abs_diff_eq!(
        split.parameters().intercept,
        single.parameters().intercept,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(split.parameters().intercept, 2.25, epsilon = 1e-12);
    assert_eq!(split.parameters().slope, single.parameters().slope);
}

#[test]
fn horizontal_pointer_motion_does_not_move_the_line() {
    let mut c = controller();
    down(&mut c, 5.0, 6.0);
    drag_to(&mut c, 8.0, 6.0);
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
}

#[test]
fn start_wins_over_end_and_line() {
    let mut settings = settings();
    settings.tolerance.control_point_radius = 100.0;
    let c = InteractionController::new(two_point_sample(), settings, RenderLog::new());
    assert_eq!(
        c.hit_test([5.0, 6.0]),
        Some(HitTarget::ControlPoint(ControlPoint::Start))
    );
}

#[test]
fn end_wins_over_line() {
    let c = controller();
    assert_eq!(
        c.hit_test([9.9, 10.9]),
        Some(HitTarget::ControlPoint(ControlPoint::End))
    );
    assert_eq!(c.hit_test([9.0, 10.0]), Some(HitTarget::Line));
}

#[test]
fn line_hit_requires_x_inside_domain() {
    let c = controller();
    // On the extension of y = x + 1, but left of the start handle.
    assert_eq!(c.hit_test([-2.0, -1.0]), None);
    assert_eq!(c.hit_test([12.0, 13.0]), None);
}

#[test]
fn line_hit_uses_perpendicular_distance() {
    let c = controller();
    // Vertical offset 0.3 is outside the band vertically, but 0.3 / sqrt(2) is inside.
    assert_eq!(c.hit_test([5.0, 6.3]), Some(HitTarget::Line));
    assert_eq!(c.hit_test([5.0, 6.4]), None);
}

#[test]
fn tolerances_scale_with_plot_scale() {
    let settings = InteractionSettings {
        tolerance: HitTolerance {
            control_point_radius: 8.0,
            line_band: 5.0,
        },
        ..InteractionSettings::default()
    };
    let mut c = InteractionController::new(two_point_sample(), settings, RenderLog::new());
    // Ten pixels per data unit on both axes.
    c.set_plot_scale(PlotScale {
        x_per_unit: 0.1,
        y_per_unit: 0.1,
    });
    assert_eq!(
        c.hit_test([0.5, 1.0]),
        Some(HitTarget::ControlPoint(ControlPoint::Start))
    );
    assert_eq!(c.hit_test([1.0, 1.0]), None);
    assert_eq!(c.hit_test([1.0, 1.5]), Some(HitTarget::Line));
}

#[test]
fn invalid_plot_scale_is_ignored() {
    let mut c = controller();
    c.set_plot_scale(PlotScale {
        x_per_unit: 0.0,
        y_per_unit: 1.0,
    });
    c.set_plot_scale(PlotScale {
        x_per_unit: f64::NAN,
        y_per_unit: 1.0,
    });
    assert_eq!(c.plot_scale(), PlotScale::default());
}

#[test]
fn miss_then_move_changes_nothing() {
    let mut c = controller();
    down(&mut c, 5.0, 30.0);
    assert_eq!(c.drag_state(), DragState::Idle);
    assert!(!drag_to(&mut c, 5.0, 12.0));
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
    assert!(c.binding().commands.is_empty());
}

#[test]
fn unresolvable_positions_are_ignored() {
    let mut c = controller();
    c.handle(GestureEvent::PointerDown(None));
    assert_eq!(c.drag_state(), DragState::Idle);

    down(&mut c, 5.0, 6.0);
    let before = c.drag_state();
    assert!(!c.handle(GestureEvent::PointerMove(None)));
    assert!(!c.handle(GestureEvent::PointerMove(Some([5.0, f64::NAN]))));
    assert_eq!(c.drag_state(), before);
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
}

#[test]
fn pointer_up_returns_to_idle_without_rendering() {
    let mut c = controller();
    down(&mut c, 5.0, 6.0);
    drag_to(&mut c, 5.0, 7.0);
    let rendered = c.binding().commands.len();
    assert!(!c.handle(GestureEvent::PointerUp));
    assert_eq!(c.drag_state(), DragState::Idle);
    assert_eq!(c.binding().commands.len(), rendered);

    assert!(!drag_to(&mut c, 5.0, 20.0));
}

#[test]
fn parameters_set_is_last_write_wins() {
    let mut c = controller();
    c.handle(GestureEvent::ParametersSet {
        slope: 5.0,
        intercept: 2.0,
    });
    c.handle(GestureEvent::ParametersSet {
        slope: -3.0,
        intercept: 1.0,
    });
    assert_eq!(c.parameters(), RegressionParameters::new(-3.0, 1.0));
    assert_eq!(c.binding().redraw_count(), 2);
}

#[test]
fn parameters_set_leaves_drag_state_alone() {
    let mut c = controller();
    down(&mut c, 10.0, 11.0);
    c.handle(GestureEvent::ParametersSet {
        slope: 0.0,
        intercept: 0.0,
    });
    assert_eq!(c.drag_state(), DragState::DraggingEnd);
}

#[test]
fn non_finite_parameters_are_ignored() {
    let mut c = controller();
    assert!(!c.handle(GestureEvent::ParametersSet {
        slope: f64::INFINITY,
        intercept: 0.0,
    }));
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
}

#[test]
fn overflowing_error_is_rejected_and_axis_stays_finite() {
    let mut c = controller();
    c.render_initial();
    let rendered = c.binding().commands.len();

    assert!(!c.handle(GestureEvent::ParametersSet {
        slope: 1e308,
        intercept: 1e308,
    }));
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
    assert_eq!(c.view().error_scale_max, 602.0);
    assert_eq!(c.binding().commands.len(), rendered);

    assert!(c.set_parameters(3.0, 5.0));
    assert_eq!(c.view().total_error, 0.0);
    assert_eq!(c.binding().last_error_scale(), Some(602.0));
}

#[test]
fn rejected_line_move_keeps_the_anchor() {
    let mut c = controller();
    down(&mut c, 5.0, 6.0);
    assert!(!drag_to(&mut c, 5.0, 1e200));
    assert_eq!(
        c.drag_state(),
        DragState::DraggingLine {
            last_pointer_y: 6.0
        }
    );

    assert!(drag_to(&mut c, 5.0, 7.0));
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 2.0));
}

#[test]
fn two_point_scenario_perfect_and_zero_lines() {
    let mut c = controller();
    c.handle(GestureEvent::ParametersSet {
        slope: 3.0,
        intercept: 5.0,
    });
    assert_eq!(c.view().predictions, vec![5.0, 35.0]);
    assert_eq!(c.view().total_error, 0.0);

    c.handle(GestureEvent::ParametersSet {
        slope: 0.0,
        intercept: 0.0,
    });
    assert_eq!(c.view().predictions, vec![0.0, 0.0]);
    assert_eq!(c.view().total_error, 1250.0);
}

#[test]
fn render_step_pushes_every_element_in_order() {
    let mut c = controller();
    c.handle(GestureEvent::ParametersSet {
        slope: 3.0,
        intercept: 5.0,
    });
    assert_eq!(
        c.binding().commands,
        vec![
            RenderCommand::SetLine(vec![[0.0, 5.0], [10.0, 35.0]]),
            RenderCommand::SetControlPoint(ControlPoint::Start, [0.0, 5.0]),
            RenderCommand::SetControlPoint(ControlPoint::End, [10.0, 35.0]),
            RenderCommand::SetEquationText("y = 3.00x + 5.00".to_string()),
            RenderCommand::SetErrorBarWidth(0.0),
            // Still sized for the initial y = x + 1 error of 592.
            RenderCommand::SetErrorBarScale(602.0),
            RenderCommand::RequestRedraw,
        ]
    );
}

#[test]
fn control_points_follow_the_drag() {
    let mut c = controller();
    down(&mut c, 10.0, 11.0);
    drag_to(&mut c, 10.0, 21.0);
    let end = c.binding().last_control_point(ControlPoint::End).unwrap();
    assert_abs_diff_eq!(end[1], 21.0, epsilon = 1e-12);
    let start = c.binding().last_control_point(ControlPoint::Start).unwrap();
    assert_abs_diff_eq!(start[1], 1.0, epsilon = 1e-12);
    assert_eq!(c.binding().last_equation(), Some("y = 2.00x + 1.00"));
}

#[test]
fn error_scale_grows_but_never_shrinks() {
    let mut c = controller();
    c.render_initial();
    // y = x + 1 misses by 4 and 24: 16 + 576 = 592.
    assert_eq!(c.view().total_error, 592.0);
    assert_eq!(c.binding().last_error_scale(), Some(602.0));

    c.set_parameters(0.0, 0.0);
    assert_eq!(c.binding().last_error_scale(), Some(1260.0));

    c.set_parameters(3.0, 5.0);
    assert_eq!(c.view().total_error, 0.0);
    assert_eq!(c.binding().last_error_scale(), Some(1260.0));
}

#[test]
fn error_scale_starts_at_initial_max() {
    let settings = InteractionSettings {
        direct_defaults: RegressionParameters::new(3.0, 5.0),
        error_bar: ErrorBarConfig {
            initial_max: 50.0,
            margin: 1.0,
        },
        ..settings()
    };
    let mut c = InteractionController::new(two_point_sample(), settings, RenderLog::new());
    c.render_initial();
    assert_eq!(c.binding().last_error_scale(), Some(50.0));
}

#[test]
fn render_initial_pushes_without_changing_parameters() {
    let mut c = controller();
    c.render_initial();
    assert_eq!(c.binding().redraw_count(), 1);
    assert_eq!(c.binding().last_equation(), Some("y = 1.00x + 1.00"));
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
}

#[test]
fn reset_restores_defaults_and_clears_drag() {
    let mut c = controller();
    down(&mut c, 5.0, 6.0);
    drag_to(&mut c, 5.0, 16.0);
    c.reset();
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));
    assert_eq!(c.drag_state(), DragState::Idle);
    assert_eq!(c.binding().last_equation(), Some("y = 1.00x + 1.00"));
}

#[test]
fn declarative_mode_ignores_pointer_events() {
    let settings = InteractionSettings {
        mode: InteractionMode::DeclarativeControl,
        declarative_defaults: RegressionParameters::new(2.0, -4.0),
        ..settings()
    };
    let mut c = InteractionController::new(two_point_sample(), settings, RenderLog::new());
    assert_eq!(c.parameters(), RegressionParameters::new(2.0, -4.0));

    let start = c.view().start_point;
    down(&mut c, start[0], start[1]);
    assert_eq!(c.drag_state(), DragState::Idle);
    assert!(!drag_to(&mut c, 0.0, 10.0));

    assert!(c.set_parameters(1.5, 0.5));
    c.reset();
    assert_eq!(c.parameters(), RegressionParameters::new(2.0, -4.0));
}

#[test]
fn switching_mode_abandons_the_drag() {
    let mut c = controller();
    down(&mut c, 0.0, 1.0);
    assert!(c.drag_state().is_dragging());
    c.set_mode(InteractionMode::DeclarativeControl);
    assert_eq!(c.drag_state(), DragState::Idle);
    assert_eq!(c.parameters(), RegressionParameters::new(1.0, 1.0));

    c.set_mode(InteractionMode::DirectManipulation);
    down(&mut c, 0.0, 1.0);
    assert_eq!(c.drag_state(), DragState::DraggingStart);
}

#[test]
fn drives_a_borrowed_binding() {
    let mut log = RenderLog::new();
    {
        let mut c = InteractionController::new(two_point_sample(), settings(), &mut log);
        c.set_parameters(3.0, 5.0);
    }
    assert_eq!(log.redraw_count(), 1);
}
