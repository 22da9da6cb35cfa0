// tests/properties.rs
use proptest::prelude::*;
use toy_robot::{CommandError, CommandInterpreter, Heading, Position, TABLE_SIZE_X, TABLE_SIZE_Y};

fn arb_heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

fn arb_on_table() -> impl Strategy<Value = (i32, i32)> {
    (0..=TABLE_SIZE_X, 0..=TABLE_SIZE_Y)
}

fn arb_off_table() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        (i32::MIN..0, any::<i32>()),
        (any::<i32>(), i32::MIN..0),
        (TABLE_SIZE_X + 1..=i32::MAX, any::<i32>()),
        (any::<i32>(), TABLE_SIZE_Y + 1..=i32::MAX),
    ]
}

fn placed(x: i32, y: i32, heading: Heading) -> CommandInterpreter {
    let mut robot = CommandInterpreter::new();
    assert_eq!(robot.execute(&format!("PLACE {x},{y},{heading}")), "");
    robot
}

proptest! {
    #[test]
    fn valid_placement_is_reported_back((x, y) in arb_on_table(), heading in arb_heading()) {
        let mut robot = CommandInterpreter::new();
        prop_assert_eq!(robot.execute(&format!("PLACE {x},{y},{heading}")), "");
        prop_assert_eq!(robot.execute("REPORT"), format!("{x},{y},{heading}"));
    }

    #[test]
    fn off_table_placement_changes_nothing(
        (x, y) in arb_off_table(),
        heading in arb_heading(),
        prior in proptest::option::of((arb_on_table(), arb_heading())),
    ) {
        let mut robot = match prior {
            Some(((px, py), ph)) => placed(px, py, ph),
            None => CommandInterpreter::new(),
        };
        let before = robot.state().clone();
        let report = robot.execute("REPORT");

        prop_assert_eq!(
            robot.execute(&format!("PLACE {x},{y},{heading}")),
            CommandError::OutOfBounds.to_string()
        );
        prop_assert_eq!(robot.state(), &before);
        prop_assert_eq!(robot.execute("REPORT"), report);
    }

    #[test]
    fn four_turns_restore_heading((x, y) in arb_on_table(), heading in arb_heading()) {
        for turn in ["LEFT", "RIGHT"] {
            let mut robot = placed(x, y, heading);
            for _ in 0..4 {
                prop_assert_eq!(robot.execute(turn), "");
            }
            prop_assert_eq!(robot.state().heading, Some(heading));
        }
    }

    #[test]
    fn move_either_steps_or_is_refused((x, y) in arb_on_table(), heading in arb_heading()) {
        let mut robot = placed(x, y, heading);
        let target = Position::new(x, y) + heading.step();
        let result = robot.execute("MOVE");

        if robot.table().contains(target) {
            prop_assert_eq!(result, "");
            prop_assert_eq!(robot.execute("REPORT"), format!("{},{},{heading}", target.x, target.y));
        } else {
            prop_assert_eq!(result, CommandError::OutOfBounds.to_string());
            prop_assert_eq!(robot.execute("REPORT"), format!("{x},{y},{heading}"));
        }
    }

    #[test]
    fn placed_robot_never_leaves_the_table(
        (x, y) in arb_on_table(),
        heading in arb_heading(),
        script in prop::collection::vec(prop::sample::select(vec!["MOVE", "LEFT", "RIGHT"]), 0..64),
    ) {
        let mut robot = placed(x, y, heading);
        for cmd in script {
            robot.execute(cmd);
            prop_assert!(robot.state().placed);
            prop_assert!(robot.table().contains(robot.state().position));
        }
    }

    #[test]
    fn arbitrary_input_never_panics(lines in prop::collection::vec(".{0,24}", 0..16)) {
        let mut robot = CommandInterpreter::new();
        for line in &lines {
            let _ = robot.execute(line);
        }
    }

    #[test]
    fn unplaced_robot_refuses_move_and_report(turns in prop::collection::vec(prop::sample::select(vec!["LEFT", "RIGHT"]), 0..8)) {
        let mut robot = CommandInterpreter::new();
        for turn in turns {
            prop_assert_eq!(robot.execute(turn), "");
        }
        prop_assert_eq!(robot.execute("MOVE"), CommandError::NotPlacedYet.to_string());
        prop_assert_eq!(robot.execute("REPORT"), CommandError::NotPlacedYet.to_string());
    }
}
