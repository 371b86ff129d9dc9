use core::convert::Infallible;
use std::io::ErrorKind;

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};
use embedded_hal_mock::MockError;
use tortuino::config::RobotConfig;
use tortuino::drivers::{Geometry, Pen, PenState, Servo, StartButton, Stepper};
use tortuino::logger::{Console, Level};
use tortuino::{Application, Drawing, Error, Parts, Tortuino, Turtle};
use ufmt::uWrite;

type MockRobot = Tortuino<PinMock, PinMock, PinMock, Recorder>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wait {
    Ms(u16),
    Us(u32),
}

/// Delay provider that returns at once and remembers every wait
#[derive(Default)]
struct Recorder(Vec<Wait>);

impl DelayMs<u16> for Recorder {
    fn delay_ms(&mut self, ms: u16) {
        self.0.push(Wait::Ms(ms));
    }
}

impl DelayUs<u32> for Recorder {
    fn delay_us(&mut self, us: u32) {
        self.0.push(Wait::Us(us));
    }
}

/// Coil levels per phase, as the stepper drives them
const PHASES: [[bool; 4]; 4] = [
    [true, false, true, false],
    [false, true, true, false],
    [false, true, false, true],
    [true, false, false, true],
];

// 10 deg and 50 deg with a 40000 tick frame
const DOWN_DUTY: u16 = 1294;
const UP_DUTY: u16 = 2118;

fn coils(phases: &[usize]) -> [PinMock; 4] {
    let mut per_pin: [Vec<PinTransaction>; 4] = Default::default();
    for &phase in phases {
        for (pin, &high) in PHASES[phase].iter().enumerate() {
            let state = if high { State::High } else { State::Low };
            per_pin[pin].push(PinTransaction::set(state));
        }
    }
    per_pin.map(|transactions| PinMock::new(&transactions))
}

fn servo(duties: &[u16]) -> PinMock {
    let mut expectations = vec![PinTransaction::enable(), PinTransaction::get_max_duty(40_000)];
    expectations.extend(duties.iter().map(|&duty| PinTransaction::set_duty(duty)));
    // detached when the test hands the parts back
    expectations.push(PinTransaction::disable());
    PinMock::new(&expectations)
}

/// One step per centimeter, two steps per quarter turn
fn small_config() -> RobotConfig {
    RobotConfig {
        geometry: Geometry {
            steps_per_revolution: 8,
            wheel_perimeter_cm: 8.0,
            turning_radius_cm: 1.3,
        },
        ..RobotConfig::default()
    }
}

fn robot(left: &[usize], right: &[usize], duties: &[u16], button: &[PinTransaction]) -> MockRobot {
    let config = small_config();
    let parts = Parts {
        left: Stepper::new(coils(left), 8),
        right: Stepper::new(coils(right), 8),
        pen: Pen::new(
            Servo::attach(servo(duties)),
            config.pen_up_angle,
            config.pen_down_angle,
            config.pen_settle_ms,
        ),
        button: StartButton::new(PinMock::new(button)),
        delay: Recorder::default(),
    };
    Tortuino::with_config(parts, config)
}

/// Check every mock and hand back the waits the robot asked for
fn done(robot: MockRobot) -> Vec<Wait> {
    let parts = robot.free();
    for mut pin in parts.left.release() {
        pin.done();
    }
    for mut pin in parts.right.release() {
        pin.done();
    }
    parts.pen.release().detach().done();
    parts.button.release().done();
    parts.delay.0
}

fn press_and_release() -> [PinTransaction; 3] {
    [
        PinTransaction::get(State::High),
        PinTransaction::get(State::Low),
        PinTransaction::get(State::High),
    ]
}

struct Capture(String);

impl uWrite for Capture {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

#[test]
fn forward_counter_rotates_the_mirrored_wheels() {
    // right wheel walks the sequence forward, left wheel backward from 0
    let mut robot = robot(&[3, 2, 1, 2, 3], &[1, 2, 3, 0, 1], &[], &[]);
    robot.forward(3.0).unwrap();
    assert_eq!(robot.steps_taken(), (3, 3));

    // spinning left turns both wheels the same way
    robot.turn_left(90.0).unwrap();
    assert_eq!(robot.steps_taken(), (5, 5));

    // one step delay per lockstep iteration, 10 rpm on 8 steps per revolution
    assert_eq!(done(robot), vec![Wait::Us(750_000); 5]);
}

#[test]
fn turning_right_reverses_both_wheels() {
    let mut robot = robot(&[3, 2], &[3, 2], &[], &[]);
    robot.turn_right(90.0).unwrap();
    done(robot);
}

#[test]
fn short_moves_round_down_to_no_steps() {
    let mut robot = robot(&[], &[], &[], &[]);
    robot.forward(0.9).unwrap();
    robot.backward(0.5).unwrap();
    robot.turn_left(30.0).unwrap();
    assert_eq!(robot.steps_taken(), (0, 0));
    assert!(done(robot).is_empty());
}

#[test]
fn begin_lowers_the_pen_and_waits_for_a_release() {
    let mut robot = robot(&[], &[], &[DOWN_DUTY], &press_and_release());
    assert_eq!(robot.pen_state(), None);
    robot.begin().unwrap();
    assert_eq!(robot.pen_state(), Some(PenState::Down));
    assert_eq!(robot.step_delay_us(), 60_000_000 / 8 / 10);
    // pen settle, then a single poll interval before the release is seen
    assert_eq!(done(robot), vec![Wait::Ms(200), Wait::Ms(10)]);
}

#[test]
fn first_button_comparison_is_immediate() {
    // pressed while arming, released at the first sample
    let button = [
        PinTransaction::get(State::Low),
        PinTransaction::get(State::High),
    ];
    let mut robot = robot(&[], &[], &[DOWN_DUTY], &button);
    robot.begin().unwrap();
    assert_eq!(done(robot), vec![Wait::Ms(200)]);
}

#[test]
fn button_is_sampled_every_poll_interval() {
    let button = [
        PinTransaction::get(State::High),
        PinTransaction::get(State::Low),
        PinTransaction::get(State::Low),
        PinTransaction::get(State::Low),
        PinTransaction::get(State::High),
    ];
    let mut robot = robot(&[], &[], &[], &button);
    robot.wait_for_button().unwrap();
    assert_eq!(done(robot), vec![Wait::Ms(10); 3]);
}

#[test]
fn start_then_move_waits_in_order() {
    let mut robot = robot(&[3, 2], &[1, 2], &[DOWN_DUTY], &press_and_release());
    robot.begin().unwrap();
    robot.forward(2.0).unwrap();
    assert_eq!(
        done(robot),
        vec![
            Wait::Ms(200),
            Wait::Ms(10),
            Wait::Us(750_000),
            Wait::Us(750_000),
        ]
    );
}

#[test]
fn every_pen_command_settles() {
    let mut robot = robot(&[], &[], &[UP_DUTY, DOWN_DUTY, DOWN_DUTY], &[]);
    robot.pen_up().unwrap();
    robot.pen_down().unwrap();
    // repeated commands are sent and waited for again
    robot.pen_down().unwrap();
    assert_eq!(done(robot), vec![Wait::Ms(200); 3]);
}

#[test]
fn begin_restores_the_default_speed() {
    let mut robot = robot(&[3], &[1], &[DOWN_DUTY], &press_and_release());
    robot.set_speed(15).unwrap();
    assert_eq!(robot.step_delay_us(), 500_000);
    robot.begin().unwrap();
    assert_eq!(robot.speed_rpm(), 10);
    assert_eq!(robot.config().speed_rpm, 10);
    assert_eq!(robot.step_delay_us(), 750_000);
    robot.forward(1.0).unwrap();
    assert_eq!(
        done(robot),
        vec![Wait::Ms(200), Wait::Ms(10), Wait::Us(750_000)]
    );
}

#[test]
fn zero_speed_is_rejected_and_keeps_the_previous_one() {
    let mut robot = robot(&[], &[], &[], &[]);
    robot.set_speed(15).unwrap();
    let delay = robot.step_delay_us();
    assert_eq!(robot.set_speed(0), Err(Error::InvalidSpeed));
    assert_eq!(robot.step_delay_us(), delay);
    assert_eq!(robot.speed_rpm(), 15);
    assert_eq!(robot.config().speed_rpm, 10);
    done(robot);
}

#[test]
fn broken_button_aborts_the_start() {
    let broken = [PinTransaction::get(State::High)
        .with_error(MockError::Io(ErrorKind::NotConnected))];
    let mut robot = robot(&[], &[], &[DOWN_DUTY], &broken);
    assert_eq!(robot.begin(), Err(Error::Button));
    done(robot);
}

#[test]
fn application_draws_after_the_button() {
    // level 1 tree: 2 cm out, pen up, 2 cm back
    let mut robot = robot(
        &[3, 2, 3, 0],
        &[1, 2, 1, 0],
        &[DOWN_DUTY, UP_DUTY],
        &press_and_release(),
    );
    let console = Console::new(Capture(String::new()), Level::Info);
    let mut app = Application::new(console, Drawing::Tree { levels: 1, trunk: 2.0 });

    app.run(&mut robot).unwrap();
    assert_eq!(robot.pen_state(), Some(PenState::Up));
    assert_eq!(robot.steps_taken(), (4, 4));
    assert_eq!(
        app.into_console().into_inner().0,
        "[INF] Tortuino ready\n[INF] drawing: tree\n[INF] done\n"
    );
    done(robot);
}

#[test]
fn application_debug_level_reports_geometry_and_step_counts() {
    let mut robot = robot(&[], &[], &[DOWN_DUTY], &press_and_release());
    let console = Console::new(Capture(String::new()), Level::Debug);
    let mut app = Application::new(console, Drawing::Polygon { sides: 0, side: 1.0 });
    app.run(&mut robot).unwrap();

    let log = app.into_console().into_inner().0;
    assert!(log.contains("[DBG] steps/rev: 8\n"));
    assert!(log.contains("[DBG] turning radius: 1.30 cm\n"));
    assert!(log.contains("[DBG] wheel perimeter: 8.00 cm\n"));
    assert!(log.contains("[DBG] step delay us: 750000\n"));
    assert!(log.contains("[DBG] left steps: 0\n"));
    assert!(log.ends_with("[INF] done\n"));
    done(robot);
}
