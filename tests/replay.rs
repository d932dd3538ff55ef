//! End-to-end: scripts through the public session API.

use std::cell::RefCell;
use std::rc::Rc;

use crossinput::backend::SourceCommand;
use crossinput::{
    Action, Config, CursorMode, InputMode, InputSession, Key, Script, SourceCapabilities,
    SyntheticSource,
};

fn recorded_session(
    config: &str,
) -> (InputSession<SyntheticSource>, Rc<RefCell<Vec<String>>>) {
    let config: Config = toml::from_str(config).expect("valid config");
    let mut session = InputSession::with_config(SyntheticSource::new(), config.dispatch);

    let trace = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&trace);
    session.set_key_callback(move |key, _, action, mods| {
        sink.borrow_mut().push(format!("key {key:?} {action} {mods}"));
    });
    let sink = Rc::clone(&trace);
    session.set_mouse_button_callback(move |button, action, mods| {
        sink.borrow_mut()
            .push(format!("button {button} {action} {mods}"));
    });
    let sink = Rc::clone(&trace);
    session.set_cursor_pos_callback(move |x, y| {
        sink.borrow_mut().push(format!("pos {x} {y}"));
    });
    let sink = Rc::clone(&trace);
    session.set_scroll_callback(move |xoff, yoff| {
        sink.borrow_mut().push(format!("scroll {xoff} {yoff}"));
    });

    (session, trace)
}

#[test]
fn queued_script_replay_delivers_in_order_after_poll() {
    let (mut session, trace) = recorded_session(
        r#"
        [dispatch]
        policy = "queued"
        queue_capacity = 16
        "#,
    );

    let script = Script::parse(
        r#"
        [[signals]]
        kind = "key-down"
        code = 16
        location = "left"

        [[signals]]
        kind = "key-down"
        code = 87

        [[signals]]
        kind = "mouse-down"
        button = 2

        [[signals]]
        kind = "key-up"
        code = 16
        location = "left"

        [[signals]]
        kind = "wheel"
        delta_x = 1.0
        delta_y = 2.0
        delta_mode = 1
        "#,
    )
    .expect("valid script");

    for signal in script.signals {
        session.ingest(signal);
    }

    // Nothing delivered yet, but state is already current.
    assert!(trace.borrow().is_empty());
    assert_eq!(session.get_key(Key::W), Action::Press);
    assert_eq!(session.get_key(Key::LeftShift), Action::Release);

    let delivered = session.poll_events();
    assert_eq!(delivered, 5);
    assert_eq!(
        trace.borrow().as_slice(),
        [
            "key LeftShift press shift",
            "key W press shift",
            "button right press shift",
            "key LeftShift release -",
            "scroll -1 -2",
        ]
    );
    assert_eq!(session.dropped_events(), 0);
}

#[test]
fn cursor_and_fullscreen_flow_drives_source_commands() {
    let (mut session, _trace) = recorded_session("");

    session
        .set_input_mode(InputMode::Cursor, CursorMode::Disabled.value())
        .expect("cursor mode accepted");
    session.request_fullscreen();

    let script = Script::parse(
        r#"
        [[signals]]
        kind = "key-down"
        code = 32

        [[signals]]
        kind = "key-up"
        code = 32
        "#,
    )
    .expect("valid script");
    for signal in script.signals {
        session.ingest(signal);
    }

    assert_eq!(
        session.source().commands(),
        &[
            SourceCommand::RequestPointerLock,
            SourceCommand::RequestFullscreen,
        ]
    );
    assert_eq!(session.cursor_mode(), CursorMode::Disabled);
    assert_eq!(session.get_input_mode(InputMode::Cursor), Ok(2));
}

#[test]
fn degraded_source_stays_quiet() {
    let mut session = InputSession::new(SyntheticSource::with_capabilities(
        SourceCapabilities {
            pointer_lock: false,
            fullscreen: false,
        },
    ));

    assert_eq!(
        session.set_input_mode(InputMode::Cursor, CursorMode::Hidden.value()),
        Ok(())
    );
    session.request_fullscreen();
    session.ingest(crossinput::RawSignal::KeyDown {
        code: 32,
        repeat: false,
        location: crossinput::KeyLocation::Standard,
    });

    assert!(session.source().commands().is_empty());
    assert_eq!(session.cursor_mode(), CursorMode::Normal);
    assert_eq!(session.get_key(Key::Space), Action::Press);
}

#[test]
fn touch_script_emulates_buttons_until_release() {
    let (mut session, _trace) = recorded_session("");

    let script = Script::parse(
        r#"
        [[signals]]
        kind = "touch"
        phase = "start"
        points = [{ id = 1, x = 50.0, y = 60.0 }]

        [[signals]]
        kind = "touch"
        phase = "move"
        points = [{ id = 1, x = 55.0, y = 60.0 }, { id = 2, x = 80.0, y = 90.0 }]

        [[signals]]
        kind = "touch"
        phase = "end"
        points = []
        "#,
    )
    .expect("valid script");
    let mut signals = script.signals.into_iter();

    session.ingest(signals.next().expect("start"));
    assert_eq!(session.get_mouse_button(0), Ok(Action::Press));
    assert_eq!(session.get_mouse_button(1), Ok(Action::Release));
    assert_eq!(session.get_cursor_pos(), (50.0, 60.0));

    session.ingest(signals.next().expect("move"));
    assert_eq!(session.get_mouse_button(0), Ok(Action::Release));
    assert_eq!(session.get_mouse_button(1), Ok(Action::Press));
    assert_eq!(session.get_cursor_pos(), (55.0, 60.0));

    session.ingest(signals.next().expect("end"));
    assert_eq!(session.get_mouse_button(0), Ok(Action::Release));
    assert_eq!(session.get_mouse_button(1), Ok(Action::Release));
    assert!(session.touch_points().is_empty());
}
