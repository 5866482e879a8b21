// tests/console_tests.rs - End-to-end behavior of the Console facade
use chrono::NaiveDate;
use pocketconsole::{log_args, Console, ConsoleOptions, LogArg, Loggable, MemorySink, SinkEvent};
use serde_json::json;

fn fixed_console(options: ConsoleOptions) -> (Console, MemorySink) {
    let sink = MemorySink::new();
    let mut console = Console::with_sink(options, sink.clone(), false);
    console.set_constant_time(Some(
        NaiveDate::from_ymd_opt(2021, 11, 30)
            .unwrap()
            .and_hms_opt(23, 59, 1)
            .unwrap(),
    ));
    (console, sink)
}

#[derive(Debug)]
struct Version {
    major: u32,
    minor: u32,
}

impl Loggable for Version {
    fn custom_text(&self) -> Option<String> {
        Some(format!("v{}.{}", self.major, self.minor))
    }
}

#[test]
fn test_module_x_scenario() {
    let options = ConsoleOptions {
        module: Some("X".to_string()),
        level: Some("info".to_string()),
        ..Default::default()
    };
    let (mut console, sink) = fixed_console(options);

    console.debug(&log_args!["hidden"]);
    assert!(sink.events().is_empty());

    console.info(&log_args!["shown"]);
    let events = sink.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        SinkEvent::Error(line) => {
            assert!(line.contains("shown"));
            assert!(line.contains("[X]"));
        }
        other => panic!("unexpected event {:?}", other),
    }

    sink.clear();
    console.error(&[]);
    assert_eq!(
        sink.events(),
        vec![SinkEvent::Error("2021-11-30T23:59:01 [ERROR] [X] ".to_string())]
    );
}

#[test]
fn test_three_args_group() {
    let (mut console, sink) = fixed_console(ConsoleOptions::default());
    console.set_format("%l ");

    console.info(&log_args!["heading", "second", "third"]);

    let events = sink.events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], SinkEvent::Group("INFO  heading".to_string()));
    assert_eq!(events[1], SinkEvent::Error("second".to_string()));
    assert_eq!(events[2], SinkEvent::Error("third".to_string()));
    assert_eq!(events[3], SinkEvent::GroupEnd);
}

#[test]
fn test_record_argument() {
    let (mut console, sink) = fixed_console(ConsoleOptions::with_module("Example-One"));
    console.set_level("debug");
    console.set_format("[%l] [%m] ");

    console.aced(&log_args![
        "BTW: here is the result",
        json!({"name": "Bobby", "callSign": "0xdeadbeef"})
    ]);

    assert_eq!(
        sink.events(),
        vec![
            SinkEvent::Group("[ACED ] [Example-One] BTW: here is the result".to_string()),
            SinkEvent::Error("{\n  \"name\": \"Bobby\",\n  \"callSign\": \"0xdeadbeef\"\n}".to_string()),
            SinkEvent::GroupEnd,
        ]
    );
}

#[test]
fn test_use_to_string() {
    let (mut console, sink) = fixed_console(ConsoleOptions::default());
    console.set_format("");
    console.info(&["release".into(), LogArg::custom(Version { major: 1, minor: 4 })]);

    let (mut plain, plain_sink) = fixed_console(ConsoleOptions {
        use_to_string: false,
        format: Some(String::new()),
        ..Default::default()
    });
    plain.info(&["release".into(), LogArg::custom(Version { major: 1, minor: 4 })]);

    assert_eq!(sink.events()[1], SinkEvent::Error("v1.4".to_string()));
    assert_eq!(
        plain_sink.events()[1],
        SinkEvent::Error("Version { major: 1, minor: 4 }".to_string())
    );
}

#[test]
fn test_bytes_are_never_custom_text() {
    let (mut console, sink) = fixed_console(ConsoleOptions::default());
    console.set_format("");
    console.warn(&["payload".into(), LogArg::bytes(vec![0xde, 0xad])]);
    assert_eq!(sink.events()[1], SinkEvent::Error("<Buffer de ad>".to_string()));
}

#[test]
fn test_threshold_none_silences_everything_leveled() {
    let (mut console, sink) = fixed_console(ConsoleOptions::default());
    console.set_level("none");
    console.error(&log_args!["a"]);
    console.warn(&log_args!["b"]);
    console.info(&log_args!["c"]);
    console.aced(&log_args!["d"]);
    console.debug(&log_args!["e"]);
    assert!(sink.events().is_empty());

    console.log(&log_args!["still", "printed"]);
    assert_eq!(sink.events(), vec![SinkEvent::Log("still printed".to_string())]);
}

#[test]
fn test_rejected_settings_keep_previous() {
    let (mut console, _) = fixed_console(ConsoleOptions {
        level: Some("warn".to_string()),
        ..Default::default()
    });
    console.set_level("bogus");
    assert_eq!(console.level(), pocketconsole::LogLevel::Warn);

    let before = console.format().to_string();
    console.set_format("\x01bad");
    assert_eq!(console.format(), before);
}

#[test]
fn test_invalid_options_fall_back_to_defaults() {
    let (console, _) = fixed_console(ConsoleOptions {
        level: Some("verbose".to_string()),
        format: Some("caf\u{e9} ".to_string()),
        ..Default::default()
    });
    assert_eq!(console.level(), pocketconsole::LogLevel::Info);
    assert_eq!(console.format(), pocketconsole::DEFAULT_FORMAT);
}

#[test]
fn test_unset_module_renders_empty() {
    let (mut console, sink) = fixed_console(ConsoleOptions::default());
    assert_eq!(console.module(), "");
    console.set_format("[%m] ");
    console.info(&log_args!["x"]);
    assert_eq!(sink.events(), vec![SinkEvent::Error("[] x".to_string())]);
}
