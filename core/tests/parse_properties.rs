use flagline_core::{
    ArgumentParser, Command, ErrorPrecedence, Necessity, ParseError, ParseErrorKind,
    ParserSettings,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parser_with(args: &[&str], commands: Vec<Command>) -> ArgumentParser {
    let mut parser = ArgumentParser::new(args.iter().copied(), "tool", "Does things");
    parser.register_all(commands).expect("registry is valid");
    parser
}

fn standard_registry() -> Vec<Command> {
    vec![
        Command::new("help").with_help("Show this text"),
        Command::new("out")
            .with_help("Output file")
            .with_necessity(Necessity::Required),
        Command::new("verbose").with_alias("v"),
    ]
}

fn kind_of(parser: &ArgumentParser) -> Option<ParseErrorKind> {
    parser.parse().error().map(ParseError::kind)
}

// ---------------------------------------------------------------------------
// Scanning errors
// ---------------------------------------------------------------------------

#[test]
fn values_without_any_command_are_unexpected() {
    let cases: [&[&str]; 3] = [&["a"], &["a", "b"], &["file.txt", "x", "y"]];
    for args in cases {
        let parser = parser_with(args, standard_registry());
        let outcome = parser.parse();
        assert_eq!(
            outcome.error(),
            Some(&ParseError::UnexpectedValue {
                token: args[0].to_string()
            }),
            "args: {args:?}"
        );
    }
}

#[test]
fn value_after_valueless_command_is_rejected() {
    for value in ["x", "42", "", "file with spaces"] {
        let parser = parser_with(&["-help", value], standard_registry());
        assert_eq!(kind_of(&parser), Some(ParseErrorKind::ParameterNotAllowed));
    }
}

#[test]
fn unrecognized_command_mentions_raw_token() {
    let parser = parser_with(&["-bogus"], standard_registry());
    let outcome = parser.parse();

    assert_eq!(
        outcome.error().map(ToString::to_string).as_deref(),
        Some("Command \"-bogus\" was not recognized. See help text for command list.")
    );
    assert!(outcome.commands().is_empty());
}

#[test]
fn alias_prefix_is_not_a_match() {
    let parser = parser_with(&["-verb"], standard_registry());
    assert_eq!(kind_of(&parser), Some(ParseErrorKind::UnrecognizedCommand));
}

// ---------------------------------------------------------------------------
// Mutual exclusion
// ---------------------------------------------------------------------------

fn exclusive_registry() -> Vec<Command> {
    vec![
        Command::new("a").with_excludes("b"),
        Command::new("b").with_alias("bee"),
        Command::new("c"),
    ]
}

#[test]
fn mutually_exclusive_in_either_order() {
    let forward = parser_with(&["-b", "-c", "-a"], exclusive_registry()).parse();
    assert_eq!(
        forward.error().map(ToString::to_string).as_deref(),
        Some("The commands \"-a\" and \"-b -bee\" are mutually exclusive.")
    );

    let reverse = parser_with(&["-a", "-bee"], exclusive_registry()).parse();
    assert_eq!(
        reverse.error().map(ToString::to_string).as_deref(),
        Some("The commands \"-b -bee\" and \"-a\" are mutually exclusive.")
    );
}

#[test]
fn exclusion_stops_scanning() {
    let outcome = parser_with(&["-a", "-b", "-unknown"], exclusive_registry()).parse();
    assert_eq!(
        outcome.error().map(ParseError::kind),
        Some(ParseErrorKind::MutuallyExclusive)
    );
    assert_eq!(outcome.commands().len(), 1);
}

#[test]
fn exclusion_without_partner_is_fine() {
    let parser = parser_with(&["-a", "-c"], exclusive_registry());
    assert!(parser.parse().is_success());
}

// ---------------------------------------------------------------------------
// Required values
// ---------------------------------------------------------------------------

#[test]
fn required_command_without_values_fails() {
    let cases: [&[&str]; 3] = [&["-out"], &["-out", "-v"], &["-v", "-out"]];
    for args in cases {
        let parser = parser_with(args, standard_registry());
        assert_eq!(
            parser.parse().error(),
            Some(&ParseError::MissingRequiredParameter {
                command: "-out".into()
            }),
            "args: {args:?}"
        );
    }
}

#[test]
fn first_missing_required_command_is_reported() {
    let commands = vec![
        Command::new("in").with_necessity(Necessity::Required),
        Command::new("out").with_necessity(Necessity::Required),
    ];
    let parser = parser_with(&["-out", "-in"], commands);
    assert_eq!(
        parser.parse().error().map(ToString::to_string).as_deref(),
        Some("The command \"-out\" is missing required parameters.")
    );
}

#[test]
fn required_check_overrides_scan_error_unless_configured() {
    let args = ["-out", "-bogus"];

    let default = parser_with(&args, standard_registry());
    assert_eq!(
        kind_of(&default),
        Some(ParseErrorKind::MissingRequiredParameter)
    );

    let settings = ParserSettings::default().with_error_precedence(ErrorPrecedence::FirstErrorWins);
    let mut first_wins = ArgumentParser::with_settings(args, "tool", "", settings);
    first_wins.register_all(standard_registry()).unwrap();
    assert_eq!(
        kind_of(&first_wins),
        Some(ParseErrorKind::UnrecognizedCommand)
    );
}

#[test]
fn optional_command_may_have_no_values() {
    let commands = vec![Command::new("tag").with_necessity(Necessity::Optional)];
    let parser = parser_with(&["-tag"], commands);
    let outcome = parser.parse();
    assert!(outcome.is_success());
    assert_eq!(outcome.commands().get("tag").unwrap().value(), None);
}

// ---------------------------------------------------------------------------
// Result set
// ---------------------------------------------------------------------------

#[test]
fn alias_and_key_lookup_return_same_entry() {
    let parser = parser_with(&["-verbose"], vec![Command::new("v").with_alias("verbose")]);
    let outcome = parser.parse();
    let commands = outcome.commands();

    let by_key = commands.get("v").expect("found by key");
    let by_alias = commands.get("verbose").expect("found by alias");
    assert!(std::ptr::eq(by_key, by_alias));
}

#[test]
fn typed_extraction() {
    let registry = || vec![Command::new("n").with_necessity(Necessity::Required)];

    let ok = parser_with(&["-n", "42"], registry()).parse();
    assert_eq!(ok.commands().try_get::<i32>("n"), (true, 42));
    assert_eq!(ok.commands().try_get::<f64>("n"), (true, 42.0));

    let bad = parser_with(&["-n", "abc"], registry()).parse();
    assert!(bad.is_success());
    assert_eq!(bad.commands().try_get::<i32>("n"), (false, 0));
    assert_eq!(bad.commands().try_get::<bool>("n"), (false, false));
}

#[test]
fn full_scenario_documents_only_helped_commands() {
    let parser = parser_with(&["-out", "file.txt", "-v"], standard_registry());
    let commands = parser.parse().into_result().expect("parse succeeds");

    let summary: Vec<(&str, &[String])> = commands
        .iter()
        .map(|c| (c.key.as_str(), c.values()))
        .collect();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].0, "out");
    assert_eq!(summary[0].1, ["file.txt"]);
    assert_eq!(summary[1].0, "verbose");
    assert!(summary[1].1.is_empty());

    assert_eq!(
        commands.documentation(),
        "tool\nDoes things\n-help - Show this text\n-out - Output file"
    );
    assert!(!commands.documentation().contains("-verbose"));
}

#[test]
fn partial_results_survive_errors() {
    let parser = parser_with(&["-out", "a.txt", "-help", "oops"], standard_registry());
    let (commands, error) = parser.parse().into_parts();

    assert_eq!(error.map(|e| e.kind()), Some(ParseErrorKind::ParameterNotAllowed));
    assert_eq!(commands.len(), 2);
    assert_eq!(commands.get("out").and_then(Command::value), Some("a.txt"));
    assert!(commands.documentation().starts_with("tool\nDoes things"));
}

#[test]
fn result_serializes_to_json() {
    let parser = parser_with(&["-out", "file.txt", "-v"], standard_registry());
    let commands = parser.parse().into_result().unwrap();
    let json = serde_json::to_value(&commands).unwrap();

    assert_eq!(json["commands"][0]["key"], "out");
    assert_eq!(json["commands"][0]["necessity"], "required");
    assert_eq!(json["commands"][0]["values"][0], "file.txt");
    assert_eq!(json["commands"][1]["alias"], "v");
    assert!(json["commands"][1].get("values").is_none());
}
