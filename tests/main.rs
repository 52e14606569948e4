use assert_matches::assert_matches;
use declarg::prelude::*;
use declarg::{CliResults, CommandLineParser, Fault, FaultKind, GeneralParser, Outcome, Parameter, Value};
use rstest::rstest;
use std::cell::Cell;

fn complete(parser: &GeneralParser, tokens: &[&str]) -> CliResults {
    assert_matches!(parser.parse_tokens(tokens), Ok(Outcome::Complete(results)) => results)
}

#[rstest]
#[case(vec!["prog", "--verbose"], true)]
#[case(vec!["prog", "-v"], true)]
#[case(vec!["prog", "--verbose=true"], true)]
#[case(vec!["prog", "--verbose=false"], false)]
#[case(vec!["prog", "-v=0"], false)]
#[case(vec!["prog", "--verbose", "false"], false)]
fn boolean_flag(#[case] tokens: Vec<&str>, #[case] expected: bool) {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::switch("verbose,v", ""))
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(&parser, tokens.as_slice());

    // Verify
    assert_eq!(results.get_as::<bool>("verbose"), Some(expected));
}

#[test]
fn boolean_flag_invalid() {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::switch("verbose,v", ""))
        .build_parser()
        .unwrap();

    // Execute
    let fault = parser.parse_tokens(&["prog", "--verbose=notabool"]).unwrap_err();

    // Verify
    assert_eq!(fault.kind(), FaultKind::InvalidOptionType);
    assert_eq!(
        fault.to_string(),
        "Option 'verbose' expects a value of type boolean, got 'notabool'"
    );
}

#[rstest]
#[case(vec!["prog", "--n=1", "--n=2"], 2)]
#[case(vec!["prog", "--n", "1", "--n", "2"], 2)]
#[case(vec!["prog", "--n=2", "--n=1"], 1)]
#[case(vec!["prog", "--n=+7"], 7)]
#[case(vec!["prog", "--n=-7"], -7)]
fn scalar_last_wins(#[case] tokens: Vec<&str>, #[case] expected: i32) {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<i32>::new("n", ""))
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(&parser, tokens.as_slice());

    // Verify
    assert_eq!(results.get("n"), Some(&Value::Int(expected)));
}

#[test]
fn list_collects_across_spellings() {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<Vec<String>>::new("file,f", ""))
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(
        &parser,
        &["prog", "-f=hello", "-f='world!'", "--file=\"again\"", "-f", "last"],
    );

    // Verify
    assert_eq!(
        results.get_as::<Vec<String>>("file"),
        Some(vec![
            "hello".to_string(),
            "world!".to_string(),
            "again".to_string(),
            "last".to_string(),
        ])
    );
}

#[rstest]
#[case(false, Value::Int(12))]
#[case(true, Value::IntList(vec![2, 45, 12]))]
fn scalar_versus_list(#[case] list: bool, #[case] expected: Value) {
    // Setup
    let parser = if list {
        CommandLineParser::new("prog", "").add(Parameter::<Vec<i32>>::new("foo,f", ""))
    } else {
        CommandLineParser::new("prog", "").add(Parameter::<i32>::new("foo,f", ""))
    }
    .build_parser()
    .unwrap();

    // Execute
    let results = complete(&parser, &["prog", "--foo=2", "-f", "45", "--foo=12"]);

    // Verify
    assert_eq!(results.get("foo"), Some(&expected));
}

#[rstest]
#[case(vec!["prog", "--name=x"])]
#[case(vec!["prog", "--name", "x"])]
#[case(vec!["prog", "-n=x"])]
#[case(vec!["prog", "-n", "x"])]
fn long_short_equivalence(#[case] tokens: Vec<&str>) {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<String>::new("name,n", ""))
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(&parser, tokens.as_slice());

    // Verify
    assert_eq!(results.get_as::<String>("name"), Some("x".to_string()));
    assert_eq!(results.len(), 1);
}

#[test]
fn separator() {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::switch("foo", ""))
        .add(Parameter::<Vec<String>>::new("items", ""))
        .positional(["items"])
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(&parser, &["prog", "--foo", "--", "--foo", "-x", "--"]);

    // Verify
    assert_eq!(results.get_as::<bool>("foo"), Some(true));
    assert_eq!(
        results.get_as::<Vec<String>>("items"),
        Some(vec!["--foo".to_string(), "-x".to_string(), "--".to_string()])
    );
}

#[test]
fn missing_required() {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<i32>::new("alpha", "").required())
        .add(Parameter::<i32>::new("beta", ""))
        .add(Parameter::<String>::new("gamma", "").required())
        .add(Parameter::<String>::new("delta", "").required().default_value("d".to_string()))
        .build_parser()
        .unwrap();

    // Execute
    let fault = parser.parse_tokens(&["prog", "--beta=1"]).unwrap_err();

    // Verify
    assert_eq!(
        fault,
        Fault::MissingRequiredOption(vec!["alpha".to_string(), "gamma".to_string()])
    );
    assert_eq!(
        fault.to_string(),
        "Some required options were not given: alpha, gamma"
    );
}

#[test]
fn empty_args() {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<i32>::new("number", "").default_value(3))
        .add(Parameter::<String>::new("name", ""))
        .build_parser()
        .unwrap();

    // Execute
    let fault = parser.parse_tokens(&[]).unwrap_err();
    let results = complete(&parser, &["prog"]);

    // Verify
    assert_eq!(fault, Fault::InvalidArgs);
    assert_eq!(results.get_as::<i32>("number"), Some(3));
    assert_eq!(results.get("name"), None);
    assert!(!results.contains("name"));
}

#[rstest]
#[case(vec!["prog", "2"], Some(2), None)]
#[case(vec!["prog", "2", "3"], Some(2), Some(3))]
#[case(vec!["prog", "--b=3", "2"], Some(2), Some(3))]
fn positional(#[case] tokens: Vec<&str>, #[case] a: Option<i32>, #[case] b: Option<i32>) {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<i32>::new("a", "").required())
        .add(Parameter::<i32>::new("b", ""))
        .positional(["a", "b"])
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(&parser, tokens.as_slice());

    // Verify
    assert_eq!(results.get_as::<i32>("a"), a);
    assert_eq!(results.get_as::<i32>("b"), b);
}

#[test]
fn positional_list() {
    // Setup
    let parser = CommandLineParser::new("prog", "")
        .add(Parameter::<String>::new("first", ""))
        .add(Parameter::<Vec<f64>>::new("others", ""))
        .positional(["first", "others"])
        .build_parser()
        .unwrap();

    // Execute
    let results = complete(&parser, &["prog", "x", "1.5", ".5", "2"]);
    let fault = parser.parse_tokens(&["prog", "x", "1.5", "-2.0"]).unwrap_err();

    // Verify
    assert_eq!(results.get_as::<String>("first"), Some("x".to_string()));
    assert_eq!(
        results.get("others"),
        Some(&Value::DoubleList(vec![1.5, 0.5, 2.0]))
    );
    assert_eq!(fault, Fault::UnrecognizedOption("x".to_string()));
}

struct Touch<'c> {
    calls: &'c Cell<u32>,
}

impl<'c> Command for Touch<'c> {
    fn name(&self) -> String {
        "touch".to_string()
    }

    fn setup<'p>(&self, parser: CommandLineParser<'p>) -> CommandLineParser<'p> {
        parser.add(Parameter::<String>::new("path", "").required())
    }

    fn run(&self, _results: &CliResults) -> i32 {
        self.calls.set(self.calls.get() + 1);
        3
    }
}

#[test]
fn command_mode() {
    // Setup
    let calls = Cell::new(0);
    let parser = CommandLineParser::new("prog", "")
        .command(Touch { calls: &calls })
        .help_command()
        .build_parser()
        .unwrap();

    // Execute
    let unknown = parser.parse_tokens(&["prog", "foo"]);
    let empty = parser.parse_tokens(&["prog"]);
    let dispatched = parser.parse_tokens(&["prog", "touch", "--path=a"]);

    // Verify
    assert_eq!(unknown, Err(Fault::UnknownCommand("foo".to_string())));
    assert_eq!(empty, Ok(Outcome::Complete(CliResults::default())));
    assert_eq!(
        dispatched,
        Ok(Outcome::Dispatched {
            command: "touch".to_string(),
            exit_code: 3,
        })
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn config_error() {
    // Execute
    let error = CommandLineParser::new("prog", "")
        .add(Parameter::<i32>::new("number", ""))
        .add(Parameter::<i32>::new("number", ""))
        .build_parser()
        .err()
        .unwrap();

    // Verify
    assert_eq!(
        error.to_string(),
        "Config error: Option 'number' is already declared."
    );
}
