use declarg::prelude::*;
use declarg::{CliResults, CommandLineParser, Parameter};

struct Add;

impl Command for Add {
    fn name(&self) -> String {
        "add".to_string()
    }

    fn description(&self) -> String {
        "Sum the given items.".to_string()
    }

    fn setup<'p>(&self, parser: CommandLineParser<'p>) -> CommandLineParser<'p> {
        parser
            .add(Parameter::<Vec<i32>>::new("item", "The items to sum.").required())
            .positional(["item"])
    }

    fn run(&self, results: &CliResults) -> i32 {
        let items: Vec<i32> = results.get_as("item").unwrap_or_default();
        println!("Sum: {}", items.iter().sum::<i32>());
        0
    }
}

struct Scale;

impl Command for Scale {
    fn name(&self) -> String {
        "scale".to_string()
    }

    fn description(&self) -> String {
        "Multiply a value by a factor.".to_string()
    }

    fn setup<'p>(&self, parser: CommandLineParser<'p>) -> CommandLineParser<'p> {
        parser
            .add(Parameter::<f64>::new("value", "The value.").required())
            .add(Parameter::<f64>::new("factor,f", "The factor.").default_value(2.0))
    }

    fn run(&self, results: &CliResults) -> i32 {
        match (
            results.get_as::<f64>("value"),
            results.get_as::<f64>("factor"),
        ) {
            (Some(value), Some(factor)) => {
                println!("{}", value * factor);
                0
            }
            _ => 1,
        }
    }
}

fn main() {
    let parser = CommandLineParser::new("calc", "A tiny calculator.")
        .command(Add)
        .command(Scale)
        .help_command()
        .build();

    let results = parser.parse_or_exit();

    if results.is_empty() {
        parser.print_help();
    }
}
