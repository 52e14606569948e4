use declarg::{CommandLineParser, Parameter};

fn main() {
    let parser = CommandLineParser::new("copy", "Copy a source to one or more targets.")
        .add(Parameter::<String>::new("source", "The file to copy.").required())
        .add(Parameter::<Vec<String>>::new("targets", "Where to copy the file."))
        .add(Parameter::switch("force", "Overwrite existing targets."))
        .positional(["source", "targets"])
        .build();

    let results = parser.parse_or_exit();
    let source: String = results.get_as("source").unwrap_or_default();
    let targets: Vec<String> = results.get_as("targets").unwrap_or_default();
    let force: bool = results.get_as("force").unwrap_or_default();

    for target in targets {
        println!("{source} -> {target} (force: {force})");
    }
}
