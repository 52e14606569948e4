use declarg::{CommandLineParser, Parameter};

fn main() {
    let parser = CommandLineParser::new("render", "Render the input files.")
        .add(Parameter::switch("verbose,v", "Print each file as it is rendered."))
        .add(Parameter::<i32>::new("jobs,j", "Number of workers.").default_value(1))
        .add(Parameter::<Vec<String>>::new("input,i", "The input files.").required())
        .group("Output", |group| {
            group
                .add(
                    Parameter::<String>::new("format,f", "The output format.\nOne of html, text.")
                        .value_help("FORMAT")
                        .default_value("text".to_string()),
                )
                .add(Parameter::<f64>::new("scale", "Scale the output by this factor."))
        })
        .build();

    let results = parser.parse_or_exit();
    let verbose: bool = results.get_as("verbose").unwrap_or_default();
    let jobs: i32 = results.get_as("jobs").unwrap_or(1);
    let inputs: Vec<String> = results.get_as("input").unwrap_or_default();
    let format: String = results.get_as("format").unwrap_or_default();

    println!("Rendering {} file(s) as {format} with {jobs} worker(s).", inputs.len());

    if verbose {
        for input in &inputs {
            println!("  {input}");
        }
    }

    if let Some(scale) = results.get_as::<f64>("scale") {
        println!("Scale: {scale}");
    }
}
