use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::ValueType;
use crate::parser::interface::UserInterface;
use crate::parser::{Declarations, OptionDeclaration};

struct OptionParameter {
    name: String,
    short: Option<char>,
    description: String,
    value_help: Option<String>,
    required: bool,
}

impl From<&OptionDeclaration> for OptionParameter {
    fn from(value: &OptionDeclaration) -> Self {
        Self {
            name: value.name.clone(),
            short: value.short,
            description: value.description.clone(),
            // Booleans never take a value.
            value_help: if value.value_type == ValueType::Boolean {
                None
            } else {
                Some(value.value_help.clone())
            },
            required: value.required,
        }
    }
}

struct PositionalParameter {
    name: String,
    description: String,
    required: bool,
}

impl From<&OptionDeclaration> for PositionalParameter {
    fn from(value: &OptionDeclaration) -> Self {
        Self {
            name: value.name.to_ascii_uppercase(),
            description: value.description.clone(),
            required: value.required,
        }
    }
}

pub(crate) struct CommandParameter {
    usage: String,
    description: String,
}

impl CommandParameter {
    pub(crate) fn new(usage: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            description: description.into(),
        }
    }
}

enum Layout {
    Options {
        positionals: Vec<PositionalParameter>,
        groups: Vec<(String, Vec<OptionParameter>)>,
    },
    Commands(Vec<CommandParameter>),
}

pub(crate) struct Printer {
    usage: String,
    description: String,
    layout: Layout,
    terminal_width: Option<usize>,
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_WIDTH: usize = 17;
const ENTRY_INDENT: &str = "  ";
const DESCRIPTION_INDENT: &str = "    ";

impl Printer {
    pub(crate) fn terminal_width() -> Option<usize> {
        if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        }
    }

    pub(crate) fn options(
        program: impl Into<String>,
        description: impl Into<String>,
        declarations: &Declarations,
        terminal_width: Option<usize>,
    ) -> Self {
        let mut usage = program.into();

        if !declarations.is_empty() {
            usage.push_str(" [OPTIONS]");
        }

        for option in declarations.options() {
            if option.required && !declarations.is_positional(&option.name) {
                usage.push_str(&format!(" --{}", option.name));
            }
        }

        let positionals: Vec<PositionalParameter> = declarations
            .positionals()
            .map(PositionalParameter::from)
            .collect();

        for positional in &positionals {
            if positional.required {
                usage.push_str(&format!(" {}", positional.name));
            } else {
                usage.push_str(&format!(" [{}]", positional.name));
            }
        }

        let groups = declarations
            .groups()
            .map(|(name, members)| {
                (
                    name.to_string(),
                    members.into_iter().map(OptionParameter::from).collect(),
                )
            })
            .collect();

        Self {
            usage,
            description: description.into(),
            layout: Layout::Options {
                positionals,
                groups,
            },
            terminal_width,
        }
    }

    pub(crate) fn commands(
        program: impl Into<String>,
        description: impl Into<String>,
        commands: Vec<CommandParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            usage: format!("{} [COMMAND] [OPTIONS]", program.into()),
            description: description.into(),
            layout: Layout::Commands(commands),
            terminal_width,
        }
    }

    pub(crate) fn usage(&self) -> &str {
        &self.usage
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn help(&self) -> String {
        let mut help = format!(
            "usage:\n{ENTRY_INDENT}{usage}\n\n{description}\n\n",
            usage = self.usage,
            description = self.description
        );

        match &self.layout {
            Layout::Commands(commands) => {
                help.push_str("Commands:\n\n");

                for CommandParameter { usage, description } in commands {
                    help.push_str(&format!("{ENTRY_INDENT}{usage}\n"));
                    help.push_str(&self.render_description(description));
                    help.push('\n');
                }
            }
            Layout::Options {
                positionals,
                groups,
            } => {
                help.push_str(&self.render_positionals(positionals));

                for (name, options) in groups {
                    if options.is_empty() {
                        continue;
                    }

                    let heading = if name == DEFAULT_GROUP {
                        DEFAULT_GROUP_HEADING
                    } else {
                        name.as_str()
                    };
                    help.push_str(&format!("{heading}:\n\n"));

                    for option in options {
                        help.push_str(&format!("{ENTRY_INDENT}{}\n", option_usage(option)));
                        help.push_str(&self.render_description(&option.description));
                        help.push('\n');
                    }
                }
            }
        }

        help
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.help().trim_end().to_string());
    }

    fn render_positionals(&self, positionals: &[PositionalParameter]) -> String {
        if positionals.is_empty() {
            return String::default();
        }

        let mut help = format!(
            "Positional arguments:\n\n{ENTRY_INDENT}These arguments come after options and in the order they are listed here.\n"
        );
        let required: Vec<&str> = positionals
            .iter()
            .take_while(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        match required.len() {
            0 => {}
            1 => help.push_str(&format!("{ENTRY_INDENT}Only {} is required.\n", required[0])),
            _ => help.push_str(&format!(
                "{ENTRY_INDENT}Only {} are required.\n",
                required.join(", ")
            )),
        }

        help.push('\n');

        for positional in positionals {
            if positional.required {
                help.push_str(&format!("{ENTRY_INDENT}{} [REQUIRED]\n", positional.name));
            } else {
                help.push_str(&format!("{ENTRY_INDENT}{}\n", positional.name));
            }

            help.push_str(&self.render_description(&positional.description));
            help.push('\n');
        }

        help
    }

    // Split into lines (dropping the empty ones), wrapped to the terminal when its width is known.
    fn render_description(&self, description: &str) -> String {
        let width = self
            .terminal_width
            .map(|w| w.saturating_sub(DESCRIPTION_INDENT.len()).max(MINIMUM_WIDTH));

        description
            .split('\n')
            .filter(|line| !line.is_empty())
            .flat_map(|line| match width {
                Some(width) => chunk(line, width),
                None => vec![line.to_string()],
            })
            .map(|line| format!("{DESCRIPTION_INDENT}{line}\n"))
            .collect()
    }
}

fn option_usage(option: &OptionParameter) -> String {
    let value = match &option.value_help {
        Some(value_help) => format!(" {value_help}"),
        None => String::default(),
    };
    let mut usage = format!("--{}{value}", option.name);

    if let Some(short) = option.short {
        usage.push_str(&format!(", -{short}{value}"));
    }

    if option.required {
        usage.push_str(" [REQUIRED]");
    }

    usage
}

// Words longer than the width are kept whole.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
