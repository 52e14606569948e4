pub(crate) const DEFAULT_VALUE_HELP: &str = "VALUE";
pub(crate) const DEFAULT_GROUP: &str = "";
pub(crate) const DEFAULT_GROUP_HEADING: &str = "Options";
pub(crate) const POSITIONAL_SEPARATOR: &str = "--";
pub(crate) const IMPLICIT_TRUE: &str = "true";
pub(crate) const NAME_DELIMITER: char = ',';
pub(crate) const VALUE_DELIMITER: char = '=';

pub(crate) const HELP_COMMAND_NAME: &str = "help";
pub(crate) const HELP_COMMAND_DESCRIPTION: &str =
    "Display this help message\nWhen COMMAND is given, display help for this command";
pub(crate) const HELP_COMMAND_OPTION: &str = "command";
pub(crate) const HELP_COMMAND_OPTION_DESCRIPTION: &str = "Display help of this command";
