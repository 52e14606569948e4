pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: String) {
        eprintln!("{error}");
    }
}
