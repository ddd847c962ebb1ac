pub(crate) const FLAG_PREFIX: &str = "--";
pub(crate) const FLAG_PREFIX_CHAR: char = '-';
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: &str = "h";
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
