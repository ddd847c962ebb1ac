use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Turn a parse outcome into the process exit convention.
///
/// * When help was requested, print the help message and yield `Err(0)`.
/// * On failure, print the error followed by the help message and yield `Err(1)`.
/// * Otherwise yield `Ok(())`.
pub(crate) fn report(
    result: Result<(), ParseError>,
    help_requested: bool,
    printer: &Printer,
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), i32> {
    if help_requested {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help requested (parse result: {result:?}).");
        }

        printer.print_help(user_interface);
        return Err(0);
    }

    match result {
        Ok(()) => Ok(()),
        Err(error) => {
            user_interface.print_error(error);
            printer.print_help(user_interface);
            Err(1)
        }
    }
}
