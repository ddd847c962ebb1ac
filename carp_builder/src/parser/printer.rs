use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::Range;
use crate::parser::interface::UserInterface;
use crate::parser::{
    ArgumentDescriptor, ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth,
};

pub(crate) struct Printer {
    program: String,
    version: Option<String>,
    description: Option<String>,
    arguments: Vec<ArgumentDescriptor>,
    terminal_width: Option<usize>,
}

// Assuming the average word length is 5, 17 allows precisely 3 words with a space between them.
const DEFAULT_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

impl Printer {
    pub(crate) fn terminal(
        program: impl Into<String>,
        version: Option<String>,
        description: Option<String>,
        arguments: Vec<ArgumentDescriptor>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, version, description, arguments, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        version: Option<String>,
        description: Option<String>,
        arguments: Vec<ArgumentDescriptor>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            version,
            description,
            arguments,
            terminal_width,
        }
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        let mut summary = Vec::default();
        let mut positionals: Vec<(String, String)> = Vec::default();
        let mut optionals: Vec<(String, String)> = Vec::default();

        for descriptor in &self.arguments {
            let name = &descriptor.name;
            let name_example = name.primary().to_ascii_uppercase().replace('-', "_");
            let grammar = grammar(&name_example, &descriptor.nargs);
            let description = describe(descriptor);

            if descriptor.positional {
                summary.push(grammar.clone());
                positionals.push((grammar, description));
            } else {
                let grammar = if grammar.is_empty() {
                    grammar
                } else {
                    format!(" {grammar}")
                };
                let long = format!("{FLAG_PREFIX}{}{grammar}", name.primary());
                let usage = match name.secondary() {
                    Some(secondary) => format!("{FLAG_PREFIX_CHAR}{secondary}{grammar}"),
                    None => long.clone(),
                };
                let flags = match name.secondary() {
                    Some(_) => format!("{usage}, {long}"),
                    None => long,
                };

                if descriptor.required {
                    summary.push(usage);
                } else {
                    summary.push(format!("[{usage}]"));
                }

                optionals.push((flags, description));
            }
        }

        let left_column_width = positionals
            .iter()
            .chain(optionals.iter())
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(0);
        let middle_column_width = positionals
            .iter()
            .chain(optionals.iter())
            .map(|(_, middle)| middle.chars().count() + MAIN_INDENT)
            .max()
            .unwrap_or(0);
        let column_renderer = self.column_renderer(left_column_width, middle_column_width);

        if let Some(version) = &self.version {
            user_interface.print(format!("{p} {version}", p = self.program));
            user_interface.print("".to_string());
        }

        if summary.is_empty() {
            user_interface.print(format!("usage: {p}", p = self.program));
        } else {
            user_interface.print(format!(
                "usage: {p} {s}",
                p = self.program,
                s = summary.join(" ")
            ));
        }

        if let Some(description) = &self.description {
            user_interface.print("".to_string());
            user_interface.print(description.clone());
        }

        for (title, lines) in [
            ("positional arguments:", &positionals),
            ("options:", &optionals),
        ] {
            if !lines.is_empty() {
                user_interface.print("".to_string());
                user_interface.print(title.to_string());

                for (left, middle) in lines {
                    for line in column_renderer.render(MAIN_INDENT, left, middle) {
                        user_interface.print(line);
                    }
                }
            }
        }
    }

    fn column_renderer(&self, left_column_width: usize, middle_column_width: usize) -> ColumnRenderer {
        let padding = PaddingWidth::new(PADDING_WIDTH).expect("internal error - padding is positive");
        let left = LeftWidth::new(std::cmp::max(left_column_width, 1))
            .expect("internal error - left width is positive");
        let middle_column_width = std::cmp::max(middle_column_width, MAIN_INDENT + 1);

        match self.terminal_width {
            Some(tw) => ColumnRenderer::guided(
                padding,
                left,
                MiddleWidth::new(middle_column_width)
                    .expect("internal error - middle width is at least 2"),
                TotalWidth(tw),
            ),
            None => ColumnRenderer::new(
                padding,
                left,
                MiddleWidth::new(std::cmp::min(middle_column_width, DEFAULT_MIDDLE_WIDTH))
                    .expect("internal error - middle width is at least 2"),
            ),
        }
    }
}

/// The value placeholder(s) for an argument, ex: `VALUE`, `[VALUE ...]`, or `VALUE [...]`.
fn grammar(name_example: &str, nargs: &Range) -> String {
    if nargs.upper() == Some(0) {
        return "".to_string();
    }

    let lower = nargs.lower().unwrap_or(0);
    let mut parts: Vec<String> = (0..lower).map(|_| name_example.to_string()).collect();

    if nargs.upper() != Some(lower) {
        if lower == 0 {
            parts.push(format!("[{name_example} ...]"));
        } else {
            parts.push("[...]".to_string());
        }
    }

    parts.join(" ")
}

fn describe(descriptor: &ArgumentDescriptor) -> String {
    let mut parts = Vec::default();

    if !descriptor.choices.is_empty() {
        parts.push(format!("{{{}}}", descriptor.choices.join(", ")));
    }

    if let Some(help) = &descriptor.help {
        parts.push(help.clone());
    }

    if !descriptor.defaults.is_empty() {
        parts.push(format!("(default: {})", descriptor.defaults.join(", ")));
    }

    if !descriptor.implicits.is_empty() {
        parts.push(format!("(implicit: {})", descriptor.implicits.join(", ")));
    }

    parts.join(" ")
}
