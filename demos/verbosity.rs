use carp::{ArgumentParser, DefaultOptional, Range};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbosityLevel {
    Low,
    Mid,
    High,
}

impl std::fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerbosityLevel::Low => write!(f, "0"),
            VerbosityLevel::Mid => write!(f, "1"),
            VerbosityLevel::High => write!(f, "2"),
        }
    }
}

impl FromStr for VerbosityLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "0" => Ok(VerbosityLevel::Low),
            "1" => Ok(VerbosityLevel::Mid),
            "2" => Ok(VerbosityLevel::High),
            _ => Err(format!("unknown verbosity level: {value}")),
        }
    }
}

fn main() {
    let mut ap = ArgumentParser::new()
        .program_name("verbosity")
        .program_description("Uses an enum as an argument value type.");
    ap.add_optional_argument::<VerbosityLevel>(("verbosity_level", "v"))
        .expect("The parser configuration must be valid")
        .default_value(VerbosityLevel::Low)
        .implicit_value(VerbosityLevel::Mid)
        .nargs(Range::up_to(1))
        .help("How much to print.");
    ap.default_optional_arguments(&[DefaultOptional::Help])
        .expect("The parser configuration must be valid");

    ap.try_parse_args();

    match ap
        .value::<VerbosityLevel>("verbosity_level")
        .expect("verbosity_level has a default")
    {
        VerbosityLevel::Low => {}
        VerbosityLevel::Mid => println!("msg"),
        VerbosityLevel::High => println!("this is a really verbose message"),
    }
}
