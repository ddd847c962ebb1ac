use carp::{ArgumentParser, DefaultOptional, Range};

fn main() {
    let mut ap = ArgumentParser::new()
        .program_name("power")
        .program_description("Calculates the value of an expression: base ^ exponent.");
    ap.add_positional_argument::<f64>("base")
        .expect("The parser configuration must be valid")
        .help("The exponentiation base value.");
    ap.add_optional_argument::<i32>(("exponent", "e"))
        .expect("The parser configuration must be valid")
        .nargs(Range::any())
        .help("The exponent values.");
    ap.default_optional_arguments(&[DefaultOptional::Help])
        .expect("The parser configuration must be valid");

    ap.try_parse_args();

    if !ap.has_value("exponent") {
        println!("No exponent values given.");
        return;
    }

    let base: f64 = ap.value("base").expect("base must be parsed");
    let exponents: Vec<i32> = ap.values("exponent").expect("exponent must be parsed");

    for exponent in exponents {
        println!("{base} ^ {exponent} = {}", base.powi(exponent));
    }
}
