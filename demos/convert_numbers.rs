use carp::{predefined, ArgumentParser, DefaultOptional, Range};

fn main() {
    let mut ap = ArgumentParser::new()
        .program_name("convert_numbers")
        .program_description("Prints numbers in the chosen base.");
    ap.add_optional_argument::<u64>(("number", "n"))
        .expect("The parser configuration must be valid")
        .nargs(Range::any())
        .action(predefined::gt(0))
        .help("Positive integer values.");
    ap.add_optional_argument::<String>(("base", "b"))
        .expect("The parser configuration must be valid")
        .nargs(Range::exactly(1))
        .default_value("dec".to_string())
        .choices(["bin", "dec", "hex"].map(String::from))
        .help("The output number format base.");
    ap.default_optional_arguments(&[DefaultOptional::Help])
        .expect("The parser configuration must be valid");

    ap.try_parse_args();

    let numbers: Vec<u64> = ap.values("number").expect("number has no type mismatch");
    let base: String = ap.value("base").expect("base has a default");

    for number in numbers {
        match base.as_str() {
            "bin" => println!("{number:b}"),
            "hex" => println!("{number:x}"),
            _ => println!("{number}"),
        }
    }
}
