use iran_system::{Config, IranSystem};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    input: String,
    config: Config,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} encode <text> [--no-visual] [--fallback <char>]", program);
    eprintln!("       {} decode <hex> [--no-visual]", program);
    std::process::exit(1);
}

/// Parses `<command> <input> [flags]`. Flags are only looked for after the input,
/// so an input that happens to read `--fallback` is still an input.
fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let (command, input, flags) = match args {
        [_, command, input, flags @ ..] => (command.as_str(), input, flags),
        _ => return Err("missing command or input".to_string()),
    };
    let command = match command {
        "encode" => Command::Encode,
        "decode" => Command::Decode,
        other => return Err(format!("unknown command {:?}", other)),
    };

    let mut config = Config::default();
    let mut i = 0;
    while i < flags.len() {
        match flags[i].as_str() {
            "--no-visual" => config = config.with_visual_ordering(false),
            // Parse --fallback argument
            "--fallback" if command == Command::Encode => {
                let value = flags.get(i + 1).ok_or("--fallback flag requires an argument.")?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => config = config.with_fallback_character(Some(c)),
                    _ => return Err("--fallback expects exactly one character.".to_string()),
                }
                i += 1;
            }
            "--fallback" => return Err("--fallback only applies to encode.".to_string()),
            other => return Err(format!("unknown flag {:?}", other)),
        }
        i += 1;
    }

    Ok(Invocation { command, input: input.clone(), config })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("iran-system");

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("ERROR: {}", message);
            usage(program);
        }
    };

    let converter = match IranSystem::new(invocation.config) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let result = match invocation.command {
        Command::Encode => converter.encode_hex(&invocation.input),
        Command::Decode => converter.decode_hex(&invocation.input),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("iran-system").chain(list.iter().copied()).map(String::from).collect()
    }

    #[test]
    fn input_text_is_never_read_as_a_flag() {
        let parsed = parse_args(&args(&["encode", "--fallback", "--no-visual"])).expect("parse");
        assert_eq!(parsed.input, "--fallback");
        assert!(!parsed.config.visual_ordering);
        assert_eq!(parsed.config.fallback_character, None);
    }

    #[test]
    fn fallback_is_parsed_for_encode() {
        let parsed = parse_args(&args(&["encode", "€", "--fallback", "?"])).expect("parse");
        assert_eq!(parsed.command, Command::Encode);
        assert_eq!(parsed.config.fallback_character, Some('?'));
        assert!(parsed.config.visual_ordering);
    }

    #[test]
    fn fallback_is_rejected_for_decode() {
        assert!(parse_args(&args(&["decode", "f491", "--fallback", "?"])).is_err());
    }

    #[test]
    fn malformed_invocations_are_rejected() {
        assert!(parse_args(&args(&["encode"])).is_err());
        assert!(parse_args(&args(&["transcode", "x"])).is_err());
        assert!(parse_args(&args(&["encode", "x", "--fallback"])).is_err());
        assert!(parse_args(&args(&["encode", "x", "--fallback", "ab"])).is_err());
        assert!(parse_args(&args(&["encode", "x", "--verbose"])).is_err());
    }
}
