use std::path::PathBuf;

// Command enum to represent CLI invocations
#[derive(Debug, PartialEq)]
pub enum Command {
    Verify {
        path: PathBuf,
        expected_type: String,
        create: bool,
    },
    Preflight {
        config: Option<PathBuf>,
    },
    Help,
    Unknown(String),
}

// Strip -v/--verbose flags that come before the subcommand
pub fn split_global_flags<S: AsRef<str>>(args: &[S]) -> (bool, &[S]) {
    let leading = args
        .iter()
        .take_while(|arg| matches!(arg.as_ref(), "-v" | "--verbose"))
        .count();
    (leading > 0, &args[leading..])
}

// Parse command-line arguments (program name excluded) into Command enum
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Command {
    let mut args = args.iter().map(|arg| arg.as_ref());
    let cmd = args.next().unwrap_or("").to_ascii_lowercase();
    let rest: Vec<&str> = args.collect();

    match cmd.as_str() {
        "verify" => parse_verify(&rest),
        "preflight" => parse_preflight(&rest),
        "help" | "-h" | "--help" | "" => Command::Help,
        _ => Command::Unknown(cmd),
    }
}

fn parse_verify(rest: &[&str]) -> Command {
    let mut create = false;
    let mut options_done = false;
    let mut positional = Vec::new();
    for arg in rest.iter().copied() {
        match arg {
            "--" if !options_done => options_done = true,
            "--create" if !options_done => create = true,
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [path] => Command::Verify {
            path: PathBuf::from(path),
            expected_type: "file".to_string(),
            create,
        },
        [path, expected_type] => Command::Verify {
            path: PathBuf::from(path),
            expected_type: expected_type.to_string(),
            create,
        },
        _ => Command::Unknown(format!("verify {}", rest.join(" "))),
    }
}

fn parse_preflight(rest: &[&str]) -> Command {
    match rest {
        [] => Command::Preflight { config: None },
        ["--config", path] => Command::Preflight {
            config: Some(PathBuf::from(path)),
        },
        _ => Command::Unknown(format!("preflight {}", rest.join(" "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verify_defaults_to_file() {
        assert_eq!(
            parse_args(&["verify", "data/obs.csv"]),
            Command::Verify {
                path: PathBuf::from("data/obs.csv"),
                expected_type: "file".to_string(),
                create: false,
            }
        );
    }

    #[test]
    fn test_parse_verify_with_type_and_create() {
        assert_eq!(
            parse_args(&["VERIFY", "--create", "out", "dir"]),
            Command::Verify {
                path: PathBuf::from("out"),
                expected_type: "dir".to_string(),
                create: true,
            }
        );
        // Unknown tags are passed through and rejected at verification
        assert_eq!(
            parse_args(&["verify", "out", "bogus_type"]),
            Command::Verify {
                path: PathBuf::from("out"),
                expected_type: "bogus_type".to_string(),
                create: false,
            }
        );
    }

    #[test]
    fn test_parse_verify_after_double_dash() {
        assert_eq!(
            parse_args(&["verify", "--create", "--", "-v", "folder"]),
            Command::Verify {
                path: PathBuf::from("-v"),
                expected_type: "folder".to_string(),
                create: true,
            }
        );
        assert_eq!(
            parse_args(&["verify", "--", "--create"]),
            Command::Verify {
                path: PathBuf::from("--create"),
                expected_type: "file".to_string(),
                create: false,
            }
        );
    }

    #[test]
    fn test_global_flags_only_before_subcommand() {
        let args = ["-v", "--verbose", "verify", "--", "-v"];
        let (verbose, rest) = split_global_flags(&args);
        assert!(verbose);
        assert_eq!(rest, &["verify", "--", "-v"]);

        let args = ["verify", "-v"];
        let (verbose, rest) = split_global_flags(&args);
        assert!(!verbose);
        assert_eq!(rest, &["verify", "-v"]);
        assert_eq!(
            parse_args(rest),
            Command::Verify {
                path: PathBuf::from("-v"),
                expected_type: "file".to_string(),
                create: false,
            }
        );
    }

    #[test]
    fn test_parse_preflight() {
        assert_eq!(
            parse_args(&["preflight"]),
            Command::Preflight { config: None }
        );
        assert_eq!(
            parse_args(&["preflight", "--config", "etl.toml"]),
            Command::Preflight {
                config: Some(PathBuf::from("etl.toml"))
            }
        );
    }

    #[test]
    fn test_parse_help_and_unknown() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_args(&empty), Command::Help);
        assert_eq!(parse_args(&["--help"]), Command::Help);
        assert_eq!(
            parse_args(&["load"]),
            Command::Unknown("load".to_string())
        );
        assert_eq!(
            parse_args(&["verify"]),
            Command::Unknown("verify ".to_string())
        );
    }
}
