use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("redeem-linalg")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Vector and matrix helpers with 2D/3D rotations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("unit")
                .short('u')
                .long("unit")
                .help("Angle unit for input and output. Overrides the configuration file.")
                .global(true)
                .value_parser(["rad", "radians", "deg", "degrees"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("tolerance")
                .long("tolerance")
                .help("Values closer to zero than this are printed as zero. Overrides the configuration file.")
                .global(true)
                .value_parser(clap::value_parser!(f64))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimal places to print. Overrides the configuration file.")
                .global(true)
                .value_parser(clap::value_parser!(usize))
                .value_hint(ValueHint::Other),
        )
        .subcommand(
            Command::new("demo")
                .about("Cross product of (1, 2, 3) and (3, 2, 1) and its angles to both operands"),
        )
        .subcommand(
            Command::new("rotate")
                .about("Rotate a vector in the plane or about one 3D axis")
                .arg(
                    Arg::new("axis")
                        .short('a')
                        .long("axis")
                        .help("Rotation to apply. `2d` expects a 2D vector, the others a 3D vector.")
                        .required(true)
                        .value_parser(["yaw", "pitch", "roll", "2d"])
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("angle")
                        .long("angle")
                        .help("Rotation angle in the configured unit")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("components")
                        .help("Vector components")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64))
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("config").about("Print the effective configuration as JSON"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}
