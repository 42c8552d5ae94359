use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "makeprogress",
    version,
    about = "Print a colored [step/total] progress label for a build step",
    long_about = "makeprogress prints one line: a green, zero-padded [step/total] label \
                  followed by the remaining arguments echoed verbatim.\n\n\
                  Intended to be called once per rule from a makefile, e.g.\n\
                  \n\
                  makeprogress --stepno 5 --nsteps 100 cc -o main.o main.c\n\n\
                  Put `--` before the command when it starts with one of makeprogress's \
                  own flags (e.g. `-V` or `--completions`)."
)]
pub struct Cli {
    /// Current step number
    #[arg(
        long,
        value_name = "INT",
        allow_negative_numbers = true,
        required_unless_present = "completions"
    )]
    pub stepno: Option<i64>,

    /// Total number of steps (must be positive)
    #[arg(
        long,
        value_name = "INT",
        allow_negative_numbers = true,
        required_unless_present = "completions"
    )]
    pub nsteps: Option<i64>,

    /// Tokens echoed after the label, typically the command being run
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "TOKEN"
    )]
    pub remainder: Vec<OsString>,

    /// Generate shell completion script (bash, zsh, fish, powershell, elvish)
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<clap_complete::Shell>,
}
