use std::process::ExitCode;

use loxlex_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    loxlex_driver::run(&argument)
}
