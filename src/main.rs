fn main() {
    let exit_code = run_main::run_from_args(std::env::args_os());
    std::process::exit(exit_code);
}
