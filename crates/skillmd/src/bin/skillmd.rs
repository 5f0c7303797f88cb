fn main() {
    if let Err(err) = skillmd::run() {
        eprintln!("{}", skillmd::format_error(&err));
        std::process::exit(1);
    }
}
