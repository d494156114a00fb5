use dataset_s3_mirror::{args, run_app};

fn main() {
    // Parse command-line arguments; clap prints usage and exits on bad input
    let args = args::args_checks();

    let report = run_app(&args);
    std::process::exit(report.exit_code(args.strict_exit));
}
