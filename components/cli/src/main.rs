use std::ffi::OsString;

use console::Style;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new().filter_level(log::LevelFilter::Error).parse_default_env().init();

    let args = std::env::args_os().collect::<Vec<OsString>>();

    if args.len() != 2 {
        print_help();
        return Ok(());
    }

    let Some(invocations_csv) = args[1].to_str() else {
        eprintln!("{}: incorrect CLI arg", Style::new().red().bold().apply_to("ERR"),);
        std::process::exit(2);
    };

    if let Err(e) = chaincode::process_file(invocations_csv, &mut std::io::stdout()) {
        eprintln!("{}: {:?}", Style::new().red().bold().apply_to("ERR"), e);
        std::process::exit(1);
    };
    Ok(())
}

fn print_help() {
    println!("Usage:\n   cargo run -- <invocations.csv> > <results.csv>");
    println!("Each line of the input is: function,arg1,arg2,...");
    println!("Functions: getRecord <house>, appendRecord <house> <time> <amount>, getAllRecords");
}
