use occurrence_codes::lookup::standard_tables;
use occurrence_codes::LookupTable;
use std::env;

pub fn dump_lookup_to_csv(tables: &[&LookupTable], path: &str) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["column", "key", "code"])?;
    for table in tables {
        for (key, code) in table.entries() {
            let code = code.to_string();
            wtr.write_record([table.column(), key, code.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let prog = args.first().map_or("lookup_dump", String::as_str);
        eprintln!("Usage: {prog} <output.csv>");
        std::process::exit(1);
    }
    if let Err(e) = dump_lookup_to_csv(&standard_tables(), &args[1]) {
        eprintln!("Failed to write CSV: {e}");
        std::process::exit(1);
    }
}
