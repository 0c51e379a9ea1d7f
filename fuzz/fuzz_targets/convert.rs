use honggfuzz::fuzz;
use occurrence_codes::{convert, load_table};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(out) = convert(data) {
                if !out.is_empty() {
                    load_table(&out).expect("converted output must load again");
                }
            }
        });
    }
}
