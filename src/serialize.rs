use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::error::ConvertError;
use crate::table::RecordTable;

fn writer(style: QuoteStyle) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(style)
        .from_writer(Vec::new())
}

fn into_bytes(wtr: Writer<Vec<u8>>) -> Result<Vec<u8>, ConvertError> {
    wtr.into_inner().map_err(|e| ConvertError::Io(e.into_error()))
}

/// Write one record. The loader splits on `;` as well as `,`, so a record
/// holding a `;` anywhere is written fully quoted.
fn write_record(wtr: &mut Writer<Vec<u8>>, fields: &[String]) -> Result<(), ConvertError> {
    if !fields.iter().any(|f| f.contains(';')) {
        wtr.write_record(fields)?;
        return Ok(());
    }
    let mut quoted = writer(QuoteStyle::Always);
    quoted.write_record(fields)?;
    let bytes = into_bytes(quoted)?;
    wtr.flush()?;
    wtr.get_mut().extend_from_slice(&bytes);
    Ok(())
}

/// Write `table` as comma separated UTF-8 text: header first, then one line
/// per row, fields quoted only when they need it.
pub fn write_table(table: &RecordTable) -> Result<Vec<u8>, ConvertError> {
    if table.columns().is_empty() {
        return Ok(Vec::new());
    }
    let mut wtr = writer(QuoteStyle::Necessary);
    write_record(&mut wtr, table.columns())?;
    for row in table.rows() {
        let fields: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        write_record(&mut wtr, &fields)?;
    }
    into_bytes(wtr)
}
